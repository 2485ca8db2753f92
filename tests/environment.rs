//! Process-environment detection. Kept in its own binary, with one test
//! per variable, so nothing else in the process races on these variables.

use std::env;

use hostkit::environment::{DEBUG_VAR, DOCKER_TOOLBOX_VAR};
use hostkit::{debug_enabled, is_docker_toolbox};

#[test]
fn test_docker_toolbox_detection() {
    env::remove_var(DOCKER_TOOLBOX_VAR);
    assert!(!is_docker_toolbox());

    env::set_var(DOCKER_TOOLBOX_VAR, "");
    assert!(!is_docker_toolbox());

    env::set_var(DOCKER_TOOLBOX_VAR, "/c/Program Files/Docker Toolbox");
    assert!(is_docker_toolbox());

    env::remove_var(DOCKER_TOOLBOX_VAR);
    assert!(!is_docker_toolbox());
}

#[test]
fn test_debug_detection() {
    env::remove_var(DEBUG_VAR);
    assert!(!debug_enabled());

    env::set_var(DEBUG_VAR, "");
    assert!(!debug_enabled());

    env::set_var(DEBUG_VAR, "true");
    assert!(debug_enabled());

    env::remove_var(DEBUG_VAR);
    assert!(!debug_enabled());
}
