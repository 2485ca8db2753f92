//! The process-wide connectivity check. Own binary so the shared probe
//! starts empty.

use hostkit::connectivity::global_probe;
use hostkit::is_internet_active;

#[tokio::test]
async fn test_process_wide_result_is_stable() {
    assert_eq!(global_probe().cached(), None);

    let first = is_internet_active().await;
    assert_eq!(global_probe().cached(), Some(first));
    let outcome = global_probe().last_outcome().unwrap().clone();

    assert_eq!(is_internet_active().await, first);
    assert_eq!(global_probe().last_outcome(), Some(&outcome));
}
