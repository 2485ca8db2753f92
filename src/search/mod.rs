//! Linear membership checks over string sequences.

/// Return the index of the first element equal to `candidate`.
pub fn position_of<S: AsRef<str>>(items: &[S], candidate: &str) -> Option<usize> {
    items.iter().position(|item| item.as_ref() == candidate)
}

/// Return true if `candidate` appears in `items` (exact match).
pub fn contains_string<S: AsRef<str>>(items: &[S], candidate: &str) -> bool {
    position_of(items, candidate).is_some()
}
