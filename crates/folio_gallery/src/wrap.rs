//! Circular index arithmetic shared by navigation and preloading.

/// Index after `current` in a ring of `len` items (wrapping past the end).
///
/// Returns 0 for an empty ring.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current % len + 1) % len
    }
}

/// Index before `current` in a ring of `len` items (wrapping below zero).
///
/// Returns 0 for an empty ring.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current % len;
    if current == 0 {
        len - 1
    } else {
        current - 1
    }
}
