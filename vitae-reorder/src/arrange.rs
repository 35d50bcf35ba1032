//! The array-move primitive shared by both drag engines.

/// Moves the item at `from` to position `to`, shifting everything between
/// them by one slot. This is remove-then-insert, not a swap: moving the
/// first of `[a, b, c, d]` to position 2 yields `[b, c, a, d]`.
///
/// # Panics
///
/// Panics if `from` or `to` is out of bounds. Callers resolve indices from
/// ids they have already validated against the same list.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}
