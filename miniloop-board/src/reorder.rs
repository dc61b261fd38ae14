//! Single-element list moves
//!
//! The index arithmetic behind every reorder on the board lives here: one
//! element is removed from its current position and reinserted at a target
//! position, shifting everything in between by one slot. This is a move,
//! not a swap. Columns and same-column task reorders use [`array_move`];
//! cross-column task moves remove from one list and insert into another
//! with [`insert_clamped`].

/// Move the element at `from` so it ends up at index `to`.
///
/// Remove-then-insert semantics: the element is taken out first, so when
/// `to > from` it lands one slot earlier than `to` counted on the original
/// list - which is exactly where the hovered element sits after the gap
/// closes. Out-of-range indices leave the list untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Insert into a list at `index`, clamped to the list length.
///
/// An unresolvable destination index (past the end, or `usize::MAX` for
/// "no concrete target") appends at the end.
pub fn insert_clamped<T>(items: &mut Vec<T>, index: usize, item: T) {
    let index = index.min(items.len());
    items.insert(index, item);
}
