//! Splice-move and reindex helpers shared by slides and content items.
//!
//! Every structural mutation on an ordered list goes through the same two
//! steps: edit a working copy of the `Vec`, then stamp each survivor's
//! position field from its final index. The stamped positions are therefore
//! always `0..len` no matter how many elements moved.

/// Items that carry their own position within a list.
pub trait Ordered {
    fn order(&self) -> usize;
    fn set_order(&mut self, order: usize);
}

/// Stamp `order = index` on every item.
pub fn reindex<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index);
    }
}

/// Remove the item at `from` and reinsert it at `to`.
///
/// This is a splice-move, not a swap: everything between the two positions
/// shifts by one. Returns `false` without touching `items` if either index is
/// outside `0..len` or the indices are equal.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Position of the current element after `from` was moved to `to`.
///
/// The moved element itself lands on `to`; an element strictly crossed by
/// the move shifts one step towards the gap left behind.
pub fn track_index_after_move(current: usize, from: usize, to: usize) -> usize {
    if current == from {
        to
    } else if from < current && to >= current {
        current - 1
    } else if from > current && to <= current {
        current + 1
    } else {
        current
    }
}

/// Drop the first item matching `predicate` and reindex the rest.
///
/// Returns the removed item, or `None` (leaving `items` untouched) if nothing
/// matched.
pub fn remove_and_reindex<T, F>(items: &mut Vec<T>, predicate: F) -> Option<T>
where
    T: Ordered,
    F: Fn(&T) -> bool,
{
    let position = items.iter().position(predicate)?;
    let removed = items.remove(position);
    reindex(items);
    Some(removed)
}

/// Check that orders are exactly `0..len` in array order.
pub fn is_contiguous<T: Ordered>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(index, item)| item.order() == index)
}
