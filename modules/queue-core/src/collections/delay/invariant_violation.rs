/// Broken heap contract; always a programming error, never a condition to retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
  /// `heap_pop` was called on an empty heap.
  #[error("pop called on an empty heap")]
  PopOnEmpty,
  /// A child is ready before its parent.
  #[error("heap order broken between parent {parent} and child {child}")]
  HeapOrder {
    /// Slot of the parent.
    parent: usize,
    /// Slot of the offending child.
    child:  usize,
  },
  /// An entry's stored index does not match its slot, or an index points past the heap.
  #[error("stale heap index at position {position}")]
  StaleIndex {
    /// Slot (or requested index) whose bookkeeping is wrong.
    position: usize,
  },
}
