/// Payload scheduled for a ready-at instant.
///
/// The heap index is `None` until the entry is pushed, tracks the entry's slot while it is
/// queued, and goes back to `None` once the entry is popped or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayEntry<T, I> {
  value:    T,
  ready_at: I,
  index:    Option<usize>,
}

impl<T, I> DelayEntry<T, I> {
  /// Creates an unqueued entry.
  #[must_use]
  pub const fn new(value: T, ready_at: I) -> Self {
    Self { value, ready_at, index: None }
  }

  /// Returns a reference to the payload.
  #[must_use]
  pub const fn value(&self) -> &T {
    &self.value
  }

  /// Returns a reference to the ready-at instant.
  #[must_use]
  pub const fn ready_at(&self) -> &I {
    &self.ready_at
  }

  /// Returns the heap slot, or `None` when the entry is not queued.
  #[must_use]
  pub const fn index(&self) -> Option<usize> {
    self.index
  }

  /// Indicates whether the entry currently sits in a heap.
  #[must_use]
  pub const fn is_queued(&self) -> bool {
    self.index.is_some()
  }

  /// Discards the schedule and returns the payload.
  pub fn into_value(self) -> T {
    self.value
  }

  pub(super) fn set_index(&mut self, index: Option<usize>) {
    self.index = index;
  }

  pub(super) fn set_ready_at(&mut self, ready_at: I) {
    self.ready_at = ready_at;
  }
}
