use core::marker::PhantomData;

use super::{DelayEntry, HeapDelayQueue, InvariantViolation};
use crate::sync::{SpinSyncMutex, SyncLockLike};


/// Shared [`HeapDelayQueue`] guarded by one lock held for the whole of every operation.
///
/// The emptiness check and the pop happen inside the same critical section, so a pop can never
/// observe an empty heap.
#[derive(Debug)]
pub struct GuardedDelayQueue<T, I, L = SpinSyncMutex<HeapDelayQueue<T, I>>>
where
  I: Ord,
  L: SyncLockLike<HeapDelayQueue<T, I>>, {
  inner: L,
  _pd:   PhantomData<fn() -> (T, I)>,
}

impl<T, I, L> Default for GuardedDelayQueue<T, I, L>
where
  I: Ord,
  L: SyncLockLike<HeapDelayQueue<T, I>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, I, L> GuardedDelayQueue<T, I, L>
where
  I: Ord,
  L: SyncLockLike<HeapDelayQueue<T, I>>,
{
  /// Creates an empty queue.
  #[must_use]
  pub fn new() -> Self {
    Self::from_heap(HeapDelayQueue::new())
  }

  /// Wraps an existing heap.
  #[must_use]
  pub fn from_heap(heap: HeapDelayQueue<T, I>) -> Self {
    Self { inner: L::new(heap), _pd: PhantomData }
  }

  /// Pushes an entry.
  pub fn push(&self, entry: DelayEntry<T, I>) {
    self.inner.write().heap_push(entry);
  }

  /// Pops the earliest entry, or returns `None` if the heap is empty.
  pub fn try_pop(&self) -> Option<DelayEntry<T, I>> {
    let mut heap = self.inner.write();
    if heap.is_empty() {
      return None;
    }
    heap.heap_pop().ok()
  }

  /// Pops the earliest entry if it is ready at `now`.
  pub fn pop_ready(&self, now: &I) -> Option<DelayEntry<T, I>> {
    self.inner.write().pop_ready(now)
  }

  /// Returns the ready-at instant of the earliest entry.
  #[must_use]
  pub fn next_ready_at(&self) -> Option<I>
  where
    I: Clone, {
    self.inner.read().peek().map(|entry| entry.ready_at().clone())
  }

  /// Runs `f` against the heap inside a single critical section.
  ///
  /// Use this for compound operations such as [`HeapDelayQueue::reschedule`], whose index is
  /// only meaningful while the lock is held.
  pub fn with_heap<R, F>(&self, f: F) -> R
  where
    F: FnOnce(&mut HeapDelayQueue<T, I>) -> R, {
    let mut heap = self.inner.write();
    f(&mut *heap)
  }

  /// Returns the number of queued entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.read().len()
  }

  /// Indicates whether the heap is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.read().is_empty()
  }

  /// Verifies heap order and index bookkeeping.
  ///
  /// # Errors
  ///
  /// Returns the first violation found.
  pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
    self.inner.read().check_invariants()
  }

  /// Consumes the queue and returns the heap.
  pub fn into_inner(self) -> HeapDelayQueue<T, I> {
    self.inner.into_inner()
  }
}
