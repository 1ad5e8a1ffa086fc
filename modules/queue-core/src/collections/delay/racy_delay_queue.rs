use core::marker::PhantomData;

use super::{DelayEntry, HeapDelayQueue, InvariantViolation};
use crate::sync::{SpinSyncMutex, SyncLockLike};


/// Shared [`HeapDelayQueue`] whose pop checks and acts in two separate critical sections.
///
/// Each primitive is locked on its own, so the heap memory is never torn, but
/// [`RacyDelayQueue::try_pop`] releases the lock between observing a non-empty heap and popping
/// from it. Another consumer can empty the heap inside that window and the pop then fails with
/// [`InvariantViolation::PopOnEmpty`]. [`GuardedDelayQueue`](super::GuardedDelayQueue) is the
/// corrected counterpart.
#[derive(Debug)]
pub struct RacyDelayQueue<T, I, L = SpinSyncMutex<HeapDelayQueue<T, I>>>
where
  I: Ord,
  L: SyncLockLike<HeapDelayQueue<T, I>>, {
  inner: L,
  _pd:   PhantomData<fn() -> (T, I)>,
}

impl<T, I, L> Default for RacyDelayQueue<T, I, L>
where
  I: Ord,
  L: SyncLockLike<HeapDelayQueue<T, I>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, I, L> RacyDelayQueue<T, I, L>
where
  I: Ord,
  L: SyncLockLike<HeapDelayQueue<T, I>>,
{
  /// Creates an empty queue.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: L::new(HeapDelayQueue::new()), _pd: PhantomData }
  }

  /// Pushes an entry.
  pub fn push(&self, entry: DelayEntry<T, I>) {
    self.inner.write().heap_push(entry);
  }

  /// Returns the number of queued entries at the moment of the call.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.read().len()
  }

  /// Indicates whether the heap was empty at the moment of the call.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Pops the earliest entry if the heap looked non-empty.
  ///
  /// # Errors
  ///
  /// Returns [`InvariantViolation::PopOnEmpty`] when another consumer emptied the heap between
  /// the emptiness check and the pop.
  pub fn try_pop(&self) -> Result<Option<DelayEntry<T, I>>, InvariantViolation> {
    self.try_pop_after(|| {})
  }

  /// Same as [`RacyDelayQueue::try_pop`], running `gap` between the emptiness check and the pop.
  ///
  /// `gap` executes while no lock is held, which widens the window another consumer needs to
  /// win the race.
  ///
  /// # Errors
  ///
  /// Returns [`InvariantViolation::PopOnEmpty`] when the heap was emptied inside the window.
  pub fn try_pop_after<F>(&self, gap: F) -> Result<Option<DelayEntry<T, I>>, InvariantViolation>
  where
    F: FnOnce(), {
    if self.is_empty() {
      return Ok(None);
    }

    gap();

    let popped = self.inner.write().heap_pop();
    if let Err(violation) = &popped {
      tracing::warn!(%violation, "delay queue emptied between emptiness check and pop");
    }
    popped.map(Some)
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
