use core::marker::PhantomData;

use super::backend::{OfferError, PriorityBackend, Prioritized, QueueBackend, QueueError};
use crate::sync::{SpinSyncMutex, SyncLockLike};

#[cfg(test)]
mod tests;

/// Queue facade that owns a backend behind exactly one lock.
///
/// Every method acquires the lock once, calls a single backend method and releases the lock
/// before returning. Backends have no access to the lock, so no code path can request the lock
/// while already holding it.
#[derive(Debug)]
pub struct SyncQueue<B, L = SpinSyncMutex<B>>
where
  B: QueueBackend,
  L: SyncLockLike<B>, {
  inner: L,
  _pd:   PhantomData<fn() -> B>,
}

impl<B, L> SyncQueue<B, L>
where
  B: QueueBackend,
  L: SyncLockLike<B>,
{
  /// Creates a queue around an existing backend.
  #[must_use]
  pub fn from_backend(backend: B) -> Self {
    Self { inner: L::new(backend), _pd: PhantomData }
  }

  /// Creates an empty, open queue that holds at most `capacity` entries.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self::from_backend(B::with_capacity(capacity))
  }

  /// Enqueues an entry without blocking.
  ///
  /// # Errors
  ///
  /// Returns [`OfferError::Closed`] if the queue is closed and [`OfferError::Full`] if it is at
  /// capacity; both carry the entry back.
  pub fn offer(&self, entry: B::Entry) -> Result<(), OfferError<B::Entry>> {
    self.inner.write().offer(entry)
  }

  /// Enqueues an entry without blocking and reports whether it was accepted.
  ///
  /// A rejected entry is dropped; use [`SyncQueue::offer`] to get it back.
  pub fn try_push(&self, entry: B::Entry) -> bool {
    self.offer(entry).is_ok()
  }

  /// Dequeues the next entry without blocking.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] while the queue is open and empty, and
  /// [`QueueError::Closed`] once it is closed and drained.
  pub fn poll(&self) -> Result<B::Entry, QueueError> {
    self.inner.write().poll()
  }

  /// Dequeues the next entry without blocking, if any.
  pub fn try_pop(&self) -> Option<B::Entry> {
    self.poll().ok()
  }

  /// Closes the queue. Idempotent; buffered entries stay poppable.
  pub fn close(&self) {
    let remaining = {
      let mut backend = self.inner.write();
      backend.close();
      backend.len()
    };
    tracing::debug!(remaining, "queue closed");
  }

  /// Returns the number of buffered entries.
  #[must_use]
  pub fn count(&self) -> usize {
    self.inner.read().len()
  }

  /// Alias of [`SyncQueue::count`].
  #[must_use]
  pub fn len(&self) -> usize {
    self.count()
  }

  /// Returns the configured capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.read().capacity()
  }

  /// Indicates whether nothing is buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.read().is_empty()
  }

  /// Indicates whether the queue is at capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.inner.read().is_full()
  }

  /// Indicates whether [`SyncQueue::close`] has been called.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.inner.read().is_closed()
  }

  /// Consumes the queue and returns the backend.
  pub fn into_backend(self) -> B {
    self.inner.into_inner()
  }
}

impl<T, P, B, L> SyncQueue<B, L>
where
  P: Ord + Copy,
  B: PriorityBackend<T, P> + QueueBackend<Entry = Prioritized<T, P>>,
  L: SyncLockLike<B>,
{
  /// Returns the priority of the entry the next poll would return.
  #[must_use]
  pub fn peek_priority(&self) -> Option<P> {
    self.inner.read().peek().map(Prioritized::priority)
  }
}
