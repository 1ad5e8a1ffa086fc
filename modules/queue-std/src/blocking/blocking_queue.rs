use busyq_queue_core_rs::{ClosedError, OfferError, QueueBackend, QueueError, SyncLockLike, SyncQueue};

use super::{TickWait, WaitStrategy};

#[cfg(test)]
mod tests;

/// [`SyncQueue`] with blocking `push`/`pop` driven by a [`WaitStrategy`].
///
/// The blocking operations are retry loops over the non-blocking ones. The queue lock is taken
/// and released inside each attempt and is never held while waiting, so producers and consumers
/// make progress between each other's retries.
#[derive(Debug)]
pub struct BlockingQueue<B, L, W = TickWait>
where
  B: QueueBackend,
  L: SyncLockLike<B>, {
  queue: SyncQueue<B, L>,
  wait:  W,
}

impl<B, L, W> BlockingQueue<B, L, W>
where
  B: QueueBackend,
  L: SyncLockLike<B>,
  W: WaitStrategy,
{
  /// Wraps an existing queue.
  #[must_use]
  pub const fn new(queue: SyncQueue<B, L>, wait: W) -> Self {
    Self { queue, wait }
  }

  /// Creates an empty, open queue that holds at most `capacity` entries.
  #[must_use]
  pub fn with_capacity(capacity: usize, wait: W) -> Self {
    Self::new(SyncQueue::with_capacity(capacity), wait)
  }

  /// Returns the underlying non-blocking queue.
  #[must_use]
  pub const fn queue(&self) -> &SyncQueue<B, L> {
    &self.queue
  }

  /// Returns the wait strategy.
  #[must_use]
  pub const fn wait_strategy(&self) -> &W {
    &self.wait
  }

  /// Enqueues an entry without blocking.
  ///
  /// # Errors
  ///
  /// Same as [`SyncQueue::offer`].
  pub fn offer(&self, entry: B::Entry) -> Result<(), OfferError<B::Entry>> {
    self.queue.offer(entry)?;
    self.wait.notify();
    Ok(())
  }

  /// Enqueues an entry without blocking and reports whether it was accepted.
  pub fn try_push(&self, entry: B::Entry) -> bool {
    self.offer(entry).is_ok()
  }

  /// Dequeues the next entry without blocking.
  ///
  /// # Errors
  ///
  /// Same as [`SyncQueue::poll`].
  pub fn poll(&self) -> Result<B::Entry, QueueError> {
    let entry = self.queue.poll()?;
    self.wait.notify();
    Ok(entry)
  }

  /// Dequeues the next entry without blocking, if any.
  pub fn try_pop(&self) -> Option<B::Entry> {
    self.poll().ok()
  }

  /// Enqueues an entry, waiting while the queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedError`] if the queue is closed before the entry is accepted; the entry is
  /// dropped.
  pub fn push(&self, entry: B::Entry) -> Result<(), ClosedError> {
    let mut entry = entry;
    loop {
      let ticket = self.wait.prepare();
      match self.queue.offer(entry) {
        | Ok(()) => {
          self.wait.notify();
          return Ok(());
        },
        | Err(OfferError::Closed(_)) => {
          tracing::trace!("push rejected: queue closed");
          return Err(ClosedError);
        },
        | Err(OfferError::Full(rejected)) => {
          entry = rejected;
          self.wait.wait(ticket);
        },
      }
    }
  }

  /// Dequeues the next entry, waiting while the queue is empty.
  ///
  /// Entries buffered before [`BlockingQueue::close`] are still returned.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedError`] once the queue is closed and drained.
  pub fn pop(&self) -> Result<B::Entry, ClosedError> {
    loop {
      let ticket = self.wait.prepare();
      match self.queue.poll() {
        | Ok(entry) => {
          self.wait.notify();
          return Ok(entry);
        },
        | Err(QueueError::Closed) => {
          tracing::debug!("pop finished: queue closed and drained");
          return Err(ClosedError);
        },
        | Err(QueueError::Empty | QueueError::Full) => self.wait.wait(ticket),
      }
    }
  }

  /// Closes the queue and wakes every waiter.
  pub fn close(&self) {
    self.queue.close();
    self.wait.notify();
  }

  /// Returns the number of buffered entries.
  #[must_use]
  pub fn count(&self) -> usize {
    self.queue.count()
  }

  /// Alias of [`BlockingQueue::count`].
  #[must_use]
  pub fn len(&self) -> usize {
    self.queue.len()
  }

  /// Returns the configured capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.queue.capacity()
  }

  /// Indicates whether nothing is buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.queue.is_empty()
  }

  /// Indicates whether the queue is at capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.queue.is_full()
  }

  /// Indicates whether the queue has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.queue.is_closed()
  }

  /// Consumes the queue and returns the backend.
  pub fn into_backend(self) -> B {
    self.queue.into_backend()
  }
}
