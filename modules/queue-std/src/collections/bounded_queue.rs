use std::iter;

use busyq_queue_core_rs::{ClosedError, FifoBackend, OfferError, QueueError};

use super::QueueOptions;
use crate::{
  blocking::{BlockingQueue, NotifyWait, TickWait, WaitStrategy},
  sync::StdSyncMutex,
};

#[cfg(test)]
mod tests;

type FifoBlockingQueue<T, W> = BlockingQueue<FifoBackend<T>, StdSyncMutex<FifoBackend<T>>, W>;

/// Bounded FIFO queue shared between threads.
///
/// Non-blocking operations (`try_push`, `try_pop`, `offer`, `poll`) take the queue lock once and
/// return. Blocking operations (`push`, `pop`) retry them, waiting between attempts according to
/// `W`. Closing rejects further pushes; buffered items are still returned by `pop` until the queue
/// is drained, after which `pop` fails with [`ClosedError`].
///
/// ```
/// use busyq_queue_std_rs::{BoundedQueue, ClosedError};
///
/// let queue = BoundedQueue::new(2);
/// assert!(queue.try_push("a"));
/// assert!(queue.try_push("b"));
/// assert!(!queue.try_push("c"));
///
/// queue.close();
/// assert_eq!(queue.pop(), Ok("a"));
/// assert_eq!(queue.pop(), Ok("b"));
/// assert_eq!(queue.pop(), Err(ClosedError));
/// ```
#[derive(Debug)]
pub struct BoundedQueue<T, W = TickWait> {
  inner:   FifoBlockingQueue<T, W>,
  options: QueueOptions,
}

impl<T> BoundedQueue<T> {
  /// Creates a queue holding at most `capacity` items that yields between blocking attempts.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    Self::with_options(QueueOptions::with_capacity(capacity))
  }

  /// Creates a queue from options; blocking attempts are spaced by `options.tick`.
  #[must_use]
  pub fn with_options(options: QueueOptions) -> Self {
    Self::with_wait_strategy(options, TickWait::new(options.tick))
  }
}

impl<T> BoundedQueue<T, NotifyWait> {
  /// Creates a queue whose blocked callers park until another thread changes the queue.
  #[must_use]
  pub fn notifying(capacity: usize) -> Self {
    Self::with_wait_strategy(QueueOptions::with_capacity(capacity), NotifyWait::new())
  }
}

impl<T, W> BoundedQueue<T, W>
where
  W: WaitStrategy,
{
  /// Creates a queue with an explicit wait strategy.
  #[must_use]
  pub fn with_wait_strategy(options: QueueOptions, wait: W) -> Self {
    Self { inner: BlockingQueue::with_capacity(options.capacity, wait), options }
  }

  /// Appends an item unless the queue is closed or full.
  pub fn try_push(&self, item: T) -> bool {
    self.inner.try_push(item)
  }

  /// Appends an item unless the queue is closed or full.
  ///
  /// # Errors
  ///
  /// Returns the rejected item inside [`OfferError::Closed`] or [`OfferError::Full`].
  pub fn offer(&self, item: T) -> Result<(), OfferError<T>> {
    self.inner.offer(item)
  }

  /// Removes the front item, if any.
  pub fn try_pop(&self) -> Option<T> {
    self.inner.try_pop()
  }

  /// Removes the front item.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] while open and empty, [`QueueError::Closed`] once closed and
  /// drained.
  pub fn poll(&self) -> Result<T, QueueError> {
    self.inner.poll()
  }

  /// Appends an item, waiting while the queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedError`] if the queue is closed before the item is accepted.
  pub fn push(&self, item: T) -> Result<(), ClosedError> {
    self.inner.push(item)
  }

  /// Removes the front item, waiting while the queue is empty and open.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedError`] once the queue is closed and drained.
  pub fn pop(&self) -> Result<T, ClosedError> {
    self.inner.pop()
  }

  /// Blocking iterator over popped items; ends once the queue is closed and drained.
  pub fn drain(&self) -> impl Iterator<Item = T> + '_ {
    iter::from_fn(move || self.pop().ok())
  }

  /// Closes the queue. Idempotent.
  pub fn close(&self) {
    self.inner.close();
  }

  /// Returns the number of buffered items.
  #[must_use]
  pub fn count(&self) -> usize {
    self.inner.count()
  }

  /// Alias of [`BoundedQueue::count`].
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.len()
  }

  /// Indicates whether nothing is buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// Indicates whether the queue is at capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.inner.is_full()
  }

  /// Indicates whether the queue has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.inner.is_closed()
  }

  /// Returns the capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.capacity()
  }

  /// Returns the options the queue was built with.
  #[must_use]
  pub const fn options(&self) -> &QueueOptions {
    &self.options
  }
}

impl<T> Default for BoundedQueue<T> {
  fn default() -> Self {
    Self::with_options(QueueOptions::default())
  }
}
