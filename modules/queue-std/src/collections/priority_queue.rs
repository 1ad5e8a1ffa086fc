use std::{iter, marker::PhantomData};

use busyq_queue_core_rs::{
  ClosedError, OfferError, OrderedPriorityBackend, PriorityBackend, Prioritized, QueueBackend, QueueError,
};

use super::QueueOptions;
use crate::{
  blocking::{BlockingQueue, NotifyWait, TickWait, WaitStrategy},
  sync::StdSyncRwLock,
};


/// Bounded priority queue shared between threads.
///
/// Items are served lowest priority value first; items with equal priority come out in the
/// order they were pushed. Push, pop and close behave as on [`BoundedQueue`](crate::BoundedQueue).
/// Read-only accessors share the lock with each other, mutations take it exclusively.
///
/// The ordering structure is `B`: the default keeps a sorted buffer with O(n) insertion,
/// [`HeapPriorityBackend`](busyq_queue_core_rs::HeapPriorityBackend) trades that for O(log n)
/// with the same observable order.
///
/// ```
/// use busyq_queue_std_rs::PriorityQueue;
///
/// let queue = PriorityQueue::new(4);
/// queue.push('a', 5).unwrap();
/// queue.push('b', 3).unwrap();
/// queue.push('c', 5).unwrap();
/// queue.push('d', 3).unwrap();
/// queue.close();
///
/// let order: String = queue.drain().collect();
/// assert_eq!(order, "bdac");
/// ```
#[derive(Debug)]
pub struct PriorityQueue<T, P = i32, W = TickWait, B = OrderedPriorityBackend<T, P>>
where
  P: Ord,
  B: PriorityBackend<T, P> + QueueBackend<Entry = Prioritized<T, P>>, {
  inner:   BlockingQueue<B, StdSyncRwLock<B>, W>,
  options: QueueOptions,
  _pd:     PhantomData<fn() -> (T, P)>,
}

impl<T, P> PriorityQueue<T, P>
where
  P: Ord,
{
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

impl<T, P> PriorityQueue<T, P, NotifyWait>
where
  P: Ord,
{
  /// Creates a queue whose blocked callers park until another thread changes the queue.
  #[must_use]
  pub fn notifying(capacity: usize) -> Self {
    Self::with_wait_strategy(QueueOptions::with_capacity(capacity), NotifyWait::new())
  }
}

impl<T, P, W, B> PriorityQueue<T, P, W, B>
where
  P: Ord,
  W: WaitStrategy,
  B: PriorityBackend<T, P> + QueueBackend<Entry = Prioritized<T, P>>,
{
  /// Creates a queue with an explicit wait strategy and backend.
  #[must_use]
  pub fn with_wait_strategy(options: QueueOptions, wait: W) -> Self {
    Self { inner: BlockingQueue::with_capacity(options.capacity, wait), options, _pd: PhantomData }
  }

  /// Inserts `value` behind every queued item whose priority is not greater, unless the queue
  /// is closed or full.
  pub fn try_push(&self, value: T, priority: P) -> bool {
    self.inner.try_push(Prioritized::new(value, priority))
  }

  /// Same as [`PriorityQueue::try_push`], handing a rejected item back.
  ///
  /// # Errors
  ///
  /// Returns [`OfferError::Closed`] or [`OfferError::Full`] carrying the rejected item.
  pub fn offer(&self, value: T, priority: P) -> Result<(), OfferError<Prioritized<T, P>>> {
    self.inner.offer(Prioritized::new(value, priority))
  }

  /// Inserts an item, waiting while the queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedError`] if the queue is closed before the item is accepted.
  pub fn push(&self, value: T, priority: P) -> Result<(), ClosedError> {
    self.inner.push(Prioritized::new(value, priority))
  }

  /// Removes the item with the lowest priority, waiting while the queue is empty and open.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedError`] once the queue is closed and drained.
  pub fn pop(&self) -> Result<T, ClosedError> {
    self.inner.pop().map(Prioritized::into_value)
  }

  /// Same as [`PriorityQueue::pop`], also returning the item's priority.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedError`] once the queue is closed and drained.
  pub fn pop_with_priority(&self) -> Result<(T, P), ClosedError> {
    self.inner.pop().map(Prioritized::into_parts)
  }

  /// Removes the item with the lowest priority, if any.
  pub fn try_pop(&self) -> Option<T> {
    self.inner.try_pop().map(Prioritized::into_value)
  }

  /// Same as [`PriorityQueue::try_pop`], also returning the item's priority.
  pub fn try_pop_with_priority(&self) -> Option<(T, P)> {
    self.inner.try_pop().map(Prioritized::into_parts)
  }

  /// Removes the item with the lowest priority.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] while open and empty, [`QueueError::Closed`] once closed and
  /// drained.
  pub fn poll(&self) -> Result<(T, P), QueueError> {
    self.inner.poll().map(Prioritized::into_parts)
  }

  /// Blocking iterator over popped values; ends once the queue is closed and drained.
  pub fn drain(&self) -> impl Iterator<Item = T> + '_ {
    iter::from_fn(move || self.pop().ok())
  }

  /// Returns the priority of the item the next pop would return.
  #[must_use]
  pub fn peek_priority(&self) -> Option<P>
  where
    P: Copy, {
    self.inner.queue().peek_priority()
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

  /// Alias of [`PriorityQueue::count`].
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
