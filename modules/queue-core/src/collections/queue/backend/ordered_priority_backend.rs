use alloc::collections::VecDeque;

use super::{OfferError, PriorityBackend, Prioritized, QueueBackend, QueueError};


/// Bounded priority backend that keeps its buffer sorted by a stable linear splice.
///
/// A new entry is inserted in front of the first buffered entry whose priority is strictly
/// greater, so it lands behind every entry of equal priority. Offers are O(n), polls O(1).
#[derive(Debug, Clone)]
pub struct OrderedPriorityBackend<T, P> {
  buffer:   VecDeque<Prioritized<T, P>>,
  capacity: usize,
  closed:   bool,
}

impl<T, P: Ord> OrderedPriorityBackend<T, P> {
  /// Creates an empty backend holding at most `capacity` entries.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { buffer: VecDeque::new(), capacity, closed: false }
  }

  fn insertion_point(&self, priority: &P) -> usize {
    self.buffer.iter().position(|buffered| buffered.priority_ref() > priority).unwrap_or(self.buffer.len())
  }

  /// Iterates over buffered entries in the order they will be polled.
  pub fn iter(&self) -> impl Iterator<Item = &Prioritized<T, P>> {
    self.buffer.iter()
  }
}

impl<T, P: Ord> QueueBackend for OrderedPriorityBackend<T, P> {
  type Entry = Prioritized<T, P>;

  fn with_capacity(capacity: usize) -> Self {
    Self::new(capacity)
  }

  fn offer(&mut self, entry: Self::Entry) -> Result<(), OfferError<Self::Entry>> {
    if self.closed {
      return Err(OfferError::Closed(entry));
    }

    if self.buffer.len() >= self.capacity {
      return Err(OfferError::Full(entry));
    }

    let at = self.insertion_point(entry.priority_ref());
    self.buffer.insert(at, entry);
    Ok(())
  }

  fn poll(&mut self) -> Result<Self::Entry, QueueError> {
    match self.buffer.pop_front() {
      | Some(entry) => Ok(entry),
      | None if self.closed => Err(QueueError::Closed),
      | None => Err(QueueError::Empty),
    }
  }

  fn len(&self) -> usize {
    self.buffer.len()
  }

  fn capacity(&self) -> usize {
    self.capacity
  }

  fn is_closed(&self) -> bool {
    self.closed
  }

  fn close(&mut self) {
    self.closed = true;
  }
}

impl<T, P: Ord> PriorityBackend<T, P> for OrderedPriorityBackend<T, P> {
  fn peek(&self) -> Option<&Prioritized<T, P>> {
    self.buffer.front()
  }
}
