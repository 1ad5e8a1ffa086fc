use alloc::collections::VecDeque;

use super::{OfferError, QueueBackend, QueueError};


/// Bounded first-in first-out backend.
#[derive(Debug, Clone)]
pub struct FifoBackend<T> {
  buffer:   VecDeque<T>,
  capacity: usize,
  closed:   bool,
}

impl<T> FifoBackend<T> {
  /// Creates an empty backend holding at most `capacity` entries.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { buffer: VecDeque::new(), capacity, closed: false }
  }

  /// Returns a reference to the oldest entry without removing it.
  #[must_use]
  pub fn front(&self) -> Option<&T> {
    self.buffer.front()
  }
}

impl<T> QueueBackend for FifoBackend<T> {
  type Entry = T;

  fn with_capacity(capacity: usize) -> Self {
    Self::new(capacity)
  }

  fn offer(&mut self, entry: T) -> Result<(), OfferError<T>> {
    if self.closed {
      return Err(OfferError::Closed(entry));
    }

    if self.buffer.len() >= self.capacity {
      return Err(OfferError::Full(entry));
    }

    self.buffer.push_back(entry);
    Ok(())
  }

  fn poll(&mut self) -> Result<T, QueueError> {
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
