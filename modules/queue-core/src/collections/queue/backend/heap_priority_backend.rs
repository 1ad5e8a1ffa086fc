use alloc::collections::BinaryHeap;
use core::cmp::Ordering;

use super::{OfferError, PriorityBackend, Prioritized, QueueBackend, QueueError};


/// Binary-heap priority backend with O(log n) offers and polls.
///
/// `BinaryHeap` is not stable on its own, so every entry is stamped with a monotonically
/// increasing sequence number at offer time and the heap orders by `(priority, sequence)`.
#[derive(Debug, Clone)]
pub struct HeapPriorityBackend<T, P> {
  heap:          BinaryHeap<HeapSlot<T, P>>,
  capacity:      usize,
  next_sequence: u64,
  closed:        bool,
}

#[derive(Debug, Clone)]
struct HeapSlot<T, P> {
  sequence: u64,
  entry:    Prioritized<T, P>,
}

impl<T, P: Ord> HeapSlot<T, P> {
  fn key(&self) -> (&P, u64) {
    (self.entry.priority_ref(), self.sequence)
  }
}

impl<T, P: Ord> PartialEq for HeapSlot<T, P> {
  fn eq(&self, other: &Self) -> bool {
    self.key() == other.key()
  }
}

impl<T, P: Ord> Eq for HeapSlot<T, P> {}

impl<T, P: Ord> PartialOrd for HeapSlot<T, P> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T, P: Ord> Ord for HeapSlot<T, P> {
  // Reversed: `BinaryHeap` is a max-heap and the smallest key must surface first.
  fn cmp(&self, other: &Self) -> Ordering {
    other.key().cmp(&self.key())
  }
}

impl<T, P: Ord> HeapPriorityBackend<T, P> {
  /// Creates an empty backend holding at most `capacity` entries.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { heap: BinaryHeap::new(), capacity, next_sequence: 0, closed: false }
  }
}

impl<T, P: Ord> QueueBackend for HeapPriorityBackend<T, P> {
  type Entry = Prioritized<T, P>;

  fn with_capacity(capacity: usize) -> Self {
    Self::new(capacity)
  }

  fn offer(&mut self, entry: Self::Entry) -> Result<(), OfferError<Self::Entry>> {
    if self.closed {
      return Err(OfferError::Closed(entry));
    }

    if self.heap.len() >= self.capacity {
      return Err(OfferError::Full(entry));
    }

    let sequence = self.next_sequence;
    self.next_sequence = self.next_sequence.wrapping_add(1);
    self.heap.push(HeapSlot { sequence, entry });
    Ok(())
  }

  fn poll(&mut self) -> Result<Self::Entry, QueueError> {
    match self.heap.pop() {
      | Some(slot) => Ok(slot.entry),
      | None if self.closed => Err(QueueError::Closed),
      | None => Err(QueueError::Empty),
    }
  }

  fn len(&self) -> usize {
    self.heap.len()
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

impl<T, P: Ord> PriorityBackend<T, P> for HeapPriorityBackend<T, P> {
  fn peek(&self) -> Option<&Prioritized<T, P>> {
    self.heap.peek().map(|slot| &slot.entry)
  }
}
