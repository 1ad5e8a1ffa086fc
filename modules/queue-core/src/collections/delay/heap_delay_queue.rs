use alloc::vec::Vec;

use super::{DelayEntry, InvariantViolation};


/// Binary min-heap of [`DelayEntry`] values ordered by ready-at instant.
///
/// The earliest entry sits at slot 0. Each entry records its own slot, which every swap keeps
/// current so that [`HeapDelayQueue::reschedule`] and [`HeapDelayQueue::remove`] can address
/// entries in place.
///
/// The heap performs no locking. Mutation needs `&mut self`, so sharing it between threads
/// without a lock is rejected at compile time:
///
/// ```compile_fail
/// use std::thread;
///
/// use busyq_queue_core_rs::{DelayEntry, HeapDelayQueue};
///
/// let mut heap = HeapDelayQueue::new();
/// thread::scope(|scope| {
///   scope.spawn(|| heap.heap_push(DelayEntry::new("job", 10_u64)));
///   scope.spawn(|| heap.heap_pop());
/// });
/// ```
///
/// Wrap it in [`GuardedDelayQueue`](super::GuardedDelayQueue) instead:
///
/// ```
/// use busyq_queue_core_rs::{DelayEntry, HeapDelayQueue};
///
/// let mut heap = HeapDelayQueue::new();
/// heap.heap_push(DelayEntry::new("late", 30_u64));
/// heap.heap_push(DelayEntry::new("early", 10_u64));
///
/// let first = heap.heap_pop().unwrap();
/// assert_eq!(first.value(), &"early");
/// assert_eq!(first.index(), None);
/// ```
#[derive(Debug, Clone)]
pub struct HeapDelayQueue<T, I> {
  entries: Vec<DelayEntry<T, I>>,
}

impl<T, I> Default for HeapDelayQueue<T, I> {
  fn default() -> Self {
    Self { entries: Vec::new() }
  }
}

impl<T, I: Ord> HeapDelayQueue<T, I> {
  /// Creates an empty heap.
  #[must_use]
  pub const fn new() -> Self {
    Self { entries: Vec::new() }
  }

  /// Returns the number of queued entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Indicates whether the heap is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Returns the earliest entry without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&DelayEntry<T, I>> {
    self.entries.first()
  }

  /// Inserts an entry and percolates it up to its slot.
  pub fn heap_push(&mut self, mut entry: DelayEntry<T, I>) {
    let slot = self.entries.len();
    entry.set_index(Some(slot));
    self.entries.push(entry);
    self.sift_up(slot);
  }

  /// Removes and returns the earliest entry with its index cleared.
  ///
  /// # Errors
  ///
  /// Returns [`InvariantViolation::PopOnEmpty`] when the heap is empty. Callers that share the
  /// heap must check emptiness and pop inside the same critical section.
  pub fn heap_pop(&mut self) -> Result<DelayEntry<T, I>, InvariantViolation> {
    if self.entries.is_empty() {
      return Err(InvariantViolation::PopOnEmpty);
    }
    self.remove(0)
  }

  /// Pops the earliest entry if it is ready at `now`.
  pub fn pop_ready(&mut self, now: &I) -> Option<DelayEntry<T, I>> {
    match self.peek() {
      | Some(head) if head.ready_at() <= now => self.heap_pop().ok(),
      | _ => None,
    }
  }

  /// Removes the entry stored at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`InvariantViolation::StaleIndex`] if `index` is past the end of the heap.
  pub fn remove(&mut self, index: usize) -> Result<DelayEntry<T, I>, InvariantViolation> {
    let last = match self.entries.len().checked_sub(1) {
      | Some(last) if index <= last => last,
      | _ => return Err(InvariantViolation::StaleIndex { position: index }),
    };

    if index != last {
      self.swap(index, last);
      if !self.sift_down(index, last) {
        self.sift_up(index);
      }
    }

    let mut removed = self.entries.pop().ok_or(InvariantViolation::PopOnEmpty)?;
    removed.set_index(None);
    Ok(removed)
  }

  /// Changes the ready-at instant of the entry at `index` and restores heap order.
  ///
  /// # Errors
  ///
  /// Returns [`InvariantViolation::StaleIndex`] if `index` is past the end of the heap.
  pub fn reschedule(&mut self, index: usize, ready_at: I) -> Result<(), InvariantViolation> {
    let len = self.entries.len();
    let entry = self.entries.get_mut(index).ok_or(InvariantViolation::StaleIndex { position: index })?;
    entry.set_ready_at(ready_at);
    if !self.sift_down(index, len) {
      self.sift_up(index);
    }
    Ok(())
  }

  /// Verifies heap order and index bookkeeping for every slot.
  ///
  /// # Errors
  ///
  /// Returns the first violation found.
  pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
    for (position, entry) in self.entries.iter().enumerate() {
      if entry.index() != Some(position) {
        return Err(InvariantViolation::StaleIndex { position });
      }
      if position > 0 {
        let parent = (position - 1) / 2;
        if self.less(position, parent) {
          return Err(InvariantViolation::HeapOrder { parent, child: position });
        }
      }
    }
    Ok(())
  }

  fn less(&self, left: usize, right: usize) -> bool {
    self.entries[left].ready_at() < self.entries[right].ready_at()
  }

  fn swap(&mut self, left: usize, right: usize) {
    self.entries.swap(left, right);
    self.entries[left].set_index(Some(left));
    self.entries[right].set_index(Some(right));
  }

  fn sift_up(&mut self, mut child: usize) {
    while child > 0 {
      let parent = (child - 1) / 2;
      if !self.less(child, parent) {
        break;
      }
      self.swap(parent, child);
      child = parent;
    }
  }

  // Returns whether the entry moved.
  fn sift_down(&mut self, start: usize, len: usize) -> bool {
    let mut parent = start;
    loop {
      let left = 2 * parent + 1;
      if left >= len {
        break;
      }
      let right = left + 1;
      let child = if right < len && self.less(right, left) { right } else { left };
      if !self.less(child, parent) {
        break;
      }
      self.swap(parent, child);
      parent = child;
    }
    parent > start
  }
}
