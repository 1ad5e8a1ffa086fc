use alloc::vec::Vec;
use std::thread;

use proptest::prelude::*;

use crate::{
  collections::queue::{FifoBackend, FifoSyncQueue, HeapPriorityBackend, OrderedPriorityBackend, PrioritySyncQueue},
  sync::SpinSyncRwLock,
};

use super::*;

#[test]
fn try_push_fails_exactly_at_capacity() {
  let queue: FifoSyncQueue<u32> = SyncQueue::with_capacity(3);
  assert!(queue.try_push(1));
  assert!(queue.try_push(2));
  assert!(queue.try_push(3));
  assert!(queue.is_full());
  assert!(!queue.try_push(4));
  assert_eq!(queue.count(), 3);

  assert_eq!(queue.try_pop(), Some(1));
  assert!(queue.try_push(4));
}

#[test]
fn close_rejects_pushes_but_keeps_buffered_items() {
  let queue: FifoSyncQueue<&str> = SyncQueue::with_capacity(4);
  queue.offer("first").unwrap();
  queue.offer("second").unwrap();
  queue.close();
  queue.close();

  assert!(queue.is_closed());
  assert!(!queue.try_push("third"));
  assert_eq!(queue.poll(), Ok("first"));
  assert_eq!(queue.poll(), Ok("second"));
  assert_eq!(queue.poll(), Err(QueueError::Closed));
  assert!(queue.try_pop().is_none());
}

#[test]
fn empty_open_queue_reports_empty() {
  let queue: FifoSyncQueue<u8> = SyncQueue::with_capacity(1);
  assert!(queue.is_empty());
  assert_eq!(queue.poll(), Err(QueueError::Empty));
  assert_eq!(queue.capacity(), 1);
}

#[test]
fn priority_queue_with_rw_lock_peeks_and_orders() {
  let queue: PrioritySyncQueue<char, i32, SpinSyncRwLock<OrderedPriorityBackend<char, i32>>> = SyncQueue::with_capacity(4);
  assert_eq!(queue.peek_priority(), None);
  for (value, priority) in [('a', 5), ('b', 3), ('c', 5), ('d', 3)] {
    assert!(queue.try_push(Prioritized::new(value, priority)));
  }

  assert_eq!(queue.peek_priority(), Some(3));
  let popped: Vec<char> = core::iter::from_fn(|| queue.try_pop()).map(Prioritized::into_value).collect();
  assert_eq!(popped, ['b', 'd', 'a', 'c']);
}

#[test]
fn heap_backend_plugs_into_the_facade() {
  let queue: SyncQueue<HeapPriorityBackend<u8, u8>> = SyncQueue::with_capacity(2);
  queue.offer(Prioritized::new(1, 9)).unwrap();
  queue.offer(Prioritized::new(2, 1)).unwrap();
  assert_eq!(queue.peek_priority(), Some(1));
  assert_eq!(queue.into_backend().len(), 2);
}

#[test]
fn concurrent_producers_and_consumers_balance() {
  let queue: FifoSyncQueue<usize> = SyncQueue::from_backend(FifoBackend::new(16));
  let producers = 4;
  let per_producer = 500;

  let consumed = thread::scope(|scope| {
    for producer in 0..producers {
      let queue = &queue;
      scope.spawn(move || {
        for offset in 0..per_producer {
          let mut value = producer * per_producer + offset;
          loop {
            match queue.offer(value) {
              | Ok(()) => break,
              | Err(rejected) => {
                value = rejected.into_inner();
                thread::yield_now();
              },
            }
          }
        }
      });
    }

    let consumer = scope.spawn(|| {
      let mut seen = Vec::new();
      while seen.len() < producers * per_producer {
        match queue.try_pop() {
          | Some(value) => seen.push(value),
          | None => thread::yield_now(),
        }
      }
      seen
    });
    consumer.join().unwrap()
  });

  let mut consumed = consumed;
  consumed.sort_unstable();
  assert_eq!(consumed, (0..producers * per_producer).collect::<Vec<_>>());
  assert!(queue.is_empty());
}

proptest! {
  #[test]
  fn count_never_exceeds_capacity(capacity in 0_usize..16, ops in proptest::collection::vec(any::<bool>(), 0..128)) {
    let queue: FifoSyncQueue<usize> = SyncQueue::with_capacity(capacity);
    for (step, push) in ops.into_iter().enumerate() {
      if push {
        let was_full = queue.count() == capacity;
        prop_assert_eq!(queue.try_push(step), !was_full);
      } else {
        let _ = queue.try_pop();
      }
      prop_assert!(queue.count() <= capacity);
    }
  }
}
