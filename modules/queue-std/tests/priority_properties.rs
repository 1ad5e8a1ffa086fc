use busyq_queue_std_rs::{BoundedQueue, HeapPriorityBackend, PriorityQueue, QueueOptions, TickWait};
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Op {
  Push(u16),
  Pop,
}

fn op() -> impl Strategy<Value = Op> {
  prop_oneof![any::<u16>().prop_map(Op::Push), Just(Op::Pop)]
}

proptest! {
  #[test]
  fn count_never_exceeds_capacity(capacity in 0_usize..8, ops in proptest::collection::vec(op(), 0..64)) {
    let queue = BoundedQueue::new(capacity);
    for op in ops {
      match op {
        | Op::Push(value) => {
          let was_full = queue.count() == capacity;
          prop_assert_eq!(queue.try_push(value), !was_full);
        },
        | Op::Pop => {
          let was_empty = queue.is_empty();
          prop_assert_eq!(queue.try_pop().is_none(), was_empty);
        },
      }
      prop_assert!(queue.count() <= capacity);
    }
  }

  #[test]
  fn single_producer_pops_in_push_order(values in proptest::collection::vec(any::<i64>(), 0..64)) {
    let queue = BoundedQueue::new(values.len());
    for value in &values {
      prop_assert!(queue.try_push(*value));
    }
    queue.close();
    let popped: Vec<i64> = queue.drain().collect();
    prop_assert_eq!(popped, values);
  }

  #[test]
  fn priorities_pop_non_decreasing_and_stable(priorities in proptest::collection::vec(0_u8..6, 0..64)) {
    let queue = PriorityQueue::new(priorities.len());
    for (order, priority) in priorities.iter().copied().enumerate() {
      prop_assert!(queue.try_push(order, priority));
    }

    let mut expected: Vec<(usize, u8)> = priorities.iter().copied().enumerate().collect();
    expected.sort_by_key(|&(_, priority)| priority);

    let popped: Vec<(usize, u8)> = std::iter::from_fn(|| queue.try_pop_with_priority()).collect();
    prop_assert_eq!(popped, expected);
  }

  #[test]
  fn heap_backed_queue_orders_like_sorted_queue(priorities in proptest::collection::vec(-4_i32..4, 0..64)) {
    let options = QueueOptions::with_capacity(priorities.len());
    let heap: PriorityQueue<usize, i32, TickWait, HeapPriorityBackend<usize, i32>> =
      PriorityQueue::with_wait_strategy(options, TickWait::spin());
    let sorted = PriorityQueue::with_options(options);
    for (order, priority) in priorities.iter().copied().enumerate() {
      prop_assert!(heap.try_push(order, priority));
      prop_assert!(sorted.try_push(order, priority));
    }

    let from_heap: Vec<(usize, i32)> = std::iter::from_fn(|| heap.try_pop_with_priority()).collect();
    let from_sorted: Vec<(usize, i32)> = std::iter::from_fn(|| sorted.try_pop_with_priority()).collect();
    prop_assert_eq!(from_heap, from_sorted);
  }
}
