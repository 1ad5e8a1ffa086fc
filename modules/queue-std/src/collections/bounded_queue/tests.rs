use std::{thread, time::Duration};

use super::*;

#[test]
fn single_producer_single_consumer_keeps_order() {
  let queue = BoundedQueue::new(8);

  thread::scope(|scope| {
    scope.spawn(|| {
      for value in 0..1_000_u32 {
        queue.push(value).unwrap();
      }
      queue.close();
    });

    let received: Vec<u32> = queue.drain().collect();
    assert_eq!(received, (0..1_000).collect::<Vec<_>>());
  });
}

#[test]
fn try_push_fails_exactly_at_capacity() {
  let queue = BoundedQueue::new(3);
  for value in 0..3 {
    assert!(queue.try_push(value));
    assert_eq!(queue.count(), value + 1);
  }
  assert!(queue.is_full());
  assert!(!queue.try_push(99));
  assert_eq!(queue.offer(99), Err(OfferError::Full(99)));
  assert_eq!(queue.count(), 3);
}

#[test]
fn closed_queue_rejects_push_and_drains_pop() {
  let queue = BoundedQueue::new(4);
  queue.push('x').unwrap();
  queue.push('y').unwrap();
  queue.close();
  queue.close();

  assert!(queue.is_closed());
  assert!(!queue.try_push('z'));
  assert_eq!(queue.push('z'), Err(ClosedError));
  assert_eq!(queue.offer('z'), Err(OfferError::Closed('z')));
  assert_eq!(queue.pop(), Ok('x'));
  assert_eq!(queue.poll(), Ok('y'));
  assert_eq!(queue.pop(), Err(ClosedError));
  assert_eq!(queue.poll(), Err(QueueError::Closed));
}

#[test]
fn empty_open_queue_polls_empty() {
  let queue: BoundedQueue<u8> = BoundedQueue::default();
  assert_eq!(queue.capacity(), crate::DEFAULT_CAPACITY);
  assert_eq!(queue.try_pop(), None);
  assert_eq!(queue.poll(), Err(QueueError::Empty));
  assert!(queue.is_empty());
}

#[test]
fn zero_capacity_queue_never_accepts() {
  let queue = BoundedQueue::new(0);
  assert!(queue.is_full());
  assert!(!queue.try_push(1));
  queue.close();
  assert_eq!(queue.pop(), Err(ClosedError));
}

#[test]
fn with_options_applies_capacity_and_tick() {
  let options = QueueOptions::with_capacity(2).with_tick(Duration::from_millis(1));
  let queue: BoundedQueue<u8> = BoundedQueue::with_options(options);
  assert_eq!(queue.capacity(), 2);
  assert_eq!(queue.options(), &options);
}

#[test]
fn polling_two_queues_until_both_close() {
  let numbers = BoundedQueue::new(4);
  let words = BoundedQueue::new(4);

  thread::scope(|scope| {
    scope.spawn(|| {
      for value in 0..20_u32 {
        numbers.push(value).unwrap();
      }
      numbers.close();
    });
    scope.spawn(|| {
      for word in ["alpha", "beta", "gamma"] {
        words.push(word).unwrap();
      }
      words.close();
    });

    let mut seen_numbers = Vec::new();
    let mut seen_words = Vec::new();
    let mut numbers_open = true;
    let mut words_open = true;
    while numbers_open || words_open {
      match numbers.poll() {
        | Ok(value) => seen_numbers.push(value),
        | Err(QueueError::Closed) => numbers_open = false,
        | Err(_) => {},
      }
      match words.poll() {
        | Ok(word) => seen_words.push(word),
        | Err(QueueError::Closed) => words_open = false,
        | Err(_) => {},
      }
      thread::yield_now();
    }

    assert_eq!(seen_numbers, (0..20).collect::<Vec<_>>());
    assert_eq!(seen_words, vec!["alpha", "beta", "gamma"]);
  });
}

#[test]
fn notifying_queue_wakes_blocked_pop() {
  let queue = BoundedQueue::notifying(1);

  thread::scope(|scope| {
    let consumer = scope.spawn(|| queue.pop());
    thread::sleep(Duration::from_millis(20));
    queue.push(5_u64).unwrap();
    assert_eq!(consumer.join().unwrap(), Ok(5));
  });
}

#[test]
fn tick_queue_blocked_pop_notices_close_on_next_attempt() {
  let options = QueueOptions::with_capacity(1).with_tick(Duration::from_millis(1));
  let queue: BoundedQueue<u8> = BoundedQueue::with_options(options);

  thread::scope(|scope| {
    let consumer = scope.spawn(|| queue.pop());
    thread::sleep(Duration::from_millis(20));
    queue.close();
    assert_eq!(consumer.join().unwrap(), Err(ClosedError));
  });
}
