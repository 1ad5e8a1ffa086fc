use std::{
  io::Write,
  sync::{Arc, Mutex},
  thread,
  time::Duration,
};

use busyq_queue_core_rs::FifoBackend;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt;

use super::*;
use crate::{blocking::NotifyWait, sync::StdSyncMutex};

type TickQueue = BlockingQueue<FifoBackend<u32>, StdSyncMutex<FifoBackend<u32>>, TickWait>;
type NotifyQueue = BlockingQueue<FifoBackend<u32>, StdSyncMutex<FifoBackend<u32>>, NotifyWait>;

#[test]
fn push_then_pop_preserves_fifo_order() {
  let queue = TickQueue::with_capacity(4, TickWait::spin());
  for value in 1..=4 {
    queue.push(value).unwrap();
  }
  assert!(queue.is_full());
  assert!(!queue.try_push(5));

  let drained: Vec<_> = (0..4).map(|_| queue.pop().unwrap()).collect();
  assert_eq!(drained, vec![1, 2, 3, 4]);
  assert!(queue.is_empty());
}

#[test]
fn pop_drains_before_reporting_closed() {
  let queue = TickQueue::with_capacity(2, TickWait::spin());
  queue.push(7).unwrap();
  queue.close();

  assert_eq!(queue.push(8), Err(ClosedError));
  assert_eq!(queue.pop(), Ok(7));
  assert_eq!(queue.pop(), Err(ClosedError));
  assert_eq!(queue.poll(), Err(QueueError::Closed));
}

#[test]
fn blocked_push_resumes_after_pop() {
  let queue = TickQueue::with_capacity(1, TickWait::new(Duration::from_millis(1)));
  queue.push(1).unwrap();

  thread::scope(|scope| {
    let producer = scope.spawn(|| queue.push(2));
    thread::sleep(Duration::from_millis(20));
    assert_eq!(queue.pop(), Ok(1));
    assert_eq!(producer.join().unwrap(), Ok(()));
  });

  assert_eq!(queue.try_pop(), Some(2));
}

#[test]
fn notify_wait_wakes_blocked_pop_on_push() {
  let queue = NotifyQueue::with_capacity(1, NotifyWait::new());

  thread::scope(|scope| {
    let consumer = scope.spawn(|| queue.pop());
    thread::sleep(Duration::from_millis(20));
    queue.push(42).unwrap();
    assert_eq!(consumer.join().unwrap(), Ok(42));
  });
}

#[test]
fn notify_wait_wakes_blocked_pop_on_close() {
  let queue = NotifyQueue::with_capacity(1, NotifyWait::new());

  thread::scope(|scope| {
    let consumers: Vec<_> = (0..3).map(|_| scope.spawn(|| queue.pop())).collect();
    thread::sleep(Duration::from_millis(20));
    queue.close();
    for consumer in consumers {
      assert_eq!(consumer.join().unwrap(), Err(ClosedError));
    }
  });
}

#[test]
fn notify_wait_wakes_blocked_push_on_close() {
  let queue = NotifyQueue::with_capacity(1, NotifyWait::new());
  queue.push(1).unwrap();

  thread::scope(|scope| {
    let producer = scope.spawn(|| queue.push(2));
    thread::sleep(Duration::from_millis(20));
    queue.close();
    assert_eq!(producer.join().unwrap(), Err(ClosedError));
  });

  assert_eq!(queue.into_backend().len(), 1);
}

struct CaptureWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let mut guard = self.buffer.lock().unwrap();
    guard.extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[test]
fn close_and_drained_pop_are_logged() {
  let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
  let writer_source = buffer.clone();
  let subscriber = fmt::SubscriberBuilder::default()
    .with_max_level(tracing::Level::TRACE)
    .with_writer(move || CaptureWriter { buffer: writer_source.clone() })
    .with_ansi(false)
    .finish();

  let queue = TickQueue::with_capacity(2, TickWait::spin());
  queue.push(3).unwrap();
  with_default(subscriber, || {
    queue.close();
    assert_eq!(queue.push(4), Err(ClosedError));
    assert_eq!(queue.pop(), Ok(3));
    assert_eq!(queue.pop(), Err(ClosedError));
  });

  let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
  assert!(output.contains("queue closed"));
  assert!(output.contains("remaining=1"));
  assert!(output.contains("push rejected"));
  assert!(output.contains("closed and drained"));
}
