use std::{sync::Arc, thread};

use busyq_queue_core_rs::FifoBackend;

use super::*;

#[test]
fn relocking_a_held_mutex_is_refused() {
  let mutex = StdSyncMutex::new(FifoBackend::<u32>::new(4));
  let guard = mutex.lock();

  // A second acquisition on the same thread would deadlock; `try_lock` reports it instead.
  assert!(mutex.try_lock().is_none());
  drop(guard);
  assert!(mutex.try_lock().is_some());
}

#[test]
fn poisoned_mutex_still_yields_its_value() {
  let mutex = Arc::new(StdSyncMutex::new(5_u32));
  let poisoner = Arc::clone(&mutex);
  let outcome = thread::spawn(move || {
    let _guard = poisoner.lock();
    panic!("poison the lock");
  })
  .join();

  assert!(outcome.is_err());
  assert!(mutex.as_inner().is_poisoned());
  assert_eq!(*mutex.lock(), 5);
  assert_eq!(*SyncLockLike::read(&*mutex), 5);
}
