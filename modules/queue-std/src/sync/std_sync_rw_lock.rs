use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use busyq_queue_core_rs::sync::SyncLockLike;

/// Wrapper over [`std::sync::RwLock`]; read-only accessors share the lock.
///
/// `std::sync::RwLock` is not reentrant either: taking a read guard while the same thread holds
/// the write guard deadlocks or panics.
#[derive(Debug, Default)]
pub struct StdSyncRwLock<T>(RwLock<T>);

impl<T> StdSyncRwLock<T> {
  /// Creates a new lock guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(RwLock::new(value))
  }

  /// Consumes the lock and returns the inner value.
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T> SyncLockLike<T> for StdSyncRwLock<T> {
  type ReadGuard<'a>
    = RwLockReadGuard<'a, T>
  where
    T: 'a;
  type WriteGuard<'a>
    = RwLockWriteGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncRwLock::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncRwLock::into_inner(self)
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    self.0.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    self.0.write().unwrap_or_else(PoisonError::into_inner)
  }
}
