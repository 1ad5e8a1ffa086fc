//! Wrapper around `std::sync::Mutex` implementing the core `SyncLockLike` trait.

use std::sync::{MutexGuard, PoisonError, TryLockError};

use busyq_queue_core_rs::sync::SyncLockLike;

#[cfg(test)]
mod tests;

/// Thin wrapper over [`std::sync::Mutex`]; read and write guards are the same exclusive guard.
///
/// Poisoning is ignored: a panic while the lock was held leaves the queue state as it was at the
/// panic point, and every backend mutation is a single call that either completed or did not.
#[derive(Debug, Default)]
pub struct StdSyncMutex<T>(std::sync::Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(std::sync::Mutex::new(value))
  }

  /// Consumes the mutex and returns the inner value.
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  /// Returns a reference to the underlying `std::sync::Mutex`.
  #[must_use]
  pub const fn as_inner(&self) -> &std::sync::Mutex<T> {
    &self.0
  }

  /// Locks the mutex and returns the guard.
  pub fn lock(&self) -> MutexGuard<'_, T> {
    self.0.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Returns the guard if the mutex is free, `None` if it is held, including by the caller.
  pub fn try_lock(&self) -> Option<MutexGuard<'_, T>> {
    match self.0.try_lock() {
      | Ok(guard) => Some(guard),
      | Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
      | Err(TryLockError::WouldBlock) => None,
    }
  }
}

impl<T> SyncLockLike<T> for StdSyncMutex<T> {
  type ReadGuard<'a>
    = MutexGuard<'a, T>
  where
    T: 'a;
  type WriteGuard<'a>
    = MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncMutex::into_inner(self)
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    self.lock()
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    self.lock()
  }
}

/// Convenience alias for guards produced by [`StdSyncMutex`].
pub type StdMutexGuard<'a, T> = MutexGuard<'a, T>;
