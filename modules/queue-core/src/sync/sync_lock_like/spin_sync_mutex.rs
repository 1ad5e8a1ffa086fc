use super::SyncLockLike;

/// [`SyncLockLike`] over `spin::Mutex`, usable without an operating system.
///
/// Readers and writers both take the single exclusive lock.
#[derive(Debug, Default)]
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new mutex guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Consumes the mutex and returns the inner value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Spins until the lock is acquired and returns the guard.
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }

  /// Returns the guard if the lock is currently free.
  pub fn try_lock(&self) -> Option<spin::MutexGuard<'_, T>> {
    self.0.try_lock()
  }
}

impl<T> SyncLockLike<T> for SpinSyncMutex<T> {
  type ReadGuard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;
  type WriteGuard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    SpinSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    SpinSyncMutex::into_inner(self)
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    self.lock()
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    self.lock()
  }
}
