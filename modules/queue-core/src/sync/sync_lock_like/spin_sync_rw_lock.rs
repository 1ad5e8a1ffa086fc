use super::SyncLockLike;

/// [`SyncLockLike`] over `spin::RwLock`; concurrent readers share the lock.
#[derive(Debug, Default)]
pub struct SpinSyncRwLock<T>(spin::RwLock<T>);

impl<T> SpinSyncRwLock<T> {
  /// Creates a new reader/writer lock guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::RwLock::new(value))
  }

  /// Consumes the lock and returns the inner value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }
}

impl<T> SyncLockLike<T> for SpinSyncRwLock<T> {
  type ReadGuard<'a>
    = spin::RwLockReadGuard<'a, T>
  where
    T: 'a;
  type WriteGuard<'a>
    = spin::RwLockWriteGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    SpinSyncRwLock::new(value)
  }

  fn into_inner(self) -> T {
    SpinSyncRwLock::into_inner(self)
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    self.0.read()
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    self.0.write()
  }
}
