use core::ops::{Deref, DerefMut};

mod spin_sync_mutex;
mod spin_sync_rw_lock;

pub use spin_sync_mutex::SpinSyncMutex;
pub use spin_sync_rw_lock::SpinSyncRwLock;


/// Lock abstraction used by every facade in this crate.
///
/// Mutex-style implementations hand out the same exclusive guard from [`SyncLockLike::read`] and
/// [`SyncLockLike::write`]; reader/writer implementations let readers share the lock. Callers
/// must never request a second guard on the same lock while one is alive, since none of the
/// implementations are reentrant.
pub trait SyncLockLike<T> {
  /// Guard returned by [`SyncLockLike::read`].
  type ReadGuard<'a>: Deref<Target = T>
  where
    Self: 'a,
    T: 'a;

  /// Guard returned by [`SyncLockLike::write`].
  type WriteGuard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new lock wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the lock and returns the inner value.
  fn into_inner(self) -> T;

  /// Acquires the lock for read-only access.
  fn read(&self) -> Self::ReadGuard<'_>;

  /// Acquires the lock for exclusive access.
  fn write(&self) -> Self::WriteGuard<'_>;
}

/// Convenience alias for read guards produced by [`SyncLockLike`].
pub type SyncReadGuard<'a, L, T> = <L as SyncLockLike<T>>::ReadGuard<'a>;
/// Convenience alias for write guards produced by [`SyncLockLike`].
pub type SyncWriteGuard<'a, L, T> = <L as SyncLockLike<T>>::WriteGuard<'a>;
