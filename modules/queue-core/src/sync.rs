mod sync_lock_like;

pub use sync_lock_like::{SpinSyncMutex, SpinSyncRwLock, SyncLockLike, SyncReadGuard, SyncWriteGuard};
