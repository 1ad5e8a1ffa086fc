mod std_sync_mutex;
mod std_sync_rw_lock;

pub use std_sync_mutex::{StdMutexGuard, StdSyncMutex};
pub use std_sync_rw_lock::StdSyncRwLock;
