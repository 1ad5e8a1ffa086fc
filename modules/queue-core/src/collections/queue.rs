//! Bounded queues built from a lock-free-of-locks backend and a lock-once facade.

pub mod backend;
mod sync_queue;

pub use backend::{
  ClosedError, FifoBackend, HeapPriorityBackend, OfferError, OrderedPriorityBackend, PriorityBackend, Prioritized,
  QueueBackend, QueueError,
};
pub use sync_queue::SyncQueue;

use crate::sync::SpinSyncMutex;

/// FIFO queue guarded by a spin mutex.
pub type FifoSyncQueue<T, L = SpinSyncMutex<FifoBackend<T>>> = SyncQueue<FifoBackend<T>, L>;

/// Stable priority queue (linear ordered splice) guarded by a spin mutex.
pub type PrioritySyncQueue<T, P, L = SpinSyncMutex<OrderedPriorityBackend<T, P>>> =
  SyncQueue<OrderedPriorityBackend<T, P>, L>;
