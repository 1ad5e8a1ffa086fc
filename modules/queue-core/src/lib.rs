#![no_std]
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]

//! Runtime-agnostic building blocks for busyq.
//!
//! The crate is split into two layers. Backends are plain `&mut self` data structures that know
//! nothing about locking; facades own exactly one lock (anything implementing
//! [`sync::SyncLockLike`]) and call exactly one backend method per critical section. Blocking
//! behaviour lives in `busyq-queue-std-rs`, which binds these facades to std locks and wait
//! strategies.

extern crate alloc;
#[cfg(test)]
extern crate std;

/// Queue and delay-queue data structures.
pub mod collections;
/// Lock abstractions shared by the facades.
pub mod sync;

pub use collections::{
  delay::{DelayEntry, GuardedDelayQueue, HeapDelayQueue, InvariantViolation, RacyDelayQueue},
  queue::{
    ClosedError, FifoBackend, FifoSyncQueue, HeapPriorityBackend, OfferError, OrderedPriorityBackend,
    PriorityBackend, PrioritySyncQueue, Prioritized, QueueBackend, QueueError, SyncQueue,
  },
};
pub use sync::{SpinSyncMutex, SpinSyncRwLock, SyncLockLike};
