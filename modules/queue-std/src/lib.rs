#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
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
#![deny(clippy::clone_on_copy)]
#![deny(clippy::wrong_self_convention)]

//! Blocking queues for std environments.
//!
//! This crate binds the lock-agnostic facades of `busyq_queue_core_rs` to `std::sync` locks and
//! adds the retry loop that turns the non-blocking `try_push`/`try_pop` pair into blocking
//! `push`/`pop`. How a failed attempt waits before retrying is a [`blocking::WaitStrategy`]:
//! [`blocking::TickWait`] polls on a fixed tick, [`blocking::NotifyWait`] parks on a condition
//! variable until the queue changes.

/// Retry loop and wait strategies.
pub mod blocking;
/// Bounded, priority and delay queues.
pub mod collections;
/// `std::sync` implementations of the core lock abstraction.
pub mod sync;

pub use blocking::{BlockingQueue, NotifyWait, TickWait, WaitStrategy};
pub use busyq_queue_core_rs::{
  ClosedError, DelayEntry, GuardedDelayQueue, HeapDelayQueue, HeapPriorityBackend, InvariantViolation, OfferError,
  OrderedPriorityBackend, Prioritized, QueueError, RacyDelayQueue,
};
pub use collections::{
  delay_entry_after, BoundedQueue, DueDelayQueue, PriorityQueue, QueueOptions, StdGuardedDelayQueue,
  StdHeapDelayQueue, StdRacyDelayQueue, DEFAULT_CAPACITY, DEFAULT_TICK,
};
pub use sync::{StdSyncMutex, StdSyncRwLock};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use busyq_queue_core_rs::{
    ClosedError, DelayEntry, InvariantViolation, OfferError, Prioritized, QueueBackend, QueueError, SyncLockLike,
  };

  pub use crate::{
    blocking::{NotifyWait, TickWait, WaitStrategy},
    collections::{
      delay_entry_after, BoundedQueue, DueDelayQueue, PriorityQueue, QueueOptions, StdGuardedDelayQueue,
      StdRacyDelayQueue,
    },
  };
}
