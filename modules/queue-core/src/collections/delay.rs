//! Deadline-ordered binary heap and the two ways of sharing it between threads.
//!
//! [`HeapDelayQueue`] does no locking. [`RacyDelayQueue`] locks each primitive separately and
//! therefore loses the check-then-act race on pop; [`GuardedDelayQueue`] holds one lock across
//! the whole operation.

mod delay_entry;
mod guarded_delay_queue;
mod heap_delay_queue;
mod invariant_violation;
mod racy_delay_queue;

pub use delay_entry::DelayEntry;
pub use guarded_delay_queue::GuardedDelayQueue;
pub use heap_delay_queue::HeapDelayQueue;
pub use invariant_violation::InvariantViolation;
pub use racy_delay_queue::RacyDelayQueue;
