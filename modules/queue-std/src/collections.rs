mod bounded_queue;
mod delay_queue;
mod priority_queue;
mod queue_options;

pub use bounded_queue::BoundedQueue;
pub use delay_queue::{delay_entry_after, DueDelayQueue, StdGuardedDelayQueue, StdHeapDelayQueue, StdRacyDelayQueue};
pub use priority_queue::PriorityQueue;
pub use queue_options::{QueueOptions, DEFAULT_CAPACITY, DEFAULT_TICK};
