//! Blocking push/pop on top of the non-blocking facades.

mod blocking_queue;
mod notify_wait;
mod tick_wait;
mod wait_strategy;

pub use blocking_queue::BlockingQueue;
pub use notify_wait::NotifyWait;
pub use tick_wait::TickWait;
pub use wait_strategy::WaitStrategy;
