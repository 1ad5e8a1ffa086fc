//! Backend layer traits, implementations and error types for queue operations.

mod fifo_backend;
mod heap_priority_backend;
mod offer_error;
mod ordered_priority_backend;
mod prioritized;
mod priority_backend;
mod queue_backend;
mod queue_error;

pub use fifo_backend::FifoBackend;
pub use heap_priority_backend::HeapPriorityBackend;
pub use offer_error::OfferError;
pub use ordered_priority_backend::OrderedPriorityBackend;
pub use prioritized::Prioritized;
pub use priority_backend::PriorityBackend;
pub use queue_backend::QueueBackend;
pub use queue_error::{ClosedError, QueueError};
