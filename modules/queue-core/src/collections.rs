/// Heap-ordered delay queue and its racy/guarded wrappers.
pub mod delay;
/// Bounded FIFO and priority queues.
pub mod queue;
