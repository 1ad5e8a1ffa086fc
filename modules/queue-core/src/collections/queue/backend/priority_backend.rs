use super::{Prioritized, QueueBackend};

/// Extension trait for backends that serve the lowest priority value first, oldest first among
/// equal priorities.
pub trait PriorityBackend<T, P: Ord>: QueueBackend<Entry = Prioritized<T, P>> {
  /// Returns the entry the next poll would return, without removing it.
  fn peek(&self) -> Option<&Prioritized<T, P>>;
}
