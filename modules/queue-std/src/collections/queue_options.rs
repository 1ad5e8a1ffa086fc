use std::time::Duration;

#[cfg(test)]
mod tests;

/// Capacity used by [`QueueOptions::default`].
pub const DEFAULT_CAPACITY: usize = 32;

/// Retry tick used by [`QueueOptions::default`]; zero means yield instead of sleeping.
pub const DEFAULT_TICK: Duration = Duration::ZERO;

/// Construction options for [`BoundedQueue`](crate::BoundedQueue) and
/// [`PriorityQueue`](crate::PriorityQueue).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueOptions {
  /// Maximum number of buffered items.
  pub capacity: usize,
  /// Pause between two attempts of a blocking operation under [`TickWait`](crate::TickWait).
  pub tick:     Duration,
}

impl QueueOptions {
  /// Creates options with the given capacity and the default tick.
  #[must_use]
  pub const fn with_capacity(capacity: usize) -> Self {
    Self { capacity, tick: DEFAULT_TICK }
  }

  /// Replaces the retry tick.
  #[must_use]
  pub const fn with_tick(mut self, tick: Duration) -> Self {
    self.tick = tick;
    self
  }

  /// Returns the capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the retry tick.
  #[must_use]
  pub const fn tick(&self) -> Duration {
    self.tick
  }
}

impl Default for QueueOptions {
  fn default() -> Self {
    Self::with_capacity(DEFAULT_CAPACITY)
  }
}
