use std::{thread, time::Duration};

use super::WaitStrategy;

/// Busy-wait strategy: sleep for a fixed tick, or yield the thread when the tick is zero.
///
/// [`WaitStrategy::notify`] is a no-op, so a closed queue is only noticed on the next attempt,
/// at most one tick later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickWait {
  tick: Duration,
}

impl TickWait {
  /// Creates a strategy that sleeps for `tick` between attempts.
  #[must_use]
  pub const fn new(tick: Duration) -> Self {
    Self { tick }
  }

  /// Creates a strategy that only yields between attempts.
  #[must_use]
  pub const fn spin() -> Self {
    Self::new(Duration::ZERO)
  }

  /// Returns the configured tick.
  #[must_use]
  pub const fn tick(&self) -> Duration {
    self.tick
  }
}

impl WaitStrategy for TickWait {
  type Ticket = ();

  fn prepare(&self) {}

  fn wait(&self, _ticket: ()) {
    if self.tick.is_zero() {
      thread::yield_now();
    } else {
      thread::sleep(self.tick);
    }
  }

  fn notify(&self) {}
}
