use std::time::{Duration, Instant};

use busyq_queue_core_rs::{DelayEntry, GuardedDelayQueue, HeapDelayQueue, RacyDelayQueue, SyncLockLike};

use crate::sync::StdSyncMutex;


/// Delay heap keyed by wall-clock deadlines. Not synchronized.
pub type StdHeapDelayQueue<T> = HeapDelayQueue<T, Instant>;

/// Delay heap behind a std mutex held across each whole operation.
pub type StdGuardedDelayQueue<T> = GuardedDelayQueue<T, Instant, StdSyncMutex<StdHeapDelayQueue<T>>>;

/// Delay heap behind a std mutex whose pop checks and acts in separate critical sections.
pub type StdRacyDelayQueue<T> = RacyDelayQueue<T, Instant, StdSyncMutex<StdHeapDelayQueue<T>>>;

/// Creates an entry that becomes ready `delay` from now.
#[must_use]
pub fn delay_entry_after<T>(value: T, delay: Duration) -> DelayEntry<T, Instant> {
  DelayEntry::new(value, Instant::now() + delay)
}

/// Wall-clock helpers for delay queues keyed by [`Instant`].
pub trait DueDelayQueue<T> {
  /// Pops the earliest entry if its deadline has passed.
  fn pop_due(&self) -> Option<DelayEntry<T, Instant>>;

  /// Returns how long until the earliest entry is due, zero if it already is, `None` when empty.
  fn time_until_next(&self) -> Option<Duration>;
}

impl<T, L> DueDelayQueue<T> for GuardedDelayQueue<T, Instant, L>
where
  L: SyncLockLike<HeapDelayQueue<T, Instant>>,
{
  fn pop_due(&self) -> Option<DelayEntry<T, Instant>> {
    self.pop_ready(&Instant::now())
  }

  fn time_until_next(&self) -> Option<Duration> {
    self.next_ready_at().map(|ready_at| ready_at.saturating_duration_since(Instant::now()))
  }
}
