use std::sync::{Condvar, Mutex, PoisonError};

use super::WaitStrategy;

#[cfg(test)]
mod tests;

/// Condition-variable strategy: waiters park until the queue reports a change.
///
/// An epoch counter guarded by its own mutex acts as a doorbell. A waiter snapshots the epoch
/// before its attempt and parks only while the epoch is unchanged, so a change that lands between
/// the failed attempt and the park is never missed. The doorbell mutex is never held together
/// with the queue lock.
#[derive(Debug, Default)]
pub struct NotifyWait {
  epoch:  Mutex<u64>,
  signal: Condvar,
}

impl NotifyWait {
  /// Creates a doorbell with no pending changes.
  #[must_use]
  pub const fn new() -> Self {
    Self { epoch: Mutex::new(0), signal: Condvar::new() }
  }

  /// Returns the number of changes signalled so far (wrapping).
  #[must_use]
  pub fn epoch(&self) -> u64 {
    *self.epoch.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl WaitStrategy for NotifyWait {
  type Ticket = u64;

  fn prepare(&self) -> u64 {
    self.epoch()
  }

  fn wait(&self, ticket: u64) {
    let epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
    let _epoch = self.signal.wait_while(epoch, |current| *current == ticket).unwrap_or_else(PoisonError::into_inner);
  }

  fn notify(&self) {
    {
      let mut epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
      *epoch = epoch.wrapping_add(1);
    }
    self.signal.notify_all();
  }
}
