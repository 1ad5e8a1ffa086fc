/// Decides how a blocking operation waits between two failed attempts.
///
/// The retry loop calls [`WaitStrategy::prepare`] before each attempt and, if the attempt fails,
/// [`WaitStrategy::wait`] with the ticket it got. Queue mutations that can unblock a waiter
/// (successful push, successful pop, close) call [`WaitStrategy::notify`] after the queue lock is
/// released.
pub trait WaitStrategy {
  /// Snapshot taken before an attempt, handed back to [`WaitStrategy::wait`].
  type Ticket: Copy;

  /// Takes a snapshot before attempting the operation.
  fn prepare(&self) -> Self::Ticket;

  /// Waits before the next attempt.
  ///
  /// Implementations may return early; the caller always re-attempts.
  fn wait(&self, ticket: Self::Ticket);

  /// Signals that the queue changed.
  fn notify(&self);
}
