use core::fmt;

/// Rejected offer; carries the entry back to the caller so it can be retried.
#[derive(Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OfferError<T> {
  /// The queue is at capacity.
  #[error("queue is full")]
  Full(T),
  /// The queue is closed and accepts no further entries.
  #[error("queue is closed")]
  Closed(T),
}

impl<T> OfferError<T> {
  /// Returns the rejected entry.
  pub fn into_inner(self) -> T {
    match self {
      | OfferError::Full(entry) | OfferError::Closed(entry) => entry,
    }
  }

  /// Indicates whether the offer failed because the queue is closed.
  #[must_use]
  pub const fn is_closed(&self) -> bool {
    matches!(self, OfferError::Closed(_))
  }
}

impl<T> fmt::Debug for OfferError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | OfferError::Full(_) => f.write_str("Full(..)"),
      | OfferError::Closed(_) => f.write_str("Closed(..)"),
    }
  }
}
