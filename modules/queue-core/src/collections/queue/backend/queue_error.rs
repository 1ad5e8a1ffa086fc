use super::OfferError;

/// Reason a non-blocking queue operation did not complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
  /// The queue cannot accept new elements.
  #[error("queue is full")]
  Full,
  /// The queue is open and has no elements to consume.
  #[error("queue is empty")]
  Empty,
  /// The queue has been closed; for polls this also means it has been drained.
  #[error("queue is closed")]
  Closed,
}

/// Terminal error of the blocking operations: the queue is closed (and, for pops, drained).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("queue closed")]
pub struct ClosedError;

impl From<ClosedError> for QueueError {
  fn from(_: ClosedError) -> Self {
    QueueError::Closed
  }
}

impl<T> From<OfferError<T>> for QueueError {
  fn from(err: OfferError<T>) -> Self {
    match err {
      | OfferError::Full(_) => QueueError::Full,
      | OfferError::Closed(_) => QueueError::Closed,
    }
  }
}
