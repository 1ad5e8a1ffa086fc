use super::{OfferError, QueueError};

/// Queue storage and bookkeeping with no synchronization of its own.
///
/// Every method takes `&self` or `&mut self` on a value the caller already owns exclusively, so a
/// backend cannot acquire a lock and cannot call back into a facade that holds one.
pub trait QueueBackend {
  /// Element accepted by [`QueueBackend::offer`] and returned by [`QueueBackend::poll`].
  type Entry;

  /// Creates an empty, open backend that holds at most `capacity` entries.
  fn with_capacity(capacity: usize) -> Self;

  /// Appends an entry.
  ///
  /// # Errors
  ///
  /// Returns [`OfferError::Closed`] once the backend is closed and [`OfferError::Full`] when it
  /// already holds `capacity` entries. Both variants give the entry back.
  fn offer(&mut self, entry: Self::Entry) -> Result<(), OfferError<Self::Entry>>;

  /// Removes and returns the next entry.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when nothing is buffered and the backend is open, and
  /// [`QueueError::Closed`] when nothing is buffered and the backend is closed.
  fn poll(&mut self) -> Result<Self::Entry, QueueError>;

  /// Returns the number of buffered entries.
  fn len(&self) -> usize;

  /// Returns the maximum number of buffered entries.
  fn capacity(&self) -> usize;

  /// Indicates whether the backend has been closed.
  fn is_closed(&self) -> bool;

  /// Stops accepting offers. Buffered entries stay pollable.
  fn close(&mut self);

  /// Indicates whether nothing is buffered.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the backend holds `capacity` entries.
  fn is_full(&self) -> bool {
    self.len() >= self.capacity()
  }
}
