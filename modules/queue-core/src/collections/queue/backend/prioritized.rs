/// Payload paired with its priority; lower priority values are served first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prioritized<T, P> {
  value:    T,
  priority: P,
}

impl<T, P> Prioritized<T, P> {
  /// Pairs `value` with `priority`.
  #[must_use]
  pub const fn new(value: T, priority: P) -> Self {
    Self { value, priority }
  }

  /// Returns a reference to the payload.
  #[must_use]
  pub const fn value(&self) -> &T {
    &self.value
  }

  /// Returns a reference to the priority.
  #[must_use]
  pub const fn priority_ref(&self) -> &P {
    &self.priority
  }

  /// Returns the priority.
  #[must_use]
  pub const fn priority(&self) -> P
  where
    P: Copy, {
    self.priority
  }

  /// Splits the entry into payload and priority.
  pub fn into_parts(self) -> (T, P) {
    (self.value, self.priority)
  }

  /// Discards the priority and returns the payload.
  pub fn into_value(self) -> T {
    self.value
  }
}

impl<T, P> From<(T, P)> for Prioritized<T, P> {
  fn from((value, priority): (T, P)) -> Self {
    Self::new(value, priority)
  }
}
