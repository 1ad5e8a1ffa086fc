use super::*;

#[test]
fn default_options_use_documented_constants() {
  let options = QueueOptions::default();
  assert_eq!(options.capacity(), DEFAULT_CAPACITY);
  assert_eq!(options.tick(), DEFAULT_TICK);
  assert!(options.tick().is_zero());
}

#[test]
fn builder_overrides_tick_and_keeps_capacity() {
  const OPTIONS: QueueOptions = QueueOptions::with_capacity(4).with_tick(Duration::from_millis(2));
  assert_eq!(OPTIONS.capacity, 4);
  assert_eq!(OPTIONS.tick, Duration::from_millis(2));
}
