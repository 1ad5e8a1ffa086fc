use std::{thread, time::Duration};

use super::*;

#[test]
fn wait_returns_immediately_when_epoch_moved() {
  let doorbell = NotifyWait::new();
  let ticket = doorbell.prepare();
  doorbell.notify();
  doorbell.wait(ticket);
  assert_eq!(doorbell.epoch(), ticket + 1);
}

#[test]
fn notify_wakes_a_parked_waiter() {
  let doorbell = NotifyWait::new();
  let ticket = doorbell.prepare();

  thread::scope(|scope| {
    let waiter = scope.spawn(|| doorbell.wait(ticket));
    thread::sleep(Duration::from_millis(20));
    doorbell.notify();
    waiter.join().unwrap();
  });

  assert_ne!(doorbell.epoch(), ticket);
}
