use crate::{
  builder::DescriptorBuilder, descriptor::NotificationDescriptor, options::NotificationOptions,
  trigger::Trigger, NotifError,
};

/// The platform notification service, injected by the host. Implementations
/// own timer management, persistence across restarts and display; they may
/// drop, coalesce or delay what they accept.
pub trait PlatformNotifier {
  type Handle;

  /// Accepts one descriptor for display at its fire time and returns an
  /// opaque handle to the scheduled item.
  fn schedule(&self, descriptor: NotificationDescriptor) -> Result<Self::Handle, NotifError>;
}

/// Drives one trigger to exhaustion: build a descriptor for the current
/// occurrence, hand it to the service, advance, repeat. A fresh trigger yields
/// exactly `count` schedule calls.
///
/// A service error aborts the loop before the trigger advances, so the caller
/// may retry from the same occurrence.
pub fn schedule_all<N: PlatformNotifier>(
  options: &NotificationOptions,
  trigger: &mut Trigger,
  notifier: &N,
) -> Result<Vec<N::Handle>, NotifError> {
  let builder = DescriptorBuilder::new(options);
  let mut handles = Vec::with_capacity(trigger.remaining() as usize);

  while trigger.has_next() {
    let descriptor = builder.build(trigger)?;
    tracing::debug!(
      target: "sched",
      id = options.id(),
      occurrence = trigger.occurrence(),
      fire_at = %descriptor.fire_at,
      "scheduling occurrence"
    );

    handles.push(notifier.schedule(descriptor)?);
    trigger.advance();
  }

  Ok(handles)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::trigger::{Every, Recurrence};
  use chrono::{DateTime, Duration, Utc};
  use std::cell::RefCell;

  /// In-memory stand-in for the platform service.
  struct RecordingNotifier {
    accepted: RefCell<Vec<NotificationDescriptor>>,
    fail_after: Option<usize>,
  }

  impl RecordingNotifier {
    fn new() -> Self {
      Self {
        accepted: RefCell::new(vec![]),
        fail_after: None,
      }
    }

    fn failing_after(n: usize) -> Self {
      Self {
        accepted: RefCell::new(vec![]),
        fail_after: Some(n),
      }
    }
  }

  impl PlatformNotifier for RecordingNotifier {
    type Handle = usize;

    fn schedule(&self, descriptor: NotificationDescriptor) -> Result<usize, NotifError> {
      let mut accepted = self.accepted.borrow_mut();
      if Some(accepted.len()) == self.fail_after {
        return Err(NotifError::Platform("service unavailable".into()));
      }

      accepted.push(descriptor);
      Ok(accepted.len() - 1)
    }
  }

  fn start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
  }

  fn options(count: u32) -> NotificationOptions {
    NotificationOptions::create(
      5,
      "Water",
      "Drink up",
      Recurrence::Every {
        start: start(),
        every: Every::Minutes(45),
        count,
        until: None,
      },
    )
  }

  #[test]
  fn schedules_one_descriptor_per_occurrence() {
    let options = options(4);
    let mut trigger = Trigger::new(options.recurrence()).unwrap();
    let notifier = RecordingNotifier::new();

    let handles = schedule_all(&options, &mut trigger, &notifier).unwrap();

    assert_eq!(handles, vec![0, 1, 2, 3]);
    assert!(!trigger.has_next());

    let accepted = notifier.accepted.borrow();
    for (i, descriptor) in accepted.iter().enumerate() {
      assert_eq!(descriptor.fire_at, start() + Duration::minutes(45 * i as i64));
    }
  }

  #[test]
  fn service_error_stops_the_loop_without_advancing() {
    let options = options(4);
    let mut trigger = Trigger::new(options.recurrence()).unwrap();
    let notifier = RecordingNotifier::failing_after(2);

    let result = schedule_all(&options, &mut trigger, &notifier);

    assert!(matches!(result, Err(NotifError::Platform(_))));
    // Two were accepted; the failed third occurrence is still pending.
    assert_eq!(trigger.occurrence(), 2);
    assert!(trigger.has_next());
  }

  #[test]
  fn resuming_after_an_error_picks_up_the_pending_occurrence() {
    let options = options(3);
    let mut trigger = Trigger::new(options.recurrence()).unwrap();

    let flaky = RecordingNotifier::failing_after(1);
    assert!(schedule_all(&options, &mut trigger, &flaky).is_err());

    let steady = RecordingNotifier::new();
    let handles = schedule_all(&options, &mut trigger, &steady).unwrap();

    assert_eq!(handles.len(), 2);
    assert_eq!(
      steady.accepted.borrow()[0].fire_at,
      start() + Duration::minutes(45)
    );
    assert!(!trigger.has_next());
    assert_eq!(trigger.overruns(), 0);
  }
}
