//! notif-sched
//!
//! Occurrence scheduling for platform toast notifications.
//!
//! One [`NotificationOptions`] value plus one [`Trigger`] yields, over time, up
//! to `count` immutable [`NotificationDescriptor`]s, each ready to hand to a
//! [`PlatformNotifier`] implementation. The platform service owns timers,
//! persistence and display; this crate only decides which occurrence is next
//! and assembles the descriptor for it.
//!
//! # Example
//! ```rust
//! use chrono::{Duration, Utc};
//! use notif_sched::{
//!   schedule_all, Every, NotificationOptions, PlatformNotifier, Recurrence, Trigger,
//! };
//!
//! # struct Printer;
//! # impl PlatformNotifier for Printer {
//! #   type Handle = ();
//! #   fn schedule(
//! #     &self,
//! #     _descriptor: notif_sched::NotificationDescriptor,
//! #   ) -> Result<(), notif_sched::NotifError> {
//! #     Ok(())
//! #   }
//! # }
//! let rule = Recurrence::Every {
//!   start: Utc::now() + Duration::minutes(1),
//!   every: Every::Hours(1),
//!   count: 3,
//!   until: None,
//! };
//! let options = NotificationOptions::create(7, "Stand up", "Time to stretch", rule);
//!
//! let mut trigger = Trigger::new(options.recurrence()).unwrap();
//! let notifier = Printer;
//! let handles = schedule_all(&options, &mut trigger, &notifier).unwrap();
//! assert_eq!(handles.len(), 3);
//! ```

mod builder;
mod descriptor;
mod notifier;
mod options;
mod trigger;

pub use builder::DescriptorBuilder;
pub use descriptor::{Action, NotificationDescriptor, Visual};
pub use notifier::{schedule_all, PlatformNotifier};
pub use options::{Attachment, Button, InputField, NotificationOptions, ProgressBar};
pub use trigger::{Every, Recurrence, Trigger};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifError {
  /// The recurrence can never produce a single occurrence.
  #[error("degenerate recurrence: {0}")]
  DegenerateRecurrence(&'static str),

  /// An occurrence index at or past the trigger's count was requested.
  #[error("occurrence {occurrence} out of range for a trigger of count {count}")]
  OccurrenceOutOfRange { occurrence: u32, count: u32 },

  /// Serializing the launch payload failed.
  #[error("launch payload: {0}")]
  Payload(#[from] serde_json::Error),

  /// Surfaced unchanged from the platform notification service.
  #[error("platform notification service: {0}")]
  Platform(String),
}
