use chrono::{DateTime, Utc};

/// One rendered element of the visual tree, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
  Text {
    body: String,
  },
  Progress {
    label: String,
    value: f64,
    max: f64,
    indeterminate: bool,
  },
  Image {
    src: String,
  },
}

/// One element of the action surface. Inputs are always registered before any
/// button, so a button may reference an input by id.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  Input {
    id: String,
    title: String,
    placeholder: String,
  },
  Button {
    label: String,
    action_id: String,
  },
}

/// The immutable artifact for one occurrence, ready for
/// [`crate::PlatformNotifier::schedule`]. A plain value object: no reference
/// back to the builder or the trigger, safe to hand across thread boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationDescriptor {
  pub id: u32,
  /// Stable identity tag, the decimal form of `id`.
  pub tag: String,
  /// Present from the third occurrence onward so the platform can cluster
  /// repeats of the same family.
  pub group: Option<String>,
  pub suppress_popup: bool,
  pub fire_at: DateTime<Utc>,
  pub icon: Option<String>,
  pub sound: Option<String>,
  /// Serialized options, handed back by the platform on activation.
  pub launch: String,
  pub visuals: Vec<Visual>,
  pub actions: Vec<Action>,
}
