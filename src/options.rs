use serde::{Deserialize, Serialize};

use crate::trigger::Recurrence;

/// Progress element spec: a label, a numeric value against a max, or an
/// indeterminate bar when the platform should animate without a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBar {
  pub label: String,
  pub value: f64,
  pub max: f64,
  pub indeterminate: bool,
}

impl ProgressBar {
  pub fn create(label: &str, value: f64, max: f64) -> Self {
    Self {
      label: label.into(),
      value,
      max,
      indeterminate: false,
    }
  }

  pub fn indeterminate(label: &str) -> Self {
    Self {
      label: label.into(),
      value: 0.0,
      max: 0.0,
      indeterminate: true,
    }
  }
}

/// An image reference rendered below the text lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
  pub src: String,
}

impl Attachment {
  pub fn create(src: &str) -> Self {
    Self { src: src.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
  pub label: String,
  /// Opaque argument string the platform hands back on activation.
  pub action_id: String,
}

impl Button {
  pub fn create(label: &str, action_id: &str) -> Self {
    Self {
      label: label.into(),
      action_id: action_id.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
  pub id: String,
  pub title: String,
  pub placeholder: String,
}

impl InputField {
  pub fn create(id: &str, title: &str, placeholder: &str) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      placeholder: placeholder.into(),
    }
  }
}

macro_rules! impl_with {
  ($f:ident, $x:ident -> $y:ty) => {
    pub fn $f(mut self, $x: $y) -> Self {
      self.$x = Some($x.into());
      self
    }
  };
}

/// Immutable configuration snapshot for one notification family. The id is
/// stable across every occurrence of the family; the recurrence rule inside is
/// the template a [`crate::Trigger`] is created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationOptions {
  pub(crate) id: u32,
  pub(crate) title: String,
  pub(crate) text: String,
  pub(crate) icon: Option<String>,
  pub(crate) sound: Option<String>,
  pub(crate) silent: bool,
  pub(crate) progress: Option<ProgressBar>,
  pub(crate) attachments: Vec<Attachment>,
  pub(crate) buttons: Vec<Button>,
  pub(crate) inputs: Vec<InputField>,
  pub(crate) recurrence: Recurrence,
}

impl NotificationOptions {
  pub fn create(id: u32, title: &str, text: &str, recurrence: Recurrence) -> Self {
    Self {
      id,
      title: title.into(),
      text: text.into(),
      icon: None,
      sound: None,
      silent: false,
      progress: None,
      attachments: vec![],
      buttons: vec![],
      inputs: vec![],
      recurrence,
    }
  }

  impl_with!(with_icon, icon -> &str);
  impl_with!(with_sound, sound -> &str);

  pub fn silent(mut self, silent: bool) -> Self {
    self.silent = silent;
    self
  }

  pub fn with_progress(mut self, progress: ProgressBar) -> Self {
    self.progress = Some(progress);
    self
  }

  pub fn attachment(mut self, attachment: Attachment) -> Self {
    self.attachments.push(attachment);
    self
  }

  pub fn button(mut self, button: Button) -> Self {
    self.buttons.push(button);
    self
  }

  pub fn input(mut self, input: InputField) -> Self {
    self.inputs.push(input);
    self
  }

  pub fn id(&self) -> u32 {
    self.id
  }

  pub fn recurrence(&self) -> &Recurrence {
    &self.recurrence
  }
}
