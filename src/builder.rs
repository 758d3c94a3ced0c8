use crate::{
  descriptor::{Action, NotificationDescriptor, Visual},
  options::NotificationOptions,
  trigger::Trigger,
  NotifError,
};

/// Assembles one [`NotificationDescriptor`] per occurrence from a single
/// options snapshot. Assembly is deterministic; building twice at the same
/// occurrence yields equal descriptors.
pub struct DescriptorBuilder<'a> {
  options: &'a NotificationOptions,
}

impl<'a> DescriptorBuilder<'a> {
  pub fn new(options: &'a NotificationOptions) -> Self {
    Self { options }
  }

  /// Materializes the descriptor for the trigger's current occurrence.
  ///
  /// Visual order is fixed: title line, body line, then the progress bar when
  /// present, then attachments in declaration order. The action surface
  /// registers every input before any button. Errors when the trigger is
  /// already exhausted; nothing partial is produced.
  pub fn build(&self, trigger: &Trigger) -> Result<NotificationDescriptor, NotifError> {
    let occurrence = trigger.occurrence();
    let fire_at = trigger.fire_at(occurrence)?;
    let launch = serde_json::to_string(self.options)?;

    let mut visuals = vec![
      Visual::Text {
        body: self.options.title.clone(),
      },
      Visual::Text {
        body: self.options.text.clone(),
      },
    ];

    // Progress always renders above attachments, whatever order the options
    // were assembled in.
    if let Some(progress) = &self.options.progress {
      visuals.push(Visual::Progress {
        label: progress.label.clone(),
        value: progress.value,
        max: progress.max,
        indeterminate: progress.indeterminate,
      });
    }

    for attachment in &self.options.attachments {
      visuals.push(Visual::Image {
        src: attachment.src.clone(),
      });
    }

    let mut actions = Vec::with_capacity(self.options.inputs.len() + self.options.buttons.len());
    for input in &self.options.inputs {
      actions.push(Action::Input {
        id: input.id.clone(),
        title: input.title.clone(),
        placeholder: input.placeholder.clone(),
      });
    }
    for button in &self.options.buttons {
      actions.push(Action::Button {
        label: button.label.clone(),
        action_id: button.action_id.clone(),
      });
    }

    let tag = self.options.id.to_string();
    // Grouping starts at the third occurrence; the first two stand alone.
    let group = (occurrence > 1).then(|| tag.clone());

    Ok(NotificationDescriptor {
      id: self.options.id,
      tag,
      group,
      suppress_popup: self.options.silent,
      fire_at,
      icon: self.options.icon.clone(),
      sound: self.options.sound.clone(),
      launch,
      visuals,
      actions,
    })
  }
}
