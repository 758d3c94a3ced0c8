use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::NotifError;

/// Interval unit with multiplier, e.g. `Every::Hours(2)` fires every two hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Every {
  Minutes(u32),
  Hours(u32),
  Days(u32),
  Weeks(u32),
}

impl Every {
  fn span(&self) -> Result<Duration, NotifError> {
    let (n, minutes_per_unit) = match *self {
      Every::Minutes(n) => (n, 1),
      Every::Hours(n) => (n, 60),
      Every::Days(n) => (n, 60 * 24),
      Every::Weeks(n) => (n, 60 * 24 * 7),
    };

    if n == 0 {
      return Err(NotifError::DegenerateRecurrence("interval multiplier is zero"));
    }

    // The multiplier is widened before the multiply; any u32 fits in
    // i64 minutes.
    Ok(Duration::minutes(i64::from(n) * minutes_per_unit))
  }
}

/// The recurrence rule of one notification family. Immutable; the mutable
/// progress counter lives in [`Trigger`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Recurrence {
  /// Occurrence `i` fires at `start + i * every`. An `until` bound cuts off
  /// every occurrence that would fire strictly after it.
  Every {
    start: DateTime<Utc>,
    every: Every,
    count: u32,
    until: Option<DateTime<Utc>>,
  },
  /// One occurrence per listed date, in list order. No sorting, no
  /// de-duplication.
  At { dates: Vec<DateTime<Utc>> },
}

enum Plan {
  Every {
    start: DateTime<Utc>,
    step: Duration,
  },
  At(Vec<DateTime<Utc>>),
}

/// Occurrence state machine: `pending` while `occurrence < count`, `exhausted`
/// once they are equal. The counter only ever moves forward.
///
/// One `Trigger` belongs to exactly one scheduling loop; it carries no locking
/// of its own.
pub struct Trigger {
  plan: Plan,
  count: u32,
  occurrence: u32,
  overruns: u32,
}

impl Trigger {
  /// Rejects rules that can never fire: a zero count, an empty date list, a
  /// zero interval multiplier, or an `until` bound before the first fire time.
  pub fn new(rule: &Recurrence) -> Result<Self, NotifError> {
    let (plan, count) = match rule {
      Recurrence::Every {
        start,
        every,
        count,
        until,
      } => {
        if *count == 0 {
          return Err(NotifError::DegenerateRecurrence("count is zero"));
        }

        let step = every.span()?;
        let count = match until {
          Some(until) if *until < *start => {
            return Err(NotifError::DegenerateRecurrence(
              "until bound precedes the first fire time",
            ));
          }
          Some(until) => {
            let fit = (*until - *start).num_milliseconds() / step.num_milliseconds();
            let fit = u32::try_from(fit).unwrap_or(u32::MAX - 1);
            (*count).min(fit + 1)
          }
          None => *count,
        };

        // The last fire time must be representable; fire_at then multiplies
        // without checks for every occurrence below count.
        let reachable = step
          .num_milliseconds()
          .checked_mul(i64::from(count - 1))
          .map(Duration::milliseconds)
          .and_then(|offset| start.checked_add_signed(offset));
        if reachable.is_none() {
          return Err(NotifError::DegenerateRecurrence(
            "recurrence extends past representable time",
          ));
        }

        (
          Plan::Every {
            start: *start,
            step,
          },
          count,
        )
      }
      Recurrence::At { dates } => {
        if dates.is_empty() {
          return Err(NotifError::DegenerateRecurrence("empty date list"));
        }

        (Plan::At(dates.clone()), dates.len() as u32)
      }
    };

    Ok(Self {
      plan,
      count,
      occurrence: 0,
      overruns: 0,
    })
  }

  pub fn count(&self) -> u32 {
    self.count
  }

  /// 0-based index of the occurrence the next build will materialize.
  pub fn occurrence(&self) -> u32 {
    self.occurrence
  }

  pub fn remaining(&self) -> u32 {
    self.count - self.occurrence
  }

  /// True iff at least one occurrence is still unmaterialized. Pure query.
  pub fn has_next(&self) -> bool {
    self.occurrence < self.count
  }

  /// Moves the counter forward by exactly one. Past exhaustion this is a
  /// tolerated no-op; the overrun counter records it so tests can detect a
  /// caller looping one step too far.
  pub fn advance(&mut self) {
    if self.has_next() {
      self.occurrence += 1;
    } else {
      self.overruns += 1;
      tracing::warn!(
        target: "sched",
        count = self.count,
        overruns = self.overruns,
        "advance called on an exhausted trigger"
      );
    }
  }

  /// How many times `advance` was called after exhaustion.
  pub fn overruns(&self) -> u32 {
    self.overruns
  }

  /// Absolute fire time of the given occurrence.
  pub fn fire_at(&self, occurrence: u32) -> Result<DateTime<Utc>, NotifError> {
    if occurrence >= self.count {
      return Err(NotifError::OccurrenceOutOfRange {
        occurrence,
        count: self.count,
      });
    }

    Ok(match &self.plan {
      Plan::Every { start, step } => {
        *start + Duration::milliseconds(step.num_milliseconds() * i64::from(occurrence))
      }
      Plan::At(dates) => dates[occurrence as usize],
    })
  }
}
