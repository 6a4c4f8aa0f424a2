use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::LineId;

/// Source of the current time for newly recorded lines.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Generates identities for newly constructed lines.
pub trait IdGenerator {
    fn next_id(&self) -> LineId;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLineIds;

impl IdGenerator for RandomLineIds {
    fn next_id(&self) -> LineId {
        LineId::new(Uuid::new_v4())
    }
}
