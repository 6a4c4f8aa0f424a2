use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Globally unique identity of an annotated timecard line.
///
/// Assigned once at construction and never changed by updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(Uuid);

impl LineId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for LineId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<LineId> for Uuid {
    fn from(id: LineId) -> Self {
        id.0
    }
}
