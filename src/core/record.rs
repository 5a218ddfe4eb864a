//! Turn history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::actor::ActorId;

/// One resolved shot, appended to the session history.
///
/// Records are immutable once appended; the ordered sequence is the full
/// account of a session. The timestamp is injected by the caller alongside
/// the shot command, so replays under test are byte-for-byte reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Wall-clock time of the resolution.
    pub at: DateTime<Utc>,

    /// Who fired.
    pub shooter: ActorId,

    /// Who was fired at.
    pub target: ActorId,

    /// Whether the round was a blank (no damage).
    pub was_blank: bool,

    /// Whether the target died on this resolution.
    pub killed: bool,
}

impl TurnRecord {
    /// Create a new turn record.
    #[must_use]
    pub fn new(
        at: DateTime<Utc>,
        shooter: ActorId,
        target: ActorId,
        was_blank: bool,
        killed: bool,
    ) -> Self {
        Self {
            at,
            shooter,
            target,
            was_blank,
            killed,
        }
    }
}
