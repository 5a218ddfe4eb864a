//! Session persistence contract.
//!
//! A `SessionSnapshot` is everything a host needs to resume a suspended
//! session losslessly: configuration, full state (history and grudge memory
//! included), and the RNG stream position. The engine does not decide when
//! saves happen; a reasonable host policy is periodic capture while a
//! session is active plus an explicit save on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameConfig, GameRng, GameRngState, GameState};

/// A serializable point-in-time capture of one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Host-assigned session identifier.
    pub session_id: u64,

    /// When this snapshot was taken (also the last-played timestamp).
    pub saved_at: DateTime<Utc>,

    /// Session parameters.
    pub config: GameConfig,

    /// Complete session state.
    pub state: GameState,

    /// Position in the session's random stream.
    pub rng: GameRngState,
}

/// Snapshot encoding/decoding failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),

    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),
}

impl SessionSnapshot {
    /// Capture a session. Stamps `state.last_saved_at` with `now`.
    #[must_use]
    pub fn capture(
        session_id: u64,
        config: &GameConfig,
        state: &mut GameState,
        rng: &GameRng,
        now: DateTime<Utc>,
    ) -> Self {
        state.last_saved_at = Some(now);
        Self {
            session_id,
            saved_at: now,
            config: config.clone(),
            state: state.clone(),
            rng: rng.state(),
        }
    }

    /// Turn a snapshot back into a live session.
    #[must_use]
    pub fn resume(self) -> (GameConfig, GameState, GameRng) {
        let rng = GameRng::from_state(&self.rng);
        (self.config, self.state, rng)
    }

    /// Encode to compact bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode from bytes produced by [`SessionSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
