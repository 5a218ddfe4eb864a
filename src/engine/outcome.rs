//! Damage application and win detection.

use serde::{Deserialize, Serialize};

use crate::core::{Actor, ActorId};

/// Result of a completed session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Exactly one actor remained alive.
    Winner(ActorId),
    /// Nobody remained alive. Unreachable with single-target resolution,
    /// but win detection still covers it rather than assuming it away.
    Draw,
}

impl GameResult {
    /// Check if an actor won.
    #[must_use]
    pub fn is_winner(&self, actor: ActorId) -> bool {
        matches!(self, GameResult::Winner(id) if *id == actor)
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<ActorId> {
        match self {
            GameResult::Winner(id) => Some(*id),
            GameResult::Draw => None,
        }
    }
}

/// Apply one point of damage. Returns whether the actor died on this
/// decrement.
///
/// Health is decremented by exactly 1 and saturates at zero; callers never
/// invoke this on an actor that is already dead, so no overkill accumulates.
pub fn apply_damage(actor: &mut Actor) -> bool {
    debug_assert!(actor.is_alive(), "damage applied to a dead actor");
    actor.health = actor.health.saturating_sub(1);
    !actor.is_alive()
}

/// Check whether the session is over.
///
/// `None` while two or more actors are alive; `Winner` at exactly one;
/// `Draw` at zero.
#[must_use]
pub fn evaluate_outcome(actors: &[Actor]) -> Option<GameResult> {
    let mut alive = actors.iter().filter(|a| a.is_alive());
    match (alive.next(), alive.next()) {
        (None, _) => Some(GameResult::Draw),
        (Some(last), None) => Some(GameResult::Winner(last.id)),
        (Some(_), Some(_)) => None,
    }
}
