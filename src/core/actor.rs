//! Actor identification and participant records.
//!
//! ## ActorId
//!
//! Type-safe actor identifier. Ids double as seating positions: the actor
//! created for seat N gets `ActorId(N)`, and ids never change once assigned.
//!
//! ## Actor
//!
//! One participant in a session. Created at game initialization, mutated
//! only by damage application, never deleted - elimination is expressed by
//! `health == 0`.

use serde::{Deserialize, Serialize};

/// Actor identifier, equal to the actor's fixed seating position.
///
/// Seat indices are 0-based: the first seat is `ActorId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u8);

impl ActorId {
    /// Create a new actor ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all actor IDs for a session with `actor_count` seats.
    ///
    /// ```
    /// use chamber::core::ActorId;
    ///
    /// let ids: Vec<_> = ActorId::all(5).collect();
    /// assert_eq!(ids.len(), 5);
    /// assert_eq!(ids[0], ActorId::new(0));
    /// assert_eq!(ids[4], ActorId::new(4));
    /// ```
    pub fn all(actor_count: usize) -> impl Iterator<Item = ActorId> {
        (0..actor_count as u8).map(ActorId)
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor {}", self.0)
    }
}

/// Who controls an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Controlled by the human player; target selection comes from outside.
    Human,
    /// Computer-controlled; target selection comes from the opponent policy.
    Autonomous,
}

/// One participant in a session.
///
/// Health is the only mutable field. The alive flag is derived, not stored:
/// an actor is alive iff `health > 0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Stable identifier, equal to the seat index.
    pub id: ActorId,

    /// Display name.
    pub name: String,

    /// Human or autonomous.
    pub kind: ActorKind,

    /// Remaining health. Zero means eliminated.
    pub health: u32,

    /// Fixed seating position (0..actor_count).
    pub seat: u8,

    /// Short display token for renderers.
    pub token: String,
}

impl Actor {
    /// Create an actor seated at its id's index.
    pub fn new(
        id: ActorId,
        name: impl Into<String>,
        kind: ActorKind,
        health: u32,
        token: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            health,
            seat: id.0,
            token: token.into(),
        }
    }

    /// Whether this actor is still in the game.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Whether this actor is the human player.
    #[must_use]
    pub fn is_human(&self) -> bool {
        self.kind == ActorKind::Human
    }

    /// Whether this actor is computer-controlled.
    #[must_use]
    pub fn is_autonomous(&self) -> bool {
        self.kind == ActorKind::Autonomous
    }
}
