//! Session state: the aggregate root the engine operates on.
//!
//! ## Phase
//!
//! The five-phase turn state machine. Commands are only legal in their
//! designated phase; everything else is rejected with `InvalidPhase`.
//!
//! ## GameState
//!
//! Everything one session owns:
//! - The fixed roster of actors (seat order, never resized)
//! - The currently armed actor and selected target
//! - Append-only turn history
//! - Grudge memory for the opponent policy
//! - Session timestamps
//!
//! The orchestrator holds the single mutable instance; engine commands are
//! pure transitions over it. Cloning is cheap (`im::Vector` history shares
//! structure), so renderers and persistence can take snapshots freely.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorKind};
use super::config::GameConfig;
use super::record::TurnRecord;
use crate::policy::GrudgeMemory;

/// Default roster names for autonomous seats.
const BOT_NAMES: [&str; 7] = [
    "Ace", "Brick", "Coyote", "Dusty", "Ember", "Fable", "Grit",
];

/// Turn state machine phase.
///
/// `Setup -> Spinning -> ChoosingTarget -> Shooting -> (Setup | GameOver)`.
/// `GameOver` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a spin command.
    #[default]
    Setup,
    /// The cylinder is spinning; the armed actor draw is pending.
    Spinning,
    /// An actor is armed and a target must be selected.
    ChoosingTarget,
    /// A shot is being resolved. Transient: `shoot` enters and leaves this
    /// phase within one call.
    Shooting,
    /// Zero or one actor remains alive. No further commands are accepted.
    GameOver,
}

/// Complete state of one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed roster in seat order. Never grows or shrinks.
    actors: Vec<Actor>,

    /// Current phase.
    pub phase: Phase,

    /// The actor selected to fire this turn, if any.
    pub armed: Option<ActorId>,

    /// The currently selected target, if any.
    pub target: Option<ActorId>,

    /// Append-only history of resolved shots.
    history: Vector<TurnRecord>,

    /// Which actors hold grudges against whom.
    pub grudges: GrudgeMemory,

    /// When the session started.
    pub started_at: DateTime<Utc>,

    /// When the session was last persisted, if ever.
    pub last_saved_at: Option<DateTime<Utc>>,
}

impl GameState {
    /// Create a session with the default roster: seat 0 is the human,
    /// remaining seats are autonomous actors with stock names.
    #[must_use]
    pub fn new(config: &GameConfig, started_at: DateTime<Utc>) -> Self {
        let mut actors = Vec::with_capacity(config.actor_count);
        actors.push(Actor::new(
            ActorId::new(0),
            "You",
            ActorKind::Human,
            config.starting_health,
            "@",
        ));
        for seat in 1..config.actor_count {
            let name = BOT_NAMES[(seat - 1) % BOT_NAMES.len()];
            let token = &name[..1];
            actors.push(Actor::new(
                ActorId::new(seat as u8),
                name,
                ActorKind::Autonomous,
                config.starting_health,
                token,
            ));
        }
        Self::from_actors(actors, started_at)
    }

    /// Create a session from an explicit roster.
    ///
    /// Ids must match seat order: the actor at index N must carry
    /// `ActorId(N)`.
    #[must_use]
    pub fn from_actors(actors: Vec<Actor>, started_at: DateTime<Utc>) -> Self {
        assert!(actors.len() >= 2, "A session needs at least 2 actors");
        for (seat, actor) in actors.iter().enumerate() {
            assert_eq!(
                actor.id.index(),
                seat,
                "Actor ids must match seat order"
            );
        }

        Self {
            actors,
            phase: Phase::Setup,
            armed: None,
            target: None,
            history: Vector::new(),
            grudges: GrudgeMemory::default(),
            started_at,
            last_saved_at: None,
        }
    }

    /// Number of seats in the session.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// All actors in seat order, alive or not.
    #[must_use]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Look up an actor by id.
    #[must_use]
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.index())
    }

    /// Mutable lookup, for damage application.
    pub(crate) fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.index())
    }

    /// Iterate over alive actors in seat order.
    pub fn alive(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.is_alive())
    }

    /// Number of actors still alive.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// The human actor, if still alive.
    #[must_use]
    pub fn alive_human(&self) -> Option<&Actor> {
        self.alive().find(|a| a.is_human())
    }

    /// The full turn history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Append a turn record. Prior records are never touched.
    pub(crate) fn push_record(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }
}
