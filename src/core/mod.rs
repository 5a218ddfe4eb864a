//! Core data model: actors, configuration, state, records, RNG, errors.
//!
//! Everything here is plain data plus accessors. The turn logic lives in
//! `crate::engine`; the opponent decision model in `crate::policy`.

pub mod actor;
pub mod config;
pub mod error;
pub mod record;
pub mod rng;
pub mod state;

pub use actor::{Actor, ActorId, ActorKind};
pub use config::GameConfig;
pub use error::{ActorFault, EngineError};
pub use record::TurnRecord;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase};
