//! # chamber
//!
//! A deterministic turn engine for a revolver elimination game: one human
//! and several computer-controlled actors share a revolver with a
//! configurable chance of firing a live round; last actor standing wins.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Commands are functions over an explicit
//!    `GameState` value. The orchestrator owns the single mutable instance;
//!    there is no ambient state.
//!
//! 2. **Injected randomness**: Every probabilistic decision draws from one
//!    seeded `GameRng` stream, so whole sessions replay exactly under test.
//!
//! 3. **Injected time**: Operations that record wall-clock time take it as
//!    a parameter. The engine never sleeps, awaits, or reads the clock;
//!    pacing is a presentation concern.
//!
//! 4. **Clean rejection**: Off-schedule or malformed commands return a
//!    typed error and leave state untouched. Nothing here is fatal.
//!
//! ## Modules
//!
//! - `core`: actors, configuration, state, history records, RNG, errors
//! - `engine`: the turn state machine and shot resolution
//! - `policy`: grudge memory and autonomous target selection
//! - `snapshot`: lossless session persistence contract
//!
//! ## Driving a session
//!
//! ```
//! use chamber::core::{GameConfig, GameRng, GameState};
//! use chamber::engine::{begin_spin, draw_armed_actor, select_target, shoot};
//! use chamber::policy::choose_target;
//! use chrono::Utc;
//!
//! let config = GameConfig::new(5);
//! let mut state = GameState::new(&config, Utc::now());
//! let mut rng = GameRng::new(42);
//!
//! begin_spin(&mut state).unwrap();
//! let armed = draw_armed_actor(&mut state, &mut rng).unwrap();
//!
//! // A human picks via UI; autonomous actors ask the policy.
//! let target = if state.actor(armed).unwrap().is_autonomous() {
//!     choose_target(&state, armed, &mut rng).unwrap()
//! } else {
//!     state.alive().find(|a| a.id != armed).unwrap().id
//! };
//!
//! select_target(&mut state, target).unwrap();
//! let report = shoot(&mut state, &config, &mut rng, Utc::now()).unwrap();
//! assert_eq!(report.shooter, armed);
//! ```

pub mod core;
pub mod engine;
pub mod policy;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    Actor, ActorFault, ActorId, ActorKind, EngineError, GameConfig, GameRng, GameRngState,
    GameState, Phase, TurnRecord,
};

pub use crate::engine::{
    apply_damage, begin_spin, draw_armed_actor, evaluate_outcome, resolve_shot, select_target,
    shoot, GameResult, ShotReport,
};

pub use crate::policy::{
    choose_target, GrudgeMemory, GRUDGE_RETALIATION_CHANCE, HUMAN_TARGET_CHANCE,
};

pub use crate::snapshot::{SessionSnapshot, SnapshotError};
