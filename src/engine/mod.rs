//! The turn engine: phase transitions, shot resolution, win detection.

pub mod outcome;
pub mod turn;

pub use outcome::{apply_damage, evaluate_outcome, GameResult};
pub use turn::{begin_spin, draw_armed_actor, resolve_shot, select_target, shoot, ShotReport};
