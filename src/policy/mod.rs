//! Opponent decision model: grudge memory and the target-selection cascade.

pub mod grudge;
pub mod target;

pub use grudge::GrudgeMemory;
pub use target::{choose_target, GRUDGE_RETALIATION_CHANCE, HUMAN_TARGET_CHANCE};
