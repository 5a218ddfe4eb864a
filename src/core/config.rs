//! Session configuration.
//!
//! A `GameConfig` fixes the parameters of one session at initialization:
//! seat count, starting health, and the blank probability used by shot
//! resolution. It also carries two advisory arm-bias values that the armed
//! actor draw deliberately does not consult (the draw is uniform among
//! alive actors); they are preserved as configuration surface for variants
//! that may weight the draw.

use serde::{Deserialize, Serialize};

/// Parameters for one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-8). Seat 0 is the human by default.
    pub actor_count: usize,

    /// Health every actor starts with.
    pub starting_health: u32,

    /// Probability that a resolved shot is a blank (0.0-1.0).
    pub blank_probability: f64,

    /// Advisory bias for the human becoming the armed actor.
    /// Not consulted by the uniform draw.
    pub human_arm_bias: f64,

    /// Advisory bias for autonomous actors becoming the armed actor.
    /// Not consulted by the uniform draw.
    pub autonomous_arm_bias: f64,
}

impl GameConfig {
    /// Create a configuration with default health and probabilities.
    pub fn new(actor_count: usize) -> Self {
        assert!((2..=8).contains(&actor_count), "Actor count must be 2-8");

        Self {
            actor_count,
            starting_health: 3,
            blank_probability: 0.5,
            human_arm_bias: 0.5,
            autonomous_arm_bias: 0.5,
        }
    }

    /// Set the starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: u32) -> Self {
        assert!(health > 0, "Starting health must be positive");
        self.starting_health = health;
        self
    }

    /// Set the blank probability.
    #[must_use]
    pub fn with_blank_probability(mut self, p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "Probability must be in 0.0-1.0");
        self.blank_probability = p;
        self
    }

    /// Set the advisory arm-bias values.
    #[must_use]
    pub fn with_arm_bias(mut self, human: f64, autonomous: f64) -> Self {
        self.human_arm_bias = human;
        self.autonomous_arm_bias = autonomous;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(5)
    }
}
