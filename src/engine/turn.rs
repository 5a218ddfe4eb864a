//! The command surface of the turn engine.
//!
//! Three commands drive a session: spin, select-target, shoot. Each is a
//! pure transition over `&mut GameState` with injected collaborators (the
//! RNG stream, the wall clock). A rejected command returns a typed error
//! and leaves state untouched; the orchestrator decides whether to
//! re-prompt.
//!
//! `shoot` is atomic: one randomness draw, at most one point of damage, at
//! most one grudge insert, exactly one history record, one outcome
//! evaluation. Nothing else observes the intermediate `Shooting` phase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    ActorFault, ActorId, EngineError, GameConfig, GameRng, GameState, Phase, TurnRecord,
};
use super::outcome::{apply_damage, evaluate_outcome, GameResult};

/// Everything an orchestrator needs to know about one resolved shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotReport {
    /// Who fired.
    pub shooter: ActorId,
    /// Who was fired at.
    pub target: ActorId,
    /// Whether the round was a blank.
    pub was_blank: bool,
    /// Whether the target died on this resolution.
    pub killed: bool,
    /// `Some` when the session ended on this shot.
    pub result: Option<GameResult>,
}

/// Start a turn: `Setup -> Spinning`.
pub fn begin_spin(state: &mut GameState) -> Result<(), EngineError> {
    if state.phase != Phase::Setup {
        log::warn!("spin rejected in {:?}", state.phase);
        return Err(EngineError::InvalidPhase {
            command: "spin",
            phase: state.phase,
        });
    }

    state.phase = Phase::Spinning;
    log::debug!("cylinder spinning");
    Ok(())
}

/// Draw the armed actor: `Spinning -> ChoosingTarget`.
///
/// Uniform among alive actors. The advisory arm-bias values in
/// `GameConfig` are deliberately not consulted.
pub fn draw_armed_actor(
    state: &mut GameState,
    rng: &mut GameRng,
) -> Result<ActorId, EngineError> {
    if state.phase != Phase::Spinning {
        log::warn!("armed-actor draw rejected in {:?}", state.phase);
        return Err(EngineError::InvalidPhase {
            command: "draw-armed-actor",
            phase: state.phase,
        });
    }

    let alive: SmallVec<[ActorId; 8]> = state.alive().map(|a| a.id).collect();
    let armed = rng
        .choose(&alive)
        .copied()
        .ok_or(EngineError::InvalidState("no alive actor to arm"))?;

    state.armed = Some(armed);
    state.phase = Phase::ChoosingTarget;
    log::debug!("{armed} is armed");
    Ok(armed)
}

/// Select (or re-select) the target for the armed actor.
///
/// Valid only in `ChoosingTarget`; the target must exist, be alive, and
/// differ from the armed actor.
pub fn select_target(state: &mut GameState, target: ActorId) -> Result<(), EngineError> {
    if state.phase != Phase::ChoosingTarget {
        log::warn!("select-target rejected in {:?}", state.phase);
        return Err(EngineError::InvalidPhase {
            command: "select-target",
            phase: state.phase,
        });
    }

    let armed = state
        .armed
        .ok_or(EngineError::InvalidState("choosing a target with nobody armed"))?;
    let candidate = state
        .actor(target)
        .ok_or(EngineError::InvalidActor(ActorFault::Unknown(target)))?;
    if !candidate.is_alive() {
        return Err(EngineError::InvalidActor(ActorFault::Dead(target)));
    }
    if target == armed {
        return Err(EngineError::InvalidActor(ActorFault::SelfTarget(target)));
    }

    state.target = Some(target);
    log::debug!("{armed} aims at {target}");
    Ok(())
}

/// Resolve one draw from the random source: `true` means blank.
///
/// The sole source of shot randomness; one independent draw per call.
pub fn resolve_shot(rng: &mut GameRng, blank_probability: f64) -> bool {
    rng.gen_bool(blank_probability)
}

/// Fire: `ChoosingTarget -> Shooting -> (Setup | GameOver)`.
///
/// Requires an armed, alive shooter and a selected, alive, non-self target.
/// On a blank against an autonomous target the shooter earns a grudge.
/// `now` stamps the history record; hosts pass `Utc::now()`.
pub fn shoot(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut GameRng,
    now: DateTime<Utc>,
) -> Result<ShotReport, EngineError> {
    if state.phase != Phase::ChoosingTarget {
        log::warn!("shoot rejected in {:?}", state.phase);
        return Err(EngineError::InvalidPhase {
            command: "shoot",
            phase: state.phase,
        });
    }

    let shooter = state
        .armed
        .ok_or(EngineError::InvalidState("shooting with nobody armed"))?;
    let shooter_actor = state
        .actor(shooter)
        .ok_or(EngineError::InvalidActor(ActorFault::Unknown(shooter)))?;
    if !shooter_actor.is_alive() {
        return Err(EngineError::InvalidActor(ActorFault::Dead(shooter)));
    }

    let target = state
        .target
        .ok_or(EngineError::InvalidActor(ActorFault::NoTargetSelected))?;
    let target_actor = state
        .actor(target)
        .ok_or(EngineError::InvalidActor(ActorFault::Unknown(target)))?;
    if !target_actor.is_alive() {
        return Err(EngineError::InvalidActor(ActorFault::Dead(target)));
    }
    if target == shooter {
        return Err(EngineError::InvalidActor(ActorFault::SelfTarget(target)));
    }
    let target_is_autonomous = target_actor.is_autonomous();

    // All checks passed; from here the resolution runs to completion.
    state.phase = Phase::Shooting;

    let was_blank = resolve_shot(rng, config.blank_probability);
    let mut killed = false;
    if was_blank {
        if target_is_autonomous {
            state.grudges.record_blank(target, shooter);
        }
    } else if let Some(victim) = state.actor_mut(target) {
        killed = apply_damage(victim);
    }

    state.push_record(TurnRecord::new(now, shooter, target, was_blank, killed));

    let result = evaluate_outcome(state.actors());
    if result.is_some() {
        state.phase = Phase::GameOver;
        log::debug!("session over: {result:?}");
    } else {
        state.phase = Phase::Setup;
        state.armed = None;
        state.target = None;
        log::debug!(
            "{shooter} shot {target}: {}",
            if was_blank { "blank" } else { "hit" }
        );
    }

    Ok(ShotReport {
        shooter,
        target,
        was_blank,
        killed,
        result,
    })
}
