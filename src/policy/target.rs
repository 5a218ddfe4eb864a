//! Target selection for autonomous actors.
//!
//! A priority cascade, evaluated when an autonomous actor becomes armed.
//! Each probabilistic step consumes draws from the injected RNG only when
//! its branch is actually reachable, so seeded sessions replay exactly:
//!
//! 1. Grudge retaliation: alive actors who previously fired a blank at the
//!    shooter; taken with probability [`GRUDGE_RETALIATION_CHANCE`].
//! 2. The human, with probability [`HUMAN_TARGET_CHANCE`].
//! 3. The weakest alive autonomous peer (first in seat order on ties).
//! 4. Uniform fallback among all other alive actors. Total whenever at
//!    least one other actor is alive.

use smallvec::SmallVec;

use crate::core::{ActorId, ActorKind, EngineError, GameRng, GameState};

/// Probability of retaliating when at least one grudge target is alive.
pub const GRUDGE_RETALIATION_CHANCE: f64 = 0.8;

/// Probability of targeting the human when they are alive.
pub const HUMAN_TARGET_CHANCE: f64 = 0.6;

/// Candidate buffer sized for typical sessions (at most 8 seats).
type Candidates = SmallVec<[ActorId; 8]>;

/// Decide a target for `shooter`.
///
/// Deterministic given state, grudge memory, and the RNG stream. Fails with
/// `InvalidState` only when no other actor is alive, which a correct
/// orchestrator rules out by checking the outcome before arming anyone.
pub fn choose_target(
    state: &GameState,
    shooter: ActorId,
    rng: &mut GameRng,
) -> Result<ActorId, EngineError> {
    // 1. Grudge retaliation.
    let grudged: Candidates = state
        .alive()
        .filter(|a| a.id != shooter && state.grudges.holds(shooter, a.id))
        .map(|a| a.id)
        .collect();
    if !grudged.is_empty() && rng.gen_bool(GRUDGE_RETALIATION_CHANCE) {
        if let Some(&id) = rng.choose(&grudged) {
            log::debug!("{shooter} retaliates against {id}");
            return Ok(id);
        }
    }

    // 2. The human.
    if let Some(human) = state
        .alive()
        .find(|a| a.kind == ActorKind::Human && a.id != shooter)
    {
        if rng.gen_bool(HUMAN_TARGET_CHANCE) {
            log::debug!("{shooter} targets the human {}", human.id);
            return Ok(human.id);
        }
    }

    // 3. Weakest autonomous peer. Seat index is unique, so the key has no
    // ties and the first minimal-health seat wins.
    let weakest = state
        .alive()
        .filter(|a| a.kind == ActorKind::Autonomous && a.id != shooter)
        .min_by_key(|a| (a.health, a.seat));
    if let Some(peer) = weakest {
        log::debug!("{shooter} picks off the weakest peer {}", peer.id);
        return Ok(peer.id);
    }

    // 4. Uniform fallback among everyone else alive.
    let others: Candidates = state
        .alive()
        .filter(|a| a.id != shooter)
        .map(|a| a.id)
        .collect();
    rng.choose(&others)
        .copied()
        .ok_or(EngineError::InvalidState("no eligible target remains"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Actor, ActorKind, GameConfig};
    use chrono::{TimeZone, Utc};

    fn state_with_healths(healths: &[(ActorKind, u32)]) -> GameState {
        let actors = healths
            .iter()
            .enumerate()
            .map(|(seat, &(kind, health))| {
                Actor::new(ActorId::new(seat as u8), format!("A{seat}"), kind, health, "#")
            })
            .collect();
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        GameState::from_actors(actors, at)
    }

    /// Find a seed whose first gen_bool draw at `p` matches `want`.
    fn seed_for_bool(p: f64, want: bool) -> u64 {
        (0..1000)
            .find(|&s| GameRng::new(s).gen_bool(p) == want)
            .expect("seed space exhausted")
    }

    #[test]
    fn test_grudge_branch_taken() {
        let mut state = state_with_healths(&[
            (ActorKind::Human, 3),
            (ActorKind::Autonomous, 3),
            (ActorKind::Autonomous, 3),
        ]);
        let shooter = ActorId::new(1);
        state.grudges.record_blank(shooter, ActorId::new(2));

        let seed = seed_for_bool(GRUDGE_RETALIATION_CHANCE, true);
        let mut rng = GameRng::new(seed);

        let target = choose_target(&state, shooter, &mut rng).unwrap();
        assert_eq!(target, ActorId::new(2));
    }

    #[test]
    fn test_dead_grudge_targets_are_skipped() {
        let mut state = state_with_healths(&[
            (ActorKind::Human, 3),
            (ActorKind::Autonomous, 3),
            (ActorKind::Autonomous, 0), // eliminated
        ]);
        let shooter = ActorId::new(1);
        state.grudges.record_blank(shooter, ActorId::new(2));

        // With the only grudge target dead, no retaliation draw happens;
        // the cascade moves on and every seed yields a live target.
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let target = choose_target(&state, shooter, &mut rng).unwrap();
            assert_eq!(target, ActorId::new(0));
        }
    }

    #[test]
    fn test_human_branch_taken() {
        let state = state_with_healths(&[
            (ActorKind::Human, 3),
            (ActorKind::Autonomous, 3),
            (ActorKind::Autonomous, 3),
        ]);

        // No grudges, so the first draw is the human roll.
        let seed = seed_for_bool(HUMAN_TARGET_CHANCE, true);
        let mut rng = GameRng::new(seed);

        let target = choose_target(&state, ActorId::new(1), &mut rng).unwrap();
        assert_eq!(target, ActorId::new(0));
    }

    #[test]
    fn test_weakest_peer_with_seat_order_tiebreak() {
        let state = state_with_healths(&[
            (ActorKind::Human, 3),
            (ActorKind::Autonomous, 3),
            (ActorKind::Autonomous, 1),
            (ActorKind::Autonomous, 1),
        ]);

        // Force the human roll to fail so the cascade reaches step 3.
        let seed = seed_for_bool(HUMAN_TARGET_CHANCE, false);
        let mut rng = GameRng::new(seed);

        let target = choose_target(&state, ActorId::new(1), &mut rng).unwrap();
        assert_eq!(target, ActorId::new(2)); // first of the tied seats
    }

    #[test]
    fn test_fallback_when_only_human_remains() {
        let state = state_with_healths(&[
            (ActorKind::Human, 3),
            (ActorKind::Autonomous, 3),
            (ActorKind::Autonomous, 0),
        ]);

        // Human roll fails, no autonomous peer is alive: the fallback must
        // still produce the only other live actor.
        let seed = seed_for_bool(HUMAN_TARGET_CHANCE, false);
        let mut rng = GameRng::new(seed);

        let target = choose_target(&state, ActorId::new(1), &mut rng).unwrap();
        assert_eq!(target, ActorId::new(0));
    }

    #[test]
    fn test_never_selects_self_or_dead() {
        let config = GameConfig::new(5);
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let mut state = GameState::new(&config, at);
        state.grudges.record_blank(ActorId::new(1), ActorId::new(1));
        state.grudges.record_blank(ActorId::new(1), ActorId::new(3));

        for seed in 0..200 {
            let mut rng = GameRng::new(seed);
            let target = choose_target(&state, ActorId::new(1), &mut rng).unwrap();
            assert_ne!(target, ActorId::new(1));
            assert!(state.actor(target).unwrap().is_alive());
        }
    }

    #[test]
    fn test_fails_only_when_alone() {
        let state = state_with_healths(&[
            (ActorKind::Human, 0),
            (ActorKind::Autonomous, 3),
            (ActorKind::Autonomous, 0),
        ]);

        let mut rng = GameRng::new(0);
        let result = choose_target(&state, ActorId::new(1), &mut rng);
        assert!(matches!(result, Err(EngineError::InvalidState(_))));
    }
}
