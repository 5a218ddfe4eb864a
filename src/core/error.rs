//! Typed command errors.
//!
//! Every error here is local, synchronous, and recoverable: the command is
//! rejected, state is left untouched, and the session continues. Retry
//! (e.g. re-prompting the human for a valid target) is an orchestration
//! policy, not something the engine attempts itself.

use thiserror::Error;

use super::actor::ActorId;
use super::state::Phase;

/// Why an actor reference was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorFault {
    /// No actor with this id exists in the session.
    Unknown(ActorId),
    /// The referenced actor has been eliminated.
    Dead(ActorId),
    /// The armed actor tried to target itself.
    SelfTarget(ActorId),
    /// A shoot command arrived with no target selected.
    NoTargetSelected,
}

impl std::fmt::Display for ActorFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorFault::Unknown(id) => write!(f, "{id} is unknown"),
            ActorFault::Dead(id) => write!(f, "{id} is not alive"),
            ActorFault::SelfTarget(id) => write!(f, "{id} cannot target itself"),
            ActorFault::NoTargetSelected => write!(f, "no target selected"),
        }
    }
}

/// Rejection returned by an engine command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The command is not legal in the current phase.
    #[error("`{command}` is not legal in the {phase:?} phase")]
    InvalidPhase {
        command: &'static str,
        phase: Phase,
    },

    /// A command referenced an unknown, dead, or self-targeting actor.
    #[error("invalid actor reference: {0}")]
    InvalidActor(ActorFault),

    /// A structural invariant was violated. Unreachable in correct
    /// orchestration; indicates a bug in the caller, not the session.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}
