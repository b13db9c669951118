use crate::error::StateMachineError;
use serde::{Deserialize, Serialize};

/// Submission phase of a form session.
///
/// `SubmitFailed` is an editable phase: the user keeps their data and may
/// edit or retry, with the failure notice surfaced alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Editing,
    Submitting,
    Submitted,
    SubmitFailed,
}

impl SessionPhase {
    /// Phases in which field edits and step navigation are accepted.
    pub fn is_editable(self) -> bool {
        matches!(self, SessionPhase::Editing | SessionPhase::SubmitFailed)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::Submitted)
    }
}

/// Validates a phase transition.
///
/// Illegal transitions are rejected, never panicked on: a rejected
/// transition is how double-submits and mutate-while-submitting are made
/// unrepresentable.
pub fn validate_transition(from: SessionPhase, to: SessionPhase) -> Result<(), StateMachineError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(StateMachineError::IllegalTransition)
    }
}

pub fn allowed_transitions(from: SessionPhase) -> Vec<SessionPhase> {
    use SessionPhase::*;
    match from {
        Editing => vec![Submitting],
        Submitting => vec![Submitted, SubmitFailed],
        SubmitFailed => vec![Editing, Submitting],
        // Terminal: a fresh session is required to submit again.
        Submitted => vec![],
    }
}

fn allowed(from: SessionPhase, to: SessionPhase) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}
