//! Form session: one user's pass through one form.
//!
//! All mutations are sequential and funnel through the phase machine in
//! `state_machine`; the `&mut self` receivers make parallel mutation of a
//! session unrepresentable. The only asynchronous operation is the
//! gateway call, bounded by the definition's submit timeout.

use crate::api::{SubmissionGateway, SubmissionPayload};
use crate::error::{GatewayError, SessionError};
use crate::partition;
use crate::schema::FormDefinition;
use crate::state_machine::{self, SessionPhase};
use crate::types::{FieldName, FormRecord, RawValue, SessionId};
use crate::validator::{self, FieldErrors, ValidationResult};
use std::sync::Arc;

/// Result of a forward step attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced { step: usize },
    /// Current step has invalid fields; errors are populated for display.
    Rejected,
}

/// Result of `begin_submit`: either a payload ready for the gateway, or
/// a validation rejection (errors populated, session back in `Editing`).
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    Pending(SubmissionPayload),
    Rejected,
}

/// Final result of a composed `submit` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
    Failed(GatewayError),
}

/// Aggregate of record, step index, error set, and submission phase for
/// one open form.
#[derive(Debug, Clone)]
pub struct FormSession {
    id: SessionId,
    definition: Arc<FormDefinition>,
    record: FormRecord,
    step: usize,
    errors: FieldErrors,
    phase: SessionPhase,
    failure: Option<GatewayError>,
}

impl FormSession {
    pub fn new(definition: Arc<FormDefinition>) -> Self {
        let id = SessionId::new();
        tracing::debug!(session = %id, form = definition.name(), "session opened");
        Self {
            id,
            record: definition.initial_record(),
            definition,
            step: 0,
            errors: FieldErrors::new(),
            phase: SessionPhase::Editing,
            failure: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Field errors from the most recent validation, for inline display.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Failure notice from the last gateway attempt, if any. Transient
    /// and dismissible; never blocks editing.
    pub fn failure_notice(&self) -> Option<&GatewayError> {
        self.failure.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.failure = None;
    }

    /// Update one field value. No validation runs and the step never
    /// auto-advances: validation is explicit, on demand, so error
    /// messages do not thrash while the user types.
    pub fn set_field(
        &mut self,
        name: impl Into<FieldName>,
        value: impl Into<RawValue>,
    ) -> Result<(), SessionError> {
        self.editable_guard()?;
        let name = name.into();
        if !self.definition.schema().contains(&name) {
            return Err(SessionError::UnknownField(name.to_string()));
        }
        self.reenter_editing();
        self.record.set(name, value);
        Ok(())
    }

    /// Validate the current step and advance on success (capped at the
    /// last step). On failure the session stays put and the step's
    /// errors are populated; errors of later steps are untouched.
    pub fn next_step(&mut self) -> Result<StepOutcome, SessionError> {
        self.editable_guard()?;
        self.reenter_editing();

        let outcome = partition::can_advance(
            self.definition.partition(),
            self.step,
            self.definition.schema(),
            &self.record,
        );

        let step_fields = self.definition.partition().step_fields(self.step).clone();
        match outcome {
            ValidationResult::Valid(_) => {
                for name in &step_fields {
                    self.errors.remove(name);
                }
                self.step = (self.step + 1).min(self.definition.partition().last_index());
                Ok(StepOutcome::Advanced { step: self.step })
            }
            ValidationResult::Invalid(step_errors) => {
                for name in &step_fields {
                    self.errors.remove(name);
                }
                self.errors.extend(step_errors);
                Ok(StepOutcome::Rejected)
            }
        }
    }

    /// Go back one step (floored at 0). No validation; entered values
    /// are never cleared.
    pub fn prev_step(&mut self) -> Result<usize, SessionError> {
        self.editable_guard()?;
        self.reenter_editing();
        self.step = self.step.saturating_sub(1);
        Ok(self.step)
    }

    /// Run full-schema validation and, on success, enter `Submitting`
    /// and hand back the payload for the gateway call.
    ///
    /// On a validation rejection the session stays editable with every
    /// invalid field's error populated, and jumps to the step containing
    /// the first invalid field (a user may have navigated back and
    /// silently invalidated an earlier step).
    pub fn begin_submit(&mut self) -> Result<SubmitAttempt, SessionError> {
        self.editable_guard()?;
        let definition = Arc::clone(&self.definition);
        if self.step != definition.partition().last_index() {
            return Err(SessionError::NotLastStep);
        }

        let schema = definition.schema();
        match partition::validate_all(schema, &self.record) {
            ValidationResult::Invalid(errors) => {
                self.reenter_editing();
                if let Some(first) = validator::first_error_field(schema, &errors) {
                    if let Some(step) = definition.partition().step_of(first) {
                        self.step = step;
                    }
                }
                self.errors = errors;
                Ok(SubmitAttempt::Rejected)
            }
            ValidationResult::Valid(normalized) => {
                debug_assert!(state_machine::validate_transition(
                    self.phase,
                    SessionPhase::Submitting
                )
                .is_ok());
                self.phase = SessionPhase::Submitting;
                self.errors.clear();
                self.failure = None;
                tracing::info!(
                    session = %self.id,
                    form = definition.name(),
                    endpoint = definition.endpoint(),
                    "submission started"
                );
                Ok(SubmitAttempt::Pending(SubmissionPayload::from_record(
                    &normalized,
                    schema,
                )))
            }
        }
    }

    /// Resolve an in-flight submission with the gateway's result.
    pub fn finish_submit(
        &mut self,
        result: Result<(), GatewayError>,
    ) -> Result<SubmitOutcome, SessionError> {
        if self.phase != SessionPhase::Submitting {
            return Err(SessionError::NoSubmissionInFlight);
        }
        match result {
            Ok(()) => {
                self.phase = SessionPhase::Submitted;
                tracing::info!(session = %self.id, "submission accepted");
                Ok(SubmitOutcome::Accepted)
            }
            Err(error) => {
                // Back to the last step, data intact, ready for an
                // explicit user retry.
                self.phase = SessionPhase::SubmitFailed;
                self.failure = Some(error.clone());
                tracing::warn!(session = %self.id, %error, "submission failed");
                Ok(SubmitOutcome::Failed(error))
            }
        }
    }

    /// Composed submission: validate, invoke the gateway exactly once
    /// under the definition's timeout bound, and resolve the phase.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<SubmitOutcome, SessionError>
    where
        G: SubmissionGateway + ?Sized,
    {
        let payload = match self.begin_submit()? {
            SubmitAttempt::Rejected => return Ok(SubmitOutcome::Rejected),
            SubmitAttempt::Pending(payload) => payload,
        };

        let limit = self.definition.submit_timeout();
        let result = match tokio::time::timeout(
            limit,
            gateway.submit(self.definition.endpoint(), &payload),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout {
                limit_ms: limit.as_millis() as u64,
            }),
        };

        self.finish_submit(result)
    }

    /// Explicit "submit another": discard everything and open a fresh
    /// session over the same definition. The only way out of
    /// `Submitted`.
    pub fn reset(&mut self) {
        *self = Self::new(Arc::clone(&self.definition));
    }

    fn editable_guard(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Submitting => Err(SessionError::SubmitInProgress),
            SessionPhase::Submitted => Err(SessionError::AlreadySubmitted),
            SessionPhase::Editing | SessionPhase::SubmitFailed => Ok(()),
        }
    }

    /// A mutation from `SubmitFailed` re-enters `Editing`; the failure
    /// notice stays until dismissed or replaced.
    fn reenter_editing(&mut self) {
        if self.phase == SessionPhase::SubmitFailed {
            self.phase = SessionPhase::Editing;
        }
    }
}
