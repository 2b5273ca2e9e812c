use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::IntakeError;

/// Where a submission attempt stands.
///
/// `ValidationFailed`, `SubmissionFailed` and `Acknowledged` are transient:
/// the form passes through them and settles back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    ValidationFailed,
    Submitting,
    SubmissionFailed,
    ResultReady,
    Acknowledged,
}

/// Inputs that move a form between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormEvent {
    Submit,
    Invalid,
    Valid,
    Failed,
    Succeeded,
    Acknowledge,
    /// The view went away while a request was outstanding.
    Cancel,
    Settle,
}

impl FormPhase {
    pub fn next(self, event: FormEvent) -> Result<FormPhase, IntakeError> {
        use FormEvent as E;
        use FormPhase as P;

        let next = match (self, event) {
            (P::Idle, E::Submit) => P::Validating,
            (P::Validating, E::Invalid) => P::ValidationFailed,
            (P::Validating, E::Valid) => P::Submitting,
            (P::Submitting, E::Failed) => P::SubmissionFailed,
            (P::Submitting, E::Succeeded) => P::ResultReady,
            (P::Submitting, E::Cancel) => P::Idle,
            (P::ResultReady, E::Acknowledge) => P::Acknowledged,
            (P::ValidationFailed | P::SubmissionFailed | P::Acknowledged, E::Settle) => P::Idle,
            (from, event) => return Err(IntakeError::InvalidTransition { from, event }),
        };
        Ok(next)
    }

    /// Phases the form only passes through.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            FormPhase::Validating
                | FormPhase::ValidationFailed
                | FormPhase::SubmissionFailed
                | FormPhase::Acknowledged
        )
    }
}
