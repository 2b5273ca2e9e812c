//! Form state for the add-case view.
//!
//! [`CaseForm`] is plain synchronous state. Submitting is split in two so
//! that no lock is held across the network call: [`CaseForm::begin_submit`]
//! checks and sets the in-flight flag and validates, then the caller sends
//! the ticket's case and hands the outcome to [`CaseForm::finish_submit`].

use uuid::Uuid;

use oncoscan_client::ClientError;
use oncoscan_core::error::ValidationError;
use oncoscan_core::messages;
use oncoscan_core::models::case::{CaseDraft, CaseField, CaseSubmission};
use oncoscan_core::models::image::CaseImage;
use oncoscan_core::models::prediction::SubmissionResult;
use oncoscan_core::routes::CASES_ROUTE;

use crate::error::IntakeError;
use crate::navigation::Navigation;
use crate::notify::Notification;
use crate::phase::{FormEvent, FormPhase};
use crate::picker::PickedFile;

/// Result of asking the form to start a submission.
#[derive(Debug)]
pub enum BeginSubmit {
    /// A previous attempt has not finished; nothing was done.
    AlreadyInFlight,
    /// Required input is missing. A notification was queued.
    Invalid(ValidationError),
    /// The case is valid and the form is now submitting.
    Ready(SubmissionTicket),
}

/// A validated case together with the attempt it belongs to.
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    pub attempt_id: Uuid,
    pub case: CaseSubmission,
}

/// How a call to submit ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    AlreadyInFlight,
    Invalid(ValidationError),
    Failed(ClientError),
    Ready(SubmissionResult),
    /// The view was torn down before the service answered.
    Cancelled,
}

#[derive(Debug, Default)]
pub struct CaseForm {
    draft: CaseDraft,
    phase: FormPhase,
    in_flight: Option<Uuid>,
    result: Option<SubmissionResult>,
    notifications: Vec<Notification>,
}

impl CaseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CaseDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The prediction, while the result view is open.
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            messages::SUBMIT_BUSY_LABEL
        } else {
            messages::SUBMIT_IDLE_LABEL
        }
    }

    pub fn image_label(&self) -> &str {
        self.draft
            .image
            .as_ref()
            .map(CaseImage::file_name)
            .unwrap_or(messages::IMAGE_PLACEHOLDER)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Hand queued notifications to the host.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn update_field(&mut self, field: CaseField, value: impl Into<String>) {
        tracing::trace!(%field, "case field updated");
        self.draft.set(field, value);
    }

    /// Accept an image from the picker. Anything but jpg/jpeg/png is
    /// refused with a notification and the current selection is kept.
    pub fn select_image(&mut self, file: Option<PickedFile>) -> Result<(), ValidationError> {
        let selected = file
            .ok_or(ValidationError::NoImageSelected)
            .and_then(|file| CaseImage::new(file.name, file.bytes));

        match selected {
            Ok(image) => {
                tracing::debug!(file_name = %image.file_name(), "image selected");
                self.draft.image = Some(image);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "image selection refused");
                self.notify(err.user_message());
                Err(err)
            }
        }
    }

    pub fn begin_submit(&mut self) -> Result<BeginSubmit, IntakeError> {
        if let Some(attempt_id) = self.in_flight {
            tracing::debug!(%attempt_id, "submit ignored, attempt still in flight");
            return Ok(BeginSubmit::AlreadyInFlight);
        }

        self.apply(FormEvent::Submit)?;

        match self.draft.validate() {
            Err(err) => {
                tracing::warn!(error = %err, "case failed validation");
                self.apply(FormEvent::Invalid)?;
                self.notify(err.user_message());
                self.apply(FormEvent::Settle)?;
                Ok(BeginSubmit::Invalid(err))
            }
            Ok(case) => {
                self.apply(FormEvent::Valid)?;
                let attempt_id = Uuid::new_v4();
                self.in_flight = Some(attempt_id);
                tracing::info!(%attempt_id, "case submission started");
                Ok(BeginSubmit::Ready(SubmissionTicket { attempt_id, case }))
            }
        }
    }

    /// Apply the service's answer for `attempt_id`. Answers for any other
    /// attempt are discarded. The in-flight flag is cleared on every path.
    pub fn finish_submit(
        &mut self,
        attempt_id: Uuid,
        outcome: Result<SubmissionResult, ClientError>,
    ) -> Result<SubmitOutcome, IntakeError> {
        if self.in_flight != Some(attempt_id) {
            tracing::debug!(%attempt_id, "discarding outcome of stale attempt");
            return Ok(SubmitOutcome::Cancelled);
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                self.apply(FormEvent::Succeeded)?;
                tracing::info!(%attempt_id, "prediction ready");
                self.result = Some(result.clone());
                Ok(SubmitOutcome::Ready(result))
            }
            Err(err) => {
                tracing::warn!(%attempt_id, error = %err, "case submission failed");
                self.apply(FormEvent::Failed)?;
                self.notify(err.user_message());
                self.apply(FormEvent::Settle)?;
                Ok(SubmitOutcome::Failed(err))
            }
        }
    }

    /// Abandon `attempt_id` without applying any outcome.
    pub fn cancel_submit(&mut self, attempt_id: Uuid) -> Result<(), IntakeError> {
        if self.in_flight != Some(attempt_id) {
            return Ok(());
        }
        self.in_flight = None;
        tracing::info!(%attempt_id, "case submission cancelled");
        self.apply(FormEvent::Cancel)
    }

    /// Close the result view and move on to the case list.
    /// Returns `None` when no result is showing.
    pub fn acknowledge_result(&mut self) -> Result<Option<Navigation>, IntakeError> {
        if self.phase != FormPhase::ResultReady {
            return Ok(None);
        }
        self.apply(FormEvent::Acknowledge)?;
        self.result = None;
        self.apply(FormEvent::Settle)?;
        Ok(Some(Navigation::push(CASES_ROUTE)))
    }

    fn apply(&mut self, event: FormEvent) -> Result<(), IntakeError> {
        let next = self.phase.next(event)?;
        tracing::debug!(from = ?self.phase, to = ?next, ?event, "form phase changed");
        self.phase = next;
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(Notification::new(message));
    }
}
