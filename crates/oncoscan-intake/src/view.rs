use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use oncoscan_client::PredictionService;
use oncoscan_core::error::ValidationError;
use oncoscan_core::models::case::CaseField;

use crate::error::IntakeError;
use crate::form::{BeginSubmit, CaseForm, SubmitOutcome};
use crate::navigation::Navigation;
use crate::picker::PickedFile;

/// A mounted add-case view: form state plus the service it submits to.
///
/// The form lock is taken to begin and to finish a submission, never
/// across the request itself, so a second `submit` while one is pending
/// sees the in-flight flag and returns immediately.
pub struct AddCaseView<S> {
    form: Arc<Mutex<CaseForm>>,
    service: S,
    mounted: watch::Sender<bool>,
}

impl<S: PredictionService> AddCaseView<S> {
    pub fn mount(service: S) -> Self {
        tracing::debug!("add-case view mounted");
        Self {
            form: Arc::new(Mutex::new(CaseForm::new())),
            service,
            mounted: watch::Sender::new(true),
        }
    }

    /// Shared handle to the form state, for rendering.
    pub fn form(&self) -> Arc<Mutex<CaseForm>> {
        Arc::clone(&self.form)
    }

    pub fn is_mounted(&self) -> bool {
        *self.mounted.borrow()
    }

    pub async fn update_field(&self, field: CaseField, value: impl Into<String>) {
        self.form.lock().await.update_field(field, value);
    }

    pub async fn select_image(&self, file: Option<PickedFile>) -> Result<(), ValidationError> {
        self.form.lock().await.select_image(file)
    }

    pub async fn submit(&self) -> Result<SubmitOutcome, IntakeError> {
        if !self.is_mounted() {
            tracing::debug!("submit ignored, view unmounted");
            return Ok(SubmitOutcome::Cancelled);
        }

        let begun = self.form.lock().await.begin_submit()?;
        let ticket = match begun {
            BeginSubmit::Ready(ticket) => ticket,
            BeginSubmit::AlreadyInFlight => return Ok(SubmitOutcome::AlreadyInFlight),
            BeginSubmit::Invalid(err) => return Ok(SubmitOutcome::Invalid(err)),
        };

        let mut teardown = self.mounted.subscribe();
        // Teardown is polled first so an unmounted view never starts a request.
        let outcome = tokio::select! {
            biased;
            _ = async { teardown.wait_for(|mounted| !*mounted).await.map(|_| ()) } => None,
            outcome = self.service.submit_case(&ticket.case) => Some(outcome),
        };

        let mut form = self.form.lock().await;
        match outcome {
            Some(outcome) if self.is_mounted() => form.finish_submit(ticket.attempt_id, outcome),
            _ => {
                tracing::info!(attempt_id = %ticket.attempt_id, "view unmounted, request dropped");
                form.cancel_submit(ticket.attempt_id)?;
                Ok(SubmitOutcome::Cancelled)
            }
        }
    }

    pub async fn acknowledge_result(&self) -> Result<Option<Navigation>, IntakeError> {
        self.form.lock().await.acknowledge_result()
    }

    /// Tear the view down. A pending request is dropped and its answer,
    /// if any, is never applied.
    pub fn unmount(&self) {
        if self.mounted.send_replace(false) {
            tracing::debug!("add-case view unmounted");
        }
    }
}
