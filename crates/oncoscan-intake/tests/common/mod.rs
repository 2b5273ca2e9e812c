#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

use oncoscan_client::{ClientError, PredictionService};
use oncoscan_core::models::case::{CaseField, CaseSubmission};
use oncoscan_core::models::prediction::SubmissionResult;
use oncoscan_intake::{CaseForm, PickedFile};

/// Scripted stand-in for the prediction service.
#[derive(Default)]
pub struct FakeService {
    responses: Mutex<VecDeque<Result<SubmissionResult, ClientError>>>,
    calls: AtomicUsize,
    gated: bool,
    /// Signalled when a request arrives.
    pub entered: Notify,
    /// Lets a gated request answer.
    pub release: Notify,
}

impl FakeService {
    pub fn answering(responses: Vec<Result<SubmissionResult, ClientError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    /// Like [`FakeService::answering`], but each request waits for `release`.
    pub fn gated(responses: Vec<Result<SubmissionResult, ClientError>>) -> Self {
        Self {
            gated: true,
            ..Self::answering(responses)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PredictionService for FakeService {
    async fn submit_case(&self, _case: &CaseSubmission) -> Result<SubmissionResult, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        if self.gated {
            self.release.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted response".to_string())))
    }
}

pub fn ok(result: &str) -> Result<SubmissionResult, ClientError> {
    Ok(SubmissionResult(result.to_string()))
}

pub fn scan() -> PickedFile {
    PickedFile::new("scan.png", b"png-bytes".to_vec())
}

pub const FIELDS: [(CaseField, &str); 5] = [
    (CaseField::Name, "Jane Roe"),
    (CaseField::Age, "42"),
    (CaseField::Gender, "Female"),
    (CaseField::Email, "jane@example.com"),
    (CaseField::Number, "555-0100"),
];

pub fn filled_form() -> CaseForm {
    let mut form = CaseForm::new();
    for (field, value) in FIELDS {
        form.update_field(field, value);
    }
    form.select_image(Some(scan())).unwrap();
    form
}
