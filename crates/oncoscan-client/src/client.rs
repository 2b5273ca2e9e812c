use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{StatusCode, Url};

use oncoscan_core::models::case::CaseSubmission;
use oncoscan_core::models::prediction::{PredictionResponse, SubmissionResult};
use oncoscan_core::routes::DEFAULT_PREDICTION_ENDPOINT;

use crate::error::ClientError;
use crate::service::PredictionService;

/// Connection settings for the prediction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL cases are POSTed to.
    pub endpoint: String,
    /// Overall request timeout. `None` waits for the service indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PREDICTION_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for the prediction service.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl PredictionClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let endpoint = parse_endpoint(&config.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// POST one case as `multipart/form-data` and interpret the answer.
    pub async fn submit_case(&self, case: &CaseSubmission) -> Result<SubmissionResult, ClientError> {
        let form = build_form(case)?;

        tracing::info!(
            endpoint = %self.endpoint,
            file_name = %case.image.file_name(),
            image_size = case.image.bytes().len(),
            "submitting case for prediction"
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "prediction request failed");
                ClientError::Transport(e.to_string())
            })?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let outcome = interpret_response(status, &body);
        match &outcome {
            Ok(_) => tracing::info!(status = status.as_u16(), "prediction received"),
            Err(e) => tracing::warn!(status = status.as_u16(), error = %e, "prediction not available"),
        }
        outcome
    }
}

impl PredictionService for PredictionClient {
    async fn submit_case(&self, case: &CaseSubmission) -> Result<SubmissionResult, ClientError> {
        PredictionClient::submit_case(self, case).await
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ClientError> {
    let url = Url::parse(endpoint).map_err(|e| ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

/// Multipart payload with keys `name, age, gender, email, number, image`.
fn build_form(case: &CaseSubmission) -> Result<Form, ClientError> {
    let mut form = Form::new();
    for (key, value) in case.text_fields() {
        form = form.text(key, value);
    }

    let image = Part::bytes(case.image.bytes().to_vec())
        .file_name(case.image.file_name().to_string())
        .mime_str(case.image.content_type())
        .map_err(|e| ClientError::Request(e.to_string()))?;

    Ok(form.part("image", image))
}

/// Map an HTTP status and body onto the service's response contract.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<SubmissionResult, ClientError> {
    let parsed = PredictionResponse::from_slice(body);

    if !status.is_success() {
        let message = parsed
            .ok()
            .and_then(|r| r.message().map(str::to_string));
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let response = parsed.map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

    if !response.success {
        return Err(ClientError::Rejected {
            message: response.message().map(str::to_string),
        });
    }

    response
        .result
        .map(SubmissionResult::from)
        .ok_or(ClientError::MissingResult)
}
