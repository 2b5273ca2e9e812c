use std::future::Future;

use oncoscan_core::models::case::CaseSubmission;
use oncoscan_core::models::prediction::SubmissionResult;

use crate::error::ClientError;

/// Something that can turn a case into a prediction.
///
/// [`crate::PredictionClient`] is the production implementation; the
/// intake form only depends on this trait.
pub trait PredictionService: Send + Sync {
    fn submit_case(
        &self,
        case: &CaseSubmission,
    ) -> impl Future<Output = Result<SubmissionResult, ClientError>> + Send;
}

impl<T: PredictionService> PredictionService for std::sync::Arc<T> {
    fn submit_case(
        &self,
        case: &CaseSubmission,
    ) -> impl Future<Output = Result<SubmissionResult, ClientError>> + Send {
        (**self).submit_case(case)
    }
}
