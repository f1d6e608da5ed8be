use std::future::Future;

use smartjus_models::lead::{LeadSubmission, MissingRequiredFieldError};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadFeatureService: Send + Sync + 'static {
    /// Validate a submitted lead and forward it to the lead inbox (or the log
    /// if no email provider is configured).
    fn submit(
        &self,
        submission: LeadSubmission,
    ) -> impl Future<Output = Result<LeadOutcome, LeadSubmitError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadOutcome {
    /// Whether the lead has actually been sent by email.
    pub delivered: bool,
}

#[derive(Debug, Error)]
pub enum LeadSubmitError {
    #[error(transparent)]
    MissingRequiredField(#[from] MissingRequiredFieldError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockLeadFeatureService {
    pub fn with_submit(
        mut self,
        submission: LeadSubmission,
        result: Result<LeadOutcome, LeadSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
