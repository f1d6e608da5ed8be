use std::future::Future;

use serde::Serialize;
use smartjus_models::lead::LeadCategory;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadApiService: Send + Sync + 'static {
    /// Post a lead to the lead submission endpoint.
    ///
    /// Fails if the endpoint cannot be reached or does not respond with a
    /// success status.
    fn submit(&self, payload: &LeadPayload) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Body of a lead submission as sent by the contact form. Text fields are sent
/// as entered, even if empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub lead_kind: LeadCategory,
}

#[cfg(feature = "mock")]
impl MockLeadApiService {
    pub fn with_submit(mut self, payload: LeadPayload, ok: bool) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| {
                let result = if ok {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("lead endpoint responded with 500"))
                };
                Box::pin(std::future::ready(result))
            });
        self
    }
}
