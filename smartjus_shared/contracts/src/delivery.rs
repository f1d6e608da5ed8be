use std::future::Future;

use smartjus_models::lead::{Lead, LeadSummary};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadDeliveryService: Send + Sync + 'static {
    /// Forward a validated lead to whoever handles new leads.
    fn deliver(
        &self,
        lead: &Lead,
        summary: &LeadSummary,
    ) -> impl Future<Output = anyhow::Result<LeadDelivery>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadDelivery {
    /// The lead has been sent to the lead inbox.
    Delivered,
    /// No email provider is configured, the lead has only been logged.
    Logged,
}

impl LeadDelivery {
    pub fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

#[cfg(feature = "mock")]
impl MockLeadDeliveryService {
    pub fn with_deliver(mut self, lead: Lead, summary: LeadSummary, result: LeadDelivery) -> Self {
        self.expect_deliver()
            .once()
            .with(
                mockall::predicate::eq(lead),
                mockall::predicate::eq(summary),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_deliver_error(mut self, lead: Lead, summary: LeadSummary) -> Self {
        self.expect_deliver()
            .once()
            .with(
                mockall::predicate::eq(lead),
                mockall::predicate::eq(summary),
            )
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "email provider unavailable"
                ))))
            });
        self
    }
}
