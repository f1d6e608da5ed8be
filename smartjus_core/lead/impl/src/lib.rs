use smartjus_core_lead_contracts::{LeadFeatureService, LeadOutcome, LeadSubmitError};
use smartjus_models::lead::{Lead, LeadSubmission};
use smartjus_shared_contracts::delivery::LeadDeliveryService;
use tracing::debug;

pub mod summary;

#[derive(Debug, Clone)]
pub struct LeadFeatureServiceImpl<Delivery> {
    delivery: Delivery,
}

impl<Delivery> LeadFeatureServiceImpl<Delivery> {
    pub fn new(delivery: Delivery) -> Self {
        Self { delivery }
    }
}

impl<Delivery> LeadFeatureService for LeadFeatureServiceImpl<Delivery>
where
    Delivery: LeadDeliveryService,
{
    async fn submit(&self, submission: LeadSubmission) -> Result<LeadOutcome, LeadSubmitError> {
        let lead = Lead::try_from(submission)?;
        let summary = summary::format_summary(&lead);

        let delivery = self.delivery.deliver(&lead, &summary).await?;
        debug!(?delivery, "lead accepted");

        Ok(LeadOutcome {
            delivered: delivery.is_delivered(),
        })
    }
}
