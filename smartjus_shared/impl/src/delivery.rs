use std::sync::Arc;

use smartjus_email_contracts::{Email, EmailService};
use smartjus_models::{
    email_address::EmailAddressWithName,
    lead::{Lead, LeadSummary},
};
use smartjus_shared_contracts::delivery::{LeadDelivery, LeadDeliveryService};
use tracing::info;

/// Either sends leads to the lead inbox or, if no email provider is
/// configured, writes them to the log.
#[derive(Debug, Clone)]
pub enum LeadDeliveryServiceImpl<Email> {
    Email {
        email: Email,
        config: LeadEmailDeliveryConfig,
    },
    Log,
}

#[derive(Debug, Clone)]
pub struct LeadEmailDeliveryConfig {
    pub inbox: Arc<EmailAddressWithName>,
}

impl<EmailS> LeadDeliveryService for LeadDeliveryServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn deliver(&self, lead: &Lead, summary: &LeadSummary) -> anyhow::Result<LeadDelivery> {
        match self {
            Self::Email { email, config } => {
                email
                    .send(Email {
                        recipient: (*config.inbox).clone(),
                        subject: subject(lead),
                        body: summary.as_text().into(),
                        html_body: Some(summary.to_html()),
                        reply_to: lead.email.parse().ok(),
                    })
                    .await?;

                Ok(LeadDelivery::Delivered)
            }
            Self::Log => {
                info!("New lead (email delivery is disabled):\n{summary}");

                Ok(LeadDelivery::Logged)
            }
        }
    }
}

fn subject(lead: &Lead) -> String {
    let kind = lead.kind.as_deref().map(String::as_str).unwrap_or_default();
    format!("Novo lead {kind} - {}", *lead.name)
}
