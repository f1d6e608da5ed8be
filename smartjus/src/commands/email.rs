use anyhow::Context;
use clap::Subcommand;
use smartjus_config::{Config, RESEND_API_KEY_ENV};
use smartjus_email_contracts::{Email, EmailService};
use smartjus_models::email_address::EmailAddressWithName;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let api_key = config
        .email
        .api_key
        .as_deref()
        .with_context(|| format!("No email api key configured, set {RESEND_API_KEY_ENV}"))?;
    let email_service = environment::email(&config.email, api_key)?;

    email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            html_body: None,
            reply_to: None,
        })
        .await
        .context("Failed to send email")
}
