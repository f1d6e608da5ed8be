//! Wiring of the concrete service implementations.

use std::sync::Arc;

use anyhow::Context;
use smartjus_api_rest::RestServerConfig;
use smartjus_config::{Config, EmailConfig};
use smartjus_core_lead_impl::LeadFeatureServiceImpl;
use smartjus_email_impl::EmailServiceImpl;
use smartjus_shared_impl::delivery::{LeadDeliveryServiceImpl, LeadEmailDeliveryConfig};
use tracing::warn;

pub type Email = EmailServiceImpl;
pub type LeadDelivery = LeadDeliveryServiceImpl<Email>;
pub type LeadFeature = LeadFeatureServiceImpl<LeadDelivery>;
pub type RestServer = smartjus_api_rest::RestServer<LeadFeature>;

pub fn email(config: &EmailConfig, api_key: &str) -> anyhow::Result<Email> {
    EmailServiceImpl::new(api_key, config.from.clone(), config.endpoint_override.clone())
        .context("Failed to create email service")
}

/// Sends leads via email if both the provider api key and the lead inbox are
/// configured, otherwise falls back to writing them to the log.
pub fn lead_delivery(config: &Config) -> anyhow::Result<LeadDelivery> {
    let Some((api_key, inbox)) = config.lead_delivery() else {
        warn!("Email delivery of leads is disabled, new leads will only be logged");
        return Ok(LeadDeliveryServiceImpl::Log);
    };

    Ok(LeadDeliveryServiceImpl::Email {
        email: email(&config.email, api_key)?,
        config: LeadEmailDeliveryConfig {
            inbox: Arc::new(inbox.clone()),
        },
    })
}

pub fn rest_server(config: &Config) -> anyhow::Result<RestServer> {
    let lead = LeadFeatureServiceImpl::new(lead_delivery(config)?);

    Ok(RestServer::new(
        lead,
        RestServerConfig {
            allowed_origins: config.http.allowed_origins.iter().cloned().collect(),
        },
    ))
}
