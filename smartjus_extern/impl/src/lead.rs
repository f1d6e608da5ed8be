use std::sync::Arc;

use anyhow::Context;
use smartjus_extern_contracts::lead::{LeadApiService, LeadPayload};
use smartjus_utils::http::HttpClient;
use url::Url;

#[derive(Debug, Clone)]
pub struct LeadApiServiceImpl {
    config: LeadApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct LeadApiServiceConfig {
    /// Full url of the lead submission endpoint, e.g.
    /// `https://smartjus.io/api/lead`.
    pub endpoint: Arc<Url>,
}

impl LeadApiServiceImpl {
    pub fn new(config: LeadApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            client: HttpClient::new().context("Failed to create http client")?,
        })
    }
}

impl LeadApiService for LeadApiServiceImpl {
    async fn submit(&self, payload: &LeadPayload) -> anyhow::Result<()> {
        self.client
            .post((*self.config.endpoint).clone())
            .json(payload)
            .send()
            .await
            .context("Failed to reach lead endpoint")?
            .error_for_status()
            .context("Lead endpoint did not accept the lead")?;

        Ok(())
    }
}
