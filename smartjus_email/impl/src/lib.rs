use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use smartjus_email_contracts::{Email, EmailService};
use smartjus_models::email_address::EmailAddressWithName;
use smartjus_utils::http::HttpClient;
use tracing::debug;
use url::Url;

const RESEND_ENDPOINT: &str = "https://api.resend.com";

/// [`EmailService`] backed by the Resend http api.
#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: Arc<EmailAddressWithName>,
    api_key: Arc<str>,
    emails_url: Arc<Url>,
    client: HttpClient,
}

impl EmailServiceImpl {
    /// `endpoint_override` replaces the base url of the Resend api, e.g. to
    /// talk to a local testing server. Emails are posted to `<endpoint>/emails`,
    /// with or without a trailing slash on the endpoint.
    pub fn new(
        api_key: &str,
        from: EmailAddressWithName,
        endpoint_override: Option<Url>,
    ) -> anyhow::Result<Self> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => RESEND_ENDPOINT.parse()?,
        };
        let emails_url = emails_url(endpoint)?;

        Ok(Self {
            from: from.into(),
            api_key: api_key.into(),
            emails_url: emails_url.into(),
            client: HttpClient::new().context("Failed to create http client")?,
        })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        let request = SendEmailRequest {
            from: self.from.to_string(),
            to: [email.recipient.to_string()],
            subject: &email.subject,
            text: &email.body,
            html: email.html_body.as_deref(),
            reply_to: email.reply_to.as_ref().map(|x| x.as_str()),
        };

        let response = self
            .client
            .post((*self.emails_url).clone())
            .bearer_auth(&*self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to reach email provider")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Email provider rejected email with status {status}: {body}");
        }

        let SendEmailResponse { id } = response
            .json()
            .await
            .context("Failed to parse email provider response")?;
        debug!(%id, "email accepted by provider");

        Ok(())
    }
}

fn emails_url(mut endpoint: Url) -> anyhow::Result<Url> {
    if endpoint.cannot_be_a_base() {
        bail!("Invalid email endpoint url {endpoint}");
    }
    endpoint
        .path_segments_mut()
        .map_err(|()| anyhow!("Invalid email endpoint url"))?
        .pop_if_empty()
        .push("emails");
    Ok(endpoint)
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [String; 1],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}
