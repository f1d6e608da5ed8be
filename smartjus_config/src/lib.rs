use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use smartjus_models::email_address::EmailAddressWithName;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, later files override earlier ones.
pub const CONFIG_PATH_ENV: &str = "SMARTJUS_CONFIG";

pub const RESEND_API_KEY_ENV: &str = "RESEND_API_KEY";
pub const LEAD_INBOX_EMAIL_ENV: &str = "LEAD_INBOX_EMAIL";

/// Load the configuration from the files listed in `SMARTJUS_CONFIG` (or the
/// default config file) and apply the provider overrides from the process
/// environment.
pub fn load() -> anyhow::Result<Config> {
    let paths: Vec<String> = match std::env::var(CONFIG_PATH_ENV) {
        Ok(paths) => paths.split(':').map(Into::into).collect(),
        Err(_) => vec![DEFAULT_CONFIG_PATH.to_owned()],
    };

    load_with_overrides(&paths, &EnvOverrides::from_env())
}

pub fn load_with_overrides(
    paths: &[impl AsRef<Path>],
    overrides: &EnvOverrides,
) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .set_override_option("email.api_key", overrides.resend_api_key.clone())?
        .set_override_option("lead.inbox", overrides.lead_inbox_email.clone())?
        .build()?
        .try_deserialize::<Config>()
        .map(Config::normalize)
        .context("Failed to load config")
}

/// Provider settings that may come from the environment instead of a config
/// file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub resend_api_key: Option<String>,
    pub lead_inbox_email: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Empty variables are ignored.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        vars.into_iter()
            .filter(|(_, value)| !value.is_empty())
            .fold(Self::default(), |mut out, (key, value)| {
                match key.as_str() {
                    RESEND_API_KEY_ENV => out.resend_api_key = Some(value),
                    LEAD_INBOX_EMAIL_ENV => out.lead_inbox_email = Some(value),
                    _ => {}
                }
                out
            })
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub lead: LeadConfig,
}

impl Config {
    fn normalize(mut self) -> Self {
        self.email.api_key = self.email.api_key.filter(|key| !key.is_empty());
        self
    }

    /// Returns the provider credential and inbox if lead emails can be sent.
    pub fn lead_delivery(&self) -> Option<(&str, &EmailAddressWithName)> {
        self.email.api_key.as_deref().zip(self.lead.inbox.as_ref())
    }
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub from: EmailAddressWithName,
    pub api_key: Option<String>,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeadConfig {
    pub inbox: Option<EmailAddressWithName>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config =
            load_with_overrides(&[Path::new(DEFAULT_CONFIG_PATH)], &Default::default()).unwrap();

        assert_eq!(config.email.from.to_string(), "SmartJus <leads@smartjus.ai>");
        assert_eq!(config.email.api_key, None);
        assert_eq!(config.lead.inbox, None);
        assert!(config.lead_delivery().is_none());
    }

    #[test]
    fn load_with_provider_overrides() {
        let overrides = EnvOverrides {
            resend_api_key: Some("re_test".into()),
            lead_inbox_email: Some("contato@smartjus.io".into()),
        };

        let config = load_with_overrides(&[Path::new(DEFAULT_CONFIG_PATH)], &overrides).unwrap();

        let (api_key, inbox) = config.lead_delivery().unwrap();
        assert_eq!(api_key, "re_test");
        assert_eq!(inbox.to_string(), "contato@smartjus.io");
    }

    #[test]
    fn delivery_requires_both_values() {
        let overrides = EnvOverrides {
            resend_api_key: Some("re_test".into()),
            lead_inbox_email: None,
        };

        let config = load_with_overrides(&[Path::new(DEFAULT_CONFIG_PATH)], &overrides).unwrap();

        assert!(config.lead_delivery().is_none());
    }

    #[test]
    fn invalid_inbox() {
        let overrides = EnvOverrides {
            resend_api_key: None,
            lead_inbox_email: Some("not an email".into()),
        };

        let result = load_with_overrides(&[Path::new(DEFAULT_CONFIG_PATH)], &overrides);

        assert!(result.is_err());
    }

    #[test]
    fn env_overrides_from_vars() {
        let vars = [
            (RESEND_API_KEY_ENV, ""),
            (LEAD_INBOX_EMAIL_ENV, "contato@smartjus.io"),
            ("PATH", "/usr/bin"),
        ]
        .map(|(k, v)| (k.to_owned(), v.to_owned()));

        let overrides = EnvOverrides::from_vars(vars);

        assert_eq!(
            overrides,
            EnvOverrides {
                resend_api_key: None,
                lead_inbox_email: Some("contato@smartjus.io".into()),
            }
        );
    }
}
