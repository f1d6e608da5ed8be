use std::sync::Arc;

use anyhow::ensure;
use clap::{
    builder::{PossibleValue, PossibleValuesParser, TypedValueParser},
    Args,
};
use smartjus_extern_impl::lead::{LeadApiServiceConfig, LeadApiServiceImpl};
use smartjus_form::{LeadForm, LeadFormFields};
use smartjus_models::lead::LeadCategory;
use url::Url;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Url of the lead submission endpoint
    #[arg(long, default_value = "http://127.0.0.1:8000/api/lead")]
    endpoint: Url,
    /// Who is getting in touch
    #[arg(long, default_value_t, value_parser = category_parser())]
    category: LeadCategory,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long, default_value = "")]
    message: String,
}

impl SubmitCommand {
    pub async fn invoke(self) -> anyhow::Result<()> {
        let api = LeadApiServiceImpl::new(LeadApiServiceConfig {
            endpoint: Arc::new(self.endpoint),
        })?;

        let mut form = LeadForm::new();
        form.select_category(self.category);
        *form.fields_mut() = LeadFormFields {
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            message: self.message,
        };

        let message = form.submit(&api).await?;
        println!("{message}");

        ensure!(!message.is_error(), "Failed to submit lead");

        Ok(())
    }
}

/// Accepts `parceiro` and `cliente`, listing the form's button labels in the
/// help output.
fn category_parser() -> impl TypedValueParser<Value = LeadCategory> + Send + Sync + 'static {
    PossibleValuesParser::new(
        LeadCategory::ALL
            .map(|category| PossibleValue::new(category.as_str()).help(category.label())),
    )
    .try_map(|category: String| category.parse::<LeadCategory>())
}
