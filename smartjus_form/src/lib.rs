//! Client side state of the SmartJus contact form.
//!
//! A [`LeadForm`] holds the selected [`LeadCategory`] and the text fields,
//! turns them into a [`LeadPayload`] on submission and keeps track of the
//! outcome to show to the user.

use smartjus_extern_contracts::lead::{LeadApiService, LeadPayload};
use smartjus_models::{email_address::EmailAddress, lead::LeadCategory};
use thiserror::Error;
use tracing::{debug, error};

pub const IDLE_SUBMIT_LABEL: &str = "Falar com o time SmartJus";
pub const BUSY_SUBMIT_LABEL: &str = "Enviando...";

pub const SUCCESS_MESSAGE: &str = "Recebemos seu contato! Em breve, nossa equipe fala com você.";
pub const ERROR_MESSAGE: &str = "Houve um problema no envio. Tente novamente em instantes ou fale com a nossa equipe em contato@smartjus.io.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    category: LeadCategory,
    fields: LeadFormFields,
    state: FormState,
}

/// Text inputs of the form, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl LeadFormFields {
    fn validate(&self) -> Result<(), SubmitBlockedError> {
        if self.name.is_empty() {
            return Err(SubmitBlockedError::MissingRequiredField("name"));
        }
        if self.email.is_empty() {
            return Err(SubmitBlockedError::MissingRequiredField("email"));
        }
        self.email
            .trim()
            .parse::<EmailAddress>()
            .map_err(|_| SubmitBlockedError::InvalidEmail)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Reasons for refusing to start a submission. No request is made in these
/// cases and the form state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlockedError {
    #[error("A submission is already in progress.")]
    InFlight,
    #[error("The field `{0}` is required.")]
    MissingRequiredField(&'static str),
    #[error("The email address is invalid.")]
    InvalidEmail,
}

/// Outcome message shown below the form after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    Success,
    Error,
}

impl FormMessage {
    pub fn text(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Error => ERROR_MESSAGE,
        }
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}

impl std::fmt::Display for FormMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> LeadCategory {
        self.category
    }

    pub fn select_category(&mut self, category: LeadCategory) {
        self.category = category;
    }

    pub fn fields(&self) -> &LeadFormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut LeadFormFields {
        &mut self.fields
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            BUSY_SUBMIT_LABEL
        } else {
            IDLE_SUBMIT_LABEL
        }
    }

    pub fn message(&self) -> Option<FormMessage> {
        match self.state {
            FormState::Idle | FormState::Submitting => None,
            FormState::Succeeded => Some(FormMessage::Success),
            FormState::Failed => Some(FormMessage::Error),
        }
    }

    /// Enter the submitting state and build the payload to send.
    ///
    /// Refused if a submission is already in flight, if `name` or `email` is
    /// empty or if `email` is not a valid address.
    pub fn begin_submit(&mut self) -> Result<LeadPayload, SubmitBlockedError> {
        if self.is_submitting() {
            return Err(SubmitBlockedError::InFlight);
        }
        self.fields.validate()?;
        self.state = FormState::Submitting;

        let LeadFormFields {
            name,
            email,
            phone,
            company,
            message,
        } = self.fields.clone();

        Ok(LeadPayload {
            name,
            email,
            phone,
            company,
            message,
            lead_kind: self.category,
        })
    }

    /// Leave the submitting state. On success the fields are cleared, on
    /// error they are kept so the user can try again.
    pub fn finish_submit(&mut self, result: anyhow::Result<()>) {
        match result {
            Ok(()) => {
                debug!(category = %self.category, "lead submitted");
                self.fields = LeadFormFields::default();
                self.state = FormState::Succeeded;
            }
            Err(err) => {
                error!("Failed to submit lead: {err:#}");
                self.state = FormState::Failed;
            }
        }
    }

    /// Submit the form via `api` and return the resulting message.
    pub async fn submit(
        &mut self,
        api: &impl LeadApiService,
    ) -> Result<FormMessage, SubmitBlockedError> {
        let payload = self.begin_submit()?;
        let result = api.submit(&payload).await;
        self.finish_submit(result);

        Ok(match self.state {
            FormState::Succeeded => FormMessage::Success,
            _ => FormMessage::Error,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smartjus_extern_contracts::lead::MockLeadApiService;
    use smartjus_testing::logs;
    use smartjus_utils::assert_matches;

    use super::*;

    #[test]
    fn defaults() {
        let sut = LeadForm::new();

        assert_eq!(sut.category(), LeadCategory::Partner);
        assert_eq!(sut.fields(), &LeadFormFields::default());
        assert_eq!(sut.state(), FormState::Idle);
        assert!(!sut.is_submitting());
        assert_eq!(sut.submit_label(), "Falar com o time SmartJus");
        assert_eq!(sut.message(), None);
    }

    #[test]
    fn select_category() {
        let mut sut = LeadForm::new();

        sut.select_category(LeadCategory::Client);
        assert_eq!(sut.category(), LeadCategory::Client);

        sut.select_category(LeadCategory::Partner);
        assert_eq!(sut.category(), LeadCategory::Partner);
    }

    #[test]
    fn begin_submit() {
        // Arrange
        let mut sut = make_filled_form();

        // Act
        let payload = sut.begin_submit();

        // Assert
        assert_eq!(payload, Ok(expected_payload()));
        assert!(sut.is_submitting());
        assert_eq!(sut.submit_label(), "Enviando...");
        assert_eq!(sut.message(), None);
    }

    #[test]
    fn begin_submit_in_flight() {
        let mut sut = make_filled_form();
        sut.begin_submit().unwrap();

        assert_eq!(sut.begin_submit(), Err(SubmitBlockedError::InFlight));
        assert!(sut.is_submitting());
    }

    #[test]
    fn begin_submit_clears_previous_message() {
        let mut sut = make_filled_form();
        sut.begin_submit().unwrap();
        sut.finish_submit(Err(anyhow::anyhow!("boom")));
        assert_eq!(sut.message(), Some(FormMessage::Error));

        sut.begin_submit().unwrap();

        assert_eq!(sut.message(), None);
    }

    #[tokio::test]
    async fn submit_ok() {
        // Arrange
        let api = MockLeadApiService::new().with_submit(expected_payload(), true);
        let mut sut = make_filled_form();

        // Act
        let result = sut.submit(&api).await;

        // Assert
        assert_eq!(result, Ok(FormMessage::Success));
        assert_eq!(
            result.unwrap().text(),
            "Recebemos seu contato! Em breve, nossa equipe fala com você."
        );
        assert_eq!(sut.fields(), &LeadFormFields::default());
        assert_eq!(sut.category(), LeadCategory::Client);
        assert!(!sut.is_submitting());
        assert_eq!(sut.submit_label(), "Falar com o time SmartJus");
    }

    #[tokio::test]
    async fn submit_error() {
        // Arrange
        let api = MockLeadApiService::new().with_submit(expected_payload(), false);
        let mut sut = make_filled_form();
        let fields = sut.fields().clone();

        // Act
        let (logs, _guard) = logs::capture();
        let result = sut.submit(&api).await;

        // Assert
        assert_matches!(result, Ok(message) if message.is_error());
        assert_eq!(
            sut.message().unwrap().to_string(),
            "Houve um problema no envio. Tente novamente em instantes ou fale com a nossa equipe em contato@smartjus.io."
        );
        assert_eq!(sut.fields(), &fields);
        assert!(!sut.is_submitting());
        assert!(logs.contents().contains("lead endpoint responded with 500"));
    }

    #[tokio::test]
    async fn submit_incomplete_form() {
        for (fields, expected) in [
            (
                LeadFormFields::default(),
                SubmitBlockedError::MissingRequiredField("name"),
            ),
            (
                LeadFormFields {
                    name: "Ana".into(),
                    phone: "119999".into(),
                    ..Default::default()
                },
                SubmitBlockedError::MissingRequiredField("email"),
            ),
            (
                LeadFormFields {
                    name: "Ana".into(),
                    email: "ana at x.com".into(),
                    ..Default::default()
                },
                SubmitBlockedError::InvalidEmail,
            ),
        ] {
            // Arrange
            let api = MockLeadApiService::new();
            let mut sut = LeadForm::new();
            *sut.fields_mut() = fields.clone();

            // Act
            let result = sut.submit(&api).await;

            // Assert
            assert_eq!(result, Err(expected));
            assert_eq!(sut.state(), FormState::Idle);
            assert_eq!(sut.fields(), &fields);
            assert_eq!(sut.message(), None);
        }
    }

    #[test]
    fn blocked_submit_keeps_previous_message() {
        let mut sut = make_filled_form();
        sut.begin_submit().unwrap();
        sut.finish_submit(Err(anyhow::anyhow!("boom")));
        sut.fields_mut().email = "not an address".into();

        let result = sut.begin_submit();

        assert_eq!(result, Err(SubmitBlockedError::InvalidEmail));
        assert_eq!(sut.message(), Some(FormMessage::Error));
    }

    fn make_filled_form() -> LeadForm {
        let mut form = LeadForm::new();
        form.select_category(LeadCategory::Client);
        *form.fields_mut() = LeadFormFields {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "119999".into(),
            company: String::new(),
            message: "Preciso de ajuda".into(),
        };
        form
    }

    fn expected_payload() -> LeadPayload {
        LeadPayload {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "119999".into(),
            company: String::new(),
            message: "Preciso de ajuda".into(),
            lead_kind: LeadCategory::Client,
        }
    }
}
