use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::nutype_string;

/// A lead exactly as submitted through the contact form. Every field may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub kind: Option<String>,
}

/// A lead that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: LeadName,
    pub email: LeadEmail,
    pub phone: Option<LeadPhone>,
    pub company: Option<LeadCompany>,
    pub kind: Option<LeadKind>,
    pub message: Option<LeadMessage>,
}

nutype_string!(LeadName(validate(not_empty)));
nutype_string!(
    /// The email address of the submitter. Only checked for presence, not for
    /// a valid address format.
    LeadEmail(validate(not_empty))
);
nutype_string!(LeadPhone(validate(not_empty)));
nutype_string!(LeadCompany(validate(not_empty)));
nutype_string!(
    /// Free-form category label chosen by the submitter (e.g. `parceiro` or
    /// `cliente`).
    LeadKind(validate(not_empty))
);
nutype_string!(LeadMessage(validate(not_empty)));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Required field `{field}` is missing or empty.")]
pub struct MissingRequiredFieldError {
    pub field: &'static str,
}

impl TryFrom<LeadSubmission> for Lead {
    type Error = MissingRequiredFieldError;

    fn try_from(value: LeadSubmission) -> Result<Self, Self::Error> {
        let name = required(value.name, "name")?;
        let email = required(value.email, "email")?;

        Ok(Self {
            name,
            email,
            phone: optional(value.phone),
            company: optional(value.company),
            kind: optional(value.kind),
            message: optional(value.message),
        })
    }
}

fn required<T: TryFrom<String>>(
    value: Option<String>,
    field: &'static str,
) -> Result<T, MissingRequiredFieldError> {
    value
        .and_then(|value| T::try_from(value).ok())
        .ok_or(MissingRequiredFieldError { field })
}

/// Empty strings are treated like absent values.
fn optional<T: TryFrom<String>>(value: Option<String>) -> Option<T> {
    value.and_then(|value| T::try_from(value).ok())
}

/// Human readable summary of a [`Lead`], one field per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSummary(String);

impl LeadSummary {
    pub fn new(lines: impl IntoIterator<Item = String>) -> Self {
        Self(lines.into_iter().collect::<Vec<_>>().join("\n"))
    }

    pub fn as_text(&self) -> &str {
        &self.0
    }

    /// Renders the summary for an html email body by replacing every line
    /// break with `<br />`.
    pub fn to_html(&self) -> String {
        self.0.replace('\n', "<br />")
    }
}

impl std::fmt::Display for LeadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two flows offered by the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadCategory {
    /// A lawyer interested in becoming a partner.
    #[default]
    #[serde(rename = "parceiro")]
    Partner,
    /// Someone who wants to refer a case.
    #[serde(rename = "cliente")]
    Client,
}

impl LeadCategory {
    pub const ALL: [Self; 2] = [Self::Partner, Self::Client];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Partner => "parceiro",
            Self::Client => "cliente",
        }
    }

    /// Label of the button selecting this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Partner => "Sou advogado parceiro",
            Self::Client => "Tenho um caso para indicar",
        }
    }
}

impl std::fmt::Display for LeadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeadCategory {
    type Err = UnknownLeadCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownLeadCategoryError(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown lead category {0:?}, expected `parceiro` or `cliente`.")]
pub struct UnknownLeadCategoryError(pub String);
