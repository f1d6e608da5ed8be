use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use smartjus_models::lead::LeadSubmission;

/// Every field accepts any json value: strings are kept as-is, `null` counts
/// as absent and anything else is rendered as its json text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiLeadSubmission {
    /// Full name of the submitter
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Email address of the submitter
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    /// Phone or WhatsApp number
    #[serde(deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    /// Law firm or company
    #[serde(deserialize_with = "lenient_string")]
    pub company: Option<String>,
    /// Free text message
    #[serde(deserialize_with = "lenient_string")]
    pub message: Option<String>,
    /// Category chosen in the form, e.g. `parceiro` or `cliente`
    #[serde(deserialize_with = "lenient_string")]
    pub lead_kind: Option<String>,
}

impl From<ApiLeadSubmission> for LeadSubmission {
    fn from(value: ApiLeadSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            company: value.company,
            message: value.message,
            kind: value.lead_kind,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        value => Some(value.to_string()),
    })
}

#[derive(Debug, Serialize)]
pub struct ApiLeadAccepted {
    pub success: bool,
    pub delivered: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn lenient_fields() {
        let submission = serde_json::from_value::<ApiLeadSubmission>(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "phone": 119999,
            "company": true,
            "message": null,
            "leadKind": ["cliente"],
        }))
        .unwrap();

        assert_eq!(
            submission,
            ApiLeadSubmission {
                name: Some("Ana".into()),
                email: Some("ana@x.com".into()),
                phone: Some("119999".into()),
                company: Some("true".into()),
                message: None,
                lead_kind: Some(r#"["cliente"]"#.into()),
            }
        );
    }

    #[test]
    fn missing_fields_are_absent() {
        let submission = serde_json::from_value::<ApiLeadSubmission>(json!({})).unwrap();

        assert_eq!(submission, ApiLeadSubmission::default());
    }
}
