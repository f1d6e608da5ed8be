use smartjus_models::lead::{Lead, LeadSummary};

/// Format the fields of a lead in a fixed order, one per line. Absent optional
/// fields are omitted.
pub fn format_summary(lead: &Lead) -> LeadSummary {
    let Lead {
        name,
        email,
        phone,
        company,
        kind,
        message,
    } = lead;

    let optional = [
        phone.as_ref().map(|x| format!("Telefone/WhatsApp: {}", **x)),
        company.as_ref().map(|x| format!("Empresa/Escritório: {}", **x)),
        kind.as_ref().map(|x| format!("Fluxo de interesse: {}", **x)),
        message.as_ref().map(|x| format!("Mensagem: {}", **x)),
    ];

    LeadSummary::new(
        [format!("Nome: {}", **name), format!("E-mail: {}", **email)]
            .into_iter()
            .chain(optional.into_iter().flatten()),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smartjus_models::lead::LeadSubmission;

    use super::*;

    #[test]
    fn required_fields_only() {
        let lead = Lead::try_from(LeadSubmission {
            name: Some("Ana".into()),
            email: Some("ana@x.com".into()),
            ..Default::default()
        })
        .unwrap();

        let summary = format_summary(&lead);

        assert_eq!(summary.as_text(), "Nome: Ana\nE-mail: ana@x.com");
    }

    #[test]
    fn all_fields() {
        let lead = Lead::try_from(LeadSubmission {
            name: Some("Ana".into()),
            email: Some("ana@x.com".into()),
            phone: Some("119999".into()),
            company: Some("Silva Advogados".into()),
            message: Some("Olá\nTudo bem?".into()),
            kind: Some("parceiro".into()),
        })
        .unwrap();

        let summary = format_summary(&lead);

        assert_eq!(
            summary.as_text(),
            "Nome: Ana\n\
             E-mail: ana@x.com\n\
             Telefone/WhatsApp: 119999\n\
             Empresa/Escritório: Silva Advogados\n\
             Fluxo de interesse: parceiro\n\
             Mensagem: Olá\nTudo bem?"
        );
        assert_eq!(
            summary.to_html(),
            "Nome: Ana<br />\
             E-mail: ana@x.com<br />\
             Telefone/WhatsApp: 119999<br />\
             Empresa/Escritório: Silva Advogados<br />\
             Fluxo de interesse: parceiro<br />\
             Mensagem: Olá<br />Tudo bem?"
        );
    }

    #[test]
    fn skips_absent_fields_in_between() {
        let lead = Lead::try_from(LeadSubmission {
            name: Some("Ana".into()),
            email: Some("ana@x.com".into()),
            phone: Some("119999".into()),
            company: Some(String::new()),
            message: None,
            kind: Some("cliente".into()),
        })
        .unwrap();

        let summary = format_summary(&lead);

        assert_eq!(
            summary.as_text(),
            "Nome: Ana\n\
             E-mail: ana@x.com\n\
             Telefone/WhatsApp: 119999\n\
             Fluxo de interesse: cliente"
        );
    }
}
