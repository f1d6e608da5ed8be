use smartjus_email_contracts::{Email, EmailService};
use smartjus_email_impl::EmailServiceImpl;
use smartjus_testing::resend;

const API_KEY: &str = "re_test";

#[tokio::test]
async fn send_email() {
    let (url, outbox) = resend::spawn(API_KEY).await.unwrap();
    let sut = make_sut(API_KEY, &url);

    sut.send(Email {
        recipient: "Inbox <inbox@example.com>".parse().unwrap(),
        subject: "The Subject".into(),
        body: "Line 1\nLine 2".into(),
        html_body: Some("Line 1<br />Line 2".into()),
        reply_to: Some("replyto@example.com".parse().unwrap()),
    })
    .await
    .unwrap();

    let emails = outbox.emails().await;
    assert_eq!(emails.len(), 1);
    let email = &emails[0];
    assert_eq!(email.from, "SmartJus <leads@smartjus.ai>");
    assert_eq!(email.to, ["Inbox <inbox@example.com>"]);
    assert_eq!(email.subject, "The Subject");
    assert_eq!(email.text.as_deref(), Some("Line 1\nLine 2"));
    assert_eq!(email.html.as_deref(), Some("Line 1<br />Line 2"));
    assert_eq!(email.reply_to.as_deref(), Some("replyto@example.com"));
}

#[tokio::test]
async fn send_text_only() {
    let (url, outbox) = resend::spawn(API_KEY).await.unwrap();
    let sut = make_sut(API_KEY, &url);

    sut.send(Email {
        recipient: "inbox@example.com".parse().unwrap(),
        subject: "Plain".into(),
        body: "Hello World!".into(),
        html_body: None,
        reply_to: None,
    })
    .await
    .unwrap();

    let emails = outbox.emails().await;
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].html, None);
    assert_eq!(emails[0].reply_to, None);
}

#[tokio::test]
async fn rejected_by_provider() {
    let (url, outbox) = resend::spawn(API_KEY).await.unwrap();
    let sut = make_sut("wrong key", &url);

    let result = sut
        .send(Email {
            recipient: "inbox@example.com".parse().unwrap(),
            subject: "Plain".into(),
            body: "Hello World!".into(),
            html_body: None,
            reply_to: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("401"), "{err:#}");
    assert!(outbox.emails().await.is_empty());
}

fn make_sut(api_key: &str, url: &str) -> EmailServiceImpl {
    EmailServiceImpl::new(
        api_key,
        "SmartJus <leads@smartjus.ai>".parse().unwrap(),
        Some(url.parse().unwrap()),
    )
    .unwrap()
}
