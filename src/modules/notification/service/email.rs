use crate::types::{Context, MailContext};
use std::sync::Arc;

use super::{types, Error, Notification, Result};

const SENDER_NAME: &str = "Nuber Eats";

/// A templated message as the mail API expects it.
#[derive(Debug, PartialEq)]
struct TemplatedEmail {
    to: String,
    subject: String,
    template: String,
    variables: Vec<(String, String)>,
}

fn messages_endpoint(mail: &MailContext) -> String {
    format!(
        "{}/v3/{}/messages",
        mail.api_endpoint.trim_end_matches('/'),
        mail.domain
    )
}

fn into_form(mail: &MailContext, email: TemplatedEmail) -> Vec<(String, String)> {
    let mut form = vec![
        (
            String::from("from"),
            format!("{} <{}>", SENDER_NAME, mail.from_email),
        ),
        (String::from("to"), email.to),
        (String::from("subject"), email.subject),
        (String::from("template"), email.template),
    ];
    form.extend(
        email
            .variables
            .into_iter()
            .map(|(key, value)| (format!("v:{}", key), value)),
    );
    form
}

async fn send_email(ctx: Arc<Context>, email: TemplatedEmail) -> Result<()> {
    let form = into_form(&ctx.mail, email);

    let res = reqwest::Client::new()
        .post(messages_endpoint(&ctx.mail))
        .basic_auth("api", Some(ctx.mail.api_key.clone()))
        .form(&form)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to send email: {}", err);
            Error::NotSent
        })?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        tracing::error!("Mail API rejected email with status {}: {}", status, body);
        return Err(Error::NotSent);
    }

    Ok(())
}

fn verification_email(notification: types::VerificationRequested) -> TemplatedEmail {
    TemplatedEmail {
        to: notification.email.clone(),
        subject: String::from("Verify Your Email"),
        template: String::from("verify-email"),
        variables: vec![
            (String::from("code"), notification.code),
            (String::from("username"), notification.email),
        ],
    }
}

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    match notification {
        Notification::VerificationRequested(n) => send_email(ctx, verification_email(n)).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail() -> MailContext {
        MailContext {
            api_endpoint: String::from("https://api.mailgun.net/"),
            api_key: String::from("API_KEY"),
            domain: String::from("mock.domain.com"),
            from_email: String::from("mock@mail.com"),
        }
    }

    #[test]
    fn targets_the_domain_messages_endpoint() {
        assert_eq!(
            messages_endpoint(&mail()),
            "https://api.mailgun.net/v3/mock.domain.com/messages"
        );
    }

    #[test]
    fn verification_email_uses_the_verify_template() {
        let email = verification_email(types::VerificationRequested {
            email: String::from("mock@mail.com"),
            code: String::from("mockedCode"),
        });

        assert_eq!(
            into_form(&mail(), email),
            vec![
                (String::from("from"), String::from("Nuber Eats <mock@mail.com>")),
                (String::from("to"), String::from("mock@mail.com")),
                (String::from("subject"), String::from("Verify Your Email")),
                (String::from("template"), String::from("verify-email")),
                (String::from("v:code"), String::from("mockedCode")),
                (String::from("v:username"), String::from("mock@mail.com")),
            ]
        );
    }
}
