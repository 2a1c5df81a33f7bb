use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use serde::{Deserialize, Serialize};
use sqlx::prelude::Type;
use standard_error::{Interpolate, StandardError};

pub mod access_code;
pub mod outreach;

use crate::{conf::settings, prelude::Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "email_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Sent,
    Failed,
}

pub trait SendEmail {
    fn send(&self, email: &str) -> Result<()>;
}

fn build_message(email: &str, subject: &str, body: &str, is_html: bool) -> Result<Message> {
    let (name, _) = email.split_once('@').unwrap_or(("unknown", ""));
    let content_type = if is_html {
        ContentType::TEXT_HTML
    } else {
        ContentType::TEXT_PLAIN
    };
    Message::builder()
        .from(
            format!("{} <{}>", &settings.service_name, &settings.from_email)
                .parse()
                .map_err(|e: lettre::address::AddressError| {
                    StandardError::new("ERR-EMAIL-002").interpolate_err(e.to_string())
                })?,
        )
        .to(format!("{} <{}>", name, email).parse().map_err(
            |e: lettre::address::AddressError| {
                StandardError::new("ERR-EMAIL-002").interpolate_err(e.to_string())
            },
        )?)
        .subject(subject.to_string())
        .header(content_type)
        .body(body.to_string())
        .map_err(|e| StandardError::new("ERR-EMAIL-002").interpolate_err(e.to_string()))
}

fn smtp_send(message: &Message) -> Result<()> {
    let creds = Credentials::new(settings.smtp_user.clone(), settings.smtp_pass.clone());
    let mailer = SmtpTransport::relay(&settings.smtp_server)
        .map_err(|e| StandardError::new("ERR-EMAIL-002").interpolate_err(e.to_string()))?
        .credentials(creds)
        .build();
    mailer
        .send(message)
        .map_err(|e| StandardError::new("ERR-EMAIL-002").interpolate_err(e.to_string()))?;
    Ok(())
}

/// Fire-and-forget dispatch for system mail (access codes). Failures are
/// logged, not surfaced to the caller.
pub fn send_email(email: &str, subject: &str, body: &str, is_html: bool) -> Result<()> {
    let message = build_message(email, subject, body, is_html)?;
    let email = email.to_string();
    tracing::debug!("sending email to {}", &email);
    tokio::spawn(async move {
        match tokio::task::spawn_blocking(move || smtp_send(&message)).await {
            Ok(Ok(())) => tracing::info!("email sent to {}", &email),
            Ok(Err(e)) => tracing::error!("could not send email to {}: {:?}", &email, e),
            Err(e) => tracing::error!("email task failed: {:?}", e),
        }
    });
    Ok(())
}

/// Awaited dispatch for outreach mail, so the caller can record an audit
/// row with the real outcome.
pub async fn deliver(email: &str, subject: &str, body: &str, is_html: bool) -> Result<()> {
    let message = build_message(email, subject, body, is_html)?;
    tokio::task::spawn_blocking(move || smtp_send(&message))
        .await
        .map_err(|e| StandardError::new("ERR-EMAIL-002").interpolate_err(e.to_string()))?
}
