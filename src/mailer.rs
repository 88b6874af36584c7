use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{MailConfig, MailCredentials};
use crate::error::{Error, Result};
use crate::render::render;
use crate::urbandict::Entry;

const MAILGUN_API_BASE: &str = "https://api.mailgun.net/v3";
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Delivers one message. Implementations make exactly one attempt.
pub trait MailTransport {
    fn send(&self, credentials: MailCredentials<'_>, message: &MailMessage) -> Result<()>;
}

pub struct MailgunTransport {
    client: reqwest::blocking::Client,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MailgunReply {
    id: String,
    message: String,
}

impl MailgunTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| Error::MailProvider(e.to_string()))?;
        Ok(Self { client })
    }
}

impl MailTransport for MailgunTransport {
    fn send(&self, credentials: MailCredentials<'_>, message: &MailMessage) -> Result<()> {
        let url = format!("{}/{}/messages", MAILGUN_API_BASE, credentials.domain);
        let form = [
            ("from", message.from.as_str()),
            ("to", message.to.as_str()),
            ("subject", message.subject.as_str()),
            ("text", message.text.as_str()),
        ];
        let resp = self
            .client
            .post(url)
            .basic_auth("api", Some(credentials.api_key))
            .form(&form)
            .send()
            .map_err(|e| Error::MailProvider(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| Error::MailProvider(e.to_string()))?;
        let id = reply_result(status, &body)?;
        debug!(%id, "mailgun accepted message");
        Ok(())
    }
}

// Message id on success; otherwise the provider's `message`, or the raw body when it isn't JSON.
fn reply_result(status: StatusCode, body: &str) -> Result<String> {
    let reply: MailgunReply = serde_json::from_str(body).unwrap_or_default();
    if !status.is_success() {
        let detail = if reply.message.is_empty() { body } else { reply.message.as_str() };
        return Err(Error::MailProvider(format!("{}: {}", status, detail.trim())));
    }
    Ok(reply.id)
}

pub fn subject_for(date: chrono::NaiveDate) -> String {
    format!(
        "Urban Dictionary Word of the day for {}",
        date.format("%b %d, %Y")
    )
}

pub fn compose(
    credentials: MailCredentials<'_>,
    entry: &Entry,
    subject: &str,
    recipient: &str,
) -> MailMessage {
    MailMessage {
        from: format!("donotreply@{}", credentials.domain),
        to: recipient.to_string(),
        subject: subject.to_string(),
        text: render(entry),
    }
}

pub struct Mailer<'a> {
    config: &'a MailConfig,
    transport: &'a dyn MailTransport,
}

impl<'a> Mailer<'a> {
    pub fn new(config: &'a MailConfig, transport: &'a dyn MailTransport) -> Self {
        Mailer { config, transport }
    }

    pub fn send_word(&self, entry: &Entry, subject: &str, recipient: &str) -> Result<()> {
        let credentials = self.config.credentials()?;
        let message = compose(credentials, entry, subject, recipient);
        self.transport.send(credentials, &message)?;
        info!(to = recipient, word = %entry.word, "word mailed");
        Ok(())
    }
}
