// src/infrastructure/mail.rs
//! Outgoing mail: Resend HTTP API, or a tracing-only sink when no key is set.

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::mailer::{Mailer, OutgoingMail},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Logs every message instead of delivering it.
#[derive(Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> ApplicationResult<()> {
        tracing::info!(to = %mail.to, subject = %mail.subject, "mail delivery disabled; message logged");
        tracing::debug!(body = %mail.html, "mail body");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

pub struct ResendMailer {
    api_key: String,
    from: String,
    client: Client,
}

impl ResendMailer {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> ApplicationResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| ApplicationError::infrastructure(format!("mail client: {err}")))?;
        Ok(Self {
            api_key: api_key.into(),
            from: from.into(),
            client,
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, mail: OutgoingMail) -> ApplicationResult<()> {
        let request = ResendRequest {
            from: &self.from,
            to: [&mail.to],
            subject: &mail.subject,
            html: &mail.html,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("resend request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApplicationError::infrastructure(format!(
                "resend api error ({status}): {body}"
            )));
        }

        tracing::debug!(to = %mail.to, subject = %mail.subject, "mail accepted by resend");
        Ok(())
    }
}
