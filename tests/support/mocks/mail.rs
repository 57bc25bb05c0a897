// tests/support/mocks/mail.rs
use async_trait::async_trait;
use recipebox::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::mailer::{Mailer, OutgoingMail},
};
use std::sync::Mutex;

#[derive(Default)]
pub struct CapturingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
}

impl CapturingMailer {
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<OutgoingMail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send(&self, mail: OutgoingMail) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _mail: OutgoingMail) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("smtp relay unreachable"))
    }
}
