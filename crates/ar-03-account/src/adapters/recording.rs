//! Development adapters for the verification and notification ports.
//!
//! `StaticVerification` holds an explicit set of verified contacts, the
//! way a verification provider looks after its challenge has been solved.
//! `RecordingNotifier` keeps every send in memory and can be switched into
//! a failing mode to exercise best-effort delivery paths.

use crate::domain::errors::NotifyError;
use crate::ports::outbound::{NotificationSender, TemplateKey, VerificationProvider};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct StaticVerification {
    verified: Mutex<HashSet<String>>,
}

impl StaticVerification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a contact as having completed verification.
    pub fn mark_verified(&self, contact: &str) {
        if let Ok(mut verified) = self.verified.lock() {
            verified.insert(contact.to_string());
        }
    }
}

#[async_trait]
impl VerificationProvider for StaticVerification {
    async fn is_verified(&self, contact: &str) -> bool {
        self.verified
            .lock()
            .map(|v| v.contains(contact))
            .unwrap_or(false)
    }

    async fn clear_verification(&self, contact: &str) {
        if let Ok(mut verified) = self.verified.lock() {
            verified.remove(contact);
        }
    }
}

/// A notification captured by `RecordingNotifier`.
#[derive(Debug, Clone)]
pub struct SentNotification {
    pub recipient: String,
    pub template: TemplateKey,
    pub variables: HashMap<String, String>,
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentNotification>>,
    failing: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail, simulating a transport outage.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }
}

#[async_trait]
impl NotificationSender for RecordingNotifier {
    async fn send(
        &self,
        recipient: &str,
        template: TemplateKey,
        variables: HashMap<String, String>,
    ) -> Result<(), NotifyError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifyError::Delivery("transport unavailable".into()));
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentNotification {
                recipient: recipient.to_string(),
                template,
                variables,
            });
        }
        Ok(())
    }
}
