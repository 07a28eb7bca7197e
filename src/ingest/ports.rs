//! Collaborators the ingestion controller is handed instead of reaching for
//! globals. Production implementations live in `providers` and
//! `ingest::signal`; tests supply recording fakes.

use std::future::Future;

use crate::{
    core::{errors::SubmissionError, types::UserIdentity},
    ingest::payload::SubmissionRequest,
};

pub trait IdentityProvider {
    fn current_user(&self) -> Option<UserIdentity>;
}

/// Fire-and-forget "content store changed" broadcast.
pub trait ContentInvalidation {
    fn notify_content_changed(&self);
}

pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Sends one built request. Exactly one attempt; no retries.
pub trait Submitter {
    fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}

/// Identity fixed at construction, e.g. from a CLI flag.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<String>);

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserIdentity> {
        self.0.clone().map(UserIdentity::new)
    }
}

/// Notifier that reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!(target: "ideavault::notify", "{message}");
    }

    fn notify_error(&self, message: &str) {
        tracing::error!(target: "ideavault::notify", "{message}");
    }
}
