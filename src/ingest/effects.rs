use serde::Serialize;

use crate::{
    core::types::{ContentKind, SubmissionOutcome},
    ingest::{
        controller::UploadDialog,
        ports::{ContentInvalidation, Notifier},
    },
};

/// Observable consequence of one submit, applied in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "value", rename_all = "snake_case")]
pub enum Effect {
    NotifySuccess(String),
    NotifyError(String),
    InvalidateContent,
    ResetForm(ContentKind),
    CloseDialog,
}

pub fn effects_for_outcome(kind: ContentKind, outcome: &SubmissionOutcome) -> Vec<Effect> {
    match outcome {
        SubmissionOutcome::Success => vec![
            Effect::NotifySuccess(kind.success_message().to_string()),
            Effect::InvalidateContent,
            Effect::ResetForm(kind),
            Effect::CloseDialog,
        ],
        SubmissionOutcome::Failure { message } => vec![Effect::NotifyError(message.clone())],
    }
}

pub fn dispatch<N, C>(effects: &[Effect], dialog: &mut UploadDialog, notifier: &N, invalidation: &C)
where
    N: Notifier + ?Sized,
    C: ContentInvalidation + ?Sized,
{
    for effect in effects {
        match effect {
            Effect::NotifySuccess(message) => notifier.notify_success(message),
            Effect::NotifyError(message) => notifier.notify_error(message),
            Effect::InvalidateContent => invalidation.notify_content_changed(),
            Effect::ResetForm(kind) => dialog.form_mut(*kind).reset(),
            Effect::CloseDialog => dialog.close(),
        }
    }
}
