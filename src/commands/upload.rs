use std::path::Path;

use serde::Serialize;

use crate::{
    core::{
        errors::AppResult,
        types::{ContentDraft, ContentKind, DocumentInput, LinkInput, NoteInput},
    },
    ingest::{
        controller::{IngestionController, UploadDialog},
        effects::Effect,
        ports::{ContentInvalidation, IdentityProvider, Notifier, Submitter},
    },
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReport {
    pub kind: ContentKind,
    pub succeeded: bool,
    pub message: String,
    pub effects: Vec<Effect>,
    pub dialog_open: bool,
}

impl UploadReport {
    fn from_effects(kind: ContentKind, effects: Vec<Effect>, dialog_open: bool) -> Self {
        let succeeded = effects.contains(&Effect::InvalidateContent);
        let message = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::NotifySuccess(message) | Effect::NotifyError(message) => {
                    Some(message.clone())
                }
                _ => None,
            })
            .unwrap_or_default();
        Self {
            kind,
            succeeded,
            message,
            effects,
            dialog_open,
        }
    }
}

/// A dialog plus everything needed to drive it: the command-line stand-in
/// for the "Add Idea" modal.
pub struct UploadSession<S, I, N, C> {
    controller: IngestionController<S, I>,
    dialog: UploadDialog,
    notifier: N,
    invalidation: C,
}

impl<S, I, N, C> UploadSession<S, I, N, C>
where
    S: Submitter,
    I: IdentityProvider,
    N: Notifier,
    C: ContentInvalidation,
{
    pub fn new(controller: IngestionController<S, I>, notifier: N, invalidation: C) -> Self {
        Self {
            controller,
            dialog: UploadDialog::new(),
            notifier,
            invalidation,
        }
    }

    pub fn dialog(&self) -> &UploadDialog {
        &self.dialog
    }

    pub fn invalidation(&self) -> &C {
        &self.invalidation
    }

    pub async fn upload_note(&mut self, title: &str, content: &str) -> AppResult<UploadReport> {
        self.run(ContentDraft::Note(NoteInput::new(title, content))).await
    }

    pub async fn upload_document(&mut self, path: &Path) -> AppResult<UploadReport> {
        let document = DocumentInput::from_path(path).await?;
        self.run(ContentDraft::Document(document)).await
    }

    pub async fn save_link(&mut self, url: &str) -> AppResult<UploadReport> {
        self.run(ContentDraft::Link(LinkInput::new(url))).await
    }

    pub async fn run(&mut self, draft: ContentDraft) -> AppResult<UploadReport> {
        let kind = draft.kind();
        self.dialog.open();
        self.dialog.form_mut(kind).fill(draft)?;
        let effects = self
            .controller
            .submit_form(&mut self.dialog, kind, &self.notifier, &self.invalidation)
            .await?;
        Ok(UploadReport::from_effects(kind, effects, self.dialog.is_open()))
    }
}
