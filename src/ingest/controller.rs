use uuid::Uuid;

use crate::{
    core::{
        errors::{AppError, AppResult},
        types::{ContentDraft, ContentKind, SubmissionOutcome, UserIdentity},
    },
    ingest::{
        effects::{dispatch, effects_for_outcome, Effect},
        payload::build,
        ports::{ContentInvalidation, IdentityProvider, Notifier, Submitter},
        validate::validate,
    },
};

pub const SUBMITTING_LABEL: &str = "Uploading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

/// One tab of the upload dialog: its current field values and whether a
/// submission is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentForm {
    draft: ContentDraft,
    phase: FormPhase,
}

impl ContentForm {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            draft: ContentDraft::empty(kind),
            phase: FormPhase::Idle,
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.draft.kind()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &ContentDraft {
        &self.draft
    }

    /// Replaces the field values. The variant must match the form's kind.
    pub fn fill(&mut self, draft: ContentDraft) -> AppResult<()> {
        if draft.kind() != self.kind() {
            return Err(AppError::InvalidInput(format!(
                "{} form cannot hold {} input",
                self.kind().as_str(),
                draft.kind().as_str()
            )));
        }
        self.draft = draft;
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => self.kind().submit_label(),
            FormPhase::Submitting => SUBMITTING_LABEL,
        }
    }

    pub fn reset(&mut self) {
        self.draft = ContentDraft::empty(self.kind());
    }

    fn begin_submit(&mut self) -> AppResult<ContentDraft> {
        if !self.can_submit() {
            return Err(AppError::InvalidInput(format!(
                "{} submission already in flight",
                self.kind().as_str()
            )));
        }
        self.phase = FormPhase::Submitting;
        Ok(self.draft.clone())
    }

    fn finish_submit(&mut self) {
        self.phase = FormPhase::Idle;
    }
}

/// The shared modal holding one form per content kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDialog {
    open: bool,
    note: ContentForm,
    document: ContentForm,
    link: ContentForm,
}

impl UploadDialog {
    pub fn new() -> Self {
        Self {
            open: false,
            note: ContentForm::new(ContentKind::Note),
            document: ContentForm::new(ContentKind::Document),
            link: ContentForm::new(ContentKind::Link),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn form(&self, kind: ContentKind) -> &ContentForm {
        match kind {
            ContentKind::Note => &self.note,
            ContentKind::Document => &self.document,
            ContentKind::Link => &self.link,
        }
    }

    pub fn form_mut(&mut self, kind: ContentKind) -> &mut ContentForm {
        match kind {
            ContentKind::Note => &mut self.note,
            ContentKind::Document => &mut self.document,
            ContentKind::Link => &mut self.link,
        }
    }

    /// Moves the kind's form to `Submitting` and hands back a snapshot of
    /// its fields. Fails if that form already has a submission in flight.
    pub fn begin_submit(&mut self, kind: ContentKind) -> AppResult<ContentDraft> {
        self.form_mut(kind).begin_submit()
    }

    /// Applies the effects of a finished submission and returns the form to
    /// `Idle`. Effects still apply if the dialog was closed in the meantime.
    pub fn complete_submit<N, C>(
        &mut self,
        kind: ContentKind,
        effects: &[Effect],
        notifier: &N,
        invalidation: &C,
    ) where
        N: Notifier + ?Sized,
        C: ContentInvalidation + ?Sized,
    {
        dispatch(effects, self, notifier, invalidation);
        self.form_mut(kind).finish_submit();
    }
}

impl Default for UploadDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate, build, submit, and turn the outcome into effects. Generic over
/// the content kind; the kind only selects which rules and payload apply.
#[derive(Debug, Clone)]
pub struct IngestionController<S, I> {
    submitter: S,
    identity: I,
}

impl<S, I> IngestionController<S, I>
where
    S: Submitter,
    I: IdentityProvider,
{
    pub fn new(submitter: S, identity: I) -> Self {
        Self {
            submitter,
            identity,
        }
    }

    pub async fn ingest(&self, draft: &ContentDraft) -> Vec<Effect> {
        let kind = draft.kind();
        let validated = match validate(draft) {
            Ok(validated) => validated,
            Err(err) => {
                tracing::debug!(
                    kind = kind.as_str(),
                    code = err.code(),
                    "validation failed: {err}"
                );
                return vec![Effect::NotifyError(err.to_string())];
            }
        };

        let user = self.identity.current_user().unwrap_or_else(UserIdentity::anonymous);
        if user.id.is_none() {
            tracing::warn!(kind = kind.as_str(), "no current user, submitting with empty user id");
        }
        let request = build(validated, user.wire_id());

        let attempt_id = Uuid::new_v4();
        tracing::info!(
            %attempt_id,
            kind = kind.as_str(),
            endpoint = request.endpoint_path,
            "submitting content"
        );
        let result = self.submitter.submit(&request).await;
        match &result {
            Ok(()) => tracing::info!(%attempt_id, kind = kind.as_str(), "submission accepted"),
            Err(err) => tracing::warn!(
                %attempt_id,
                kind = kind.as_str(),
                code = err.code(),
                status = ?err.status,
                detail = ?err.server_message,
                "submission failed"
            ),
        }

        effects_for_outcome(kind, &SubmissionOutcome::from(result))
    }

    /// Runs one full submit cycle for the dialog's `kind` form.
    ///
    /// The dialog stays mutably borrowed until the submission resolves, so
    /// callers that need to close the dialog or submit another kind in the
    /// meantime should drive `UploadDialog::begin_submit`, `ingest` and
    /// `UploadDialog::complete_submit` themselves.
    pub async fn submit_form<N, C>(
        &self,
        dialog: &mut UploadDialog,
        kind: ContentKind,
        notifier: &N,
        invalidation: &C,
    ) -> AppResult<Vec<Effect>>
    where
        N: Notifier + ?Sized,
        C: ContentInvalidation + ?Sized,
    {
        let draft = dialog.begin_submit(kind)?;
        let effects = self.ingest(&draft).await;
        dialog.complete_submit(kind, &effects, notifier, invalidation);
        Ok(effects)
    }
}
