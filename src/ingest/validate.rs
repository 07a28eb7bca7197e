use thiserror::Error;

use crate::core::types::{
    ContentDraft, DocumentInput, LinkInput, NoteInput, MAX_DOCUMENT_BYTES, PDF_MIME,
};

/// Client-side rule violation. Display strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Only PDF files are allowed!")]
    WrongType { declared: String },
    #[error("File size must be less than 10MB!")]
    TooLarge { size_bytes: u64 },
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::WrongType { .. } => "WRONG_TYPE",
            Self::TooLarge { .. } => "TOO_LARGE",
        }
    }
}

/// Input that passed its kind's rules. Only constructed by the validators, so
/// holding one proves validation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validated<'a> {
    Note(&'a NoteInput),
    Document(&'a DocumentInput),
    Link(&'a LinkInput),
}

pub fn validate(draft: &ContentDraft) -> Result<Validated<'_>, ValidationError> {
    match draft {
        ContentDraft::Note(note) => validate_note(note),
        ContentDraft::Document(document) => validate_document(document),
        ContentDraft::Link(link) => validate_link(link),
    }
}

pub fn validate_note(note: &NoteInput) -> Result<Validated<'_>, ValidationError> {
    require("Note title", &note.title)?;
    require("Note content", &note.content)?;
    Ok(Validated::Note(note))
}

/// Type is checked before size, so an oversized PNG reports the type.
pub fn validate_document(document: &DocumentInput) -> Result<Validated<'_>, ValidationError> {
    if document.is_empty() {
        return Err(ValidationError::MissingField("Document file"));
    }
    if document.declared_type != PDF_MIME {
        return Err(ValidationError::WrongType {
            declared: document.declared_type.clone(),
        });
    }
    if document.size_bytes > MAX_DOCUMENT_BYTES {
        return Err(ValidationError::TooLarge {
            size_bytes: document.size_bytes,
        });
    }
    Ok(Validated::Document(document))
}

pub fn validate_link(link: &LinkInput) -> Result<Validated<'_>, ValidationError> {
    require("URL", &link.url)?;
    Ok(Validated::Link(link))
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
