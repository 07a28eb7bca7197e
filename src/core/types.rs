use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::AppResult;

pub const PDF_MIME: &str = "application/pdf";
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Note,
    Document,
    Link,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Document => "document",
            Self::Link => "link",
        }
    }

    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::Note => "/api/v1/notes",
            Self::Document => "/api/v1/documents",
            Self::Link => "/api/v1/link",
        }
    }

    pub fn default_failure_message(&self) -> &'static str {
        match self {
            Self::Note => "Failed to upload note",
            Self::Document => "Failed to upload document",
            Self::Link => "Failed to save link",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Note => "Note uploaded successfully!",
            Self::Document => "Document uploaded successfully!",
            Self::Link => "Link saved successfully!",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Note => "Upload Note",
            Self::Document => "Upload Document",
            Self::Link => "Upload Link",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A file picked for upload. `size_bytes` is what the picker reported and is
/// the value the size limit is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInput {
    pub file_name: String,
    pub declared_type: String,
    pub size_bytes: u64,
    pub bytes: Vec<u8>,
}

impl DocumentInput {
    pub fn new(
        file_name: impl Into<String>,
        declared_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            declared_type: declared_type.into(),
            size_bytes: bytes.len() as u64,
            bytes,
        }
    }

    /// Size and type come from metadata and the extension. Contents are only
    /// read when the file can pass validation, so an oversized or non-PDF file
    /// is never loaded.
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let metadata = tokio::fs::metadata(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "document".to_string());
        let declared_type = mime_for_path(path);
        let size_bytes = metadata.len();
        let bytes = if declared_type == PDF_MIME && size_bytes <= MAX_DOCUMENT_BYTES {
            tokio::fs::read(path).await?
        } else {
            Vec::new()
        };
        Ok(Self {
            file_name,
            declared_type: declared_type.to_string(),
            size_bytes,
            bytes,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.bytes.is_empty()
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => PDF_MIME,
        _ => OCTET_STREAM_MIME,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInput {
    pub url: String,
}

impl LinkInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: Option<String>,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }

    pub fn anonymous() -> Self {
        Self { id: None }
    }

    /// Identifier as sent on the wire; an absent user becomes `""`.
    pub fn wire_id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Success,
    Failure { message: String },
}

/// Structured failure body returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Raw form input for one submission, one variant per content kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentDraft {
    Note(NoteInput),
    Document(DocumentInput),
    Link(LinkInput),
}

impl ContentDraft {
    pub fn empty(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Note => Self::Note(NoteInput::default()),
            ContentKind::Document => Self::Document(DocumentInput::default()),
            ContentKind::Link => Self::Link(LinkInput::default()),
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Note(_) => ContentKind::Note,
            Self::Document(_) => ContentKind::Document,
            Self::Link(_) => ContentKind::Link,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Note(note) => note.title.is_empty() && note.content.is_empty(),
            Self::Document(document) => document.is_empty(),
            Self::Link(link) => link.url.is_empty(),
        }
    }
}
