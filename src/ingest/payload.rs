use serde_json::Value;

use crate::{core::types::ContentKind, ingest::validate::Validated};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File {
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPart {
    pub name: String,
    pub value: PartValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Json(Value),
    Multipart(Vec<MultipartPart>),
}

impl RequestBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => JSON_CONTENT_TYPE,
            Self::Multipart(_) => MULTIPART_CONTENT_TYPE,
        }
    }

    pub fn part(&self, name: &str) -> Option<&PartValue> {
        match self {
            Self::Json(_) => None,
            Self::Multipart(parts) => parts
                .iter()
                .find(|part| part.name == name)
                .map(|part| &part.value),
        }
    }
}

/// One submit attempt, fully described before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub kind: ContentKind,
    pub endpoint_path: &'static str,
    pub body: RequestBody,
    pub credentials_included: bool,
}

impl SubmissionRequest {
    fn new(kind: ContentKind, body: RequestBody) -> Self {
        Self {
            kind,
            endpoint_path: kind.endpoint_path(),
            body,
            credentials_included: true,
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.body.content_type()
    }
}

pub fn build(input: Validated<'_>, user_id: &str) -> SubmissionRequest {
    match input {
        Validated::Note(note) => SubmissionRequest::new(
            ContentKind::Note,
            RequestBody::Json(serde_json::json!({
                "title": note.title,
                "content": note.content,
                "userId": user_id,
            })),
        ),
        Validated::Document(document) => SubmissionRequest::new(
            ContentKind::Document,
            RequestBody::Multipart(vec![
                MultipartPart {
                    name: "file".to_string(),
                    value: PartValue::File {
                        file_name: document.file_name.clone(),
                        mime: document.declared_type.clone(),
                        bytes: document.bytes.clone(),
                    },
                },
                MultipartPart {
                    name: "userId".to_string(),
                    value: PartValue::Text(user_id.to_string()),
                },
            ]),
        ),
        Validated::Link(link) => SubmissionRequest::new(
            ContentKind::Link,
            RequestBody::Json(serde_json::json!({
                "url": link.url,
                "userId": user_id,
            })),
        ),
    }
}
