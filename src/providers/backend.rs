use std::sync::Arc;

use reqwest::{
    cookie::Jar,
    multipart::{Form, Part},
};
use sha2::{Digest, Sha256};

use crate::{
    core::{
        config::BackendConfig,
        errors::{AppError, AppResult, SubmissionError},
        types::{ContentKind, ErrorBody},
    },
    ingest::{
        payload::{MultipartPart, PartValue, RequestBody, SubmissionRequest},
        ports::Submitter,
    },
};

/// HTTP client for the content backend. Session cookies from the config are
/// seeded into the cookie jar so every request carries credentials.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

fn checksum_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &config.session_cookie {
            let origin = reqwest::Url::parse(&config.base_url)
                .map_err(|err| AppError::Config(format!("invalid backend url: {err}")))?;
            jar.add_cookie_str(cookie, &origin);
        }

        let mut builder = reqwest::Client::builder().cookie_provider(jar);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| AppError::Network(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn endpoint(&self, request: &SubmissionRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint_path)
    }

    pub async fn send(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
        let kind = request.kind;
        let builder = self.http.post(self.endpoint(request));
        let builder = match &request.body {
            RequestBody::Json(payload) => builder.json(payload),
            RequestBody::Multipart(parts) => builder.multipart(multipart_form(kind, parts)?),
        };

        let response = builder.send().await.map_err(|err| {
            tracing::warn!(
                kind = kind.as_str(),
                timeout = err.is_timeout(),
                "request not delivered: {err}"
            );
            SubmissionError::transport(kind)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // The body may be empty or not JSON; either way fall back to the
        // kind's default message.
        let body = response.text().await.unwrap_or_default();
        let server_message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|parsed| parsed.error);
        if let Some(detail) = &server_message {
            tracing::warn!(kind = kind.as_str(), %status, "backend rejected submission: {detail}");
        }
        Err(SubmissionError::rejected(kind, status.as_u16(), server_message))
    }
}

impl Submitter for BackendClient {
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
        self.send(request).await
    }
}

fn multipart_form(kind: ContentKind, parts: &[MultipartPart]) -> Result<Form, SubmissionError> {
    let mut form = Form::new();
    for part in parts {
        form = match &part.value {
            PartValue::Text(value) => form.text(part.name.clone(), value.clone()),
            PartValue::File {
                file_name,
                mime,
                bytes,
            } => {
                tracing::debug!(
                    file_name = %file_name,
                    size = bytes.len(),
                    checksum = %checksum_bytes(bytes),
                    "attaching file part"
                );
                let file_part = Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(mime)
                    .map_err(|err| {
                        tracing::warn!(kind = kind.as_str(), "invalid part mime {mime}: {err}");
                        SubmissionError::encoding(kind)
                    })?;
                form.part(part.name.clone(), file_part)
            }
        };
    }
    Ok(form)
}
