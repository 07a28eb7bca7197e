use std::time::Duration;

use crate::core::{
    errors::{AppError, AppResult},
    types::ContentKind,
};

pub const BACKEND_URL_ENV: &str = "IDEAVAULT_BACKEND_URL";
pub const SESSION_COOKIE_ENV: &str = "IDEAVAULT_SESSION_COOKIE";
pub const TIMEOUT_SECS_ENV: &str = "IDEAVAULT_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub session_cookie: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        Ok(Self {
            base_url,
            session_cookie: None,
            request_timeout: None,
        })
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn from_env() -> AppResult<Self> {
        let base_url = std::env::var(BACKEND_URL_ENV)
            .map_err(|_| AppError::Config(format!("{BACKEND_URL_ENV} is not set")))?;
        Self::from_parts(
            &base_url,
            std::env::var(SESSION_COOKIE_ENV).ok(),
            std::env::var(TIMEOUT_SECS_ENV).ok(),
        )
    }

    pub fn from_parts(
        base_url: &str,
        session_cookie: Option<String>,
        timeout_secs: Option<String>,
    ) -> AppResult<Self> {
        let mut config = Self::new(base_url)?;
        config.session_cookie = session_cookie.filter(|cookie| !cookie.trim().is_empty());
        config.request_timeout = match timeout_secs.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .map_err(|err| AppError::Config(format!("{TIMEOUT_SECS_ENV}={raw}: {err}")))?;
                Some(Duration::from_secs(secs))
            }
        };
        Ok(config)
    }

    pub fn endpoint(&self, kind: ContentKind) -> String {
        format!("{}{}", self.base_url, kind.endpoint_path())
    }
}

fn normalize_base_url(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AppError::Config("backend url cannot be empty".to_string()));
    }
    reqwest::Url::parse(trimmed)
        .map_err(|err| AppError::Config(format!("invalid backend url {trimmed}: {err}")))?;
    Ok(trimmed.to_string())
}
