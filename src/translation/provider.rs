//! Translation provider adapter
//!
//! The greeter talks to the outside world through [`TranslationProvider`]. The production
//! implementation calls the Google Cloud Translation v3 REST API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::error::ProviderError;

/// One translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateRequest<'a> {
    pub text: &'a str,
    pub source_language: &'a str,
    pub target_language: &'a str,
}

/// External translation service.
///
/// Returns the translated variants in provider order. The greeter only uses the first.
pub trait TranslationProvider: Send + Sync {
    fn translate(&self, request: &TranslateRequest<'_>) -> Result<Vec<String>, ProviderError>;
}

impl<T: TranslationProvider + ?Sized> TranslationProvider for Arc<T> {
    fn translate(&self, request: &TranslateRequest<'_>) -> Result<Vec<String>, ProviderError> {
        (**self).translate(request)
    }
}

impl<T: TranslationProvider + ?Sized> TranslationProvider for Box<T> {
    fn translate(&self, request: &TranslateRequest<'_>) -> Result<Vec<String>, ProviderError> {
        (**self).translate(request)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateTextRequest<'a> {
    contents: [&'a str; 1],
    source_language_code: &'a str,
    target_language_code: &'a str,
    mime_type: &'static str,
}

#[derive(Deserialize)]
struct TranslateTextResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// Cloud Translation API client
pub struct GoogleTranslateClient {
    http: Client,
    api_url: String,
    project_id: String,
    access_token: String,
}

impl GoogleTranslateClient {
    pub fn new(
        api_url: &str,
        project_id: &str,
        access_token: &str,
    ) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ProviderError::Network(format!("failed to create translate client: {}", e)))?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            access_token: access_token.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v3/projects/{}:translateText",
            self.api_url, self.project_id
        )
    }
}

impl TranslationProvider for GoogleTranslateClient {
    fn translate(&self, request: &TranslateRequest<'_>) -> Result<Vec<String>, ProviderError> {
        let body = TranslateTextRequest {
            contents: [request.text],
            source_language_code: request.source_language,
            target_language_code: request.target_language,
            mime_type: "text/plain",
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_failure(status, &text));
        }

        parse_translations(&text)
    }
}

/// Extracts the translated texts from a successful response body
fn parse_translations(body: &str) -> Result<Vec<String>, ProviderError> {
    let parsed: TranslateTextResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    Ok(parsed
        .translations
        .into_iter()
        .map(|translation| translation.translated_text)
        .collect())
}

/// Maps a non-success response onto a provider error
fn classify_failure(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::QuotaExceeded(message),
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => ProviderError::Rejected(message),
        _ => ProviderError::Service {
            status: status.as_u16(),
            message,
        },
    }
}
