//! HTTP client for the Gemini REST API.
//!
//! Wraps `reqwest` with API key handling, request body construction and
//! typed error mapping. One call to [`GeminiClient::generate_content`] is
//! exactly one HTTP request; failures are returned to the caller as-is.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeminiError;
use crate::types::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse, WireRequest};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest slice of a non-JSON error body echoed back in an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Client for the Gemini `generateContent` endpoint of a single model.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// `timeout_secs` of `None` leaves the request without a total timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: Option<u64>) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: Option<u64>,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent("leadfinder/0.1 (lead-discovery)");
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let endpoint = Self::endpoint_url(base_url, model)?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            endpoint,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the prompt and returns the model's text output.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure or timeout.
    /// - [`GeminiError::Api`] if the API answers with a non-2xx status.
    /// - [`GeminiError::Deserialize`] if the response envelope is unreadable.
    /// - [`GeminiError::EmptyResponse`] if no candidate text was returned.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<String, GeminiError> {
        let body = WireRequest::from(request);

        tracing::debug!(
            model = %self.model,
            prompt_chars = request.prompt.len(),
            tools = request.tools.len(),
            temperature = request.temperature,
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &text));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GeminiError::Deserialize {
                context: format!("generateContent(model={})", self.model),
                source: e,
            })?;

        let output = parsed
            .text()
            .ok_or_else(|| GeminiError::EmptyResponse(parsed.empty_reason()))?;

        tracing::debug!(model = %self.model, response_chars = output.len(), "received generateContent response");
        Ok(output)
    }

    /// Builds `{base}/v1beta/models/{model}:generateContent`.
    fn endpoint_url(base_url: &str, model: &str) -> Result<Url, GeminiError> {
        let invalid = |reason: String| GeminiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        base.join(&format!("v1beta/models/{model}:generateContent"))
            .map_err(|e| invalid(e.to_string()))
    }

    /// Maps a non-2xx response to [`GeminiError::Api`], preferring the
    /// message from the JSON error envelope.
    fn api_error(status: reqwest::StatusCode, body: &str) -> GeminiError {
        let message = match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
            Ok(envelope) => envelope
                .error
                .status
                .unwrap_or_else(|| status.to_string()),
            Err(_) if body.trim().is_empty() => status.to_string(),
            Err(_) => body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
        };

        GeminiError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
