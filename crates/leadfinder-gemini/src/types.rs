//! Gemini `generateContent` request and response types.
//!
//! [`GenerateContentRequest`] is the caller-facing request; the `Wire*`
//! types model the JSON body actually sent. Response types only cover the
//! fields the client reads.

use serde::{Deserialize, Serialize};

/// Grounding tools the model may call while generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    GoogleSearch,
    GoogleMaps,
}

/// A single-turn text prompt with tool and sampling configuration.
#[derive(Debug, Clone)]
pub struct GenerateContentRequest {
    pub prompt: String,
    pub tools: Vec<Tool>,
    pub temperature: f32,
}

// ---------------------------------------------------------------------------
// Request body
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRequest<'a> {
    contents: [WireContent<'a>; 1],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    role: &'static str,
    parts: [WirePart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

/// One entry of the `tools` array: exactly one of the fields is set,
/// serialized as `{"googleSearch": {}}` or `{"googleMaps": {}}`.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTool {
    #[serde(skip_serializing_if = "Option::is_none")]
    google_search: Option<Empty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    google_maps: Option<Empty>,
}

#[derive(Debug, Serialize)]
struct Empty {}

#[derive(Debug, Serialize)]
struct WireGenerationConfig {
    temperature: f32,
}

impl<'a> From<&'a GenerateContentRequest> for WireRequest<'a> {
    fn from(request: &'a GenerateContentRequest) -> Self {
        let tools = request
            .tools
            .iter()
            .map(|tool| match tool {
                Tool::GoogleSearch => WireTool {
                    google_search: Some(Empty {}),
                    ..WireTool::default()
                },
                Tool::GoogleMaps => WireTool {
                    google_maps: Some(Empty {}),
                    ..WireTool::default()
                },
            })
            .collect();

        Self {
            contents: [WireContent {
                role: "user",
                parts: [WirePart {
                    text: &request.prompt,
                }],
            }],
            tools,
            generation_config: WireGenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response body
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` when the
    /// response carries no text part at all.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let mut texts = parts.iter().filter_map(|p| p.text.as_deref()).peekable();
        texts.peek()?;
        Some(texts.collect())
    }

    /// Best available explanation for a response without text.
    #[must_use]
    pub fn empty_reason(&self) -> String {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return format!("prompt blocked ({reason})");
        }
        match self.candidates.first() {
            None => "no candidates".to_string(),
            Some(candidate) => match candidate.finish_reason.as_deref() {
                Some(reason) => format!("finish reason {reason}"),
                None => "candidate has no text".to_string(),
            },
        }
    }
}

/// Error envelope returned with non-2xx statuses: `{"error": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
