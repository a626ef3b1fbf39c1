//! The seam between the pipeline and the generative-AI service.

use std::future::Future;

use leadfinder_gemini::{GeminiClient, GenerateContentRequest, Tool};

/// Any failure raised by a backend call, kept opaque to the pipeline.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Lookup capabilities the backend may use while answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTool {
    WebSearch,
    MapsLookup,
}

/// One prompt plus its tool and sampling configuration.
#[derive(Debug, Clone, Copy)]
pub struct InferenceRequest<'a> {
    pub prompt: &'a str,
    pub tools: &'a [SearchTool],
    pub temperature: f32,
}

/// A request/response text generator. One call is one outbound request.
pub trait InferenceBackend {
    fn generate(
        &self,
        request: &InferenceRequest<'_>,
    ) -> impl Future<Output = Result<String, BackendError>> + Send;
}

impl InferenceBackend for GeminiClient {
    async fn generate(&self, request: &InferenceRequest<'_>) -> Result<String, BackendError> {
        let tools = request
            .tools
            .iter()
            .map(|tool| match tool {
                SearchTool::WebSearch => Tool::GoogleSearch,
                SearchTool::MapsLookup => Tool::GoogleMaps,
            })
            .collect();

        let request = GenerateContentRequest {
            prompt: request.prompt.to_owned(),
            tools,
            temperature: request.temperature,
        };

        Ok(self.generate_content(&request).await?)
    }
}
