//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Sends a single prompt with optional grounding tools and returns the
//! model's free-form text. The client performs no retries.

pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use types::{GenerateContentRequest, Tool};
