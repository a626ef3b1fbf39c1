//! Pulls the lead array out of a free-form backend reply.
//!
//! Lenient about where the JSON sits (first ```` ```json ```` block, else the
//! whole body) but strict about what it is: anything that is not an array
//! whose first element has a `name` key is rejected.

use std::sync::LazyLock;

use leadfinder_core::RawLeadRecord;
use regex::Regex;
use serde_json::Value;

use crate::error::ParseError;

/// First ```` ```json ```` fenced block, non-greedy, interior trimmed.
static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("valid fenced json regex")
});

/// Extract the lead records embedded in `response_text`.
///
/// Only the first element is shape-checked; later elements are converted
/// leniently with missing fields left empty.
///
/// # Errors
///
/// - [`ParseError::MalformedBlock`] if a fenced block exists but is not JSON.
/// - [`ParseError::Unparseable`] if there is no fenced block and the whole
///   body is not JSON.
/// - [`ParseError::NotAnArray`] if the JSON value is not an array.
/// - [`ParseError::MissingRequiredField`] if the first element has no `name`.
pub fn extract_leads(response_text: &str) -> Result<Vec<RawLeadRecord>, ParseError> {
    // An empty block counts as no block at all.
    let fenced = FENCED_JSON
        .captures(response_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|block| !block.is_empty());

    let candidate = fenced.unwrap_or(response_text);

    let payload: Value = serde_json::from_str(candidate).map_err(|e| {
        if fenced.is_some() {
            ParseError::MalformedBlock(e)
        } else {
            ParseError::Unparseable(e)
        }
    })?;

    let Value::Array(items) = payload else {
        return Err(ParseError::NotAnArray);
    };

    if let Some(first) = items.first() {
        if first.get("name").is_none() {
            return Err(ParseError::MissingRequiredField);
        }
    }

    Ok(items.iter().map(RawLeadRecord::from_value).collect())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
