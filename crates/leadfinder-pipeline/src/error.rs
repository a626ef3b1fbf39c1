use thiserror::Error;

use crate::backend::BackendError;

/// The backend reply could not be turned into a lead array.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A fenced `json` block was found but its contents are not valid JSON,
    /// usually a truncated or corrupted reply.
    #[error("malformed JSON block")]
    MalformedBlock(#[source] serde_json::Error),

    /// No fenced block, and the whole body is not JSON either: the backend
    /// ignored the output format.
    #[error("no JSON block and body not parseable")]
    Unparseable(#[source] serde_json::Error),

    #[error("payload is not an array")]
    NotAnArray,

    /// The first array element has no `name` key.
    #[error("missing required field")]
    MissingRequiredField,
}

/// The only error returned by [`crate::acquire`].
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("Failed to fetch leads: {0}")]
    Parse(#[from] ParseError),

    /// Transport or API failure while calling the inference backend.
    #[error("Failed to fetch leads: {0}")]
    Backend(#[source] BackendError),
}

impl AcquisitionError {
    #[must_use]
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            AcquisitionError::Parse(e) => Some(e),
            AcquisitionError::Backend(_) => None,
        }
    }
}
