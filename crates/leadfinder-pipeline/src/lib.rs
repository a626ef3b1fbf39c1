//! Lead acquisition pipeline.
//!
//! Builds a search prompt from filter criteria, sends it to an inference
//! backend, extracts the JSON lead array embedded in the free-form reply,
//! assigns identities and drops leads the caller already has. The pipeline
//! keeps no state between calls: the caller passes its accumulated leads in
//! on every "load more".

pub mod acquire;
pub mod backend;
pub mod error;
pub mod extract;
pub mod prompt;

pub use acquire::{acquire, ACQUISITION_TEMPERATURE, LEAD_TOOLS};
pub use backend::{BackendError, InferenceBackend, InferenceRequest, SearchTool};
pub use error::{AcquisitionError, ParseError};
pub use extract::extract_leads;
pub use prompt::{build_prompt, MAX_LEADS_PER_PAGE};
