//! Local persistence for the lead finder: saved leads with their outreach
//! status and notes, the current search session, and CSV export.

pub mod error;
pub mod export;
pub mod saved;
pub mod session;

mod fs_json;

pub use error::StoreError;
pub use export::export_csv;
pub use saved::{SaveOutcome, SavedLeadStore};
pub use session::{SearchSession, SessionStore};
