//! Saved leads: a JSON file mapping the fixed key `savedLeads` to the
//! serialized lead array. Newest saves come first.

use std::path::{Path, PathBuf};

use leadfinder_core::{Lead, LeadStatus};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::fs_json::{read_json, write_json};

pub const SAVED_LEADS_FILE: &str = "saved_leads.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedLeadsFile {
    #[serde(rename = "savedLeads", default)]
    saved_leads: Vec<Lead>,
}

/// Result of [`SavedLeadStore::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Removed,
}

pub struct SavedLeadStore {
    path: PathBuf,
}

impl SavedLeadStore {
    /// Store backed by `saved_leads.json` inside `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SAVED_LEADS_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all saved leads. A missing file is an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read and
    /// [`StoreError::Corrupt`] if it is not a valid saved-leads document.
    pub fn load(&self) -> Result<Vec<Lead>, StoreError> {
        Ok(read_json::<SavedLeadsFile>(&self.path)?
            .unwrap_or_default()
            .saved_leads)
    }

    fn persist(&self, leads: Vec<Lead>) -> Result<(), StoreError> {
        write_json(&self.path, &SavedLeadsFile { saved_leads: leads })
    }

    /// Save `lead`, or remove it if a lead with the same id is already saved.
    ///
    /// Newly saved leads go to the front with notes cleared and status reset
    /// to `Not Contacted`.
    ///
    /// # Errors
    ///
    /// Propagates load and write failures.
    pub fn toggle(&self, lead: &Lead) -> Result<SaveOutcome, StoreError> {
        let mut leads = self.load()?;

        let outcome = if leads.iter().any(|saved| saved.id == lead.id) {
            leads.retain(|saved| saved.id != lead.id);
            SaveOutcome::Removed
        } else {
            let mut fresh = lead.clone();
            fresh.notes.clear();
            fresh.status = LeadStatus::NotContacted;
            leads.insert(0, fresh);
            SaveOutcome::Saved
        };

        self.persist(leads)?;
        tracing::debug!(id = %lead.id, ?outcome, "toggled saved lead");
        Ok(outcome)
    }

    /// Update the status and/or notes of a saved lead and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no saved lead has `id`, and
    /// propagates load and write failures.
    pub fn update(
        &self,
        id: &str,
        status: Option<LeadStatus>,
        notes: Option<String>,
    ) -> Result<Lead, StoreError> {
        let mut leads = self.load()?;

        let lead = leads
            .iter_mut()
            .find(|saved| saved.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(status) = status {
            lead.status = status;
        }
        if let Some(notes) = notes {
            lead.notes = notes;
        }
        let updated = lead.clone();

        self.persist(leads)?;
        Ok(updated)
    }
}
