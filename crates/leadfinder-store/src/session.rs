//! The current search: its criteria and every lead accumulated across
//! "load more" pages. This is the caller-owned `known` list the pipeline
//! receives on each call.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use leadfinder_core::{FilterCriteria, Lead};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::fs_json::{read_json, write_json};

pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSession {
    pub criteria: FilterCriteria,
    pub leads: Vec<Lead>,
    pub updated_at: DateTime<Utc>,
}

impl SearchSession {
    /// A fresh session holding the first page of a new search.
    #[must_use]
    pub fn new(criteria: FilterCriteria, leads: Vec<Lead>) -> Self {
        Self {
            criteria,
            leads,
            updated_at: Utc::now(),
        }
    }

    /// Append a further page.
    pub fn append(&mut self, page: Vec<Lead>) {
        self.leads.extend(page);
        self.updated_at = Utc::now();
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    /// Load the last search, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Corrupt`] if the session
    /// file exists but cannot be read.
    pub fn load(&self) -> Result<Option<SearchSession>, StoreError> {
        read_json(&self.path)
    }

    /// Replace the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn save(&self, session: &SearchSession) -> Result<(), StoreError> {
        write_json(&self.path, session)
    }
}

#[cfg(test)]
mod tests {
    use leadfinder_core::RawLeadRecord;

    use super::*;

    fn criteria() -> FilterCriteria {
        FilterCriteria {
            location: "Austin, USA".to_owned(),
            district: String::new(),
            industry: "Restaurants".to_owned(),
            website_status: "No Website".to_owned(),
        }
    }

    fn lead(name: &str) -> Lead {
        Lead::from_raw(RawLeadRecord {
            name: name.to_owned(),
            address: "1 Main St".to_owned(),
            ..RawLeadRecord::default()
        })
    }

    #[test]
    fn load_without_prior_search_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SessionStore::new(dir.path()).load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_keeps_criteria_and_leads() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        let mut session = SearchSession::new(criteria(), vec![lead("A")]);
        session.append(vec![lead("B")]);
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().expect("session saved");
        assert_eq!(loaded.criteria, criteria());
        assert_eq!(loaded.leads.len(), 2);
        assert!(loaded.find(&lead("B").id).is_some());
        assert!(loaded.find("missing").is_none());
    }

    #[test]
    fn save_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = SessionStore::new(&nested);
        store
            .save(&SearchSession::new(criteria(), Vec::new()))
            .unwrap();
        assert!(nested.join(SESSION_FILE).exists());
        assert!(!nested.join(format!(".{SESSION_FILE}.tmp")).exists());
    }
}
