//! Lead records: search criteria, the untrusted backend shape, and the
//! persisted lead shape consumed by storage and export.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CoreError;

/// Caller-supplied search constraints. All fields are opaque to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub location: String,
    #[serde(default)]
    pub district: String,
    pub industry: String,
    pub website_status: String,
}

/// One lead as emitted by the inference backend, before identity is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLeadRecord {
    pub name: String,
    pub industry: String,
    pub address: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub reason: String,
}

impl RawLeadRecord {
    /// Keys the backend is asked to emit for every lead object.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "name", "industry", "address", "website", "email", "phone", "reason",
    ];

    /// Convert one element of a backend payload into a record.
    ///
    /// Strings are taken verbatim and numbers or booleans are stringified.
    /// Anything else (absent, null, nested) becomes an empty string. Extra
    /// keys are ignored, so this never fails.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| match value.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            _ => String::new(),
        };

        Self {
            name: field("name"),
            industry: field("industry"),
            address: field("address"),
            website: field("website"),
            email: field("email"),
            phone: field("phone"),
            reason: field("reason"),
        }
    }
}

/// Outreach lifecycle of a lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    #[serde(rename = "Not Contacted")]
    NotContacted,
    #[serde(rename = "Contacted")]
    Contacted,
    #[serde(rename = "Converted")]
    Converted,
}

impl LeadStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::NotContacted => "Not Contacted",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Converted => "Converted",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = CoreError;

    /// Accepts the display form (`Not Contacted`) or a kebab/snake form
    /// (`not-contacted`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "not contacted" => Ok(LeadStatus::NotContacted),
            "contacted" => Ok(LeadStatus::Contacted),
            "converted" => Ok(LeadStatus::Converted),
            _ => Err(CoreError::InvalidStatus(s.to_string())),
        }
    }
}

/// A business lead with its derived identity and lifecycle fields.
///
/// Field names and order are relied on by the saved-leads file and CSV export.
/// Fields missing from a stored record load as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub address: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub reason: String,
    pub status: LeadStatus,
    pub notes: String,
}

impl Lead {
    /// Build a fresh lead from a backend record: identity is derived from
    /// name and address, status starts at `Not Contacted`, notes are empty.
    #[must_use]
    pub fn from_raw(raw: RawLeadRecord) -> Self {
        let id = lead_id(&raw.name, &raw.address);
        Self {
            id,
            name: raw.name,
            industry: raw.industry,
            address: raw.address,
            website: raw.website,
            email: raw.email,
            phone: raw.phone,
            reason: raw.reason,
            status: LeadStatus::NotContacted,
            notes: String::new(),
        }
    }
}

/// Derive the deduplication key for a business from its name and address.
///
/// Lower-cases, keeps alphanumerics, turns whitespace and `-` runs into a
/// single `-`, and drops all other punctuation.
#[must_use]
pub fn lead_id(name: &str, address: &str) -> String {
    let mut id = String::with_capacity(name.len() + address.len() + 1);
    let mut pending_separator = false;

    for c in name.chars().chain(std::iter::once(' ')).chain(address.chars()) {
        if c.is_alphanumeric() {
            if pending_separator && !id.is_empty() {
                id.push('-');
            }
            pending_separator = false;
            id.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
    }

    id
}

#[cfg(test)]
#[path = "lead_test.rs"]
mod tests;
