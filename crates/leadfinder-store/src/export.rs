//! CSV export of saved leads.

use leadfinder_core::Lead;

use crate::error::StoreError;

pub const CSV_HEADERS: [&str; 9] = [
    "name", "industry", "address", "website", "email", "phone", "reason", "status", "notes",
];

/// Render `leads` as CSV: one header row, then one row per lead with every
/// value double-quoted and embedded quotes doubled. Rows are `\n`-separated.
///
/// # Errors
///
/// Returns [`StoreError::NothingToExport`] if `leads` is empty.
pub fn export_csv(leads: &[Lead]) -> Result<String, StoreError> {
    if leads.is_empty() {
        return Err(StoreError::NothingToExport);
    }

    let mut rows = Vec::with_capacity(leads.len() + 1);
    rows.push(CSV_HEADERS.join(","));

    for lead in leads {
        let values = [
            lead.name.as_str(),
            lead.industry.as_str(),
            lead.address.as_str(),
            lead.website.as_str(),
            lead.email.as_str(),
            lead.phone.as_str(),
            lead.reason.as_str(),
            lead.status.as_str(),
            lead.notes.as_str(),
        ];
        let row = values
            .iter()
            .map(|v| quote(v))
            .collect::<Vec<_>>()
            .join(",");
        rows.push(row);
    }

    Ok(rows.join("\n"))
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
