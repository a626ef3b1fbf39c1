//! Saved-lead command handlers: toggling, listing, outreach tracking and
//! CSV export.

use std::path::Path;

use anyhow::Context;
use leadfinder_core::{Lead, LeadStatus};
use leadfinder_store::{export_csv, SaveOutcome, SavedLeadStore, SessionStore, StoreError};

/// Toggle the saved state of a lead.
///
/// The lead is looked up in the current results first, then among saved
/// leads so a lead can be unsaved after a newer search replaced the results.
///
/// # Errors
///
/// Returns an error if the id matches neither list or the stores fail.
pub(crate) fn run_save(data_dir: &Path, id: &str) -> anyhow::Result<SaveOutcome> {
    let store = SavedLeadStore::new(data_dir);

    let from_session = SessionStore::new(data_dir)
        .load()?
        .and_then(|session| session.find(id).cloned());
    let lead = match from_session {
        Some(lead) => lead,
        None => store
            .load()?
            .into_iter()
            .find(|lead| lead.id == id)
            .ok_or_else(|| anyhow::anyhow!("lead '{id}' not found; run `results` to list ids"))?,
    };

    let outcome = store.toggle(&lead)?;
    match outcome {
        SaveOutcome::Saved => println!("saved {}", lead.name),
        SaveOutcome::Removed => println!("removed {} from saved leads", lead.name),
    }
    Ok(outcome)
}

/// List saved leads with their outreach status and notes.
///
/// # Errors
///
/// Returns an error if the saved-leads file cannot be read.
pub(crate) fn run_saved(data_dir: &Path) -> anyhow::Result<()> {
    let leads = SavedLeadStore::new(data_dir).load()?;
    if leads.is_empty() {
        println!("no saved leads; use `save <ID>` on a search result");
        return Ok(());
    }

    println!("{:<15}{:<32}ID", "STATUS", "NAME");
    for lead in &leads {
        println!(
            "{:<15}{:<32}{}",
            lead.status.as_str(),
            truncate(&lead.name, 30),
            lead.id
        );
        if !lead.notes.is_empty() {
            println!("{:<15}notes: {}", "", lead.notes);
        }
    }
    Ok(())
}

/// Set the outreach status of a saved lead.
///
/// # Errors
///
/// Returns an error if the lead is not saved or the store fails.
pub(crate) fn run_status(data_dir: &Path, id: &str, status: LeadStatus) -> anyhow::Result<Lead> {
    let lead = SavedLeadStore::new(data_dir)
        .update(id, Some(status), None)
        .map_err(not_saved_hint)?;
    println!("{} is now {}", lead.name, lead.status);
    Ok(lead)
}

/// Replace the notes on a saved lead.
///
/// # Errors
///
/// Returns an error if the lead is not saved or the store fails.
pub(crate) fn run_notes(data_dir: &Path, id: &str, text: String) -> anyhow::Result<Lead> {
    let lead = SavedLeadStore::new(data_dir)
        .update(id, None, Some(text))
        .map_err(not_saved_hint)?;
    println!("updated notes for {}", lead.name);
    Ok(lead)
}

/// Write all saved leads to `output` as CSV.
///
/// # Errors
///
/// Returns an error if there are no saved leads or the file cannot be written.
pub(crate) fn run_export(data_dir: &Path, output: &Path) -> anyhow::Result<usize> {
    let leads = SavedLeadStore::new(data_dir).load()?;
    let csv = export_csv(&leads)?;
    std::fs::write(output, csv)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("exported {} leads to {}", leads.len(), output.display());
    Ok(leads.len())
}

fn not_saved_hint(err: StoreError) -> anyhow::Error {
    match err {
        StoreError::NotFound(id) => {
            anyhow::anyhow!("lead '{id}' is not saved; run `saved` to list saved ids")
        }
        other => other.into(),
    }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        format!("{}...", value.chars().take(max - 3).collect::<String>())
    } else {
        value.to_string()
    }
}
