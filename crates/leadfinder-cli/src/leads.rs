//! Search command handlers: a fresh search, "load more", and the current
//! result list. The session file holds the accumulated leads that every
//! "load more" passes back to the pipeline as already known.

use std::path::Path;

use anyhow::Context;
use leadfinder_core::{FilterCriteria, Lead};
use leadfinder_pipeline::{acquire, InferenceBackend};
use leadfinder_store::{SavedLeadStore, SearchSession, SessionStore};

/// Run a new search and replace the stored session with its first page.
///
/// # Errors
///
/// Returns an error if acquisition fails or the session cannot be written.
/// The previous session is left untouched when acquisition fails.
pub(crate) async fn run_search<B: InferenceBackend>(
    backend: &B,
    data_dir: &Path,
    criteria: FilterCriteria,
) -> anyhow::Result<Vec<Lead>> {
    let leads = acquire(backend, &criteria, &[]).await?;

    let session = SearchSession::new(criteria, leads.clone());
    SessionStore::new(data_dir)
        .save(&session)
        .context("failed to store search results")?;

    if leads.is_empty() {
        println!("no leads found; try a different location or industry");
    } else {
        print_leads(&leads, &saved_ids(data_dir)?);
    }
    Ok(leads)
}

/// Fetch another page for the stored search and append the net-new leads.
///
/// # Errors
///
/// Returns an error if there is no prior search, acquisition fails, or the
/// session cannot be written.
pub(crate) async fn run_more<B: InferenceBackend>(
    backend: &B,
    data_dir: &Path,
) -> anyhow::Result<Vec<Lead>> {
    let store = SessionStore::new(data_dir);
    let mut session = store
        .load()?
        .ok_or_else(|| anyhow::anyhow!("no search to continue; run `search` first"))?;

    let page = acquire(backend, &session.criteria, &session.leads).await?;

    session.append(page.clone());
    store
        .save(&session)
        .context("failed to store search results")?;

    if page.is_empty() {
        println!("no new leads found ({} total)", session.leads.len());
    } else {
        print_leads(&page, &saved_ids(data_dir)?);
        println!();
        println!("{} new, {} total", page.len(), session.leads.len());
    }
    Ok(page)
}

/// Print every lead accumulated by the stored search.
///
/// # Errors
///
/// Returns an error if the session or saved-leads file cannot be read.
pub(crate) fn run_results(data_dir: &Path) -> anyhow::Result<()> {
    let Some(session) = SessionStore::new(data_dir).load()? else {
        println!("no search yet; run `search` first");
        return Ok(());
    };

    let criteria = &session.criteria;
    let district = if criteria.district.is_empty() {
        String::new()
    } else {
        format!(" / {}", criteria.district)
    };
    println!(
        "{} in {}{} ({}), updated {}",
        criteria.industry,
        criteria.location,
        district,
        criteria.website_status,
        session.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();

    if session.leads.is_empty() {
        println!("no leads found; try `more` or a different search");
    } else {
        print_leads(&session.leads, &saved_ids(data_dir)?);
    }
    Ok(())
}

fn saved_ids(data_dir: &Path) -> anyhow::Result<Vec<String>> {
    Ok(SavedLeadStore::new(data_dir)
        .load()?
        .into_iter()
        .map(|lead| lead.id)
        .collect())
}

/// Print leads as blocks; `*` marks leads already saved.
fn print_leads(leads: &[Lead], saved: &[String]) {
    for (i, lead) in leads.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let marker = if saved.contains(&lead.id) { "*" } else { " " };
        println!("{marker} {}  [{}]", lead.name, lead.id);
        println!("    {}", lead.address);
        println!(
            "    website: {}  email: {}  phone: {}",
            or_dash(&lead.website),
            or_dash(&lead.email),
            or_dash(&lead.phone)
        );
        println!("    {}", lead.reason);
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
