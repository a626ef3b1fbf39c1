//! Instruction text for the inference backend.
//!
//! The backend is a plain text generator; the output contract spelled out
//! here (fenced JSON array, fixed keys, bounded size, worked example) is the
//! only thing that makes its reply machine-readable.

use leadfinder_core::{FilterCriteria, Lead, RawLeadRecord};

/// Upper bound on leads requested per call.
pub const MAX_LEADS_PER_PAGE: usize = 10;

const EXAMPLE_LEAD: &str = r#"  {
    "name": "Example Business Name",
    "industry": "Restaurants",
    "address": "123 Main St, Anytown, USA",
    "website": "http://example.com",
    "email": "contact@example.com",
    "phone": "555-123-4567",
    "reason": "The website design is from the early 2000s and is not mobile-friendly."
  }"#;

/// Build the search prompt for one page of results.
///
/// Every criteria field is embedded verbatim; a blank district leaves its line
/// out. When `known` is non-empty the prompt lists those businesses and asks
/// for different ones, since the backend keeps no memory between calls.
#[must_use]
pub fn build_prompt(criteria: &FilterCriteria, known: &[Lead]) -> String {
    let mut prompt = String::with_capacity(2048 + known.len() * 64);

    prompt.push_str(
        "Act as an expert lead generation assistant. Find business leads for a freelance web developer matching these criteria:\n",
    );
    prompt.push_str(&format!("- Location: {}\n", criteria.location));
    if !criteria.district.trim().is_empty() {
        prompt.push_str(&format!("- District / Neighborhood: {}\n", criteria.district));
    }
    prompt.push_str(&format!("- Industry: {}\n", criteria.industry));
    prompt.push_str(&format!("- Website Status: {}\n", criteria.website_status));

    if !known.is_empty() {
        prompt.push_str(&exclusion_section(known));
    }

    prompt.push_str(
        "\nUse the available search and maps tools to scan the web. Prefer these sources:\n\
         - Public business directories such as Google Maps, Yelp and Yellow Pages.\n\
         - Professional profiles such as LinkedIn company pages.\n\
         - The business's own domain, to confirm whether a website exists and how current it is.\n\
         \n\
         For each lead collect the business name, industry, full physical address, website URL \
         (use \"N/A\" if there is none), a contact email and a contact phone number. Add a short \
         \"reason\" explaining why the business is a good lead given its website status, for example \
         \"No discoverable website, a clear opportunity for a new web presence.\" or \
         \"The site is dated and not mobile-responsive, a prime candidate for a redesign.\"\n\n",
    );

    let keys = RawLeadRecord::FIELD_NAMES
        .iter()
        .map(|k| format!("\"{k}\""))
        .collect::<Vec<_>>()
        .join(", ");
    prompt.push_str(&format!(
        "Return up to {MAX_LEADS_PER_PAGE} leads as a JSON array inside a single markdown code block fenced with ```json. \
         Each object in the array represents one lead and MUST have exactly these keys: {keys}.\n\n"
    ));
    prompt.push_str(
        "Do not include any introductory text, explanations or any other text outside the JSON code block.\n\n",
    );

    prompt.push_str("Example response format:\n```json\n[\n");
    prompt.push_str(EXAMPLE_LEAD);
    prompt.push_str("\n]\n```\n");

    prompt
}

fn exclusion_section(known: &[Lead]) -> String {
    let mut section = String::from(
        "\nYou have already found the following leads. Do not include them in your response again; find new, different businesses.\nExisting leads:\n",
    );
    for lead in known {
        section.push_str(&format!("- {} at {}\n", lead.name, lead.address));
    }
    section
}
