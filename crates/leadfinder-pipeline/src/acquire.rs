//! Acquisition orchestration: prompt, one backend call, extraction,
//! identity, dedup.

use std::collections::HashSet;

use leadfinder_core::{FilterCriteria, Lead};

use crate::backend::{InferenceBackend, InferenceRequest, SearchTool};
use crate::error::AcquisitionError;
use crate::extract::extract_leads;
use crate::prompt::build_prompt;

/// Tools enabled for every lead search.
pub const LEAD_TOOLS: [SearchTool; 2] = [SearchTool::WebSearch, SearchTool::MapsLookup];

/// Leads are factual claims; keep sampling close to deterministic.
pub const ACQUISITION_TEMPERATURE: f32 = 0.2;

/// Fetch one page of leads matching `criteria` that are not already in `known`.
///
/// 1. Build the prompt, listing `known` leads for exclusion.
/// 2. Make exactly one backend call with [`LEAD_TOOLS`] at
///    [`ACQUISITION_TEMPERATURE`]. No retries.
/// 3. Extract raw records from the reply text.
/// 4. Derive identities and drop any lead whose `id` is in `known`.
///
/// Backend emission order is preserved. Pass an empty `known` for a fresh
/// search and the accumulated list for "load more".
///
/// # Errors
///
/// Returns [`AcquisitionError::Backend`] if the backend call fails and
/// [`AcquisitionError::Parse`] if the reply cannot be extracted. No partial
/// results are returned in either case.
pub async fn acquire<B>(
    backend: &B,
    criteria: &FilterCriteria,
    known: &[Lead],
) -> Result<Vec<Lead>, AcquisitionError>
where
    B: InferenceBackend,
{
    let prompt = build_prompt(criteria, known);
    tracing::debug!(
        location = %criteria.location,
        industry = %criteria.industry,
        known = known.len(),
        prompt_chars = prompt.len(),
        "requesting leads"
    );

    let request = InferenceRequest {
        prompt: &prompt,
        tools: &LEAD_TOOLS,
        temperature: ACQUISITION_TEMPERATURE,
    };

    let text = backend.generate(&request).await.map_err(|e| {
        tracing::warn!(error = %e, "inference backend call failed");
        AcquisitionError::Backend(e)
    })?;

    let records = extract_leads(&text).inspect_err(|e| {
        tracing::warn!(error = %e, response_chars = text.len(), "failed to parse lead response");
    })?;

    let known_ids: HashSet<&str> = known.iter().map(|lead| lead.id.as_str()).collect();
    let returned = records.len();

    let leads: Vec<Lead> = records
        .into_iter()
        .map(Lead::from_raw)
        .filter(|lead| !known_ids.contains(lead.id.as_str()))
        .collect();

    tracing::info!(
        known = known.len(),
        returned,
        new = leads.len(),
        duplicates = returned - leads.len(),
        "lead acquisition complete"
    );

    Ok(leads)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use leadfinder_core::LeadStatus;

    use super::*;
    use crate::backend::BackendError;
    use crate::error::ParseError;

    /// Backend returning a canned reply and recording every request.
    struct StubBackend {
        reply: Result<String, String>,
        requests: Mutex<Vec<(String, Vec<SearchTool>, f32)>>,
    }

    impl StubBackend {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_owned()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_owned()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_prompt(&self) -> String {
            self.requests.lock().unwrap().last().unwrap().0.clone()
        }
    }

    impl InferenceBackend for StubBackend {
        async fn generate(&self, request: &InferenceRequest<'_>) -> Result<String, BackendError> {
            self.requests.lock().unwrap().push((
                request.prompt.to_owned(),
                request.tools.to_vec(),
                request.temperature,
            ));
            self.reply.clone().map_err(Into::into)
        }
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria {
            location: "Austin, USA".to_owned(),
            district: String::new(),
            industry: "Restaurants".to_owned(),
            website_status: "No Website".to_owned(),
        }
    }

    const JOES: &str = r#"{"name":"Joe's Diner","industry":"Restaurants","address":"1 Main St, Austin, USA","website":"N/A","email":"","phone":"","reason":"No site found"}"#;
    const TACOS: &str = r#"{"name":"Taco Town","industry":"Restaurants","address":"9 Oak Ave, Austin, USA","website":"N/A","email":"hola@tacotown.test","phone":"555-0199","reason":"No site found"}"#;

    fn fenced(items: &[&str]) -> String {
        format!("```json\n[{}]\n```", items.join(","))
    }

    #[tokio::test]
    async fn fresh_search_builds_leads_with_defaults() {
        let backend = StubBackend::replying(&fenced(&[JOES]));
        let leads = acquire(&backend, &criteria(), &[]).await.expect("should acquire");

        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].id, "joes-diner-1-main-st-austin-usa");
        assert_eq!(leads[0].status, LeadStatus::NotContacted);
        assert_eq!(leads[0].notes, "");
        assert_eq!(leads[0].website, "N/A");
    }

    #[tokio::test]
    async fn makes_one_call_with_search_tools_at_low_temperature() {
        let backend = StubBackend::replying("[]");
        acquire(&backend, &criteria(), &[]).await.expect("should acquire");

        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (_, tools, temperature) = &requests[0];
        assert_eq!(tools, &[SearchTool::WebSearch, SearchTool::MapsLookup]);
        assert!((*temperature - 0.2).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn load_more_filters_known_and_lists_them_in_prompt() {
        let first = StubBackend::replying(&fenced(&[JOES]));
        let known = acquire(&first, &criteria(), &[]).await.unwrap();

        let second = StubBackend::replying(&fenced(&[JOES, TACOS]));
        let leads = acquire(&second, &criteria(), &known).await.unwrap();

        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].name, "Taco Town");
        assert!(second
            .last_prompt()
            .contains("- Joe's Diner at 1 Main St, Austin, USA"));
    }

    #[tokio::test]
    async fn dedup_uses_normalized_identity() {
        let known = acquire(&StubBackend::replying(&fenced(&[JOES])), &criteria(), &[])
            .await
            .unwrap();
        let variant = r#"{"name":"JOE'S  DINER","address":"1 main st,  Austin, USA"}"#;
        let leads = acquire(&StubBackend::replying(&fenced(&[variant])), &criteria(), &known)
            .await
            .unwrap();
        assert!(leads.is_empty());
    }

    #[tokio::test]
    async fn preserves_backend_order() {
        let backend = StubBackend::replying(&fenced(&[TACOS, JOES]));
        let leads = acquire(&backend, &criteria(), &[]).await.unwrap();
        let names: Vec<&str> = leads.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Taco Town", "Joe's Diner"]);
    }

    #[tokio::test]
    async fn prose_reply_is_a_parse_failure() {
        let backend = StubBackend::replying("Sorry, I couldn't find anything.");
        let err = acquire(&backend, &criteria(), &[]).await.unwrap_err();

        assert!(matches!(err.parse_error(), Some(ParseError::Unparseable(_))), "got {err:?}");
        assert_eq!(
            err.to_string(),
            "Failed to fetch leads: no JSON block and body not parseable"
        );
    }

    #[tokio::test]
    async fn backend_failure_is_wrapped_without_retry() {
        let backend = StubBackend::failing("connection reset");
        let err = acquire(&backend, &criteria(), &[]).await.unwrap_err();

        assert!(matches!(err, AcquisitionError::Backend(_)));
        assert!(err.parse_error().is_none());
        assert_eq!(err.to_string(), "Failed to fetch leads: connection reset");
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn no_output_id_is_in_known() {
        let known = acquire(&StubBackend::replying(&fenced(&[JOES, TACOS])), &criteria(), &[])
            .await
            .unwrap();
        let extra = r#"{"name":"Brisket Barn","address":"3 Pine Rd, Austin, USA"}"#;
        let leads = acquire(
            &StubBackend::replying(&fenced(&[TACOS, extra, JOES])),
            &criteria(),
            &known,
        )
        .await
        .unwrap();

        let known_ids: HashSet<&str> = known.iter().map(|l| l.id.as_str()).collect();
        assert!(leads.iter().all(|l| !known_ids.contains(l.id.as_str())));
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].id, "brisket-barn-3-pine-rd-austin-usa");
    }
}
