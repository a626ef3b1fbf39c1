use super::*;

const JOES: &str = r#"{"name":"Joe's Diner","industry":"Restaurants","address":"1 Main St, Austin, USA","website":"N/A","email":"","phone":"","reason":"No site found"}"#;

// -----------------------------------------------------------------------
// Fenced block
// -----------------------------------------------------------------------

#[test]
fn uses_fenced_block_and_ignores_prose() {
    let text = format!(
        "Here are some leads I found:\n```json\n[{JOES}]\n```\nLet me know if you need more [1]."
    );
    let leads = extract_leads(&text).expect("should extract");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Joe's Diner");
    assert_eq!(leads[0].reason, "No site found");
}

#[test]
fn uses_first_of_several_blocks() {
    let text = format!(
        "```json\n[{JOES}]\n```\nand also\n```json\n[{{\"name\":\"Other\"}}]\n```"
    );
    let leads = extract_leads(&text).expect("should extract");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Joe's Diner");
}

#[test]
fn accepts_block_without_newlines() {
    let leads = extract_leads(r#"```json[{"name":"Inline"}]```"#).expect("should extract");
    assert_eq!(leads[0].name, "Inline");
}

#[test]
fn malformed_block_is_reported_as_such() {
    let text = "```json\n[{\"name\": \"Truncated\", \"addr\n```";
    let err = extract_leads(text).unwrap_err();
    assert!(matches!(err, ParseError::MalformedBlock(_)), "got {err:?}");
    assert_eq!(err.to_string(), "malformed JSON block");
}

#[test]
fn empty_block_falls_back_to_body() {
    let err = extract_leads("```json\n```").unwrap_err();
    assert!(matches!(err, ParseError::Unparseable(_)), "got {err:?}");
}

#[test]
fn plain_fence_without_json_tag_is_not_a_block() {
    let text = format!("```\n[{JOES}]\n```");
    let err = extract_leads(&text).unwrap_err();
    assert!(matches!(err, ParseError::Unparseable(_)), "got {err:?}");
}

// -----------------------------------------------------------------------
// Fallback to the whole body
// -----------------------------------------------------------------------

#[test]
fn bare_array_is_accepted() {
    let text = format!("  [{JOES}]\n");
    let leads = extract_leads(&text).expect("should extract");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].address, "1 Main St, Austin, USA");
}

#[test]
fn prose_without_json_is_unparseable() {
    let err = extract_leads("I could not find any businesses matching your criteria.").unwrap_err();
    assert!(matches!(err, ParseError::Unparseable(_)), "got {err:?}");
    assert_eq!(err.to_string(), "no JSON block and body not parseable");
}

// -----------------------------------------------------------------------
// Shape checks
// -----------------------------------------------------------------------

#[test]
fn object_payload_is_not_an_array() {
    let err = extract_leads("```json\n{\"leads\": []}\n```").unwrap_err();
    assert!(matches!(err, ParseError::NotAnArray), "got {err:?}");
    assert_eq!(err.to_string(), "payload is not an array");
}

#[test]
fn empty_array_yields_no_leads() {
    let leads = extract_leads("```json\n[]\n```").expect("empty array is valid");
    assert!(leads.is_empty());
}

#[test]
fn first_element_without_name_fails_even_if_rest_are_valid() {
    let text = format!("```json\n[{{\"business\":\"Nameless\"}}, {JOES}]\n```");
    let err = extract_leads(&text).unwrap_err();
    assert!(matches!(err, ParseError::MissingRequiredField), "got {err:?}");
    assert_eq!(err.to_string(), "missing required field");
}

#[test]
fn non_object_first_element_fails_required_field() {
    let err = extract_leads("[\"Joe's Diner\"]").unwrap_err();
    assert!(matches!(err, ParseError::MissingRequiredField));
}

#[test]
fn later_malformed_elements_are_tolerated() {
    let text = format!("```json\n[{JOES}, {{\"phone\": 5550100}}, 42]\n```");
    let leads = extract_leads(&text).expect("only the first element is checked");
    assert_eq!(leads.len(), 3);
    assert_eq!(leads[1].name, "");
    assert_eq!(leads[1].phone, "5550100");
    assert_eq!(leads[2], RawLeadRecord::default());
}

#[test]
fn extra_keys_are_ignored_and_order_preserved() {
    let text = r#"[{"name":"B","stars":5},{"name":"A"},{"name":"C"}]"#;
    let names: Vec<String> = extract_leads(text)
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["B", "A", "C"]);
}

#[test]
fn extraction_is_idempotent() {
    let text = format!("Sure!\n```json\n[{JOES}]\n```");
    assert_eq!(extract_leads(&text).unwrap(), extract_leads(&text).unwrap());
}
