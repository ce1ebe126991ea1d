//! Legacy streaming mode: newline-delimited envelope fragments.
//!
//! Used when the inference server is driven without the JSON envelope
//! contract. Fragments may be truncated mid-object, so extraction is a
//! tolerant text scan rather than a JSON parse.

/// Concatenate the `response` substrings of line-delimited fragments, in
/// stream order, joined by single spaces, wrapped as `{"response": ...}`.
///
/// Lines without a `response` field are dropped. Never fails; a body with
/// no usable fragments yields `{"response":""}`.
pub fn concat_stream_fragments(body: &str) -> String {
    let parts: Vec<&str> = body
        .lines()
        .filter_map(extract_response_fragment)
        .collect();

    let concatenated = parts.join(" ");

    // serde_json handles escaping of the concatenated text.
    serde_json::json!({ "response": concatenated }).to_string()
}

/// Scan one fragment for `"response":"` and take the substring up to the
/// next quote. The scan stops at the first `"` even if it is escaped, so
/// fragments containing escaped quotes are cut short; retained legacy
/// behavior.
fn extract_response_fragment(line: &str) -> Option<&str> {
    const MARKER: &str = "\"response\":\"";

    let start = line.find(MARKER)? + MARKER.len();
    let rest = &line[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_are_joined_in_stream_order() {
        let body = "{\"response\":\"The\",\"done\":false}\n\
                    {\"response\":\"mitochondria\",\"done\":false}\n\
                    {\"response\":\"matters.\",\"done\":true}";
        assert_eq!(
            concat_stream_fragments(body),
            r#"{"response":"The mitochondria matters."}"#
        );
    }

    #[test]
    fn lines_without_a_response_field_are_dropped() {
        let body = "{\"response\":\"kept\"}\n{\"done\":true}\nnoise";
        assert_eq!(concat_stream_fragments(body), r#"{"response":"kept"}"#);
    }

    #[test]
    fn empty_body_yields_an_empty_response() {
        assert_eq!(concat_stream_fragments(""), r#"{"response":""}"#);
    }

    #[test]
    fn truncated_fragments_are_still_scanned() {
        // Mid-object cut after the response value; no JSON parse required.
        let body = "{\"response\":\"partial\",\"do";
        assert_eq!(concat_stream_fragments(body), r#"{"response":"partial"}"#);
    }

    #[test]
    fn output_is_valid_json_even_with_quotes_and_backslashes() {
        let body = "{\"response\":\"path\\\\to\\\\file\"}";
        let out = concat_stream_fragments(body);
        let value: serde_json::Value = serde_json::from_str(&out).expect("output must be JSON");
        assert!(value.get("response").is_some());
    }

    #[test]
    fn escaped_quote_cuts_the_fragment_short() {
        // Known limitation of the substring scan.
        let body = r#"{"response":"he said \"hi\""}"#;
        assert_eq!(
            extract_response_fragment(body),
            Some(r#"he said \"#)
        );
    }
}
