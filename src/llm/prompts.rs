/// Build the question-generation prompt for a topic.
///
/// The prompt pins the exact output schema the normalizer expects and
/// forbids answers, commentary, and code fences. When source text is
/// supplied, questions are restricted to it; otherwise the model works
/// from general knowledge of the topic.
///
/// Source text longer than `max_source_chars` is cut to that prefix. The
/// cut is a plain char-count truncation and may land mid-word; it bounds
/// prompt cost, nothing more.
pub fn build_question_prompt(
    topic: &str,
    source_text: Option<&str>,
    max_source_chars: usize,
) -> String {
    let constraints = match source_text {
        Some(source) => {
            let bounded = truncate_chars(source, max_source_chars);
            format!(
                "Source material:\n\
\"\"\"\n\
{bounded}\n\
\"\"\"\n\
- Base every question only on the source material above.\n\
- Do not invent facts that are not present in the source material."
            )
        }
        None => "- Generate the questions from general knowledge of the topic.".to_string(),
    };

    format!(
        "You generate exam-style questions.\n\
\n\
Return ONLY a valid JSON object matching this schema (no backticks, no extra text):\n\
{{\n\
  \"questions\": [\n\
    {{\"number\": 1, \"topic\": \"string\", \"text\": \"string\"}},\n\
    {{\"number\": 2, \"topic\": \"string\", \"text\": \"string\"}},\n\
    {{\"number\": 3, \"topic\": \"string\", \"text\": \"string\"}}\n\
  ]\n\
}}\n\
\n\
Requirements:\n\
- Exactly 3 items in \"questions\".\n\
- Each \"text\" should be a clear, single question (no answers).\n\
- Use normal spacing and punctuation.\n\
- Do not include code fences or explanations outside the JSON.\n\
{constraints}\n\
\n\
Topic: {topic}"
    )
}

/// Truncate to at most `max` characters without splitting a multibyte
/// character.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
