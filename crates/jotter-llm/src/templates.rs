//! Fixed prompt templates for journal summarization
//!
//! The wording here is part of the product behavior: summaries must stay
//! neutral and non-diagnostic, and the output contract is strict JSON so the
//! pipeline can parse it without heuristics.

/// System persona prepended to every summarization request
pub const SYSTEM_PROMPT: &str = "You are a careful mental-health journaling assistant. \
    Summarize neutrally and supportively without diagnosing. \
    Return STRICT JSON with keys: summary (2-3 sentences), \
    themes (array of objects with keys name, description), \
    suggested_prompts (array with 1 short reflective question).";

/// Instructional template; `{system}` and `{text}` are filled at call time
pub const SUMMARY_TEMPLATE: &str = r#"System:
{system}

User:
JOURNAL:
"""{text}"""

Return strict JSON:
{
  "summary": "<2-3 sentence recap>",
  "themes": [
    {"name":"ThemeName1","description":"One sentence."},
    {"name":"ThemeName2","description":"One sentence."}
  ],
  "suggested_prompts": ["One gentle follow-up question"]
}"#;

/// Suffix appended to the prompt for the single retry after unparseable output
pub const STRICT_JSON_RETRY_SUFFIX: &str =
    "\n\nIMPORTANT: Output MUST be valid JSON only, no commentary.";

/// Render the full summarization prompt for one journal entry
pub fn render_summary_prompt(text: &str) -> String {
    SUMMARY_TEMPLATE
        .replace("{system}", SYSTEM_PROMPT)
        .replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_both_markers() {
        let prompt = render_summary_prompt("slept badly, skipped the gym");

        assert!(prompt.contains(SYSTEM_PROMPT));
        assert!(prompt.contains("\"\"\"slept badly, skipped the gym\"\"\""));
        assert!(!prompt.contains("{system}"));
        assert!(!prompt.contains("{text}"));
    }

    #[test]
    fn test_template_keeps_json_skeleton() {
        let prompt = render_summary_prompt("x");

        assert!(prompt.contains("Return strict JSON:"));
        assert!(prompt.contains("\"suggested_prompts\""));
    }
}
