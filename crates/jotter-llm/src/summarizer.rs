// Journal summarization pipeline on top of any GenerativeClient

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use jotter_types::themes::title_case;
use jotter_types::{EntrySummary, Theme};

use crate::templates::{render_summary_prompt, STRICT_JSON_RETRY_SUFFIX};
use crate::traits::{GenerateOptions, GenerateRequest, GenerateResponse, GenerativeClient};

/// Errors produced by the summarization pipeline
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("journal text is empty")]
    EmptyText,

    #[error("model output was not valid JSON after retry: {detail}")]
    ModelOutputInvalid { detail: String },

    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

/// Summarization adapter
///
/// Wraps the journal text in the fixed instructional prompt, requests JSON
/// output, and retries exactly once with a stricter instruction when the
/// response does not parse. Theme names in the result are title-cased and
/// deduplicated.
pub struct Summarizer {
    client: Arc<dyn GenerativeClient>,
    model: String,
    temperature: Option<f32>,
}

impl Summarizer {
    pub fn new(client: Arc<dyn GenerativeClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Model identifier recorded on stored summaries
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Summarize one journal entry
    pub async fn summarize(&self, text: &str) -> Result<EntrySummary, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyText);
        }

        let prompt = render_summary_prompt(text);

        let first = self.generate(prompt.clone()).await?;
        match parse_summary_payload(&first.text) {
            Ok(payload) => Ok(normalize_payload(payload)),
            Err(parse_err) => {
                tracing::warn!(
                    error = %parse_err,
                    "summary response was not valid JSON, retrying once"
                );

                let retry = self
                    .generate(format!("{prompt}{STRICT_JSON_RETRY_SUFFIX}"))
                    .await?;
                match parse_summary_payload(&retry.text) {
                    Ok(payload) => Ok(normalize_payload(payload)),
                    Err(retry_err) => Err(SummarizeError::ModelOutputInvalid {
                        detail: retry_err.to_string(),
                    }),
                }
            }
        }
    }

    async fn generate(&self, prompt: String) -> Result<GenerateResponse, SummarizeError> {
        let mut options = GenerateOptions::new().json_output(true);
        if let Some(temp) = self.temperature {
            options = options.temperature(temp);
        }

        let request = GenerateRequest::new(&self.model, prompt).with_options(options);
        Ok(self.client.generate(request).await?)
    }
}

/// Raw JSON document expected back from the model
#[derive(Debug, Deserialize)]
struct SummaryPayload {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    themes: Vec<ThemePayload>,
    #[serde(default)]
    suggested_prompts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ThemePayload {
    name: String,
    #[serde(default)]
    description: String,
}

fn parse_summary_payload(text: &str) -> Result<SummaryPayload, serde_json::Error> {
    serde_json::from_str(strip_markdown_fences(text))
}

/// Strip a ```json ... ``` (or bare ```) wrapper some models add around JSON
fn strip_markdown_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.rfind("```") {
        Some(end) => rest[..end].trim(),
        None => trimmed,
    }
}

/// Title-case theme names, drop unnamed themes, keep first occurrence of
/// duplicates
fn normalize_payload(payload: SummaryPayload) -> EntrySummary {
    let mut seen = std::collections::BTreeSet::new();
    let mut themes = Vec::with_capacity(payload.themes.len());

    for theme in payload.themes {
        let name = title_case(&theme.name);
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }
        themes.push(Theme {
            name,
            description: theme.description,
        });
    }

    EntrySummary {
        summary: payload.summary,
        themes,
        suggested_prompts: payload.suggested_prompts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fences_json_block() {
        let fenced = "```json\n{\"summary\": \"ok\"}\n```";
        assert_eq!(strip_markdown_fences(fenced), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn test_strip_fences_bare_block() {
        let fenced = "```\n{\"summary\": \"ok\"}\n```";
        assert_eq!(strip_markdown_fences(fenced), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn test_strip_fences_passthrough() {
        let plain = "{\"summary\": \"ok\"}";
        assert_eq!(strip_markdown_fences(plain), plain);
    }

    #[test]
    fn test_parse_rejects_commentary() {
        let text = "Sure! Here is the JSON you asked for: {\"summary\": \"ok\"}";
        assert!(parse_summary_payload(text).is_err());
    }

    #[test]
    fn test_parse_defaults_missing_keys() {
        let payload = parse_summary_payload("{\"summary\": \"a recap\"}").unwrap();
        assert_eq!(payload.summary, "a recap");
        assert!(payload.themes.is_empty());
        assert!(payload.suggested_prompts.is_empty());
    }

    #[test]
    fn test_normalize_title_cases_and_dedups() {
        let payload = parse_summary_payload(
            r#"{
                "summary": "recap",
                "themes": [
                    {"name": "work stress", "description": "first"},
                    {"name": "Work Stress", "description": "second"},
                    {"name": "", "description": "unnamed"},
                    {"name": "sleep", "description": "third"}
                ],
                "suggested_prompts": ["What helped?"]
            }"#,
        )
        .unwrap();

        let summary = normalize_payload(payload);
        assert_eq!(summary.themes.len(), 2);
        assert_eq!(summary.themes[0].name, "Work Stress");
        assert_eq!(summary.themes[0].description, "first");
        assert_eq!(summary.themes[1].name, "Sleep");
        assert_eq!(summary.suggested_prompts, vec!["What helped?"]);
    }
}
