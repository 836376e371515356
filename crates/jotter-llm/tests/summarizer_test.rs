use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use jotter_llm::summarizer::{SummarizeError, Summarizer};
use jotter_llm::templates::STRICT_JSON_RETRY_SUFFIX;
use jotter_llm::traits::{GenerateRequest, GenerateResponse, GenerativeClient};

/// Test double that replays scripted responses and records every request
struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedClient {
    fn new(responses: Vec<Result<String, String>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn recorded_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock ran out of scripted responses");
        match next {
            Ok(text) => Ok(GenerateResponse {
                text,
                usage: None,
                finish_reason: Some("stop".to_string()),
            }),
            Err(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

const GOOD_JSON: &str = r#"{
    "summary": "A tiring day at work, but the evening walk helped.",
    "themes": [
        {"name": "work stress", "description": "Deadlines piled up."},
        {"name": "exercise", "description": "An evening walk gave some relief."}
    ],
    "suggested_prompts": ["What made the walk feel restorative?"]
}"#;

#[tokio::test]
async fn test_summarize_parses_first_attempt() {
    let client = ScriptedClient::new(vec![Ok(GOOD_JSON.to_string())]);
    let summarizer = Summarizer::new(client.clone(), "gemini-2.0-flash");

    let summary = summarizer.summarize("long day at work").await.unwrap();

    assert_eq!(
        summary.summary,
        "A tiring day at work, but the evening walk helped."
    );
    assert_eq!(summary.themes.len(), 2);
    assert_eq!(summary.themes[0].name, "Work Stress");
    assert_eq!(summary.themes[1].name, "Exercise");
    assert_eq!(client.recorded_requests().len(), 1);
}

#[tokio::test]
async fn test_summarize_requests_json_output_with_journal_text() {
    let client = ScriptedClient::new(vec![Ok(GOOD_JSON.to_string())]);
    let summarizer = Summarizer::new(client.clone(), "gemini-2.0-flash").with_temperature(0.4);

    summarizer.summarize("long day at work").await.unwrap();

    let requests = client.recorded_requests();
    assert_eq!(requests[0].model, "gemini-2.0-flash");
    assert!(requests[0].options.json_output);
    assert_eq!(requests[0].options.temperature, Some(0.4));
    assert!(requests[0].prompt.contains("\"\"\"long day at work\"\"\""));
}

#[tokio::test]
async fn test_summarize_accepts_fenced_json() {
    let fenced = format!("```json\n{GOOD_JSON}\n```");
    let client = ScriptedClient::new(vec![Ok(fenced)]);
    let summarizer = Summarizer::new(client.clone(), "gemini-2.0-flash");

    let summary = summarizer.summarize("long day").await.unwrap();

    assert_eq!(summary.themes[0].name, "Work Stress");
    assert_eq!(client.recorded_requests().len(), 1);
}

#[tokio::test]
async fn test_summarize_retries_once_with_stricter_instruction() {
    let client = ScriptedClient::new(vec![
        Ok("Sure! Here is your summary: it was a long day.".to_string()),
        Ok(GOOD_JSON.to_string()),
    ]);
    let summarizer = Summarizer::new(client.clone(), "gemini-2.0-flash");

    let summary = summarizer.summarize("long day").await.unwrap();
    assert_eq!(summary.themes[0].name, "Work Stress");

    let requests = client.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert!(!requests[0].prompt.contains("IMPORTANT"));
    assert!(requests[1].prompt.ends_with(STRICT_JSON_RETRY_SUFFIX));
    assert!(requests[1].prompt.starts_with(&requests[0].prompt));
}

#[tokio::test]
async fn test_summarize_gives_up_after_second_bad_output() {
    let client = ScriptedClient::new(vec![
        Ok("not json".to_string()),
        Ok("still not json".to_string()),
    ]);
    let summarizer = Summarizer::new(client.clone(), "gemini-2.0-flash");

    let err = summarizer.summarize("long day").await.unwrap_err();

    assert!(matches!(err, SummarizeError::ModelOutputInvalid { .. }));
    assert_eq!(client.recorded_requests().len(), 2);
}

#[tokio::test]
async fn test_summarize_rejects_empty_text_without_calling_model() {
    let client = ScriptedClient::new(vec![]);
    let summarizer = Summarizer::new(client.clone(), "gemini-2.0-flash");

    let err = summarizer.summarize("   \n  ").await.unwrap_err();

    assert!(matches!(err, SummarizeError::EmptyText));
    assert!(client.recorded_requests().is_empty());
}

#[tokio::test]
async fn test_provider_errors_pass_through_without_retry() {
    let client = ScriptedClient::new(vec![Err("connection reset".to_string())]);
    let summarizer = Summarizer::new(client.clone(), "gemini-2.0-flash");

    let err = summarizer.summarize("long day").await.unwrap_err();

    assert!(matches!(err, SummarizeError::Provider(_)));
    assert_eq!(client.recorded_requests().len(), 1);
}
