use std::sync::Arc;

use anyhow::Result;
use jotter_llm::{GeminiClient, Summarizer};

#[tokio::main]
async fn main() -> Result<()> {
    let api_key = std::env::var("GEMINI_API_KEY")?;
    let client = Arc::new(GeminiClient::new(api_key)?);

    let summarizer = Summarizer::new(client, "gemini-2.0-flash").with_temperature(0.4);

    let summary = summarizer
        .summarize("Long day. Two deadlines moved up and I skipped lunch, but a walk after dinner helped me wind down.")
        .await?;

    println!("Summary: {}", summary.summary);
    for theme in &summary.themes {
        println!("Theme: {} - {}", theme.name, theme.description);
    }
    for prompt in &summary.suggested_prompts {
        println!("Try next: {}", prompt);
    }

    Ok(())
}
