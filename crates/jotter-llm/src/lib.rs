pub mod config;
pub mod gemini;
pub mod openai;
pub mod summarizer;
pub mod templates;
pub mod traits;

pub use traits::{
    GenerativeClient,
    GenerateRequest, GenerateResponse, GenerateOptions,
    TokenUsage,
};

pub use config::{ClientFactory, ProviderConfig, ProviderType};
pub use gemini::GeminiClient;
pub use openai::OpenAIClient;
pub use summarizer::{SummarizeError, Summarizer};
