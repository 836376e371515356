use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jotter_api::{build_router, config::Config, state::AppState};
use jotter_llm::{ClientFactory, Summarizer};
use jotter_persist::{JournalStore, MongoJournalStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config =
        Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting Jotter API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    // Initialize generative client and summarizer
    tracing::info!("Initializing {} client", config.llm.provider);
    let provider_config = config
        .provider_config()
        .map_err(|e| anyhow::anyhow!("Invalid LLM configuration: {}", e))?;
    let llm_client = ClientFactory::create_client(provider_config)?;
    let summarizer = Summarizer::new(llm_client, config.llm.model.clone())
        .with_temperature(config.llm.temperature);

    // Initialize journal store
    tracing::info!("Connecting to MongoDB");
    let store = MongoJournalStore::connect(&config.mongodb_uri, &config.mongodb.database).await?;
    let store: Arc<dyn JournalStore> = Arc::new(store);

    tracing::info!("MongoDB connected");

    // Create application state
    let state = Arc::new(AppState::new(config.clone(), store, summarizer));

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("API docs: http://{}/api/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
