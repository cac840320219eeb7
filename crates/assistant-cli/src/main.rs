//! Crypto Assistant CLI
//!
//! Interactive terminal session: an LLM agent with wallet, balance, and
//! price tools. Configuration comes from the environment (`OPENAI_API_URL`,
//! `OPENAI_API_KEY`, `MODEL`, optionally `ESPLORA_URL`, `COINGECKO_URL`,
//! `WALLET_DIR`, `RUST_LOG`); there are no flags.

mod repl;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_core::{AgentBuilder, LlmProvider, ToolRegistry};
use agent_runtime::OpenAiProvider;
use crypto_assistant::{
    ASSISTANT_PROMPT, WalletSession,
    price::CoinGeckoSource,
    tools,
    wallet::{EsploraClient, WalletStorage},
};

const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize LLM provider
    let provider = Arc::new(OpenAiProvider::from_env().context("LLM provider configuration")?);

    let model = std::env::var("MODEL").unwrap_or_else(|_| {
        tracing::warn!("MODEL not set, defaulting to {}", DEFAULT_MODEL);
        DEFAULT_MODEL.into()
    });

    match provider.health_check().await {
        Ok(true) => tracing::info!("✓ Connected to LLM endpoint"),
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ LLM endpoint not reachable - agent calls will fail");
            tracing::warn!("  Check OPENAI_API_URL and OPENAI_API_KEY");
        }
    }

    // Wallet session and backends
    let session = WalletSession::shared(WalletStorage::from_env());
    let backend = Arc::new(EsploraClient::from_env());
    let prices = Arc::new(CoinGeckoSource::from_env());

    // Register the tool catalog
    let mut registry = ToolRegistry::new();
    tools::register_all(&mut registry, &session, backend, prices);
    tracing::info!("Registered {} tools", registry.len());

    // Build the agent
    let agent = AgentBuilder::new()
        .provider(provider)
        .tools(registry)
        .system_prompt(ASSISTANT_PROMPT)
        .model(model)
        .build()?;

    repl::run(agent, session).await
}
