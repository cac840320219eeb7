//! Error Types for the Crypto Assistant

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssistantError>;

/// Failure kinds for wallet and market operations.
///
/// Tools map these into failure-shaped results so a single failed operation
/// never crashes the interactive loop.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Key generation error: {0}")]
    Keygen(String),

    #[error("Mnemonic error: {0}")]
    Mnemonic(String),

    #[error("Key derivation error: {0}")]
    Derivation(String),

    #[error("Wallet storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Backend scan error: {0}")]
    BackendScan(String),

    #[error("Price unavailable for {0}")]
    PriceUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
