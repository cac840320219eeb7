//! Chain Backend
//!
//! Balance scans against an Esplora-style HTTP API. The backend is a trait
//! so tests can substitute a static implementation.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AssistantError, Result};

/// Default Esplora endpoint
pub const DEFAULT_ESPLORA_URL: &str = "https://blockstream.info/api";

/// Backend capable of reporting an address balance
#[async_trait]
pub trait ChainBackend: Send + Sync {
    /// Confirmed balance of an address, in satoshis
    async fn address_balance_sats(&self, address: &str) -> Result<u64>;
}

/// Esplora HTTP client
pub struct EsploraClient {
    client: reqwest::Client,
    base_url: String,
}

impl EsploraClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Endpoint from `ESPLORA_URL`, default blockstream.info
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ESPLORA_URL").unwrap_or_else(|_| DEFAULT_ESPLORA_URL.into());
        Self::new(base_url)
    }
}

#[async_trait]
impl ChainBackend for EsploraClient {
    async fn address_balance_sats(&self, address: &str) -> Result<u64> {
        let url = format!("{}/address/{}", self.base_url.trim_end_matches('/'), address);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::BackendScan(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        let stats: AddressStats = response
            .json()
            .await
            .map_err(|e| AssistantError::BackendScan(format!("malformed response: {}", e)))?;

        Ok(stats
            .chain_stats
            .funded_txo_sum
            .saturating_sub(stats.chain_stats.spent_txo_sum))
    }
}

/// Esplora `/address/{address}` response (the fields we read)
#[derive(Debug, Deserialize)]
struct AddressStats {
    chain_stats: TxoStats,
}

#[derive(Debug, Deserialize)]
struct TxoStats {
    funded_txo_sum: u64,
    spent_txo_sum: u64,
}

/// Format satoshis as a BTC amount with exactly 8 decimal places
pub fn format_btc(sats: u64) -> String {
    let btc = Decimal::from_i128_with_scale(i128::from(sats), 8);
    format!("{} BTC", btc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_btc_has_eight_decimals() {
        for sats in [0u64, 1, 546, 100_000_000, 2_150_000_000_000_000] {
            let formatted = format_btc(sats);
            let amount = formatted.strip_suffix(" BTC").unwrap();
            let decimals = amount.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 8, "{}", formatted);
        }
    }

    #[test]
    fn test_format_btc_values() {
        assert_eq!(format_btc(0), "0.00000000 BTC");
        assert_eq!(format_btc(1), "0.00000001 BTC");
        assert_eq!(format_btc(150_000_000), "1.50000000 BTC");
    }

    #[test]
    fn test_address_stats_parsing() {
        let json = r#"{
            "address": "bc1qtest",
            "chain_stats": {
                "funded_txo_count": 3,
                "funded_txo_sum": 500000,
                "spent_txo_count": 1,
                "spent_txo_sum": 200000,
                "tx_count": 4
            },
            "mempool_stats": {
                "funded_txo_count": 0,
                "funded_txo_sum": 0,
                "spent_txo_count": 0,
                "spent_txo_sum": 0,
                "tx_count": 0
            }
        }"#;

        let stats: AddressStats = serde_json::from_str(json).unwrap();
        assert_eq!(
            stats.chain_stats.funded_txo_sum - stats.chain_stats.spent_txo_sum,
            300000
        );
    }
}
