//! CoinGecko Price Source
//!
//! `GET {base}/simple/price?ids=<id>&vs_currencies=usd`, response keyed by
//! coin id with a `"usd"` numeric field.

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::PriceSource;
use crate::error::{AssistantError, Result};

/// Default CoinGecko API base
pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";

pub struct CoinGeckoSource {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Endpoint from `COINGECKO_URL`, default the public API
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("COINGECKO_URL").unwrap_or_else(|_| DEFAULT_COINGECKO_URL.into());
        Self::new(base_url)
    }
}

impl Default for CoinGeckoSource {
    fn default() -> Self {
        Self::new(DEFAULT_COINGECKO_URL)
    }
}

#[async_trait]
impl PriceSource for CoinGeckoSource {
    async fn usd_price(&self, coin_id: &str) -> Result<Option<Decimal>> {
        let url = format!("{}/simple/price", self.base_url.trim_end_matches('/'));

        let body: HashMap<String, HashMap<String, serde_json::Value>> = self
            .client
            .get(&url)
            .query(&[("ids", coin_id), ("vs_currencies", "usd")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(value) = body.get(coin_id).and_then(|prices| prices.get("usd")) else {
            return Ok(None);
        };

        // CoinGecko emits a JSON number; parse its text form into a Decimal.
        let price = Decimal::from_str(&value.to_string())
            .map_err(|_| AssistantError::PriceUnavailable(coin_id.to_string()))?;

        Ok(Some(price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_parses_without_float_rounding() {
        // Same conversion path as usd_price
        let value: serde_json::Value = serde_json::from_str("45000.12").unwrap();
        let price = Decimal::from_str(&value.to_string()).unwrap();
        assert_eq!(price.to_string(), "45000.12");
    }
}
