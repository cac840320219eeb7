//! Price Sources
//!
//! Abstraction over spot-price providers (Strategy pattern). The real
//! implementation talks to CoinGecko; a static one backs the tests.

mod coingecko;
mod statics;

pub use coingecko::CoinGeckoSource;
pub use statics::StaticPriceSource;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;

/// CoinGecko id for Ethereum
pub const ETHEREUM_ID: &str = "ethereum";

/// CoinGecko id for Bitcoin
pub const BITCOIN_ID: &str = "bitcoin";

/// Spot-price provider
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// USD spot price for a coin id. `Ok(None)` means the provider answered
    /// but does not know the coin; errors are transport-level failures.
    async fn usd_price(&self, coin_id: &str) -> Result<Option<Decimal>>;
}
