//! Static Price Source
//!
//! Fixed prices for tests and offline demos.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::PriceSource;
use crate::error::Result;

/// Price source backed by a fixed table
#[derive(Default)]
pub struct StaticPriceSource {
    prices: HashMap<String, Decimal>,
}

impl StaticPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, coin_id: impl Into<String>, price: Decimal) -> Self {
        self.prices.insert(coin_id.into(), price);
        self
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn usd_price(&self, coin_id: &str) -> Result<Option<Decimal>> {
        Ok(self.prices.get(coin_id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::BITCOIN_ID;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_known_and_unknown_ids() {
        let source = StaticPriceSource::new().with_price(BITCOIN_ID, dec!(97500));

        assert_eq!(
            source.usd_price(BITCOIN_ID).await.unwrap(),
            Some(dec!(97500))
        );
        assert_eq!(source.usd_price("dogecoin").await.unwrap(), None);
    }
}
