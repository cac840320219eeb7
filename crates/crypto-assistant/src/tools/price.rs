//! Price Tools
//!
//! Spot-price lookups against a `PriceSource`. One tool per coin so the
//! catalog keeps the fixed `get_eth_price` / `get_btc_price` names.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};

use crate::price::{BITCOIN_ID, ETHEREUM_ID, PriceSource};

/// Sentinel returned when the provider does not know the coin
pub const PRICE_NOT_FOUND: &str = "Price not found";

/// USD spot price for a fixed coin id
pub struct SpotPriceTool {
    source: Arc<dyn PriceSource>,
    tool_name: &'static str,
    coin_id: &'static str,
    label: &'static str,
}

impl SpotPriceTool {
    pub fn ethereum(source: Arc<dyn PriceSource>) -> Self {
        Self {
            source,
            tool_name: "get_eth_price",
            coin_id: ETHEREUM_ID,
            label: "ETH",
        }
    }

    pub fn bitcoin(source: Arc<dyn PriceSource>) -> Self {
        Self {
            source,
            tool_name: "get_btc_price",
            coin_id: BITCOIN_ID,
            label: "BTC",
        }
    }
}

#[async_trait]
impl Tool for SpotPriceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::niladic(
            self.tool_name,
            format!("Get the current {} price in USD.", self.label),
            false,
        )
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        match self.source.usd_price(self.coin_id).await {
            Ok(Some(price)) => Ok(ToolResult::success(
                self.tool_name,
                format!("{} USD", price),
            )),
            Ok(None) => Ok(ToolResult::success(self.tool_name, PRICE_NOT_FOUND)),
            Err(e) => {
                tracing::error!(coin = self.coin_id, "Error fetching price: {}", e);
                Ok(ToolResult::failure(
                    self.tool_name,
                    format!("Error fetching {} price: {}", self.label, e),
                ))
            }
        }
    }
}
