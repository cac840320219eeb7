//! Agent Tools
//!
//! The ten-tool catalog the assistant exposes: wallet creation, field
//! accessors, balance lookups, and spot prices.

pub mod btc;
pub mod eth;
pub mod price;

pub use btc::{BtcAddressTool, BtcBalanceTool, BtcMnemonicTool, CreateBtcWalletTool};
pub use eth::{CreateEthWalletTool, EthAddressTool, EthBalanceTool, EthPrivateKeyTool};
pub use price::{PRICE_NOT_FOUND, SpotPriceTool};

use std::sync::Arc;

use agent_core::ToolRegistry;

use crate::price::PriceSource;
use crate::session::SharedSession;
use crate::wallet::ChainBackend;

/// Register the full catalog against one session and its backends
pub fn register_all(
    registry: &mut ToolRegistry,
    session: &SharedSession,
    backend: Arc<dyn ChainBackend>,
    prices: Arc<dyn PriceSource>,
) {
    registry.register(CreateEthWalletTool::new(session.clone()));
    registry.register(EthAddressTool::new(session.clone()));
    registry.register(EthPrivateKeyTool::new(session.clone()));
    registry.register(EthBalanceTool::new(session.clone()));

    registry.register(CreateBtcWalletTool::new(session.clone()));
    registry.register(BtcAddressTool::new(session.clone()));
    registry.register(BtcMnemonicTool::new(session.clone()));
    registry.register(BtcBalanceTool::new(session.clone(), backend));

    registry.register(SpotPriceTool::ethereum(prices.clone()));
    registry.register(SpotPriceTool::bitcoin(prices));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::StaticPriceSource;
    use crate::session::WalletSession;
    use crate::wallet::{EsploraClient, WalletStorage};

    #[test]
    fn test_catalog_has_ten_tools() {
        let dir = tempfile::tempdir().unwrap();
        let session = WalletSession::shared(WalletStorage::new(dir.path(), "btc_wallet"));

        let mut registry = ToolRegistry::new();
        register_all(
            &mut registry,
            &session,
            Arc::new(EsploraClient::new("http://localhost:3000")),
            Arc::new(StaticPriceSource::new()),
        );

        assert_eq!(registry.len(), 10);
        for name in [
            "create_eth_wallet",
            "get_eth_wallet_address",
            "get_eth_wallet_private_key",
            "get_eth_wallet_balance",
            "create_btc_wallet",
            "get_btc_wallet_address",
            "get_btc_wallet_mnemonic",
            "get_btc_wallet_balance",
            "get_eth_price",
            "get_btc_price",
        ] {
            assert!(registry.get(name).is_some(), "missing tool {}", name);
        }
    }
}
