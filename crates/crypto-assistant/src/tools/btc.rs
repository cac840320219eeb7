//! Bitcoin Tools
//!
//! Wallet creation with the delete-then-create lifecycle, field accessors,
//! and the backend balance scan.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use agent_core::{Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};

use crate::session::{NO_BTC_WALLET, SharedSession};
use crate::wallet::{ChainBackend, btc, format_btc};

/// Create a new Bitcoin wallet, replacing any existing record and wallet file
pub struct CreateBtcWalletTool {
    session: SharedSession,
}

impl CreateBtcWalletTool {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Tool for CreateBtcWalletTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::niladic(
            "create_btc_wallet",
            "Create a new Bitcoin wallet and return its address and mnemonic phrase. \
             Replaces any previously created Bitcoin wallet.",
            true,
        )
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        // Hold the write lock across delete-then-create so a concurrent
        // clear cannot interleave with the storage lifecycle.
        let mut session = self.session.write().await;

        match btc::create_wallet(session.storage()) {
            Ok(wallet) => {
                let output = format!(
                    "Created a new Bitcoin wallet.\nAddress: {}\nMnemonic: {}\nNetwork: {}",
                    wallet.address, wallet.mnemonic, wallet.network
                );
                let data = json!({
                    "address": wallet.address,
                    "mnemonic": wallet.mnemonic,
                    "network": wallet.network,
                });

                session.set_btc(wallet);

                Ok(ToolResult::success("create_btc_wallet", output).with_data(data))
            }
            Err(e) => {
                tracing::error!("Error creating Bitcoin wallet: {}", e);
                Ok(ToolResult::failure(
                    "create_btc_wallet",
                    format!("Failed to create Bitcoin wallet: {}", e),
                ))
            }
        }
    }
}

/// Report the Bitcoin wallet address
pub struct BtcAddressTool {
    session: SharedSession,
}

impl BtcAddressTool {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Tool for BtcAddressTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::niladic(
            "get_btc_wallet_address",
            "Get the Bitcoin wallet address.",
            false,
        )
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let session = self.session.read().await;
        let output = session
            .btc()
            .map_or_else(|| NO_BTC_WALLET.into(), |w| w.address.clone());
        Ok(ToolResult::success("get_btc_wallet_address", output))
    }
}

/// Report the Bitcoin wallet mnemonic phrase
pub struct BtcMnemonicTool {
    session: SharedSession,
}

impl BtcMnemonicTool {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Tool for BtcMnemonicTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::niladic(
            "get_btc_wallet_mnemonic",
            "Get the Bitcoin wallet mnemonic seed phrase.",
            false,
        )
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let session = self.session.read().await;
        let output = session
            .btc()
            .map_or_else(|| NO_BTC_WALLET.into(), |w| w.mnemonic.clone());
        Ok(ToolResult::success("get_btc_wallet_mnemonic", output))
    }
}

/// Scan the chain backend and report the Bitcoin wallet balance
pub struct BtcBalanceTool {
    session: SharedSession,
    backend: Arc<dyn ChainBackend>,
}

impl BtcBalanceTool {
    pub fn new(session: SharedSession, backend: Arc<dyn ChainBackend>) -> Self {
        Self { session, backend }
    }
}

#[async_trait]
impl Tool for BtcBalanceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::niladic(
            "get_btc_wallet_balance",
            "Get the balance of the Bitcoin wallet by scanning the blockchain backend.",
            false,
        )
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let address = {
            let session = self.session.read().await;
            match session.btc() {
                Some(wallet) => wallet.address.clone(),
                None => {
                    return Ok(ToolResult::success("get_btc_wallet_balance", NO_BTC_WALLET));
                }
            }
        };

        match self.backend.address_balance_sats(&address).await {
            Ok(sats) => Ok(ToolResult::success(
                "get_btc_wallet_balance",
                format_btc(sats),
            )),
            Err(e) => {
                tracing::error!("Error getting Bitcoin wallet balance: {}", e);
                Ok(ToolResult::failure(
                    "get_btc_wallet_balance",
                    format!("Error retrieving balance: {}", e),
                ))
            }
        }
    }
}
