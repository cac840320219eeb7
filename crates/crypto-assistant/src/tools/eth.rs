//! Ethereum Tools
//!
//! Wallet creation and the three field/balance accessors over the shared
//! wallet session.

use async_trait::async_trait;
use serde_json::json;

use agent_core::{Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};

use crate::session::{NO_ETH_WALLET, SharedSession};
use crate::wallet::eth;

/// Create a new Ethereum wallet, overwriting any existing record
pub struct CreateEthWalletTool {
    session: SharedSession,
}

impl CreateEthWalletTool {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Tool for CreateEthWalletTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::niladic(
            "create_eth_wallet",
            "Create a new Ethereum wallet and return its address and private key. \
             Replaces any previously created Ethereum wallet.",
            true,
        )
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        match eth::create_wallet() {
            Ok(wallet) => {
                let output = format!(
                    "Created a new Ethereum wallet.\nAddress: {}\nPrivate key: {}",
                    wallet.address, wallet.private_key
                );
                let data = json!({
                    "address": wallet.address,
                    "private_key": wallet.private_key,
                });

                self.session.write().await.set_eth(wallet);

                Ok(ToolResult::success("create_eth_wallet", output).with_data(data))
            }
            Err(e) => {
                tracing::error!("Error creating Ethereum wallet: {}", e);
                Ok(ToolResult::failure(
                    "create_eth_wallet",
                    format!("Failed to create Ethereum wallet: {}", e),
                ))
            }
        }
    }
}

/// Report the Ethereum wallet address
pub struct EthAddressTool {
    session: SharedSession,
}

impl EthAddressTool {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Tool for EthAddressTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::niladic(
            "get_eth_wallet_address",
            "Get the Ethereum wallet address.",
            false,
        )
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let session = self.session.read().await;
        let output = session
            .eth()
            .map_or_else(|| NO_ETH_WALLET.into(), |w| w.address.clone());
        Ok(ToolResult::success("get_eth_wallet_address", output))
    }
}

/// Report the Ethereum wallet private key
pub struct EthPrivateKeyTool {
    session: SharedSession,
}

impl EthPrivateKeyTool {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Tool for EthPrivateKeyTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::niladic(
            "get_eth_wallet_private_key",
            "Get the Ethereum wallet private key.",
            false,
        )
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let session = self.session.read().await;
        let output = session
            .eth()
            .map_or_else(|| NO_ETH_WALLET.into(), |w| w.private_key.clone());
        Ok(ToolResult::success("get_eth_wallet_private_key", output))
    }
}

/// Report the Ethereum wallet balance.
///
/// Reads the session's cached balance only; there is no live chain query
/// on this path.
pub struct EthBalanceTool {
    session: SharedSession,
}

impl EthBalanceTool {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Tool for EthBalanceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::niladic(
            "get_eth_wallet_balance",
            "Get the balance of the Ethereum wallet.",
            false,
        )
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let session = self.session.read().await;
        let output = session
            .eth()
            .and_then(|w| w.cached_balance.clone())
            .unwrap_or_else(|| NO_ETH_WALLET.into());
        Ok(ToolResult::success("get_eth_wallet_balance", output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::WalletSession;
    use crate::wallet::WalletStorage;

    fn shared_session(dir: &std::path::Path) -> SharedSession {
        WalletSession::shared(WalletStorage::new(dir, "btc_wallet"))
    }

    #[tokio::test]
    async fn test_address_sentinel_before_creation() {
        let dir = tempfile::tempdir().unwrap();
        let session = shared_session(dir.path());

        let tool = EthAddressTool::new(session);
        let result = tool.execute(&ToolCall::named("get_eth_wallet_address")).await.unwrap();

        assert!(result.success);
        assert_eq!(result.output, NO_ETH_WALLET);
    }

    #[tokio::test]
    async fn test_create_then_address_matches() {
        let dir = tempfile::tempdir().unwrap();
        let session = shared_session(dir.path());

        let create = CreateEthWalletTool::new(session.clone());
        let created = create.execute(&ToolCall::named("create_eth_wallet")).await.unwrap();
        assert!(created.success);

        let stored = session.read().await.eth().unwrap().address.clone();
        let address = address_via_tool(&session).await;
        assert_eq!(address, stored);
    }

    #[tokio::test]
    async fn test_create_twice_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let session = shared_session(dir.path());

        let create = CreateEthWalletTool::new(session.clone());
        create.execute(&ToolCall::named("create_eth_wallet")).await.unwrap();
        let first = session.read().await.eth().unwrap().address.clone();

        create.execute(&ToolCall::named("create_eth_wallet")).await.unwrap();
        let second = session.read().await.eth().unwrap().address.clone();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_balance_reads_cache_only() {
        let dir = tempfile::tempdir().unwrap();
        let session = shared_session(dir.path());

        let create = CreateEthWalletTool::new(session.clone());
        create.execute(&ToolCall::named("create_eth_wallet")).await.unwrap();

        // A freshly created wallet has no cached balance
        let tool = EthBalanceTool::new(session);
        let result = tool.execute(&ToolCall::named("get_eth_wallet_balance")).await.unwrap();
        assert_eq!(result.output, NO_ETH_WALLET);
    }

    async fn address_via_tool(session: &SharedSession) -> String {
        let tool = EthAddressTool::new(session.clone());
        tool.execute(&ToolCall::named("get_eth_wallet_address"))
            .await
            .unwrap()
            .output
    }
}
