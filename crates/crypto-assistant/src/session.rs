//! Wallet Session
//!
//! Holds at most one active wallet record per currency, replaceable and
//! clearable. The session is an explicit object shared behind
//! `Arc<RwLock<_>>` rather than ambient global state; the chat loop and the
//! tools are the only writers, one awaited turn at a time.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::Result;
use crate::wallet::storage::WalletStorage;

/// Sentinel returned by Ethereum accessors before any wallet exists
pub const NO_ETH_WALLET: &str = "No Ethereum wallet created yet";

/// Sentinel returned by Bitcoin accessors before any wallet exists
pub const NO_BTC_WALLET: &str = "No Bitcoin wallet created yet";

/// In-memory Ethereum wallet record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EthWallet {
    /// EIP-55 checksummed address
    pub address: String,

    /// 0x-prefixed private key hex
    pub private_key: String,

    /// Cached balance string. Nothing populates it yet; the balance
    /// accessor reads it anyway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_balance: Option<String>,
}

/// In-memory Bitcoin wallet record, backed by a named on-disk wallet file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BtcWallet {
    /// P2WPKH address for the first receive key
    pub address: String,

    /// BIP-39 mnemonic phrase
    pub mnemonic: String,

    /// Network tag, always `"btc"`
    pub network: String,

    /// On-disk wallet name
    pub name: String,
}

impl BtcWallet {
    pub const NETWORK: &'static str = "btc";
}

/// Session owning the two wallet records. Last write wins; `clear` empties
/// both and removes the on-disk Bitcoin wallet file.
pub struct WalletSession {
    eth: Option<EthWallet>,
    btc: Option<BtcWallet>,
    storage: WalletStorage,
}

/// Shared handle used by the chat loop and the tools
pub type SharedSession = Arc<RwLock<WalletSession>>;

impl WalletSession {
    pub fn new(storage: WalletStorage) -> Self {
        Self {
            eth: None,
            btc: None,
            storage,
        }
    }

    /// Wrap in the shared handle
    pub fn shared(storage: WalletStorage) -> SharedSession {
        Arc::new(RwLock::new(Self::new(storage)))
    }

    pub fn eth(&self) -> Option<&EthWallet> {
        self.eth.as_ref()
    }

    pub fn btc(&self) -> Option<&BtcWallet> {
        self.btc.as_ref()
    }

    pub fn storage(&self) -> &WalletStorage {
        &self.storage
    }

    /// Replace the Ethereum record wholesale
    pub fn set_eth(&mut self, wallet: EthWallet) {
        self.eth = Some(wallet);
    }

    /// Replace the Bitcoin record wholesale
    pub fn set_btc(&mut self, wallet: BtcWallet) {
        self.btc = Some(wallet);
    }

    /// Empty both records and delete the on-disk Bitcoin wallet file
    pub fn clear(&mut self) -> Result<()> {
        self.eth = None;
        self.btc = None;
        self.storage.delete_if_exists()?;
        Ok(())
    }
}
