//! On-Disk Wallet Store
//!
//! A named Bitcoin wallet file, serialized as JSON. The lifecycle is
//! delete-then-create: every wallet creation and every `clear` removes any
//! existing file of the same name, so creating twice never fails on
//! "already exists".

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::BtcWallet;

/// Default directory for wallet files, relative to the working directory
pub const DEFAULT_WALLET_DIR: &str = ".crypto-assistant";

/// Default wallet name
pub const DEFAULT_WALLET_NAME: &str = "btc_wallet";

/// Persisted wallet file contents
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WalletFile {
    pub name: String,
    pub address: String,
    pub mnemonic: String,
    pub network: String,
    pub created_at: DateTime<Utc>,
}

/// Named on-disk wallet store
#[derive(Clone, Debug)]
pub struct WalletStorage {
    dir: PathBuf,
    name: String,
}

impl WalletStorage {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Directory from `WALLET_DIR` (default `.crypto-assistant`), fixed name
    pub fn from_env() -> Self {
        let dir = std::env::var("WALLET_DIR").unwrap_or_else(|_| DEFAULT_WALLET_DIR.into());
        Self::new(dir, DEFAULT_WALLET_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the wallet file
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.name))
    }

    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// Remove the wallet file if present. Missing files are not an error.
    pub fn delete_if_exists(&self) -> Result<()> {
        match std::fs::remove_file(self.path()) {
            Ok(()) => {
                tracing::debug!(wallet = %self.name, "Deleted existing wallet file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the wallet file, creating the directory if needed
    pub fn persist(&self, wallet: &BtcWallet) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let file = WalletFile {
            name: self.name.clone(),
            address: wallet.address.clone(),
            mnemonic: wallet.mnemonic.clone(),
            network: wallet.network.clone(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(self.path(), json)?;

        tracing::debug!(wallet = %self.name, path = %self.path().display(), "Persisted wallet file");
        Ok(())
    }

    /// Read the wallet file back, if present
    pub fn load(&self) -> Result<Option<WalletFile>> {
        if !self.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(self.path())?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}

impl Default for WalletStorage {
    fn default() -> Self {
        Self::new(DEFAULT_WALLET_DIR, DEFAULT_WALLET_NAME)
    }
}
