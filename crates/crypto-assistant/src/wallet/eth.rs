//! Ethereum Key Generation
//!
//! Fresh random keypairs via the alloy local signer. Nothing here touches
//! the chain; the record lives in the wallet session.

use alloy::signers::local::PrivateKeySigner;

use crate::error::Result;
use crate::session::EthWallet;

/// Generate a new random Ethereum wallet record
pub fn create_wallet() -> Result<EthWallet> {
    let signer = PrivateKeySigner::random();

    let address = signer.address().to_string();
    let private_key = format!("0x{}", hex::encode(signer.to_bytes()));

    tracing::info!(%address, "Generated new Ethereum wallet");

    Ok(EthWallet {
        address,
        private_key,
        cached_balance: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_shape() {
        let wallet = create_wallet().unwrap();
        assert!(wallet.address.starts_with("0x"));
        assert_eq!(wallet.address.len(), 42);
        assert!(wallet.private_key.starts_with("0x"));
        assert_eq!(wallet.private_key.len(), 66);
        assert!(wallet.cached_balance.is_none());
    }

    #[test]
    fn test_successive_wallets_differ() {
        let a = create_wallet().unwrap();
        let b = create_wallet().unwrap();
        assert_ne!(a.address, b.address);
        assert_ne!(a.private_key, b.private_key);
    }
}
