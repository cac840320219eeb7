//! Wallet Services
//!
//! Key generation, on-disk wallet storage, and the chain backend used for
//! balance scans.

pub mod btc;
pub mod esplora;
pub mod eth;
pub mod storage;

pub use esplora::{ChainBackend, EsploraClient, format_btc};
pub use storage::WalletStorage;
