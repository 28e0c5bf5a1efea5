//! # Ledger-Core
//!
//! A minimal in-memory ledger-validation engine: it accepts proposed
//! transactions and blocks, verifies each against cryptographic and
//! accounting rules, and maintains a tree of competing forks to determine
//! the canonical chain tip.
//!
//! ## Architecture
//!
//! - [`types`] - output references, transactions, blocks
//! - [`crypto`] - content digests and ECDSA verification (supplied primitives)
//! - [`utxo`] - the unspent-output set, one snapshot per fork node
//! - [`transaction`] - the five-rule transaction validator and batch apply
//! - [`mempool`] - the shared pending-transaction pool
//! - [`chain`] - fork tree, block admission, fork choice, pruning
//! - [`error`] - internal rejection classification behind the boolean contract
//!
//! Block production, proof-of-work, networking, wallets and persistence are
//! external collaborators: the engine consumes already-hashed, already-signed
//! objects and exposes in-memory state for a producer to build on.
//!
//! ## Usage
//!
//! ```
//! use ledger_core::{Block, ChainManager, Transaction};
//!
//! let genesis = Block {
//!     parent_hash: None,
//!     coinbase: Transaction { inputs: vec![], outputs: vec![] },
//!     transactions: vec![],
//! };
//!
//! let chain = ChainManager::new(genesis);
//! assert_eq!(chain.max_height(), 0);
//! assert!(chain.transaction_pool().is_empty());
//! ```

pub mod chain;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod mempool;
pub mod transaction;
pub mod types;
pub mod utxo;

// Re-export commonly used types
pub use chain::{ChainManager, ForkNode, SharedChain};
pub use constants::CUTOFF_AGE;
pub use error::{LedgerError, Result};
pub use mempool::TransactionPool;
pub use transaction::TxValidator;
pub use types::{Block, Hash, OutPoint, Output, Transaction, TransactionInput, Value};
pub use utxo::UtxoSet;
