//! Fork tree, block admission, fork choice and pruning

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, trace};

use crate::constants::CUTOFF_AGE;
use crate::error::{LedgerError, Result};
use crate::mempool::TransactionPool;
use crate::transaction::TxValidator;
use crate::types::{Block, Hash, Transaction};
use crate::utxo::UtxoSet;

/// One admitted block and the chain state at that point.
///
/// A node is created inside [`ChainManager::add_block`] once its block passes
/// validation; its snapshot reflects every transaction from genesis to this
/// block inclusive and is fixed at creation. Only the children list grows as
/// later blocks attach.
#[derive(Debug, Clone)]
pub struct ForkNode {
    pub block: Block,
    pub parent: Option<Hash>,
    pub children: Vec<Hash>,
    pub height: u64,
    pub utxo_set: UtxoSet,
}

/// Orchestrates block admission, fork choice and pruning over a tree of fork
/// nodes rooted at genesis.
///
/// Nodes live in an arena keyed by block hash, so parent lookup is O(1)
/// rather than a recursive tree walk; children links remain for bookkeeping.
/// Fork choice is max height, ties keeping the first-seen tip. The
/// transaction pool is held here explicitly and shared by all forks.
pub struct ChainManager {
    nodes: HashMap<Hash, ForkNode>,
    best: Hash,
    max_height: u64,
    pool: TransactionPool,
}

impl ChainManager {
    /// Create a chain holding only `genesis`, which is assumed valid. The
    /// initial state consists of exactly the genesis coinbase outputs.
    pub fn new(genesis: Block) -> Self {
        let mut validator = TxValidator::new(UtxoSet::new());
        validator.credit_coinbase(&genesis.coinbase);

        let hash = genesis.hash();
        let node = ForkNode {
            block: genesis,
            parent: None,
            children: Vec::new(),
            height: 0,
            utxo_set: validator.into_utxo_set(),
        };

        let mut nodes = HashMap::new();
        nodes.insert(hash, node);

        Self { nodes, best: hash, max_height: 0, pool: TransactionPool::new() }
    }

    /// Admit `block` if it extends a known, still-extendable fork and every
    /// ordinary transaction in it validates against that fork's state.
    ///
    /// Returns `false` on any rejection; the classified reason is logged.
    pub fn add_block(&mut self, block: Block) -> bool {
        match self.try_add_block(block) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%reason, "block rejected");
                false
            }
        }
    }

    fn try_add_block(&mut self, block: Block) -> Result<()> {
        // A block without a parent reference is a second genesis and is never
        // acceptable, even if its hash matches the real genesis.
        let parent_hash = block.parent_hash.ok_or(LedgerError::MalformedGenesisReference)?;

        let parent = self
            .nodes
            .get(&parent_hash)
            .ok_or(LedgerError::OrphanParent(parent_hash))?;

        // Forks more than CUTOFF_AGE behind the best tip can never be
        // extended again; this bounds reorganization depth.
        if parent.height + CUTOFF_AGE <= self.max_height {
            return Err(LedgerError::BeyondCutoffAge {
                parent: parent.height,
                max: self.max_height,
            });
        }

        let hash = block.hash();
        // Re-admitting a block already in the tree is a no-op.
        if self.nodes.contains_key(&hash) {
            return Ok(());
        }

        // Replay validation on a snapshot of the parent state. Block
        // admission is all-or-nothing: one invalid transaction rejects the
        // whole block, unlike the pool's best-effort batch apply.
        let parent_height = parent.height;
        let mut validator = TxValidator::new(parent.utxo_set.clone());
        for tx in &block.transactions {
            validator
                .admit(tx)
                .map_err(|reason| LedgerError::InvalidBlockTransaction(tx.hash(), Box::new(reason)))?;
        }

        // Coinbase outputs are credited unconditionally; minted value is not
        // checked against any subsidy schedule here.
        validator.credit_coinbase(&block.coinbase);

        // The block is in; confirm its transactions out of the shared pool,
        // whichever fork this is.
        for tx in &block.transactions {
            self.pool.remove(&tx.hash());
        }

        let height = parent_height + 1;
        let node = ForkNode {
            block,
            parent: Some(parent_hash),
            children: Vec::new(),
            height,
            utxo_set: validator.into_utxo_set(),
        };
        self.nodes.insert(hash, node);
        if let Some(parent) = self.nodes.get_mut(&parent_hash) {
            parent.children.push(hash);
        }

        // Fork choice: strictly taller wins; a tie keeps the incumbent tip.
        if height > self.max_height {
            self.max_height = height;
            self.best = hash;
            info!(height, tip = %hex::encode(hash), "best tip advanced");
            self.prune();
        }

        Ok(())
    }

    /// Add a transaction to the shared pool. No validation happens at
    /// insertion; a producer validates against the best UTXO set later.
    pub fn add_transaction(&mut self, tx: Transaction) {
        self.pool.insert(tx);
    }

    /// The block at the tip of the current best chain.
    pub fn max_height_block(&self) -> &Block {
        &self.best_node().block
    }

    /// Height of the current best chain tip.
    pub fn max_height(&self) -> u64 {
        self.max_height
    }

    /// The UTXO set a producer should build the next candidate block on.
    /// Reads never mutate; repeated calls between admissions observe
    /// identical contents.
    pub fn max_height_utxo_set(&self) -> &UtxoSet {
        &self.best_node().utxo_set
    }

    /// The shared pool of pending transactions.
    pub fn transaction_pool(&self) -> &TransactionPool {
        &self.pool
    }

    /// Whether a block is currently held in the fork tree. Pruned blocks are
    /// not, and blocks extending them are rejected as orphans.
    pub fn contains_block(&self, hash: &Hash) -> bool {
        self.nodes.contains_key(hash)
    }

    fn best_node(&self) -> &ForkNode {
        // The best tip is above the pruning horizon by construction.
        self.nodes
            .get(&self.best)
            .expect("best tip present in the fork tree")
    }

    // Nodes at height <= max - CUTOFF_AGE can no longer be extended (the
    // admission guard sees to that), so they are dropped from the arena.
    fn prune(&mut self) {
        if self.max_height < CUTOFF_AGE {
            return;
        }
        let horizon = self.max_height - CUTOFF_AGE;
        let stale: Vec<Hash> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.height <= horizon)
            .map(|(hash, _)| *hash)
            .collect();
        for hash in stale {
            if let Some(node) = self.nodes.remove(&hash) {
                trace!(block = %hex::encode(hash), height = node.height, "fork node pruned");
            }
        }
    }
}

/// Thread-safe handle over a [`ChainManager`].
///
/// One lock guards the whole tree-and-pool transition: writes take it
/// exclusively for the full `add_block` admission, reads take it shared and
/// return owned snapshots, so no half-updated tip pointer or under-mutation
/// UTXO set is ever observable. Historical nodes are immutable once created;
/// only the frontier needs this synchronization.
#[derive(Clone)]
pub struct SharedChain {
    inner: Arc<RwLock<ChainManager>>,
}

impl SharedChain {
    pub fn new(genesis: Block) -> Self {
        Self { inner: Arc::new(RwLock::new(ChainManager::new(genesis))) }
    }

    pub fn add_block(&self, block: Block) -> bool {
        self.inner.write().add_block(block)
    }

    pub fn add_transaction(&self, tx: Transaction) {
        self.inner.write().add_transaction(tx);
    }

    pub fn max_height_block(&self) -> Block {
        self.inner.read().max_height_block().clone()
    }

    pub fn max_height(&self) -> u64 {
        self.inner.read().max_height()
    }

    pub fn max_height_utxo_set(&self) -> UtxoSet {
        self.inner.read().max_height_utxo_set().clone()
    }

    pub fn transaction_pool(&self) -> TransactionPool {
        self.inner.read().transaction_pool().clone()
    }
}
