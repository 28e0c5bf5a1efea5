//! Shared fixtures: deterministic keys, signed transfers, block builders

#![allow(dead_code)]

use ledger_core::crypto::signing_digest;
use ledger_core::{Block, OutPoint, Output, Transaction, TransactionInput, Value};
use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

pub struct Keypair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

/// Deterministic keypair; `seed` must be non-zero.
pub fn keypair(seed: u8) -> Keypair {
    let secp = Secp256k1::new();
    let secret = SecretKey::from_slice(&[seed; 32]).unwrap();
    let public = PublicKey::from_secret_key(&secp, &secret);
    Keypair { secret, public }
}

pub fn sign_input(key: &Keypair, prevout: &OutPoint, outputs: &[Output]) -> Signature {
    let secp = Secp256k1::new();
    let digest = signing_digest(prevout, outputs);
    let message = Message::from_digest_slice(&digest).unwrap();
    secp.sign_ecdsa(&message, &key.secret)
}

/// Transfer spending `prevouts`, each signed by the matching key.
pub fn transfer(spends: &[(OutPoint, &Keypair)], outputs: Vec<Output>) -> Transaction {
    let inputs = spends
        .iter()
        .map(|(prevout, key)| TransactionInput {
            prevout: *prevout,
            signature: sign_input(key, prevout, &outputs),
        })
        .collect();
    Transaction { inputs, outputs }
}

/// Input-free minting transaction. Distinct values give sibling blocks
/// distinct hashes.
pub fn coinbase(owner: &Keypair, value: Value) -> Transaction {
    Transaction {
        inputs: vec![],
        outputs: vec![Output { value, owner: owner.public }],
    }
}

pub fn genesis(owner: &Keypair, value: Value) -> Block {
    Block { parent_hash: None, coinbase: coinbase(owner, value), transactions: vec![] }
}

pub fn block_on(parent: &Block, owner: &Keypair, coinbase_value: Value, txs: Vec<Transaction>) -> Block {
    Block {
        parent_hash: Some(parent.hash()),
        coinbase: coinbase(owner, coinbase_value),
        transactions: txs,
    }
}

/// The outpoint minted by a block's coinbase at output `index`.
pub fn coinbase_outpoint(block: &Block, index: u32) -> OutPoint {
    OutPoint { txid: block.coinbase.hash(), index }
}
