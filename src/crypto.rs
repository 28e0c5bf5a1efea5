//! Supplied cryptographic primitives: content digests and ECDSA verification
//!
//! Transaction construction and signing happen upstream of this crate; the
//! engine only hashes what it is given and verifies signatures against it.

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1};
use sha2::{Digest, Sha256};

use crate::types::{Block, Hash, OutPoint, Output, Transaction};

/// Digest of the canonical signable payload for one input: the claimed
/// output reference followed by every output of the spending transaction.
///
/// The payload deliberately excludes signatures, so it can be computed both
/// before signing and during verification.
pub fn signing_digest(prevout: &OutPoint, outputs: &[Output]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(prevout.txid);
    hasher.update(prevout.index.to_le_bytes());
    for output in outputs {
        hasher.update(output.value.to_le_bytes());
        hasher.update(output.owner.serialize());
    }
    hasher.finalize().into()
}

/// Content-derived transaction hash over all inputs and outputs.
pub fn transaction_digest(tx: &Transaction) -> Hash {
    let mut hasher = Sha256::new();
    for input in &tx.inputs {
        hasher.update(input.prevout.txid);
        hasher.update(input.prevout.index.to_le_bytes());
        hasher.update(input.signature.serialize_compact());
    }
    for output in &tx.outputs {
        hasher.update(output.value.to_le_bytes());
        hasher.update(output.owner.serialize());
    }
    hasher.finalize().into()
}

/// Content-derived block hash over the parent reference, the coinbase and
/// every ordinary transaction id.
pub fn block_digest(block: &Block) -> Hash {
    let mut hasher = Sha256::new();
    match block.parent_hash {
        Some(parent) => {
            hasher.update([1u8]);
            hasher.update(parent);
        }
        None => hasher.update([0u8]),
    }
    hasher.update(block.coinbase.hash());
    for tx in &block.transactions {
        hasher.update(tx.hash());
    }
    hasher.finalize().into()
}

/// Verify an ECDSA signature over a 32-byte digest.
///
/// Malformed input is a verification failure, never a panic.
pub fn verify_signature(public_key: &PublicKey, digest: &Hash, signature: &Signature) -> bool {
    let message = match Message::from_digest_slice(digest) {
        Ok(message) => message,
        Err(_) => return false,
    };

    Secp256k1::verification_only()
        .verify_ecdsa(&message, signature, public_key)
        .is_ok()
}
