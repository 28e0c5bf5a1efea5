//! Consensus constants for the fork-choice engine

/// Maximum height distance behind the best tip at which a fork may still be
/// extended. A block whose parent sits at `height <= max_height - CUTOFF_AGE`
/// is permanently unacceptable, which bounds both reorganization depth and
/// the state the tree has to retain.
pub const CUTOFF_AGE: u64 = 10;
