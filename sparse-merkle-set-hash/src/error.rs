use thiserror::Error;

/// Errors from sparse Merkle set hash operations.
#[derive(Debug, Error)]
pub enum SetHashError {
    /// Depth exceeds the 64-bit position space.
    #[error("depth must be at most 64, got {depth}")]
    DepthTooLarge {
        /// The rejected depth.
        depth: u8,
    },
    /// A leaf position does not fit in the universe for this depth.
    #[error("leaf {leaf} is out of range for depth {depth} (universe size 2^{depth})")]
    LeafOutOfRange {
        /// The out-of-range position.
        leaf: u64,
        /// Depth of the universe it was checked against.
        depth: u8,
    },
    /// The same leaf position appears more than once.
    #[error("duplicate leaf {leaf}")]
    DuplicateLeaf {
        /// The repeated position.
        leaf: u64,
    },
}
