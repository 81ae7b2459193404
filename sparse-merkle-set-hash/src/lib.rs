//! Sparse Merkle set hash (H*) using Blake3.
//!
//! A set of integers drawn from a universe of `2^n` leaf positions is
//! summarized as the root of a perfect binary tree of depth `n`: each leaf
//! hashes to a present or absent marker, and every internal node is
//! `blake3(left || right)` over its two children. All empty subtrees of a
//! given height share one hash, memoized per level, so the root of a sparse
//! set costs `O(|set| * n)` work instead of `O(2^n)`.
//!
//! Two implementations produce the same root:
//!
//! - [`SparseMerkleSetHash`] hashes a whole set in one recursive pass.
//! - [`IncrementalSetTree`] maintains node hashes under insertion.

#![warn(missing_docs)]

mod empty;
mod error;
pub(crate) mod hash;
mod incremental;
mod set_hash;


pub use empty::EmptySubtreeCache;
pub use error::SetHashError;
pub use incremental::IncrementalSetTree;
pub use set_hash::SparseMerkleSetHash;
