use crate::{
    SetHashError,
    empty::EmptySubtreeCache,
    hash::{ABSENT_LEAF_HASH, combine, present_leaf_hash, validate_depth},
};

/// Sparse Merkle set hasher over a universe of `2^depth` leaf positions.
///
/// Recursively halves the position range, descending only into halves that
/// contain set members; an empty half resolves to the cached hash for an
/// empty subtree of that height. The cache is owned by the hasher and grows
/// lazily across calls, so repeated computations on one instance reuse it.
///
/// Work is O(|leaves| * depth); recursion depth is at most `depth + 1`.
#[derive(Debug, Clone)]
pub struct SparseMerkleSetHash {
    depth: u8,
    empty_cache: EmptySubtreeCache,
}

impl SparseMerkleSetHash {
    /// Create a hasher for a universe of `2^depth` positions.
    ///
    /// Depth must be at most 64.
    pub fn new(depth: u8) -> Result<Self, SetHashError> {
        validate_depth(depth)?;
        Ok(Self {
            depth,
            empty_cache: EmptySubtreeCache::new(),
        })
    }

    /// Depth of the universe.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Compute the root hash for the given set of leaf positions.
    ///
    /// Sorts `leaves` in place; callers must treat the input as reordered.
    /// Every leaf must lie in `[0, 2^depth)` and appear at most once.
    pub fn compute(&mut self, leaves: &mut Vec<u64>) -> Result<[u8; 32], SetHashError> {
        leaves.sort_unstable();
        self.validate_leaves(leaves)?;
        let hi = leaves.len();
        Ok(self.hash_range(self.depth, leaves, 0, hi, 0))
    }

    /// Check that the (already sorted) leaves are in range and distinct.
    fn validate_leaves(&self, leaves: &[u64]) -> Result<(), SetHashError> {
        for (i, &leaf) in leaves.iter().enumerate() {
            if self.depth < 64 && leaf >> self.depth != 0 {
                return Err(SetHashError::LeafOutOfRange {
                    leaf,
                    depth: self.depth,
                });
            }
            if i > 0 && leaves[i - 1] == leaf {
                return Err(SetHashError::DuplicateLeaf { leaf });
            }
        }
        Ok(())
    }

    /// Hash the subtree of height `n` covering positions
    /// `[offset, offset + 2^n)`, whose members occupy `leaves[lo..hi]`.
    fn hash_range(&mut self, n: u8, leaves: &[u64], lo: usize, hi: usize, offset: u64) -> [u8; 32] {
        let count = hi - lo;
        if n == 0 {
            return match count {
                0 => ABSENT_LEAF_HASH,
                1 => present_leaf_hash(),
                // Leaves were validated distinct and in range, so a
                // single-position window holds at most one member.
                _ => unreachable!("{count} members in a single-position range"),
            };
        }
        if count == 0 {
            return self.empty_cache.hash_at(n as usize);
        }
        // Cannot overflow: offset + 2^(n-1) <= 2^64 - 2^(n-1) for any
        // height-n subtree of a depth-64 universe.
        let split = offset + (1u64 << (n - 1));
        let i = lo + leaves[lo..hi].partition_point(|&leaf| leaf < split);
        let left = self.hash_range(n - 1, leaves, lo, i, offset);
        let right = self.hash_range(n - 1, leaves, i, hi, split);
        combine(&left, &right)
    }
}
