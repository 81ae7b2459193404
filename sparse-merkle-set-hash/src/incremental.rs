use std::collections::{HashMap, HashSet};

use crate::{
    SetHashError,
    empty::EmptySubtreeCache,
    hash::{combine, present_leaf_hash, validate_depth},
};

/// Incrementally maintained sparse Merkle set tree of fixed depth.
///
/// Stores the hash of every node on the path from an occupied leaf to the
/// root, falling back to the per-level empty-subtree hash for missing
/// siblings, so each insertion rehashes exactly `depth` internal nodes.
/// For any insertion sequence the root equals
/// [`SparseMerkleSetHash::compute`](crate::SparseMerkleSetHash::compute)
/// over the same set.
///
/// Nodes are addressed by `(level, index)`: level 0 is the leaf layer and
/// `index` counts subtrees of that height from the left.
#[derive(Debug, Clone)]
pub struct IncrementalSetTree {
    depth: u8,
    members: HashSet<u64>,
    node_hashes: HashMap<(u8, u64), [u8; 32]>,
    empty_cache: EmptySubtreeCache,
}

impl IncrementalSetTree {
    /// Create an empty tree over a universe of `2^depth` positions.
    ///
    /// Depth must be at most 64.
    pub fn new(depth: u8) -> Result<Self, SetHashError> {
        validate_depth(depth)?;
        Ok(Self {
            depth,
            members: HashSet::new(),
            node_hashes: HashMap::new(),
            empty_cache: EmptySubtreeCache::new(),
        })
    }

    /// Depth of the universe.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Number of members in the set.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `position` is a member of the set.
    pub fn contains(&self, position: u64) -> bool {
        self.members.contains(&position)
    }

    /// Mark `position` as a member and rehash its path to the root.
    ///
    /// Inserting a position twice is an error, matching the batch hasher's
    /// rejection of duplicate leaves.
    pub fn insert(&mut self, position: u64) -> Result<(), SetHashError> {
        if self.depth < 64 && position >> self.depth != 0 {
            return Err(SetHashError::LeafOutOfRange {
                leaf: position,
                depth: self.depth,
            });
        }
        if !self.members.insert(position) {
            return Err(SetHashError::DuplicateLeaf { leaf: position });
        }

        self.node_hashes.insert((0, position), present_leaf_hash());
        let mut index = position;
        for level in 0..self.depth {
            let left_index = index & !1;
            let left = self.node_hash(level, left_index);
            let right = self.node_hash(level, left_index | 1);
            index >>= 1;
            self.node_hashes
                .insert((level + 1, index), combine(&left, &right));
        }
        Ok(())
    }

    /// Root hash of the tree; the empty-subtree hash at `depth` when no
    /// member has been inserted.
    pub fn root(&mut self) -> [u8; 32] {
        let depth = self.depth;
        self.node_hash(depth, 0)
    }

    /// Stored hash of a node, or the empty-subtree hash for its level.
    fn node_hash(&mut self, level: u8, index: u64) -> [u8; 32] {
        match self.node_hashes.get(&(level, index)) {
            Some(hash) => *hash,
            None => self.empty_cache.hash_at(level as usize),
        }
    }
}
