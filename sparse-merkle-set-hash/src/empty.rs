use crate::hash::{ABSENT_LEAF_HASH, combine};

/// Memoized hashes of empty subtrees, indexed by height.
///
/// Level 0 is the absent-leaf marker; level k is level k-1 combined with
/// itself. The cache only ever grows, strictly one level at a time, so
/// requesting level k after level j < k backfills levels j+1..=k in order.
#[derive(Debug, Clone)]
pub struct EmptySubtreeCache {
    levels: Vec<[u8; 32]>,
}

impl EmptySubtreeCache {
    /// Create a cache holding only the level-0 (empty leaf) hash.
    pub fn new() -> Self {
        Self {
            levels: vec![ABSENT_LEAF_HASH],
        }
    }

    /// Hash of an empty subtree of height `level`.
    ///
    /// Extends the cache by recursive backfill when `level` is beyond the
    /// deepest level computed so far; amortized O(1) per new level.
    pub fn hash_at(&mut self, level: usize) -> [u8; 32] {
        if self.levels.len() <= level {
            let below = self.hash_at(level - 1);
            // Appends must happen in strict level order.
            assert_eq!(
                self.levels.len(),
                level,
                "empty-subtree cache corrupted: {} levels present when appending level {}",
                self.levels.len(),
                level
            );
            self.levels.push(combine(&below, &below));
        }
        self.levels[level]
    }

    /// Number of levels computed so far.
    pub fn levels(&self) -> usize {
        self.levels.len()
    }
}

impl Default for EmptySubtreeCache {
    fn default() -> Self {
        Self::new()
    }
}
