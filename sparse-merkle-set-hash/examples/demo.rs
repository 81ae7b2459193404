//! Manual exercise of the set hasher: prints hex roots for a small set.

use sparse_merkle_set_hash::{IncrementalSetTree, SetHashError, SparseMerkleSetHash};

fn main() -> Result<(), SetHashError> {
    let depth = 8;
    let mut leaves = vec![200u64, 3, 17, 42];

    let mut hasher = SparseMerkleSetHash::new(depth)?;
    let batch_root = hasher.compute(&mut leaves)?;
    println!("batch root:       {}", hex::encode(batch_root));

    let mut tree = IncrementalSetTree::new(depth)?;
    for &leaf in &leaves {
        tree.insert(leaf)?;
    }
    println!("incremental root: {}", hex::encode(tree.root()));

    let empty_root = hasher.compute(&mut Vec::new())?;
    println!("empty-set root:   {}", hex::encode(empty_root));
    Ok(())
}
