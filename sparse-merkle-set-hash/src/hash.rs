use crate::SetHashError;

/// Hash of a leaf position with no set member.
pub(crate) const ABSENT_LEAF_HASH: [u8; 32] = [0u8; 32];

/// Hash of a leaf position occupied by a set member: `blake3(0x01)`.
pub(crate) fn present_leaf_hash() -> [u8; 32] {
    *blake3::hash(&[1u8]).as_bytes()
}

/// Validate that depth is in the allowed range [0, 64].
pub(crate) fn validate_depth(depth: u8) -> Result<(), SetHashError> {
    if depth > 64 {
        return Err(SetHashError::DepthTooLarge { depth });
    }
    Ok(())
}

/// Combine two child hashes into their parent: `blake3(left || right)`.
///
/// Children are always exactly 32 bytes, so the 64-byte concatenation is
/// unambiguous.
pub(crate) fn combine(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(left);
    input[32..].copy_from_slice(right);
    *blake3::hash(&input).as_bytes()
}
