//! FNV-1a hashing of field values.
//!
//! Fast, deterministic, not cryptographic. Used to compare runs without
//! holding every snapshot in memory.

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Hash the bit patterns of `field`, length first.
///
/// Equal hashes mean bit-identical fields with overwhelming probability;
/// `0.0` and `-0.0` hash differently.
pub fn field_hash(field: &[f64]) -> u64 {
    field
        .iter()
        .fold(fnv1a_u64(FNV_OFFSET, field.len() as u64), |h, v| {
            fnv1a_u64(h, v.to_bits())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let f = [0.0, 0.25, 1.0];
        assert_eq!(field_hash(&f), field_hash(&f));
    }

    #[test]
    fn order_and_sign_matter() {
        assert_ne!(field_hash(&[1.0, 2.0]), field_hash(&[2.0, 1.0]));
        assert_ne!(field_hash(&[0.0]), field_hash(&[-0.0]));
    }

    #[test]
    fn length_matters() {
        assert_ne!(field_hash(&[]), field_hash(&[0.0]));
        assert_ne!(FNV_OFFSET, field_hash(&[]));
    }
}
