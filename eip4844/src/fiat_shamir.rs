use bls12_381::{reduce_bytes_le_to_scalar, Scalar};
use sha2::{Digest, Sha256};
use ssz::Encode;

/// Hashes the SSZ encoding of `container` into a scalar.
///
/// The SHA-256 digest is read as a little-endian integer and reduced modulo the
/// scalar field order. The reduction introduces a negligible bias.
pub fn hash_to_bls_field<T: Encode>(container: &T) -> Scalar {
    let mut hasher = Sha256::new();
    hasher.update(container.as_ssz_bytes());
    let digest: [u8; 32] = hasher.finalize().into();

    reduce_bytes_le_to_scalar(digest)
}
