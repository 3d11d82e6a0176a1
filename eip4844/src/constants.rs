// Note: Any mention of field elements in this file and in general in the codebase
// refers to the scalar field.

/// The number of bytes needed to represent a field element.
///
/// See: https://github.com/ethereum/EIPs/blob/master/EIPS/eip-4844.md
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// The number of field elements needed to represent a blob.
///
/// This is also the size of the roots of unity domain, so it must be a power of two.
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

/// The number of bytes needed to represent a blob.
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

/// The number of bytes needed to represent a G1 element.
pub(crate) const BYTES_PER_G1_POINT: usize = 48;

/// The number of bytes needed to represent a compressed G2 element.
pub(crate) const BYTES_PER_G2_POINT: usize = 96;

/// The number of bytes needed to represent a commitment.
///
/// Note: commitments are G1 elements.
pub const BYTES_PER_COMMITMENT: usize = BYTES_PER_G1_POINT;

/// The number of bytes needed to represent an opening proof.
///
/// Note: proofs are G1 elements.
pub const BYTES_PER_PROOF: usize = BYTES_PER_G1_POINT;

/// The maximum number of blobs (and therefore commitments) a block can carry.
///
/// This bounds the SSZ lists that are hashed to derive the aggregation challenge.
pub const MAX_BLOBS_PER_BLOCK: usize = 16;

/// The generator of the scalar field's multiplicative group, used to derive the roots of unity.
pub const PRIMITIVE_ROOT_OF_UNITY: u64 = polynomial::domain::PRIMITIVE_ROOT_OF_UNITY;

const _: () = assert!(
    FIELD_ELEMENTS_PER_BLOB.is_power_of_two(),
    "FIELD_ELEMENTS_PER_BLOB must be a power of two"
);
