use crate::constants::{BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT, BYTES_PER_PROOF};

/// Slot number of a beacon block.
pub type Slot = u64;

/// Hash tree root of a beacon block.
pub type Root = [u8; 32];

/// `Blob` is an opaque, purported blob of `BYTES_PER_BLOB` bytes.
///
/// Note: The length is only checked when the blob is used, since blobs
/// arrive from the network and can have any size.
pub type Blob = Vec<u8>;

/// `KZGCommitment` denotes a 48 byte compressed G1 commitment to a polynomial.
pub type KZGCommitment = [u8; BYTES_PER_COMMITMENT];

/// `KZGProof` denotes a 48 byte compressed G1 opening proof.
pub type KZGProof = [u8; BYTES_PER_PROOF];

/// `SerializedScalar` denotes a 32 byte little-endian field element.
pub type SerializedScalar = [u8; BYTES_PER_FIELD_ELEMENT];

/// The point at which a polynomial is opened.
pub type KZGOpeningPoint = SerializedScalar;

/// The evaluation of a polynomial at the opening point.
pub type KZGOpeningEvaluation = SerializedScalar;

/// The out-of-band payload carrying the blobs of a beacon block together
/// with a single proof that covers all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobsSidecar {
    pub beacon_block_root: Root,
    pub beacon_block_slot: Slot,
    pub blobs: Vec<Blob>,
    pub kzg_aggregated_proof: KZGProof,
}
