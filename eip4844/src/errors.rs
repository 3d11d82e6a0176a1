use crate::{block::ForkName, Root, Slot};

/// Top-level error type for blobs sidecar verification.
///
/// None of these are retryable: they either mean that the input was malformed
/// or that a cryptographic check did not pass.
#[derive(Debug)]
pub enum Error {
    /// The sidecar does not belong to the block it is being checked against.
    Sidecar(SidecarError),
    /// Error encountered while verifying commitments or proofs.
    Verifier(VerifierError),
    /// Error encountered while (de)serializing blobs, scalars, group elements or SSZ containers.
    Serialization(SerializationError),
    /// Error returned by a block accessor.
    Block(BlockError),
}

impl From<SidecarError> for Error {
    fn from(value: SidecarError) -> Self {
        Self::Sidecar(value)
    }
}

impl From<VerifierError> for Error {
    fn from(value: VerifierError) -> Self {
        Self::Verifier(value)
    }
}

impl From<SerializationError> for Error {
    fn from(value: SerializationError) -> Self {
        Self::Serialization(value)
    }
}

impl From<SszError> for Error {
    fn from(value: SszError) -> Self {
        Self::Serialization(SerializationError::Ssz(value))
    }
}

impl From<BlockError> for Error {
    fn from(value: BlockError) -> Self {
        Self::Block(value)
    }
}

/// Cheap structural checks on a sidecar, done before touching any cryptographic material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidecarError {
    /// The sidecar was produced for a different slot.
    InvalidSlot { expected: Slot, got: Slot },
    /// The sidecar references a different beacon block.
    InvalidBlockRoot { expected: Root, got: Root },
    /// The number of expected commitments and the number of blobs differ.
    InvalidLength {
        commitments_len: usize,
        blobs_len: usize,
    },
    /// The sidecar does not carry any blobs, so there is nothing to aggregate.
    EmptySidecar,
}

/// Errors that can occur while verifying commitments and opening proofs.
#[derive(Debug)]
pub enum VerifierError {
    /// The points (or polynomials) and scalars of a linear combination have different lengths.
    LengthMismatch { inputs_len: usize, scalars_len: usize },
    /// The commitment of a blob could not be computed.
    CommitmentComputationFailed {
        blob_index: usize,
        reason: SerializationError,
    },
    /// The commitment computed from a blob differs from the expected one.
    CommitmentMismatch { blob_index: usize },
    /// The aggregated opening proof of a sidecar failed verification.
    InvalidAggregateProof,
    /// A single-point opening proof failed verification.
    InvalidProof,
}

/// Errors that can occur during deserialization of untrusted input from the public API,
/// or while encoding the containers that are hashed into challenges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// The bytes are not the canonical encoding of a scalar, ie the value is not below the modulus.
    InvalidFieldEncoding { bytes: Vec<u8> },
    /// The bytes are not a compressed G1 point in the prime order subgroup.
    InvalidPointEncoding { bytes: Vec<u8> },
    /// Scalar had an incorrect byte length.
    ScalarHasInvalidLength { bytes: Vec<u8>, length: usize },
    /// Blob had an incorrect byte length.
    BlobHasInvalidLength { length: usize, expected_length: usize },
    /// A value does not fit the SSZ type of its container.
    Ssz(SszError),
}

impl From<SszError> for SerializationError {
    fn from(value: SszError) -> Self {
        Self::Ssz(value)
    }
}

/// Errors that can occur while building the SSZ containers used for Fiat-Shamir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SszError {
    /// A list holds more elements than its declared maximum.
    ListTooLong { length: usize, max_length: usize },
    /// A fixed size element of a list does not have the required size.
    ElementHasInvalidLength {
        index: usize,
        length: usize,
        expected_length: usize,
    },
    /// A vector does not have the number of elements its type requires.
    VectorHasInvalidLength { length: usize, expected_length: usize },
}

/// Errors surfaced by block accessors while looking for commitments or sidecars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    /// The block body does not have the requested field at this fork.
    UnsupportedField {
        field: &'static str,
        fork: ForkName,
    },
    /// The data could not be retrieved, eg the backing store failed.
    Unavailable { reason: String },
}
