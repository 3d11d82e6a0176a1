//! The SSZ containers that are hashed to derive the aggregation challenges.
//!
//! Both are built from borrowed protocol data. Building a container checks the
//! list bounds and element sizes its SSZ type declares, so an encoded container
//! is always well formed.
use bls12_381::Scalar;
use ssz_derive::Encode;
use ssz_types::{
    typenum::{Unsigned, U131072, U16, U4096},
    FixedVector, VariableList,
};

use crate::{
    constants::{BYTES_PER_BLOB, FIELD_ELEMENTS_PER_BLOB, MAX_BLOBS_PER_BLOCK},
    errors::SszError,
    serialization::serialize_scalar,
    KZGCommitment, SerializedScalar,
};

pub type MaxBlobsPerBlock = U16;
pub type FieldElementsPerBlob = U4096;
pub type BytesPerBlob = U131072;

const _: () = assert!(MaxBlobsPerBlock::USIZE == MAX_BLOBS_PER_BLOCK);
const _: () = assert!(FieldElementsPerBlob::USIZE == FIELD_ELEMENTS_PER_BLOB);
const _: () = assert!(BytesPerBlob::USIZE == BYTES_PER_BLOB);

/// `Blob` as an SSZ vector of bytes.
pub type SszBlob = FixedVector<u8, BytesPerBlob>;

/// `Polynomial` as an SSZ vector of little-endian field elements.
pub type SszPolynomial = FixedVector<SerializedScalar, FieldElementsPerBlob>;

/// ```text
/// class BlobsAndCommitments(Container):
///     blobs: List[Blob, MAX_BLOBS_PER_BLOCK]
///     kzg_commitments: List[KZGCommitment, MAX_BLOBS_PER_BLOCK]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Encode)]
pub struct BlobsAndCommitments {
    pub blobs: VariableList<SszBlob, MaxBlobsPerBlock>,
    pub kzg_commitments: VariableList<KZGCommitment, MaxBlobsPerBlock>,
}

impl BlobsAndCommitments {
    /// Copies the blobs and commitments into their SSZ types.
    ///
    /// The list lengths are checked before any blob is copied.
    pub fn new<B: AsRef<[u8]>>(
        blobs: &[B],
        kzg_commitments: &[KZGCommitment],
    ) -> Result<Self, SszError> {
        let kzg_commitments = bounded_list(kzg_commitments.to_vec())?;
        check_list_length::<MaxBlobsPerBlock>(blobs.len())?;

        let blobs = blobs
            .iter()
            .enumerate()
            .map(|(index, blob)| {
                let blob = blob.as_ref();
                SszBlob::new(blob.to_vec()).map_err(|_| SszError::ElementHasInvalidLength {
                    index,
                    length: blob.len(),
                    expected_length: BYTES_PER_BLOB,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            blobs: bounded_list(blobs)?,
            kzg_commitments,
        })
    }
}

/// ```text
/// class PolynomialAndCommitment(Container):
///     polynomial: Polynomial
///     kzg_commitment: KZGCommitment
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Encode)]
pub struct PolynomialAndCommitment {
    pub polynomial: SszPolynomial,
    pub kzg_commitment: KZGCommitment,
}

impl PolynomialAndCommitment {
    pub fn new(polynomial: &[Scalar], kzg_commitment: KZGCommitment) -> Result<Self, SszError> {
        let length = polynomial.len();
        let polynomial = polynomial.iter().map(serialize_scalar).collect();

        Ok(Self {
            polynomial: SszPolynomial::new(polynomial).map_err(|_| {
                SszError::VectorHasInvalidLength {
                    length,
                    expected_length: FIELD_ELEMENTS_PER_BLOB,
                }
            })?,
            kzg_commitment,
        })
    }
}

const fn check_list_length<N: Unsigned>(length: usize) -> Result<(), SszError> {
    if length > N::USIZE {
        return Err(SszError::ListTooLong {
            length,
            max_length: N::USIZE,
        });
    }
    Ok(())
}

fn bounded_list<T, N: Unsigned>(items: Vec<T>) -> Result<VariableList<T, N>, SszError> {
    let length = items.len();
    VariableList::new(items).map_err(|_| SszError::ListTooLong {
        length,
        max_length: N::USIZE,
    })
}
