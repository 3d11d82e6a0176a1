use bls12_381::{G1Point, Scalar};

use crate::{
    constants::{BYTES_PER_BLOB, BYTES_PER_FIELD_ELEMENT, BYTES_PER_G1_POINT},
    errors::SerializationError,
    SerializedScalar,
};

/// Deserializes a blob into its `FIELD_ELEMENTS_PER_BLOB` evaluations.
///
/// Every 32 byte chunk is a little-endian field element, all 32 bytes are
/// significant. The blob must be exactly `BYTES_PER_BLOB` long, so that the
/// chunking never runs past the last element.
pub(crate) fn deserialize_blob_to_scalars(
    blob_bytes: &[u8],
) -> Result<Vec<Scalar>, SerializationError> {
    if blob_bytes.len() != BYTES_PER_BLOB {
        return Err(SerializationError::BlobHasInvalidLength {
            length: blob_bytes.len(),
            expected_length: BYTES_PER_BLOB,
        });
    }

    blob_bytes
        .chunks_exact(BYTES_PER_FIELD_ELEMENT)
        .map(deserialize_bytes_to_scalar)
        .collect()
}

/// Deserializes a canonical little-endian scalar.
///
/// Values that are not below the modulus are rejected rather than reduced.
pub(crate) fn deserialize_bytes_to_scalar(
    scalar_bytes: &[u8],
) -> Result<Scalar, SerializationError> {
    let Ok(bytes32) = <&SerializedScalar>::try_from(scalar_bytes) else {
        return Err(SerializationError::ScalarHasInvalidLength {
            length: scalar_bytes.len(),
            bytes: scalar_bytes.to_vec(),
        });
    };

    // Convert the CtOption into Option
    let option_scalar: Option<Scalar> = Scalar::from_bytes_le(bytes32).into();
    option_scalar.ok_or_else(|| SerializationError::InvalidFieldEncoding {
        bytes: scalar_bytes.to_vec(),
    })
}

/// Deserializes a compressed G1 point, checking that it lies in the prime order subgroup.
pub(crate) fn deserialize_compressed_g1(
    point_bytes: &[u8; BYTES_PER_G1_POINT],
) -> Result<G1Point, SerializationError> {
    let opt_g1: Option<G1Point> = Option::from(G1Point::from_compressed(point_bytes));
    opt_g1.ok_or_else(|| SerializationError::InvalidPointEncoding {
        bytes: point_bytes.to_vec(),
    })
}

pub(crate) fn serialize_g1_compressed(point: &G1Point) -> [u8; BYTES_PER_G1_POINT] {
    point.to_compressed()
}

pub(crate) fn serialize_scalar(scalar: &Scalar) -> SerializedScalar {
    scalar.to_bytes_le()
}
