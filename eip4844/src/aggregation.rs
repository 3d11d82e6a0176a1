use bls12_381::{lincomb, G1Point, Scalar};
use polynomial::compute_powers;

use crate::{
    constants::FIELD_ELEMENTS_PER_BLOB,
    containers::{BlobsAndCommitments, PolynomialAndCommitment},
    errors::Error,
    fiat_shamir::hash_to_bls_field,
    serialization::{
        deserialize_blob_to_scalars, deserialize_compressed_g1, serialize_g1_compressed,
    },
    KZGCommitment, VerifierError,
};

/// Computes `sum_i scalars[i] * points[i]` over compressed G1 points.
///
/// The lengths are checked before any point is decompressed.
pub fn g1_lincomb(points: &[KZGCommitment], scalars: &[Scalar]) -> Result<KZGCommitment, Error> {
    let result = g1_lincomb_to_point(points, scalars)?;
    Ok(serialize_g1_compressed(&result))
}

/// Same as [`g1_lincomb`], keeping the result as a point.
fn g1_lincomb_to_point(points: &[KZGCommitment], scalars: &[Scalar]) -> Result<G1Point, Error> {
    if points.len() != scalars.len() {
        return Err(VerifierError::LengthMismatch {
            inputs_len: points.len(),
            scalars_len: scalars.len(),
        }
        .into());
    }

    let points = points
        .iter()
        .map(deserialize_compressed_g1)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lincomb::g1_lincomb(&points, scalars)
        .expect("points and scalars have the same length")
        .into())
}

/// Computes the linear combination of the polynomials that the blobs encode.
///
/// Every blob is decoded first, so a malformed blob fails the whole call.
pub fn poly_lincomb<B: AsRef<[u8]>>(
    blobs: &[B],
    scalars: &[Scalar],
) -> Result<Vec<Scalar>, Error> {
    if blobs.len() != scalars.len() {
        return Err(VerifierError::LengthMismatch {
            inputs_len: blobs.len(),
            scalars_len: scalars.len(),
        }
        .into());
    }

    let polynomials = blobs
        .iter()
        .map(|blob| deserialize_blob_to_scalars(blob.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(
        polynomial::poly_lincomb(&polynomials, scalars, FIELD_ELEMENTS_PER_BLOB)
            .expect("polynomials and scalars have the same length"),
    )
}

/// The aggregated polynomial of a set of blobs, its commitment, and the
/// point it has to be opened at.
pub(crate) struct AggregatedOpening {
    pub polynomial: Vec<Scalar>,
    pub commitment: G1Point,
    pub evaluation_challenge: Scalar,
}

/// Aggregates the blobs and their commitments with the powers of a challenge
/// derived from all of them, then derives the point the aggregate is opened at.
///
/// Prover and verifier both go through this function, so they agree on every
/// challenge.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(num_blobs = blobs.len()))
)]
pub(crate) fn aggregate_blobs_and_commitments<B: AsRef<[u8]>>(
    blobs: &[B],
    commitments: &[KZGCommitment],
) -> Result<AggregatedOpening, Error> {
    // Fails on too many blobs or a blob of the wrong size before anything is decoded.
    let r = hash_to_bls_field(&BlobsAndCommitments::new(blobs, commitments)?);
    let r_powers = compute_powers(r, commitments.len());

    let commitment = g1_lincomb_to_point(commitments, &r_powers)?;
    let polynomial = poly_lincomb(blobs, &r_powers)?;

    let evaluation_challenge = hash_to_bls_field(&PolynomialAndCommitment::new(
        &polynomial,
        serialize_g1_compressed(&commitment),
    )?);

    Ok(AggregatedOpening {
        polynomial,
        commitment,
        evaluation_challenge,
    })
}
