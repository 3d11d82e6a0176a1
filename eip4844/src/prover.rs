use bls12_381::{traits::PrimeCurveAffine, G1Point};

use crate::{
    aggregation::aggregate_blobs_and_commitments,
    serialization::{
        deserialize_blob_to_scalars, deserialize_bytes_to_scalar, serialize_g1_compressed,
        serialize_scalar,
    },
    Context, Error, KZGCommitment, KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
};

impl Context {
    /// Computes the KZG commitment to the polynomial represented by the blob.
    pub fn blob_to_kzg_commitment(&self, blob: &[u8]) -> Result<KZGCommitment, Error> {
        // Deserialize the blob into scalars.
        let polynomial = deserialize_blob_to_scalars(blob)?;

        // Compute commitment in lagrange form.
        let commitment = self.prover.commit_key.commit(&polynomial);

        // Serialize the commitment.
        Ok(serialize_g1_compressed(&commitment))
    }

    /// Computes the KZG proof given a blob and a point.
    ///
    /// `z` and the returned evaluation are little-endian scalars.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_kzg_proof(
        &self,
        blob: &[u8],
        z: KZGOpeningPoint,
    ) -> Result<(KZGProof, KZGOpeningEvaluation), Error> {
        // Deserialize the blob into scalars.
        let polynomial = deserialize_blob_to_scalars(blob)?;

        // Deserialize the point into scalar.
        let z = deserialize_bytes_to_scalar(&z)?;

        // Compute the evaluation at z and the opening proof.
        let (proof, y) = self.prover.compute_kzg_proof(&polynomial, z);

        Ok((serialize_g1_compressed(&proof), serialize_scalar(&y)))
    }

    /// Computes the proof that goes into `BlobsSidecar::kzg_aggregated_proof`.
    ///
    /// The blobs are committed to, aggregated with the powers of a challenge
    /// derived from all blobs and commitments, and the aggregate is opened at a
    /// second challenge derived from it. Without blobs the proof is the identity.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(num_blobs = blobs.len()))
    )]
    pub fn compute_aggregate_kzg_proof<B: AsRef<[u8]>>(
        &self,
        blobs: &[B],
    ) -> Result<KZGProof, Error> {
        if blobs.is_empty() {
            return Ok(serialize_g1_compressed(&G1Point::identity()));
        }

        let commitments = blobs
            .iter()
            .map(|blob| self.blob_to_kzg_commitment(blob.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let aggregated = aggregate_blobs_and_commitments(blobs, &commitments)?;

        let (proof, _) = self
            .prover
            .compute_kzg_proof(&aggregated.polynomial, aggregated.evaluation_challenge);

        Ok(serialize_g1_compressed(&proof))
    }
}
