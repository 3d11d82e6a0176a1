use crate::{
    aggregation::aggregate_blobs_and_commitments,
    serialization::{
        deserialize_blob_to_scalars, deserialize_bytes_to_scalar, deserialize_compressed_g1,
        serialize_g1_compressed,
    },
    BlobsSidecar, Context, Error, KZGCommitment, KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
    Root, SidecarError, Slot, VerifierError,
};

impl Context {
    /// Verify the KZG proof to the commitment.
    ///
    /// `z` and `y` are little-endian scalars.
    pub fn verify_kzg_proof(
        &self,
        commitment: KZGCommitment,
        z: KZGOpeningPoint,
        y: KZGOpeningEvaluation,
        proof: KZGProof,
    ) -> Result<(), Error> {
        // Deserialize the KZG commitment.
        let commitment = deserialize_compressed_g1(&commitment)?;

        // Deserialize the KZG proof.
        let proof = deserialize_compressed_g1(&proof)?;

        // Deserialize the point into scalar.
        let z = deserialize_bytes_to_scalar(&z)?;

        // Deserialize the evaluation into scalar.
        let y = deserialize_bytes_to_scalar(&y)?;

        // Verify KZG proof.
        self.verifier.verify_kzg_proof(commitment, z, y, proof)?;

        Ok(())
    }

    /// Verify that `proof` is the aggregated opening proof of `blobs` against
    /// `commitments`.
    ///
    /// This is the verifying side of `compute_aggregate_kzg_proof`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(num_blobs = blobs.len()))
    )]
    pub fn verify_aggregate_kzg_proof<B: AsRef<[u8]>>(
        &self,
        blobs: &[B],
        commitments: &[KZGCommitment],
        proof: KZGProof,
    ) -> Result<(), Error> {
        let aggregated = aggregate_blobs_and_commitments(blobs, commitments)?;

        // Evaluate the aggregated polynomial at the challenge.
        let x = aggregated.evaluation_challenge;
        let y = self.verifier.domain.evaluate(&aggregated.polynomial, x);

        let proof = deserialize_compressed_g1(&proof)?;

        self.verifier
            .verify_kzg_proof(aggregated.commitment, x, y, proof)
            .map_err(|_| VerifierError::InvalidAggregateProof)?;

        Ok(())
    }

    /// Checks a blobs sidecar against the block it was published for, using
    /// its aggregated proof.
    ///
    /// The slot, root and blob count are checked before any cryptography is done,
    /// so a sidecar for the wrong block is rejected cheaply.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(slot = slot)))]
    pub fn validate_blobs_sidecar(
        &self,
        slot: Slot,
        beacon_block_root: Root,
        expected_kzg_commitments: &[KZGCommitment],
        blobs_sidecar: &BlobsSidecar,
    ) -> Result<(), Error> {
        let result = self.check_aggregated_proof(
            slot,
            beacon_block_root,
            expected_kzg_commitments,
            blobs_sidecar,
        );
        log_rejection(slot, result)
    }

    /// Checks a blobs sidecar against the block it was published for by
    /// recomputing the commitment of every blob.
    ///
    /// This does not look at `kzg_aggregated_proof`. A sidecar without blobs
    /// passes when the block expects no commitments.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(slot = slot)))]
    pub fn verify_blobs_sidecar(
        &self,
        slot: Slot,
        beacon_block_root: Root,
        expected_kzg_commitments: &[KZGCommitment],
        blobs_sidecar: &BlobsSidecar,
    ) -> Result<(), Error> {
        let result = self.check_blob_commitments(
            slot,
            beacon_block_root,
            expected_kzg_commitments,
            blobs_sidecar,
        );
        log_rejection(slot, result)
    }

    fn check_aggregated_proof(
        &self,
        slot: Slot,
        beacon_block_root: Root,
        expected_kzg_commitments: &[KZGCommitment],
        blobs_sidecar: &BlobsSidecar,
    ) -> Result<(), Error> {
        check_sidecar_header(slot, beacon_block_root, expected_kzg_commitments, blobs_sidecar)?;
        if blobs_sidecar.blobs.is_empty() {
            return Err(SidecarError::EmptySidecar.into());
        }

        self.verify_aggregate_kzg_proof(
            &blobs_sidecar.blobs,
            expected_kzg_commitments,
            blobs_sidecar.kzg_aggregated_proof,
        )
    }

    fn check_blob_commitments(
        &self,
        slot: Slot,
        beacon_block_root: Root,
        expected_kzg_commitments: &[KZGCommitment],
        blobs_sidecar: &BlobsSidecar,
    ) -> Result<(), Error> {
        check_sidecar_header(slot, beacon_block_root, expected_kzg_commitments, blobs_sidecar)?;

        for (blob_index, (blob, expected_commitment)) in blobs_sidecar
            .blobs
            .iter()
            .zip(expected_kzg_commitments)
            .enumerate()
        {
            let polynomial = deserialize_blob_to_scalars(blob).map_err(|reason| {
                VerifierError::CommitmentComputationFailed { blob_index, reason }
            })?;
            let commitment = serialize_g1_compressed(&self.prover.commit_key.commit(&polynomial));

            if commitment != *expected_commitment {
                return Err(VerifierError::CommitmentMismatch { blob_index }.into());
            }
        }

        Ok(())
    }
}

fn log_rejection(slot: Slot, result: Result<(), Error>) -> Result<(), Error> {
    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        tracing::debug!(slot, ?err, "rejected blobs sidecar");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = slot;

    result
}

/// Checks that the sidecar belongs to the block and carries one blob per commitment.
fn check_sidecar_header(
    slot: Slot,
    beacon_block_root: Root,
    expected_kzg_commitments: &[KZGCommitment],
    blobs_sidecar: &BlobsSidecar,
) -> Result<(), SidecarError> {
    if slot != blobs_sidecar.beacon_block_slot {
        return Err(SidecarError::InvalidSlot {
            expected: slot,
            got: blobs_sidecar.beacon_block_slot,
        });
    }

    if beacon_block_root != blobs_sidecar.beacon_block_root {
        return Err(SidecarError::InvalidBlockRoot {
            expected: beacon_block_root,
            got: blobs_sidecar.beacon_block_root,
        });
    }

    if expected_kzg_commitments.len() != blobs_sidecar.blobs.len() {
        return Err(SidecarError::InvalidLength {
            commitments_len: expected_kzg_commitments.len(),
            blobs_len: blobs_sidecar.blobs.len(),
        });
    }

    Ok(())
}
