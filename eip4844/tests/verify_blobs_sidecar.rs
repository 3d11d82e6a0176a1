use common::{commitments, context, rng, random_blob, set_chunk, valid_sidecar, BLOCK_ROOT, SLOT};
use eth_blobs_sidecar::{
    constants::BYTES_PER_BLOB, BlobsSidecar, Error, SerializationError, SidecarError,
    VerifierError,
};

mod common;

fn sidecar_with_blobs(blobs: Vec<Vec<u8>>) -> BlobsSidecar {
    BlobsSidecar {
        beacon_block_root: BLOCK_ROOT,
        beacon_block_slot: SLOT,
        blobs,
        // Not looked at by this path.
        kzg_aggregated_proof: [0xff; 48],
    }
}

#[test]
fn matching_commitments_are_accepted() {
    let (sidecar, commitments) = valid_sidecar(3, 100);
    let sidecar = sidecar_with_blobs(sidecar.blobs);

    assert!(context()
        .verify_blobs_sidecar(SLOT, BLOCK_ROOT, &commitments, &sidecar)
        .is_ok());
}

#[test]
fn empty_sidecar_without_commitments_is_accepted() {
    let sidecar = sidecar_with_blobs(Vec::new());
    assert!(context()
        .verify_blobs_sidecar(SLOT, BLOCK_ROOT, &[], &sidecar)
        .is_ok());
}

#[test]
fn header_is_checked_first() {
    let (sidecar, commitments) = valid_sidecar(1, 101);

    let result = context().verify_blobs_sidecar(SLOT - 1, BLOCK_ROOT, &commitments, &sidecar);
    assert!(matches!(
        result,
        Err(Error::Sidecar(SidecarError::InvalidSlot { .. }))
    ));

    let result = context().verify_blobs_sidecar(SLOT, [0u8; 32], &commitments, &sidecar);
    assert!(matches!(
        result,
        Err(Error::Sidecar(SidecarError::InvalidBlockRoot { .. }))
    ));

    let result = context().verify_blobs_sidecar(SLOT, BLOCK_ROOT, &[], &sidecar);
    assert!(matches!(
        result,
        Err(Error::Sidecar(SidecarError::InvalidLength {
            commitments_len: 0,
            blobs_len: 1
        }))
    ));
}

#[test]
fn first_mismatch_is_reported() {
    let (sidecar, mut commitments) = valid_sidecar(3, 102);
    commitments[1] = commitments[2];
    commitments[2] = [0u8; 48];

    let result = context().verify_blobs_sidecar(SLOT, BLOCK_ROOT, &commitments, &sidecar);
    assert!(matches!(
        result,
        Err(Error::Verifier(VerifierError::CommitmentMismatch { blob_index: 1 }))
    ));
}

#[test]
fn flipped_blob_byte_is_a_mismatch() {
    let (mut sidecar, commitments) = valid_sidecar(2, 106);
    sidecar.blobs[1][BYTES_PER_BLOB - 32] ^= 0x10;

    let result = context().verify_blobs_sidecar(SLOT, BLOCK_ROOT, &commitments, &sidecar);
    assert!(matches!(
        result,
        Err(Error::Verifier(VerifierError::CommitmentMismatch { blob_index: 1 }))
    ));
}

#[test]
fn every_byte_of_a_chunk_is_significant() {
    let mut rng = rng(103);
    let mut low = random_blob(&mut rng);
    let mut chunk = [0u8; 32];
    chunk[0] = 9;
    set_chunk(&mut low, 7, chunk);

    // Same chunk with its top byte set, still below the modulus.
    let mut high = low.clone();
    chunk[31] = 0x01;
    set_chunk(&mut high, 7, chunk);

    let low_commitments = commitments(&[low]);
    let high_commitments = commitments(&[high.clone()]);
    assert_ne!(low_commitments, high_commitments);

    let sidecar = sidecar_with_blobs(vec![high]);
    assert!(context()
        .verify_blobs_sidecar(SLOT, BLOCK_ROOT, &high_commitments, &sidecar)
        .is_ok());

    let result = context().verify_blobs_sidecar(SLOT, BLOCK_ROOT, &low_commitments, &sidecar);
    assert!(matches!(
        result,
        Err(Error::Verifier(VerifierError::CommitmentMismatch { blob_index: 0 }))
    ));
}

#[test]
fn non_canonical_chunk_fails_commitment_computation() {
    let (mut sidecar, commitments) = valid_sidecar(2, 104);
    let mut chunk = [0u8; 32];
    chunk[31] = 0x80;
    set_chunk(&mut sidecar.blobs[1], 4095, chunk);

    let result = context().verify_blobs_sidecar(SLOT, BLOCK_ROOT, &commitments, &sidecar);
    assert!(matches!(
        result,
        Err(Error::Verifier(VerifierError::CommitmentComputationFailed {
            blob_index: 1,
            reason: SerializationError::InvalidFieldEncoding { .. }
        }))
    ));
}

#[test]
fn blob_of_wrong_size_fails_commitment_computation() {
    let (mut sidecar, commitments) = valid_sidecar(1, 105);
    sidecar.blobs[0].extend_from_slice(&[0u8; 16]);

    let result = context().verify_blobs_sidecar(SLOT, BLOCK_ROOT, &commitments, &sidecar);
    assert!(matches!(
        result,
        Err(Error::Verifier(VerifierError::CommitmentComputationFailed {
            blob_index: 0,
            reason: SerializationError::BlobHasInvalidLength { length, .. }
        })) if length == BYTES_PER_BLOB + 16
    ));
}
