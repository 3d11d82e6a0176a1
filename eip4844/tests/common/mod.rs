#![allow(dead_code)]

use std::sync::OnceLock;

use bls12_381::{
    ff::Field,
    group::{Curve, Group},
    G1Projective, G2Projective, Scalar,
};
use eth_blobs_sidecar::{
    constants::{BYTES_PER_FIELD_ELEMENT, FIELD_ELEMENTS_PER_BLOB},
    roots_of_unity, Blob, BlobsSidecar, Context, KZGCommitment, Root, Slot, TrustedSetup,
};
use polynomial::bit_reversal_permutation;
use rand::{rngs::StdRng, SeedableRng};

/// The secret behind the test setup. Never use a known secret outside of tests.
const INSECURE_TAU: u64 = 0x5eed_1234_abcd;

pub const SLOT: Slot = 1_000_000;
pub const BLOCK_ROOT: Root = [0x42; 32];

fn hex_point(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// A trusted setup built from a known secret, laid out like the published ceremony output.
///
/// `g1_lagrange[i]` is `[L_i(τ)]G1`, with `L_i` the lagrange basis polynomial
/// of `ω^i`, the roots in natural order.
pub fn insecure_trusted_setup() -> &'static TrustedSetup {
    static SETUP: OnceLock<TrustedSetup> = OnceLock::new();
    SETUP.get_or_init(|| {
        // L_i(τ) = ω_i * (τ^n - 1) / (n * (τ - ω_i))
        let g1_lagrange: Vec<_> = bit_reversal_permutation(roots_of_unity())
            .into_iter()
            .map(|root| hex_point(&g1_times(lagrange_at_secret(root))))
            .collect();

        let tau = Scalar::from(INSECURE_TAU);
        let g2_monomial: Vec<_> = [Scalar::ONE, tau]
            .iter()
            .map(|power| {
                let point = (G2Projective::generator() * power).to_affine();
                hex_point(&point.to_compressed())
            })
            .collect();

        let json = serde_json::json!({
            "g1_lagrange": g1_lagrange,
            "g2_monomial": g2_monomial,
        });
        TrustedSetup::from_json(&json.to_string())
    })
}

pub fn context() -> &'static Context {
    static CONTEXT: OnceLock<Context> = OnceLock::new();
    CONTEXT.get_or_init(|| Context::new(insecure_trusted_setup()))
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A blob made of uniformly random canonical field elements.
pub fn random_blob(rng: &mut StdRng) -> Blob {
    (0..FIELD_ELEMENTS_PER_BLOB)
        .flat_map(|_| Scalar::random(&mut *rng).to_bytes_le())
        .collect()
}

/// Overwrites the field element at `index` of the blob.
pub fn set_chunk(blob: &mut [u8], index: usize, chunk: [u8; BYTES_PER_FIELD_ELEMENT]) {
    let start = index * BYTES_PER_FIELD_ELEMENT;
    blob[start..start + BYTES_PER_FIELD_ELEMENT].copy_from_slice(&chunk);
}

pub fn commitments(blobs: &[Blob]) -> Vec<KZGCommitment> {
    blobs
        .iter()
        .map(|blob| context().blob_to_kzg_commitment(blob).unwrap())
        .collect()
}

/// A well formed sidecar for `SLOT` and `BLOCK_ROOT`, with its commitments.
pub fn valid_sidecar(num_blobs: usize, seed: u64) -> (BlobsSidecar, Vec<KZGCommitment>) {
    let mut rng = rng(seed);
    let blobs: Vec<_> = (0..num_blobs).map(|_| random_blob(&mut rng)).collect();
    let commitments = commitments(&blobs);
    let kzg_aggregated_proof = context().compute_aggregate_kzg_proof(&blobs).unwrap();

    let sidecar = BlobsSidecar {
        beacon_block_root: BLOCK_ROOT,
        beacon_block_slot: SLOT,
        blobs,
        kzg_aggregated_proof,
    };
    (sidecar, commitments)
}

/// `[scalar]G1`, compressed.
pub fn g1_times(scalar: Scalar) -> [u8; 48] {
    (G1Projective::generator() * scalar).to_affine().to_compressed()
}

/// A compressed G1 point that is valid but unrelated to any blob.
pub fn unrelated_point(scalar: u64) -> [u8; 48] {
    g1_times(Scalar::from(scalar))
}

/// `L_i(τ)` for the lagrange basis polynomial of `root`, with the secret of the test setup.
pub fn lagrange_at_secret(root: Scalar) -> Scalar {
    let tau = Scalar::from(INSECURE_TAU);
    let n = Scalar::from(FIELD_ELEMENTS_PER_BLOB as u64);
    let vanishing = tau.pow_vartime([FIELD_ELEMENTS_PER_BLOB as u64]) - Scalar::ONE;
    root * vanishing * (n * (tau - root)).invert().unwrap()
}
