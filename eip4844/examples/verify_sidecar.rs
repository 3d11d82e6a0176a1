//! Builds a sidecar from random blobs, then checks it with both verification paths
//! while printing the span tree.
//!
//! Usage: cargo run --release --example verify_sidecar --features tracing -- <trusted_setup.json>
use std::{env, fs, process};

use bls12_381::{ff::Field, Scalar};
use eth_blobs_sidecar::{
    constants::FIELD_ELEMENTS_PER_BLOB, Blob, BlobsSidecar, Context, TrustedSetup,
};
use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const NUM_BLOBS: usize = 4;

fn random_blob() -> Blob {
    (0..FIELD_ELEMENTS_PER_BLOB)
        .flat_map(|_| Scalar::random(rand::thread_rng()).to_bytes_le())
        .collect()
}

fn main() {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: verify_sidecar <trusted_setup.json>");
        process::exit(2);
    };
    let json = fs::read_to_string(&path).expect("could not read the trusted setup file");

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let ctx = Context::new(&TrustedSetup::from_json(&json));

    let blobs: Vec<_> = (0..NUM_BLOBS).map(|_| random_blob()).collect();
    let commitments = blobs
        .iter()
        .map(|blob| ctx.blob_to_kzg_commitment(blob))
        .collect::<Result<Vec<_>, _>>()
        .expect("random blobs are canonical");
    let kzg_aggregated_proof = ctx
        .compute_aggregate_kzg_proof(&blobs)
        .expect("failed to compute the aggregated proof");

    let slot = 42;
    let root = [0x11; 32];
    let sidecar = BlobsSidecar {
        beacon_block_root: root,
        beacon_block_slot: slot,
        blobs,
        kzg_aggregated_proof,
    };

    ctx.validate_blobs_sidecar(slot, root, &commitments, &sidecar)
        .expect("aggregated proof should verify");
    ctx.verify_blobs_sidecar(slot, root, &commitments, &sidecar)
        .expect("commitments should match");

    // Rejected, the debug event shows up in the tree.
    let _ = ctx.validate_blobs_sidecar(slot + 1, root, &commitments, &sidecar);
}
