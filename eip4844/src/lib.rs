pub mod aggregation;
pub mod block;
pub mod constants;
pub mod containers;
mod errors;
pub mod fiat_shamir;
mod kzg_open;
mod prover;
mod roots_of_unity;
mod serialization;
mod trusted_setup;
mod types;
mod verifier;

/// Re-exported types
pub use errors::{BlockError, Error, SerializationError, SidecarError, SszError, VerifierError};
pub use roots_of_unity::roots_of_unity;
pub use trusted_setup::TrustedSetup;
pub use types::*;

#[rustfmt::skip]
// Note: adding rustfmt::skip so that `cargo fmt` does not mix the
// public re-exported types with the following private imports.
use kzg_open::{prover::{CommitKey, Prover}, verifier::{VerificationKey, Verifier}};

/// Holds the keys derived from a trusted setup.
///
/// Every operation that needs setup material is a method on `Context`.
/// It is immutable after construction and can be shared across threads.
#[derive(Debug)]
pub struct Context {
    prover: Prover,
    verifier: Verifier,
}

impl Context {
    /// Builds the prover and verifier keys.
    ///
    /// This also computes the roots of unity if no other `Context` did so yet.
    pub fn new(trusted_setup: &TrustedSetup) -> Self {
        Self {
            prover: Prover::new(CommitKey::from(trusted_setup)),
            verifier: Verifier::new(VerificationKey::from(trusted_setup)),
        }
    }
}
