pub mod verifier {
    use bls12_381::{group::Curve, multi_pairings, G1Point, G2Point, G2Prepared, Scalar};
    use polynomial::domain::Domain;

    use crate::{roots_of_unity::blob_domain, VerifierError};

    /// The key that is used to verify KZG single-point opening proofs.
    #[derive(Debug, Clone)]
    pub struct VerificationKey {
        pub gen_g1: G1Point,
        pub gen_g2: G2Point,
        pub tau_g2: G2Point,
    }

    #[derive(Debug)]
    pub struct Verifier {
        /// Domain that blob polynomials are evaluated over.
        pub domain: &'static Domain,
        /// Verification key used to verify KZG single-point opening proofs.
        pub verification_key: VerificationKey,
    }

    impl Verifier {
        pub fn new(verification_key: VerificationKey) -> Self {
            Self {
                domain: blob_domain(),
                verification_key,
            }
        }

        /// Checks that `proof` opens `commitment` to `y` at `z`.
        #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
        pub fn verify_kzg_proof(
            &self,
            commitment: G1Point,
            z: Scalar,
            y: Scalar,
            proof: G1Point,
        ) -> Result<(), VerifierError> {
            let vk = &self.verification_key;

            // [f(τ) - f(z)]G₁
            let commitment_minus_y = (commitment - vk.gen_g1 * y).to_affine();

            // [-1]G₂
            let neg_gen_g2 = G2Prepared::from(-vk.gen_g2);

            // [τ - z]G₂
            let tau_minus_z_g2 = G2Prepared::from((vk.tau_g2 - vk.gen_g2 * z).to_affine());

            // Check whether `f(X) - f(z) == q(X) * (X - z)`
            let proof_valid = multi_pairings(&[
                (&commitment_minus_y, &neg_gen_g2),
                (&proof, &tau_minus_z_g2),
            ]);
            if proof_valid {
                Ok(())
            } else {
                Err(VerifierError::InvalidProof)
            }
        }
    }
}

pub mod prover {
    use bls12_381::{lincomb::g1_lincomb, G1Point, Scalar};
    use polynomial::domain::Domain;

    use crate::roots_of_unity::blob_domain;

    /// The key that is used to commit to polynomials in lagrange form.
    ///
    /// The points are in bit-reversed order, same as the domain.
    #[derive(Debug, Clone)]
    pub struct CommitKey {
        pub g1_lagrange: Vec<G1Point>,
    }

    impl CommitKey {
        /// Commits to a polynomial in evaluation form.
        pub fn commit(&self, polynomial: &[Scalar]) -> G1Point {
            assert_eq!(
                polynomial.len(),
                self.g1_lagrange.len(),
                "polynomial and commit key must have the same length"
            );

            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("commit", num_points = polynomial.len()).entered();
            g1_lincomb(&self.g1_lagrange, polynomial)
                .expect("g1_lagrange.len() == polynomial.len()")
                .into()
        }
    }

    #[derive(Debug)]
    pub struct Prover {
        /// Domain that blob polynomials are evaluated over.
        pub domain: &'static Domain,
        /// Commitment key used for committing to polynomials in lagrange form.
        pub commit_key: CommitKey,
    }

    impl Prover {
        pub fn new(commit_key: CommitKey) -> Self {
            Self {
                domain: blob_domain(),
                commit_key,
            }
        }

        /// Opens `polynomial` at `z`, returning the proof and the evaluation.
        #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
        pub fn compute_kzg_proof(&self, polynomial: &[Scalar], z: Scalar) -> (G1Point, Scalar) {
            let (y, quotient) = self.domain.evaluate_and_quotient(polynomial, z);
            (self.commit_key.commit(&quotient), y)
        }
    }
}
