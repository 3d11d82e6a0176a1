use bls12_381::{traits::PrimeCurveAffine, G1Point, G2Point};
use polynomial::reverse_bit_order;
use serde::Deserialize;

use crate::{
    constants::{BYTES_PER_G1_POINT, BYTES_PER_G2_POINT, FIELD_ELEMENTS_PER_BLOB},
    kzg_open::{prover::CommitKey, verifier::VerificationKey},
};

/// The public parameters needed to commit to blobs and to verify openings.
///
/// Fields of the JSON file that are not listed here, such as `g1_monomial`,
/// are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrustedSetup {
    /// G1 Lagrange represents a list of compressed hex encoded
    /// group elements in the G1 group on the bls12-381 curve.
    ///
    /// There is one point per field element of a blob, in the natural order of
    /// the roots of unity, as published for the ethereum KZG ceremony.
    pub g1_lagrange: Vec<String>,
    /// G2 Monomial represents a list of compressed hex encoded
    /// group elements in the G2 group on the bls12-381 curve.
    ///
    /// Only the first two, `[1]G2` and `[τ]G2`, are used.
    pub g2_monomial: Vec<String>,
}

/// An enum used to specify whether to check that the points are in the correct subgroup
#[derive(Debug, Copy, Clone)]
enum SubgroupCheck {
    Check,
    NoCheck,
}

impl From<&TrustedSetup> for CommitKey {
    fn from(setup: &TrustedSetup) -> Self {
        setup.to_commit_key(SubgroupCheck::NoCheck)
    }
}

impl From<&TrustedSetup> for VerificationKey {
    fn from(setup: &TrustedSetup) -> Self {
        setup.to_verification_key(SubgroupCheck::NoCheck)
    }
}

impl TrustedSetup {
    /// Parse a Json string in the format specified by the ethereum trusted setup.
    ///
    /// Every point is checked to be in the correct subgroup.
    ///
    // The format that the file follows that this function also accepts, looks like the following:
    /*
    {
      "g1_lagrange": [
        "0xa0413c0dcafec6dbc9f47d66785cf1e8c981044f7d13cfe3e4fcbb71b5408dfde6312493cb3c1d30516cb3ca88c03654",
        ...
      ],
      "g2_monomial": [
        "0x93e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8",
        ...
      ]
    }
    */
    pub fn from_json(json: &str) -> Self {
        let trusted_setup = Self::from_json_unchecked(json);
        trusted_setup.validate_trusted_setup();
        trusted_setup
    }

    /// Parse a Json string in the format specified by the ethereum trusted setup.
    ///
    /// This method does not check that the points are in the correct subgroup.
    pub fn from_json_unchecked(json: &str) -> Self {
        // Note: it is fine to panic here since this method is called on startup
        // and we want to fail fast if the trusted setup is malformed.
        let trusted_setup: Self = serde_json::from_str(json)
            .expect("could not parse json string into a TrustedSetup structure");

        assert_eq!(
            trusted_setup.g1_lagrange.len(),
            FIELD_ELEMENTS_PER_BLOB,
            "trusted setup must have one lagrange point per field element"
        );
        assert!(
            trusted_setup.g2_monomial.len() >= 2,
            "trusted setup must contain [1]G2 and [τ]G2"
        );

        trusted_setup
    }

    /// This validates that the points in the trusted setup are in the correct subgroup.
    ///
    /// Panics if any of the points are not in the correct subgroup
    fn validate_trusted_setup(&self) {
        self.to_commit_key(SubgroupCheck::Check);
        self.to_verification_key(SubgroupCheck::Check);
    }

    fn to_commit_key(&self, subgroup_check: SubgroupCheck) -> CommitKey {
        let mut g1_lagrange = deserialize_g1_points(&self.g1_lagrange, subgroup_check);
        // Blobs are evaluations over the bit-reversed domain.
        reverse_bit_order(&mut g1_lagrange);
        CommitKey { g1_lagrange }
    }

    fn to_verification_key(&self, subgroup_check: SubgroupCheck) -> VerificationKey {
        let g2_points = deserialize_g2_points(&self.g2_monomial[..2], subgroup_check);

        VerificationKey {
            // The lagrange points do not contain [1]G1, the generator is fixed by the curve.
            gen_g1: G1Point::generator(),
            gen_g2: g2_points[0],
            tau_g2: g2_points[1],
        }
    }
}

fn decode_hex_point<const N: usize>(hex_str: &str, group: &str) -> [u8; N] {
    let hex_str_without_0x = hex_str
        .strip_prefix("0x")
        .expect("expected hex points to be prefixed with `0x`");
    hex::decode(hex_str_without_0x)
        .unwrap_or_else(|_| panic!("trusted setup has malformed {group} points"))
        .try_into()
        .unwrap_or_else(|_| panic!("expected {N} bytes for {group} point"))
}

/// Deserialize G1 points from hex strings, checking that the element is in the
/// correct subgroup only if asked to.
fn deserialize_g1_points<T: AsRef<str>>(
    g1_points_hex_str: &[T],
    check: SubgroupCheck,
) -> Vec<G1Point> {
    g1_points_hex_str
        .iter()
        .map(|g1_hex_str| {
            let bytes = decode_hex_point::<BYTES_PER_G1_POINT>(g1_hex_str.as_ref(), "g1");
            let point = match check {
                SubgroupCheck::Check => G1Point::from_compressed(&bytes),
                SubgroupCheck::NoCheck => G1Point::from_compressed_unchecked(&bytes),
            };
            Option::<G1Point>::from(point).expect("invalid g1 point")
        })
        .collect()
}

/// Deserialize G2 points from hex strings, checking that the element is in the
/// correct subgroup only if asked to.
fn deserialize_g2_points<T: AsRef<str>>(
    g2_points_hex_str: &[T],
    check: SubgroupCheck,
) -> Vec<G2Point> {
    g2_points_hex_str
        .iter()
        .map(|g2_hex_str| {
            let bytes = decode_hex_point::<BYTES_PER_G2_POINT>(g2_hex_str.as_ref(), "g2");
            let point = match check {
                SubgroupCheck::Check => G2Point::from_compressed(&bytes),
                SubgroupCheck::NoCheck => G2Point::from_compressed_unchecked(&bytes),
            };
            Option::<G2Point>::from(point).expect("invalid g2 point")
        })
        .collect()
}
