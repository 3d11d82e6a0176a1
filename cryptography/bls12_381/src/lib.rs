use pairing::{MillerLoopResult, MultiMillerLoop};
use traits::*;

pub mod batch_inversion;
pub mod lincomb;

// Re-export ff and group, so other crates do not need to directly import
// (and independently version) them
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

/// Affine representation of a point in the BLS12-381 G1 curve group.
///
/// KZG commitments and opening proofs are G1 points.
pub type G1Point = blstrs::G1Affine;

/// Projective representation of a point in the BLS12-381 G1 curve group.
pub type G1Projective = blstrs::G1Projective;

/// Affine representation of a point in the BLS12-381 G2 curve group.
pub type G2Point = blstrs::G2Affine;

/// Projective representation of a point in the BLS12-381 G2 curve group.
pub type G2Projective = blstrs::G2Projective;

/// Precomputed G2 point for efficient pairing computations.
pub type G2Prepared = blstrs::G2Prepared;

/// Scalar field element for the BLS12-381 curve.
///
/// This is the field that blobs are interpreted over.
pub type Scalar = blstrs::Scalar;

/// Checks whether the product of pairings over the given G1 × G2 pairs equals the identity.
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    blstrs::Bls12::multi_miller_loop(pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Interprets `bytes` as a little-endian integer and reduces it modulo the scalar field order.
///
/// The result is not uniformly distributed over the field.
#[allow(clippy::borrow_as_ptr)]
pub fn reduce_bytes_le_to_scalar(bytes: [u8; 32]) -> Scalar {
    let mut out = blst::blst_fr::default();

    unsafe {
        let mut s = blst::blst_scalar::default();
        blst::blst_scalar_from_lendian(&mut s, bytes.as_ptr());
        // `blst_fr_from_scalar` reduces values that are not canonical
        blst::blst_fr_from_scalar(&mut out, std::ptr::addr_of!(s));
    }

    Scalar::from(out)
}
