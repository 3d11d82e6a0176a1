use crate::{traits::*, G1Point, G1Projective, Scalar};

/// A multi-scalar multiplication over G1 elements.
///
/// Returns None if the points and the scalars are not the same length.
///
/// Note: "unchecked" refers to the fact that blst returns the identity
/// element if any of the points is the identity element. Callers must
/// make sure that there are no identity elements amongst their points.
pub fn g1_lincomb_unchecked(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    (points.len() == scalars.len()).then(|| {
        let proj_points: Vec<_> = points.iter().map(Into::into).collect();
        G1Projective::multi_exp(&proj_points, scalars)
    })
}

/// A multi-scalar multiplication over G1 elements.
///
/// Returns None if the points and the scalars are not the same length.
///
/// Identity points contribute nothing to the sum, so they are dropped
/// before calling into blst.
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    if points.len() != scalars.len() {
        return None;
    }

    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !bool::from(point.is_identity()))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    if points_filtered.is_empty() {
        return Some(G1Projective::identity());
    }

    g1_lincomb_unchecked(&points_filtered, &scalars_filtered)
}
