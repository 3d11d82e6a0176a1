use std::iter::successors;

use bls12_381::{ff::Field, Scalar};

/// Returns `[1, x, x^2, ..., x^(n-1)]`.
///
/// The first power is always one, even when `x` is zero.
pub fn compute_powers(x: Scalar, n: usize) -> Vec<Scalar> {
    successors(Some(Scalar::ONE), |power| Some(*power * x))
        .take(n)
        .collect()
}

/// Interprets `polys` as the rows of a matrix and returns the linear combination
/// of its columns with `scalars`, ie `out[i] = sum_k scalars[k] * polys[k][i]`.
///
/// Returns None if the number of polynomials and scalars differ, or if any
/// polynomial does not have exactly `poly_len` evaluations.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn poly_lincomb<P: AsRef<[Scalar]>>(
    polys: &[P],
    scalars: &[Scalar],
    poly_len: usize,
) -> Option<Vec<Scalar>> {
    if polys.len() != scalars.len() {
        return None;
    }

    let mut result = vec![Scalar::ZERO; poly_len];
    for (poly, scalar) in polys.iter().zip(scalars) {
        let poly = poly.as_ref();
        if poly.len() != poly_len {
            return None;
        }
        for (acc, evaluation) in result.iter_mut().zip(poly) {
            *acc += *scalar * evaluation;
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn powers_of_zero_start_at_one() {
        let powers = compute_powers(Scalar::ZERO, 4);
        assert_eq!(
            powers,
            vec![Scalar::ONE, Scalar::ZERO, Scalar::ZERO, Scalar::ZERO]
        );
    }

    #[test]
    fn no_powers_requested() {
        assert!(compute_powers(Scalar::from(3u64), 0).is_empty());
    }

    #[test]
    fn powers_of_two() {
        let powers = compute_powers(Scalar::from(2u64), 5);
        let expected: Vec<_> = [1u64, 2, 4, 8, 16].into_iter().map(Scalar::from).collect();
        assert_eq!(powers, expected);
    }

    #[test]
    fn lincomb_of_two_polynomials() {
        let a: Vec<_> = [1u64, 2, 3].into_iter().map(Scalar::from).collect();
        let b: Vec<_> = [10u64, 20, 30].into_iter().map(Scalar::from).collect();
        let scalars = [Scalar::from(2u64), -Scalar::ONE];

        let got = poly_lincomb(&[a, b], &scalars, 3).expect("well formed input");
        let expected: Vec<_> = [8u64, 16, 24]
            .into_iter()
            .map(|v| -Scalar::from(v))
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn lincomb_of_nothing_is_the_zero_polynomial() {
        let polys: Vec<Vec<Scalar>> = Vec::new();
        assert_eq!(poly_lincomb(&polys, &[], 4), Some(vec![Scalar::ZERO; 4]));
    }

    #[test]
    fn lincomb_rejects_malformed_input() {
        let poly = vec![Scalar::ONE; 4];
        assert_eq!(poly_lincomb(&[poly.clone()], &[], 4), None);
        assert_eq!(poly_lincomb(&[poly], &[Scalar::ONE], 8), None);
    }

    proptest! {
        #[test]
        fn powers_match_repeated_exponentiation(x in any::<u64>(), n in 1usize..40) {
            let x = Scalar::from(x);
            let powers = compute_powers(x, n);

            prop_assert_eq!(powers.len(), n);
            prop_assert_eq!(powers[0], Scalar::ONE);
            for (k, power) in powers.iter().enumerate() {
                prop_assert_eq!(*power, x.pow_vartime([k as u64]));
            }
        }
    }
}
