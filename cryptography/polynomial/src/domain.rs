use std::iter::successors;

use bls12_381::{batch_inversion::batch_inverse, ff::Field, Scalar};
use num_bigint::BigUint;

use crate::bit_reversal::reverse_bit_order;

/// Generator of the multiplicative group of the scalar field.
///
/// Roots of unity of every power of two order dividing `r - 1` are derived from it.
pub const PRIMITIVE_ROOT_OF_UNITY: u64 = 7;

/// The roots of unity of order `n`, stored in bit-reversed order.
///
/// Polynomials in evaluation form are indexed the same way, so `polynomial[i]`
/// is the evaluation of the polynomial at `roots[i]`.
#[derive(Debug, Clone)]
pub struct Domain {
    /// Bit-reversed roots of unity.
    pub roots: Vec<Scalar>,
    /// Size of the domain as a scalar
    pub domain_size: Scalar,
    /// Inverse of the domain size as a scalar
    pub domain_size_inv: Scalar,
    /// Primitive root of unity of order `n`
    pub generator: Scalar,
}

impl Domain {
    /// Computes the bit-reversed domain of size `size`.
    ///
    /// Panics if `size` is not a power of two or if it does not divide `r - 1`.
    /// Both mean the caller is configured with a blob size that the scalar field
    /// cannot support.
    pub fn new(size: usize) -> Self {
        assert!(
            size.is_power_of_two(),
            "domain size must be a power of two, got {size}"
        );

        let divisor = divide_group_order(size).unwrap_or_else(|| {
            panic!("MODULUS - 1 must be divisible by the domain size, got {size}")
        });
        let generator = Scalar::from(PRIMITIVE_ROOT_OF_UNITY).pow_vartime(divisor.to_u64_digits());

        let mut roots: Vec<_> = successors(Some(Scalar::ONE), |root| Some(*root * generator))
            .take(size)
            .collect();
        reverse_bit_order(&mut roots);

        let domain_size = Scalar::from(size as u64);
        let domain_size_inv = domain_size
            .invert()
            .expect("domain size should not be zero");

        Self {
            roots,
            domain_size,
            domain_size_inv,
            generator,
        }
    }

    /// The number of points in the domain.
    pub fn size(&self) -> usize {
        self.roots.len()
    }

    /// Evaluates a polynomial given in (bit-reversed) evaluation form at `z`.
    ///
    /// When `z` is one of the roots the stored evaluation is returned as is.
    pub fn evaluate(&self, polynomial: &[Scalar], z: Scalar) -> Scalar {
        assert_eq!(polynomial.len(), self.size());

        self.roots.iter().position(|root| *root == z).map_or_else(
            || self.evaluate_out_of_domain(polynomial, z),
            |position| polynomial[position],
        )
    }

    /// Barycentric evaluation, `z` must not be a root of unity.
    fn evaluate_out_of_domain(&self, polynomial: &[Scalar], z: Scalar) -> Scalar {
        // 1 / (z - ω_i)
        let mut denoms: Vec<_> = self.roots.iter().map(|root| z - root).collect();
        batch_inverse(&mut denoms);

        self.barycentric_sum(polynomial, &denoms, z)
    }

    // (z^n - 1) / n * \sum f(ω_i) * ω_i / (z - ω_i)
    fn barycentric_sum(&self, polynomial: &[Scalar], denoms: &[Scalar], z: Scalar) -> Scalar {
        let sum = self
            .roots
            .iter()
            .zip(polynomial)
            .zip(denoms)
            .map(|((root, f_root), denom)| *root * f_root * denom)
            .sum::<Scalar>();

        sum * (z.pow_vartime([self.size() as u64]) - Scalar::ONE) * self.domain_size_inv
    }

    /// Evaluates the polynomial at `z` and computes the quotient `(f(X) - y) / (X - z)`.
    ///
    /// Both the input and the returned quotient are in bit-reversed evaluation form.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn evaluate_and_quotient(&self, polynomial: &[Scalar], z: Scalar) -> (Scalar, Vec<Scalar>) {
        assert_eq!(polynomial.len(), self.size());

        self.roots.iter().position(|root| *root == z).map_or_else(
            || self.evaluate_and_quotient_out_of_domain(polynomial, z),
            |position| self.evaluate_and_quotient_within_domain(polynomial, position),
        )
    }

    fn evaluate_and_quotient_out_of_domain(
        &self,
        polynomial: &[Scalar],
        z: Scalar,
    ) -> (Scalar, Vec<Scalar>) {
        let mut denoms: Vec<_> = self.roots.iter().map(|root| z - root).collect();
        batch_inverse(&mut denoms);

        let y = self.barycentric_sum(polynomial, &denoms, z);

        // (y - f(ω_i)) / (z - ω_i)
        let quotient = denoms
            .iter()
            .zip(polynomial)
            .map(|(denom, f_root)| (y - f_root) * denom)
            .collect();

        (y, quotient)
    }

    /// For the point `z = ω_m` the quotient at `ω_m` cannot be computed by division, instead
    /// `q(ω_m) = \sum_{i != m} (f(ω_i) - y) * ω_i / (z * (z - ω_i))`.
    ///
    /// See "Dividing when one of the points is zero" in
    /// https://dankradfeist.de/ethereum/2021/06/18/pcs-multiproofs.html
    fn evaluate_and_quotient_within_domain(
        &self,
        polynomial: &[Scalar],
        point_idx: usize,
    ) -> (Scalar, Vec<Scalar>) {
        let z = self.roots[point_idx];
        let y = polynomial[point_idx];

        // The entry at `point_idx` is set to one so that `batch_inverse` does not see a zero.
        let mut denoms: Vec<_> = self
            .roots
            .iter()
            .enumerate()
            .map(|(idx, root)| if idx == point_idx { Scalar::ONE } else { z - root })
            .collect();
        batch_inverse(&mut denoms);

        let mut quotient: Vec<_> = denoms
            .iter()
            .zip(polynomial)
            .map(|(denom, f_root)| (y - f_root) * denom)
            .collect();
        quotient[point_idx] = Scalar::ZERO;

        let z_inv = z.invert().expect("roots of unity are non-zero");
        quotient[point_idx] = -(quotient
            .iter()
            .zip(&self.roots)
            .map(|(q_root, root)| *q_root * root)
            .sum::<Scalar>()
            * z_inv);

        (y, quotient)
    }
}

/// The order of the multiplicative group of the scalar field, `r - 1`.
fn group_order() -> BigUint {
    BigUint::from_bytes_le(&(-Scalar::ONE).to_bytes_le())
}

/// Computes `(r - 1) / divisor`, or None if the division leaves a remainder.
fn divide_group_order(divisor: usize) -> Option<BigUint> {
    if divisor == 0 {
        return None;
    }

    let group_order = group_order();
    let divisor = BigUint::from(divisor);
    (&group_order % &divisor == BigUint::ZERO).then(|| group_order / divisor)
}
