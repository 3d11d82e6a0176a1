use ff::Field;

/// Replaces every element of `v` with its inverse using a single field inversion
/// (Montgomery's trick).
///
/// Panics if any of the elements are zero.
pub fn batch_inverse<F: Field>(v: &mut [F]) {
    if v.is_empty() {
        return;
    }

    // prefix[i] = v[0] * ... * v[i - 1]
    let mut prefix = Vec::with_capacity(v.len());
    let mut acc = F::ONE;
    for element in v.iter() {
        prefix.push(acc);
        acc *= element;
    }

    let mut acc_inv = acc
        .invert()
        .expect("batch_inverse was called with a zero element");

    // Walk backwards, peeling one factor off the inverted product at a time.
    for (element, prefix) in v.iter_mut().zip(prefix).rev() {
        let inverse = acc_inv * prefix;
        acc_inv *= *element;
        *element = inverse;
    }
}

#[cfg(test)]
mod tests {
    use blstrs::Scalar;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_input_is_noop() {
        let mut elements: Vec<Scalar> = Vec::new();
        batch_inverse(&mut elements);
        assert!(elements.is_empty());
    }

    #[test]
    fn single_element() {
        let mut elements = vec![Scalar::from(2u64)];
        batch_inverse(&mut elements);
        assert_eq!(elements[0] * Scalar::from(2u64), Scalar::ONE);
    }

    #[test]
    #[should_panic]
    fn zero_element_panics() {
        let mut elements = vec![Scalar::ONE, Scalar::ZERO, Scalar::from(3u64)];
        batch_inverse(&mut elements);
    }

    proptest! {
        #[test]
        fn matches_individual_inversion(seeds in proptest::collection::vec(1u64.., 1..64)) {
            let elements: Vec<Scalar> = seeds
                .iter()
                .map(|seed| Scalar::from(*seed).square())
                .collect();

            let expected: Vec<Scalar> = elements
                .iter()
                .map(|element| element.invert().expect("non-zero"))
                .collect();

            let mut got = elements;
            batch_inverse(&mut got);

            prop_assert_eq!(got, expected);
        }
    }
}
