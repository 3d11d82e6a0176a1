/// Reverses the lowest `bits` bits of `n`.
pub(crate) const fn bitreverse(mut n: u32, bits: u32) -> u32 {
    let mut r = 0;
    let mut i = 0;
    while i < bits {
        r = (r << 1) | (n & 1);
        n >>= 1;
        i += 1;
    }
    r
}

/// Reorders `a` in place so that `a[i]` moves to position `reverse_bits(i)`.
///
/// Panics if the length of `a` is not a power of two.
pub fn reverse_bit_order<T>(a: &mut [T]) {
    if a.is_empty() {
        return;
    }

    let n = a.len();
    assert!(
        n.is_power_of_two(),
        "bit reversal needs a power of two length, got {n}"
    );
    let log_n = n.ilog2();

    for k in 0..n {
        let rk = bitreverse(k as u32, log_n) as usize;
        if k < rk {
            a.swap(rk, k);
        }
    }
}

/// Returns a copy of `values` in bit-reversed order, ie `output[i] = values[reverse_bits(i)]`.
///
/// The bit width is the smallest one that covers the length. Applying the
/// permutation twice gives back the original order.
///
/// Panics if the length of `values` is not a power of two.
pub fn bit_reversal_permutation<T: Clone>(values: &[T]) -> Vec<T> {
    let mut permuted = values.to_vec();
    reverse_bit_order(&mut permuted);
    permuted
}
