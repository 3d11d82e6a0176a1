mod bit_reversal;
pub mod domain;
mod lincomb;

pub use bit_reversal::{bit_reversal_permutation, reverse_bit_order};
pub use lincomb::{compute_powers, poly_lincomb};
