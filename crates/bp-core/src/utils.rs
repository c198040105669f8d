//! Scalar-vector utilities shared by the prover and verifier

use crate::{ProofError, ProofResult};
use ff::PrimeField;

/// Compute powers of a scalar: [1, x, x², ..., x^{n-1}]
pub fn scalar_powers<F: PrimeField>(x: &F, n: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(n);
    let mut current = F::ONE;
    for _ in 0..n {
        powers.push(current);
        current *= x;
    }
    powers
}

/// A length-n vector of a single repeated scalar
pub fn constant_vector<F: PrimeField>(value: F, n: usize) -> Vec<F> {
    vec![value; n]
}

/// Inner product ⟨a, b⟩ of two equal-length scalar vectors
pub fn inner_product<F: PrimeField>(a: &[F], b: &[F]) -> ProofResult<F> {
    if a.len() != b.len() {
        return Err(ProofError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .fold(F::ZERO, |acc, (ai, bi)| acc + *ai * bi))
}

/// Hadamard (component-wise) product of two equal-length scalar vectors
pub fn hadamard<F: PrimeField>(a: &[F], b: &[F]) -> ProofResult<Vec<F>> {
    if a.len() != b.len() {
        return Err(ProofError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai * bi).collect())
}

/// Component-wise sum of two equal-length scalar vectors
pub fn vector_add<F: PrimeField>(a: &[F], b: &[F]) -> ProofResult<Vec<F>> {
    if a.len() != b.len() {
        return Err(ProofError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai + bi).collect())
}

/// Component-wise difference a − b of two equal-length scalar vectors
pub fn vector_sub<F: PrimeField>(a: &[F], b: &[F]) -> ProofResult<Vec<F>> {
    if a.len() != b.len() {
        return Err(ProofError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai - bi).collect())
}

/// Scale a vector by a scalar
pub fn vector_scale<F: PrimeField>(vec: &[F], scalar: &F) -> Vec<F> {
    vec.iter().map(|v| *v * scalar).collect()
}

/// Sum of a scalar vector
pub fn sum_scalars<F: PrimeField>(vec: &[F]) -> F {
    vec.iter().fold(F::ZERO, |acc, v| acc + v)
}

/// Bit decomposition of a value, LSB first: index i holds the coefficient
/// of 2^i. This is the fixed bit order of the whole protocol.
pub fn bit_decomposition<F: PrimeField>(value: u64, bits: usize) -> Vec<F> {
    let mut result = Vec::with_capacity(bits);
    let mut v = value;
    for _ in 0..bits {
        result.push(if v & 1 == 1 { F::ONE } else { F::ZERO });
        v >>= 1;
    }
    result
}

/// Check if a number is a power of two
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// log2 of a power of two
pub fn log2(n: usize) -> usize {
    n.trailing_zeros() as usize
}
