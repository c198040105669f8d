//! Group abstraction and multi-scalar multiplication
//!
//! The whole protocol is generic over a prime-order group exposed through the
//! `group`/`ff` trait crates. A backend qualifies by implementing the standard
//! `Group` + `GroupEncoding` traits with a scalar field that supports bit
//! access (for multi-exponentiation) and wide-reduction from 64 uniform bytes
//! (for Fiat-Shamir challenges). The set of legal backends is closed at build
//! time; there is no dynamic dispatch.

use crate::{ProofError, ProofResult};
use ff::{FromUniformBytes, PrimeField, PrimeFieldBits};
use group::{Group, GroupEncoding};
use rayon::prelude::*;

/// Capability set required of a group backend.
///
/// `Group` supplies identity, a fixed base generator, the prime order q (via
/// the scalar field), addition, negation and scalar multiplication;
/// `GroupEncoding` supplies the fixed-size canonical compressed encoding.
/// Ristretto (`curve25519-dalek`) and BLS12-381 G1 both qualify; secp256k1
/// would be another legal instantiation.
pub trait ProofGroup: Group + GroupEncoding
where
    Self::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
}

impl<G> ProofGroup for G
where
    G: Group + GroupEncoding,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
}

/// Below this many terms the parallel split costs more than it saves.
const PARALLEL_CUTOFF: usize = 64;

/// Simultaneous multi-scalar multiplication: Σ pointsᵢ · scalarsᵢ.
///
/// Uses shared-doubling binary exponentiation so the doubling chain is paid
/// once for all terms instead of once per term. Group addition is commutative
/// and associative, so large inputs are partitioned across rayon workers and
/// the partial sums combined afterwards without affecting the result.
pub fn multiexp<G>(points: &[G], scalars: &[G::Scalar]) -> ProofResult<G>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    if points.len() != scalars.len() {
        return Err(ProofError::LengthMismatch {
            expected: points.len(),
            actual: scalars.len(),
        });
    }
    if points.len() >= PARALLEL_CUTOFF {
        let workers = rayon::current_num_threads().max(1);
        let chunk = (points.len() + workers - 1) / workers;
        let sum = points
            .par_chunks(chunk)
            .zip(scalars.par_chunks(chunk))
            .map(|(ps, es)| shared_doubling(ps, es))
            .reduce(G::identity, |a, b| a + b);
        Ok(sum)
    } else {
        Ok(shared_doubling(points, scalars))
    }
}

fn shared_doubling<G>(points: &[G], scalars: &[G::Scalar]) -> G
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    let bits: Vec<_> = scalars.iter().map(|e| e.to_le_bits()).collect();
    let top = <G::Scalar as PrimeField>::NUM_BITS as usize;
    let mut acc = G::identity();
    for i in (0..top).rev() {
        acc = acc.double();
        for (point, e) in points.iter().zip(bits.iter()) {
            if e[i] {
                acc += point;
            }
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::ristretto::RistrettoPoint;
    use curve25519_dalek::scalar::Scalar;
    use group::Group;
    use rand::rngs::OsRng;

    #[test]
    fn multiexp_matches_naive() {
        let mut rng = OsRng;
        let points: Vec<RistrettoPoint> =
            (0..7).map(|_| RistrettoPoint::random(&mut rng)).collect();
        let scalars: Vec<Scalar> = (0..7).map(|_| Scalar::random(&mut rng)).collect();

        let naive: RistrettoPoint = points
            .iter()
            .zip(scalars.iter())
            .map(|(p, e)| p * e)
            .sum();
        let fast = multiexp(&points, &scalars).unwrap();

        assert_eq!(naive, fast);
    }

    #[test]
    fn multiexp_parallel_path_matches_naive() {
        let mut rng = OsRng;
        let n = PARALLEL_CUTOFF + 5;
        let points: Vec<RistrettoPoint> =
            (0..n).map(|_| RistrettoPoint::random(&mut rng)).collect();
        let scalars: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut rng)).collect();

        let naive: RistrettoPoint = points
            .iter()
            .zip(scalars.iter())
            .map(|(p, e)| p * e)
            .sum();
        let fast = multiexp(&points, &scalars).unwrap();

        assert_eq!(naive, fast);
    }

    #[test]
    fn multiexp_rejects_mismatched_lengths() {
        let points = vec![RistrettoPoint::identity(); 3];
        let scalars = vec![Scalar::ONE; 2];
        assert!(matches!(
            multiexp(&points, &scalars),
            Err(ProofError::LengthMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn multiexp_of_identities_is_identity() {
        let points = vec![RistrettoPoint::identity(); 4];
        let scalars = vec![
            Scalar::from(3u64),
            Scalar::from(17u64),
            Scalar::from(0u64),
            Scalar::from(99u64),
        ];
        assert_eq!(
            multiexp(&points, &scalars).unwrap(),
            RistrettoPoint::identity()
        );
    }
}
