//! Pedersen bases and deterministic generator parameters

use crate::{GeneratorVector, ProofGroup};
use ff::{FromUniformBytes, PrimeFieldBits};
use group::Group;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use sha2::{Digest, Sha256};

const DERIVATION_DOMAIN: &[u8] = b"bulletproof-generators-v1";

/// Seed a deterministic stream of group elements from a domain label.
///
/// Hashing the label gives a seed nobody controls, so no discrete-log
/// relation between any two derived generators (or the fixed base) is known.
fn derivation_rng(label: &[u8]) -> ChaCha20Rng {
    let mut hasher = Sha256::new();
    hasher.update(DERIVATION_DOMAIN);
    hasher.update(label);
    ChaCha20Rng::from_seed(hasher.finalize().into())
}

/// The two independent Pedersen generators (G, H).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PedersenBase<G> {
    /// Value generator, the group's fixed base point
    pub g: G,
    /// Blinding generator, derived by seeded sampling
    pub h: G,
}

impl<G> PedersenBase<G>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    pub fn derive() -> Self {
        Self {
            g: G::generator(),
            h: G::random(derivation_rng(b"pedersen-h")),
        }
    }

    /// commit(v, r) = G·v + H·r
    pub fn commit(&self, value: G::Scalar, blinding: G::Scalar) -> G {
        self.g * value + self.h * blinding
    }
}

/// Prover-side witness for a Pedersen commitment: the hidden value and its
/// blinding factor.
#[derive(Debug, Clone, Copy)]
pub struct PedersenCommitment<G: Group> {
    pub value: u64,
    pub blinding: G::Scalar,
}

impl<G> PedersenCommitment<G>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    pub fn new(value: u64, blinding: G::Scalar) -> Self {
        Self { value, blinding }
    }

    /// The public commitment V = G·v + H·γ this witness opens.
    pub fn commitment(&self, base: &PedersenBase<G>) -> G {
        base.commit(G::Scalar::from(self.value), self.blinding)
    }
}

/// Public generator parameters shared by prover and verifier.
///
/// Derived deterministically from the vector length, so both sides obtain
/// identical parameters from identical inputs. Immutable after construction
/// and safe for unsynchronized concurrent reads across many prove/verify
/// calls.
#[derive(Debug, Clone)]
pub struct GeneratorParams<G> {
    pub base: PedersenBase<G>,
    pub gs: GeneratorVector<G>,
    pub hs: GeneratorVector<G>,
}

impl<G> GeneratorParams<G>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    /// Derive parameters for length-n generator vectors.
    pub fn new(n: usize) -> Self {
        let mut g_rng = derivation_rng(b"vector-g");
        let mut h_rng = derivation_rng(b"vector-h");
        let gs = GeneratorVector::new((0..n).map(|_| G::random(&mut g_rng)).collect());
        let hs = GeneratorVector::new((0..n).map(|_| G::random(&mut h_rng)).collect());
        Self {
            base: PedersenBase::derive(),
            gs,
            hs,
        }
    }

    /// Length of the generator vectors (the range bit-width N).
    pub fn vector_length(&self) -> usize {
        self.gs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::ristretto::RistrettoPoint;
    use curve25519_dalek::scalar::Scalar;
    use rand::rngs::OsRng;

    #[test]
    fn params_are_deterministic() {
        let a: GeneratorParams<RistrettoPoint> = GeneratorParams::new(8);
        let b: GeneratorParams<RistrettoPoint> = GeneratorParams::new(8);
        assert_eq!(a.base, b.base);
        assert_eq!(a.gs, b.gs);
        assert_eq!(a.hs, b.hs);
    }

    #[test]
    fn generators_are_pairwise_distinct() {
        let params: GeneratorParams<RistrettoPoint> = GeneratorParams::new(4);
        assert_ne!(params.base.g, params.base.h);
        for i in 0..4 {
            assert_ne!(params.gs.get(i), params.hs.get(i));
            assert_ne!(*params.gs.get(i), params.base.g);
        }
    }

    #[test]
    fn pedersen_commit_is_homomorphic() {
        let base: PedersenBase<RistrettoPoint> = PedersenBase::derive();
        let mut rng = OsRng;
        let (v1, r1) = (Scalar::from(13u64), Scalar::random(&mut rng));
        let (v2, r2) = (Scalar::from(29u64), Scalar::random(&mut rng));

        let sum = base.commit(v1, r1) + base.commit(v2, r2);
        assert_eq!(sum, base.commit(v1 + v2, r1 + r2));
    }

    #[test]
    fn witness_opens_its_commitment() {
        let base: PedersenBase<RistrettoPoint> = PedersenBase::derive();
        let witness: PedersenCommitment<RistrettoPoint> =
            PedersenCommitment::new(42, Scalar::from(777u64));
        let v = witness.commitment(&base);
        assert_eq!(v, base.commit(Scalar::from(42u64), Scalar::from(777u64)));
    }
}
