//! Fiat-Shamir transcript management
//!
//! Challenges are a deterministic function of every value appended so far, in
//! order, so a prover cannot vary one round without changing all later
//! challenges. Both sides of the protocol drive the transcript through the
//! same labelled calls; any divergence in order or labels breaks verification
//! by construction.

use crate::{ProofError, ProofGroup, ProofResult};
use ff::{FromUniformBytes, PrimeField, PrimeFieldBits};
use merlin::Transcript;

/// Extension trait adding labelled group/field operations to `Transcript`.
pub trait TranscriptProtocol {
    /// Append a group element by its canonical compressed encoding
    fn append_point<G>(&mut self, label: &'static [u8], point: &G)
    where
        G: ProofGroup,
        G::Scalar: PrimeFieldBits + FromUniformBytes<64>;

    /// Append a scalar by its canonical encoding
    fn append_scalar<F: PrimeField>(&mut self, label: &'static [u8], scalar: &F);

    /// Derive a challenge scalar from the transcript state
    fn challenge_scalar<F: FromUniformBytes<64>>(&mut self, label: &'static [u8]) -> F;

    /// Derive a challenge scalar that must be invertible. A zero challenge
    /// is statistically negligible and aborts the attempt rather than being
    /// coerced to a fixed value.
    fn challenge_nonzero_scalar<F: FromUniformBytes<64>>(
        &mut self,
        label: &'static [u8],
    ) -> ProofResult<F>;
}

impl TranscriptProtocol for Transcript {
    fn append_point<G>(&mut self, label: &'static [u8], point: &G)
    where
        G: ProofGroup,
        G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
    {
        self.append_message(label, point.to_bytes().as_ref());
    }

    fn append_scalar<F: PrimeField>(&mut self, label: &'static [u8], scalar: &F) {
        self.append_message(label, scalar.to_repr().as_ref());
    }

    fn challenge_scalar<F: FromUniformBytes<64>>(&mut self, label: &'static [u8]) -> F {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);
        F::from_uniform_bytes(&buf)
    }

    fn challenge_nonzero_scalar<F: FromUniformBytes<64>>(
        &mut self,
        label: &'static [u8],
    ) -> ProofResult<F> {
        let challenge: F = self.challenge_scalar(label);
        if challenge.is_zero_vartime() {
            return Err(ProofError::DegenerateChallenge);
        }
        Ok(challenge)
    }
}

/// Create a new protocol transcript with domain separation.
pub fn proof_transcript(domain_label: &'static [u8]) -> Transcript {
    let mut transcript = Transcript::new(b"Bulletproofs");
    transcript.append_message(b"domain", domain_label);
    transcript
}
