//! Range proof object and its canonical codec

use bp_core::{
    encode_point, encode_scalar, write_scalar, write_u32, ByteReader, GeneratorVector,
    ProofError, ProofGroup, ProofResult,
};
use bp_ipa::InnerProductProof;
use ff::{FromUniformBytes, PrimeFieldBits};
use group::Group;

/// A proof that a Pedersen-committed value lies in `[0, 2^N − 1]`.
///
/// Invariant: `t_commits` always holds exactly the two polynomial
/// commitments T1, T2. Produced once by the prover, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeProof<G: Group> {
    /// Commitment A to the bit vectors a_L, a_R
    pub a: G,
    /// Commitment S to the masking vectors s_L, s_R
    pub s: G,
    /// Commitments [T1, T2] to the t(X) coefficients t₁, t₂
    pub t_commits: GeneratorVector<G>,
    /// Blinding aggregate for the t(x) opening
    pub tau_x: G::Scalar,
    /// Blinding aggregate for the A/S opening
    pub mu: G::Scalar,
    /// Claimed polynomial evaluation t̂ = t(x)
    pub t_hat: G::Scalar,
    /// Inner product argument for ⟨l, r⟩ = t̂
    pub ipp: InnerProductProof<G>,
}

impl<G> RangeProof<G>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    pub fn t1(&self) -> &G {
        self.t_commits.get(0)
    }

    pub fn t2(&self) -> &G {
        self.t_commits.get(1)
    }

    /// Check the fixed-shape invariants.
    pub fn validate_structure(&self) -> ProofResult<()> {
        if self.t_commits.len() != 2 {
            return Err(ProofError::InvalidProof(format!(
                "tCommits must hold exactly T1 and T2, got {} elements",
                self.t_commits.len()
            )));
        }
        self.ipp.validate_structure()
    }

    /// Group elements carried by the proof: A, S, T1, T2 and the IPA rounds.
    pub fn element_count(&self) -> usize {
        2 + self.t_commits.len() + self.ipp.l_vec.len() + self.ipp.r_vec.len()
    }

    /// Scalars carried by the proof: τx, μ, t̂ and the two IPA finals.
    pub fn scalar_count(&self) -> usize {
        5
    }

    /// Serialized size in bytes
    pub fn size_bytes(&self) -> usize {
        let point = bp_core::encoded_point_len::<G>();
        let scalar = bp_core::encoded_scalar_len::<G::Scalar>();
        self.ipp.size_bytes() + 2 * point + 4 + 2 * point + 3 * (4 + scalar)
    }

    /// Canonical encoding, fixed field order: the inner product proof, then
    /// A, S, the count-prefixed tCommits pair, then τx, μ, t̂.
    ///
    /// The encoding carries no curve identifier; decoding requires the
    /// caller to already know the target group.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size_bytes());
        out.extend_from_slice(&self.ipp.to_bytes());
        out.extend_from_slice(&encode_point(&self.a));
        out.extend_from_slice(&encode_point(&self.s));
        write_u32(&mut out, self.t_commits.len() as u32);
        for point in &self.t_commits {
            out.extend_from_slice(&encode_point(point));
        }
        write_scalar(&mut out, &self.tau_x);
        write_scalar(&mut out, &self.mu);
        write_scalar(&mut out, &self.t_hat);
        out
    }

    /// Decode a canonical encoding. Every embedded count and length is
    /// validated; trailing bytes are rejected; no partial proof is returned.
    pub fn from_bytes(bytes: &[u8]) -> ProofResult<Self> {
        let mut reader = ByteReader::new(bytes);
        let ipp = InnerProductProof::read(&mut reader)?;
        let a = reader.read_point::<G>()?;
        let s = reader.read_point::<G>()?;
        let t_count = reader.read_u32()? as usize;
        if t_count != 2 {
            return Err(ProofError::Decode(format!(
                "tCommits count must be 2, got {}",
                t_count
            )));
        }
        let t1 = reader.read_point::<G>()?;
        let t2 = reader.read_point::<G>()?;
        let tau_x = reader.read_scalar()?;
        let mu = reader.read_scalar()?;
        let t_hat = reader.read_scalar()?;
        reader.finish()?;
        Ok(Self {
            a,
            s,
            t_commits: GeneratorVector::new(vec![t1, t2]),
            tau_x,
            mu,
            t_hat,
            ipp,
        })
    }

    /// Unframed concatenation of the proof contents, scalars pre-reduced.
    ///
    /// A fingerprint for display, logging and debugging only: it has no
    /// length framing and cannot be decoded, and it must never be accepted
    /// as verification input.
    pub fn digest_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for point in self.ipp.l_vec.iter().chain(self.ipp.r_vec.iter()) {
            out.extend_from_slice(&encode_point(point));
        }
        out.extend_from_slice(&encode_scalar(&self.ipp.a));
        out.extend_from_slice(&encode_scalar(&self.ipp.b));
        out.extend_from_slice(&encode_point(&self.a));
        out.extend_from_slice(&encode_point(&self.s));
        for point in &self.t_commits {
            out.extend_from_slice(&encode_point(point));
        }
        out.extend_from_slice(&encode_scalar(&self.tau_x));
        out.extend_from_slice(&encode_scalar(&self.mu));
        out.extend_from_slice(&encode_scalar(&self.t_hat));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::ristretto::RistrettoPoint;
    use curve25519_dalek::scalar::Scalar;
    use rand::rngs::OsRng;

    fn sample_proof(rounds: usize) -> RangeProof<RistrettoPoint> {
        let mut rng = OsRng;
        RangeProof {
            a: RistrettoPoint::random(&mut rng),
            s: RistrettoPoint::random(&mut rng),
            t_commits: GeneratorVector::new(vec![
                RistrettoPoint::random(&mut rng),
                RistrettoPoint::random(&mut rng),
            ]),
            tau_x: Scalar::random(&mut rng),
            mu: Scalar::random(&mut rng),
            t_hat: Scalar::random(&mut rng),
            ipp: InnerProductProof::new(
                (0..rounds).map(|_| RistrettoPoint::random(&mut rng)).collect(),
                (0..rounds).map(|_| RistrettoPoint::random(&mut rng)).collect(),
                Scalar::random(&mut rng),
                Scalar::random(&mut rng),
            ),
        }
    }

    #[test]
    fn codec_round_trip() {
        let proof = sample_proof(3);
        let bytes = proof.to_bytes();
        assert_eq!(bytes.len(), proof.size_bytes());
        let back = RangeProof::<RistrettoPoint>::from_bytes(&bytes).unwrap();
        assert_eq!(proof, back);
    }

    #[test]
    fn decode_rejects_bad_t_commit_count() {
        let proof = sample_proof(2);
        let mut bytes = proof.to_bytes();
        // The tCommits count sits right after the IPA proof and A, S.
        let offset = proof.ipp.size_bytes() + 64 + 3;
        bytes[offset] = 3;
        assert!(matches!(
            RangeProof::<RistrettoPoint>::from_bytes(&bytes),
            Err(ProofError::Decode(_))
        ));
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        let proof = sample_proof(2);
        let mut bytes = proof.to_bytes();
        bytes.push(0);
        assert!(RangeProof::<RistrettoPoint>::from_bytes(&bytes).is_err());
    }

    #[test]
    fn decode_rejects_truncation() {
        let proof = sample_proof(2);
        let bytes = proof.to_bytes();
        for cut in [1usize, 33, bytes.len() / 2] {
            assert!(
                RangeProof::<RistrettoPoint>::from_bytes(&bytes[..bytes.len() - cut]).is_err()
            );
        }
    }

    #[test]
    fn digest_has_no_framing() {
        let proof = sample_proof(3);
        let digest = proof.digest_bytes();
        // No counts, no length prefixes: 10 points and 5 scalars, raw.
        assert_eq!(digest.len(), 15 * 32);
        assert!(digest.len() < proof.size_bytes());
    }

    #[test]
    fn counts() {
        let proof = sample_proof(3);
        assert_eq!(proof.element_count(), 2 + 2 + 6);
        assert_eq!(proof.scalar_count(), 5);
        assert!(proof.validate_structure().is_ok());
    }
}
