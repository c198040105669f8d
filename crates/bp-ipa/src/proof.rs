//! Inner product proof object and its canonical codec

use bp_core::{
    encode_point, write_scalar, write_u32, ByteReader, ProofError, ProofGroup, ProofResult,
};
use ff::{FromUniformBytes, PrimeFieldBits};
use group::Group;

/// Upper bound on the round count accepted from the wire. 32 rounds already
/// means 2^32-element vectors, beyond any legal parameterization, so a larger
/// count is framing junk.
const MAX_ROUNDS: usize = 32;

/// An inner product argument proof: one (L, R) pair per folding round plus
/// the two fully-folded scalars.
///
/// Invariant: `l_vec` and `r_vec` always have equal length k = log₂(n),
/// fixed by the original vector length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerProductProof<G: Group> {
    /// L values from each folding round
    pub l_vec: Vec<G>,
    /// R values from each folding round
    pub r_vec: Vec<G>,
    /// Final folded scalar a
    pub a: G::Scalar,
    /// Final folded scalar b
    pub b: G::Scalar,
}

impl<G> InnerProductProof<G>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    pub fn new(l_vec: Vec<G>, r_vec: Vec<G>, a: G::Scalar, b: G::Scalar) -> Self {
        Self { l_vec, r_vec, a, b }
    }

    /// Number of folding rounds k
    pub fn rounds(&self) -> usize {
        self.l_vec.len()
    }

    /// Check the L/R pairing invariant. Empty vectors are the valid base
    /// case for n = 1.
    pub fn validate_structure(&self) -> ProofResult<()> {
        if self.l_vec.len() != self.r_vec.len() {
            return Err(ProofError::InvalidProof(format!(
                "L and R must pair up: {} vs {}",
                self.l_vec.len(),
                self.r_vec.len()
            )));
        }
        Ok(())
    }

    /// Serialized size in bytes
    pub fn size_bytes(&self) -> usize {
        let point = bp_core::encoded_point_len::<G>();
        let scalar = bp_core::encoded_scalar_len::<G::Scalar>();
        8 + (self.l_vec.len() + self.r_vec.len()) * point + 2 * (4 + scalar)
    }

    /// Canonical encoding: count-prefixed L points, count-prefixed R points,
    /// then the length-prefixed scalars a and b.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size_bytes());
        write_u32(&mut out, self.l_vec.len() as u32);
        for point in &self.l_vec {
            out.extend_from_slice(&encode_point(point));
        }
        write_u32(&mut out, self.r_vec.len() as u32);
        for point in &self.r_vec {
            out.extend_from_slice(&encode_point(point));
        }
        write_scalar(&mut out, &self.a);
        write_scalar(&mut out, &self.b);
        out
    }

    /// Decode from a standalone buffer, rejecting trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> ProofResult<Self> {
        let mut reader = ByteReader::new(bytes);
        let proof = Self::read(&mut reader)?;
        reader.finish()?;
        Ok(proof)
    }

    /// Decode from a reader, for embedding inside a larger proof encoding.
    pub fn read(reader: &mut ByteReader<'_>) -> ProofResult<Self> {
        let l_count = reader.read_u32()? as usize;
        if l_count > MAX_ROUNDS {
            return Err(ProofError::Decode(format!(
                "implausible round count {}",
                l_count
            )));
        }
        let mut l_vec = Vec::with_capacity(l_count);
        for _ in 0..l_count {
            l_vec.push(reader.read_point::<G>()?);
        }

        let r_count = reader.read_u32()? as usize;
        if r_count != l_count {
            return Err(ProofError::Decode(format!(
                "L and R counts disagree: {} vs {}",
                l_count, r_count
            )));
        }
        let mut r_vec = Vec::with_capacity(r_count);
        for _ in 0..r_count {
            r_vec.push(reader.read_point::<G>()?);
        }

        let a = reader.read_scalar()?;
        let b = reader.read_scalar()?;
        Ok(Self { l_vec, r_vec, a, b })
    }
}
