//! Canonical byte encoding of points and scalars
//!
//! Encoded points carry no curve identifier; the caller must already know the
//! target group. Every buffer length is validated against the backend's fixed
//! encoding width before any bytes are interpreted, and decoding failures
//! never return a partial object.
//!
//! Framing convention, shared by all proof codecs: counts and lengths are
//! big-endian u32, points are the backend's fixed-width compressed encoding
//! written raw, scalars are length-prefixed canonical fixed-width encodings.

use crate::{ProofError, ProofGroup, ProofResult};
use ff::{FromUniformBytes, PrimeField, PrimeFieldBits};

/// Fixed compressed-point width of the backend (e.g. 32 for Ristretto).
pub fn encoded_point_len<G: ProofGroup>() -> usize
where
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    G::Repr::default().as_ref().len()
}

/// Fixed canonical scalar width of the field (e.g. 32 for the Ristretto order).
pub fn encoded_scalar_len<F: PrimeField>() -> usize {
    F::Repr::default().as_ref().len()
}

pub fn encode_point<G: ProofGroup>(point: &G) -> Vec<u8>
where
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    point.to_bytes().as_ref().to_vec()
}

/// Decode a compressed point, rejecting wrong-length or malformed input.
pub fn decode_point<G: ProofGroup>(bytes: &[u8]) -> ProofResult<G>
where
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    let mut repr = G::Repr::default();
    let expected = repr.as_ref().len();
    if bytes.len() != expected {
        return Err(ProofError::Decode(format!(
            "point encoding must be {} bytes, got {}",
            expected,
            bytes.len()
        )));
    }
    repr.as_mut().copy_from_slice(bytes);
    Option::from(G::from_bytes(&repr))
        .ok_or_else(|| ProofError::Decode("invalid compressed point".to_string()))
}

pub fn encode_scalar<F: PrimeField>(scalar: &F) -> Vec<u8> {
    scalar.to_repr().as_ref().to_vec()
}

/// Decode a scalar, rejecting wrong-length or non-canonical input.
pub fn decode_scalar<F: PrimeField>(bytes: &[u8]) -> ProofResult<F> {
    let mut repr = F::Repr::default();
    let expected = repr.as_ref().len();
    if bytes.len() != expected {
        return Err(ProofError::Decode(format!(
            "scalar encoding must be {} bytes, got {}",
            expected,
            bytes.len()
        )));
    }
    repr.as_mut().copy_from_slice(bytes);
    Option::from(F::from_repr(repr))
        .ok_or_else(|| ProofError::Decode("non-canonical scalar encoding".to_string()))
}

/// Bounds-checked cursor over an encoded proof buffer.
///
/// Embedded counts are never trusted blindly: every read is checked against
/// the remaining buffer, and `finish` rejects trailing bytes.
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> ProofResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(ProofError::Decode(format!(
                "unexpected end of input: need {} bytes, have {}",
                n,
                self.remaining()
            )));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u32(&mut self) -> ProofResult<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_point<G: ProofGroup>(&mut self) -> ProofResult<G>
    where
        G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
    {
        let bytes = self.take(encoded_point_len::<G>())?;
        decode_point(bytes)
    }

    /// Read a length-prefixed scalar; the prefix must equal the field's
    /// fixed canonical width exactly.
    pub fn read_scalar<F: PrimeField>(&mut self) -> ProofResult<F> {
        let len = self.read_u32()? as usize;
        let expected = encoded_scalar_len::<F>();
        if len != expected {
            return Err(ProofError::Decode(format!(
                "scalar length prefix must be {}, got {}",
                expected, len
            )));
        }
        let bytes = self.take(len)?;
        decode_scalar(bytes)
    }

    /// Consume the reader, rejecting any unread trailing bytes.
    pub fn finish(self) -> ProofResult<()> {
        if self.remaining() != 0 {
            return Err(ProofError::Decode(format!(
                "{} trailing bytes after proof",
                self.remaining()
            )));
        }
        Ok(())
    }
}

/// Append a big-endian u32 count or length.
pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Append a length-prefixed canonical scalar encoding.
pub fn write_scalar<F: PrimeField>(out: &mut Vec<u8>, scalar: &F) {
    let bytes = encode_scalar(scalar);
    write_u32(out, bytes.len() as u32);
    out.extend_from_slice(&bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::ristretto::RistrettoPoint;
    use curve25519_dalek::scalar::Scalar;
    use rand::rngs::OsRng;

    #[test]
    fn point_round_trip() {
        let p = RistrettoPoint::random(&mut OsRng);
        let bytes = encode_point(&p);
        assert_eq!(bytes.len(), encoded_point_len::<RistrettoPoint>());
        let q: RistrettoPoint = decode_point(&bytes).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn point_rejects_wrong_length() {
        let p = RistrettoPoint::random(&mut OsRng);
        let mut bytes = encode_point(&p);
        bytes.push(0);
        assert!(matches!(
            decode_point::<RistrettoPoint>(&bytes),
            Err(ProofError::Decode(_))
        ));
    }

    #[test]
    fn point_rejects_garbage() {
        // All-ones is not a valid Ristretto encoding.
        let bytes = [0xffu8; 32];
        assert!(decode_point::<RistrettoPoint>(&bytes).is_err());
    }

    #[test]
    fn scalar_round_trip() {
        let s = Scalar::random(&mut OsRng);
        let bytes = encode_scalar(&s);
        let back: Scalar = decode_scalar(&bytes).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn scalar_rejects_non_canonical() {
        // The group order itself is not a canonical residue encoding.
        let bytes = [0xffu8; 32];
        assert!(decode_scalar::<Scalar>(&bytes).is_err());
    }

    #[test]
    fn reader_rejects_truncation_and_trailing_bytes() {
        let mut buf = Vec::new();
        write_scalar(&mut buf, &Scalar::from(7u64));

        let mut short = ByteReader::new(&buf[..buf.len() - 1]);
        assert!(short.read_scalar::<Scalar>().is_err());

        buf.push(0xab);
        let mut long = ByteReader::new(&buf);
        long.read_scalar::<Scalar>().unwrap();
        assert!(long.finish().is_err());
    }
}
