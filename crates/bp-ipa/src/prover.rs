//! Inner product argument prover

use crate::InnerProductProof;
use bp_core::utils::{inner_product, is_power_of_two};
use bp_core::{
    multiexp, GeneratorVector, ProofError, ProofGroup, ProofResult, TranscriptProtocol,
};
use ff::{Field, FromUniformBytes, PrimeFieldBits};
use merlin::Transcript;

/// Prove knowledge of vectors `a`, `b` with
/// `P = ⟨a, g⟩ + ⟨b, h⟩ + u·⟨a, b⟩`.
///
/// The caller must already have bound `P` and all statement context into the
/// transcript. `a`, `b`, `gs`, `hs` must share one power-of-two length; no
/// implicit padding is performed.
pub fn prove<G>(
    transcript: &mut Transcript,
    gs: &GeneratorVector<G>,
    hs: &GeneratorVector<G>,
    u: &G,
    a: &[G::Scalar],
    b: &[G::Scalar],
) -> ProofResult<InnerProductProof<G>>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    let n = a.len();
    if b.len() != n {
        return Err(ProofError::LengthMismatch {
            expected: n,
            actual: b.len(),
        });
    }
    if gs.len() != n {
        return Err(ProofError::LengthMismatch {
            expected: n,
            actual: gs.len(),
        });
    }
    if hs.len() != n {
        return Err(ProofError::LengthMismatch {
            expected: n,
            actual: hs.len(),
        });
    }
    if !is_power_of_two(n) {
        return Err(ProofError::InvalidParameters(format!(
            "vector length {} is not a power of two",
            n
        )));
    }

    let mut cur_a = a.to_vec();
    let mut cur_b = b.to_vec();
    let mut cur_g = gs.as_slice().to_vec();
    let mut cur_h = hs.as_slice().to_vec();

    let rounds = bp_core::utils::log2(n);
    let mut l_vec = Vec::with_capacity(rounds);
    let mut r_vec = Vec::with_capacity(rounds);

    while cur_a.len() > 1 {
        let m = cur_a.len() / 2;
        let (a_lo, a_hi) = cur_a.split_at(m);
        let (b_lo, b_hi) = cur_b.split_at(m);
        let (g_lo, g_hi) = cur_g.split_at(m);
        let (h_lo, h_hi) = cur_h.split_at(m);

        let c_l = inner_product(a_lo, b_hi)?;
        let c_r = inner_product(a_hi, b_lo)?;

        // L = ⟨a_lo, g_hi⟩ + ⟨b_hi, h_lo⟩ + u·cL
        let mut points: Vec<G> = Vec::with_capacity(2 * m + 1);
        let mut scalars: Vec<G::Scalar> = Vec::with_capacity(2 * m + 1);
        points.extend_from_slice(g_hi);
        points.extend_from_slice(h_lo);
        points.push(*u);
        scalars.extend_from_slice(a_lo);
        scalars.extend_from_slice(b_hi);
        scalars.push(c_l);
        let l = multiexp(&points, &scalars)?;

        // R = ⟨a_hi, g_lo⟩ + ⟨b_lo, h_hi⟩ + u·cR
        points.clear();
        scalars.clear();
        points.extend_from_slice(g_lo);
        points.extend_from_slice(h_hi);
        points.push(*u);
        scalars.extend_from_slice(a_hi);
        scalars.extend_from_slice(b_lo);
        scalars.push(c_r);
        let r = multiexp(&points, &scalars)?;

        transcript.append_point(b"L", &l);
        transcript.append_point(b"R", &r);
        l_vec.push(l);
        r_vec.push(r);

        let x: G::Scalar = transcript.challenge_nonzero_scalar(b"x")?;
        let x_inv: G::Scalar =
            Option::from(x.invert()).ok_or(ProofError::DegenerateChallenge)?;

        let mut next_a = Vec::with_capacity(m);
        let mut next_b = Vec::with_capacity(m);
        let mut next_g = Vec::with_capacity(m);
        let mut next_h = Vec::with_capacity(m);
        for i in 0..m {
            next_a.push(a_lo[i] * x + a_hi[i] * x_inv);
            next_b.push(b_lo[i] * x_inv + b_hi[i] * x);
            next_g.push(g_lo[i] * x_inv + g_hi[i] * x);
            next_h.push(h_lo[i] * x + h_hi[i] * x_inv);
        }
        cur_a = next_a;
        cur_b = next_b;
        cur_g = next_g;
        cur_h = next_h;
    }

    Ok(InnerProductProof::new(l_vec, r_vec, cur_a[0], cur_b[0]))
}
