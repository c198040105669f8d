//! Inner product argument verifier

use crate::InnerProductProof;
use bp_core::utils::{is_power_of_two, log2};
use bp_core::{
    multiexp, GeneratorVector, ProofError, ProofGroup, ProofResult, TranscriptProtocol,
};
use ff::{Field, FromUniformBytes, PrimeFieldBits};
use merlin::Transcript;

/// Verify an inner product proof against the target `P` over vectors of
/// length `n`.
///
/// The verifier replays the prover's challenges from the L/R values in the
/// proof (it never recomputes them) and collapses all foldings analytically:
/// the k rounds reduce to one multi-exponentiation over the original 2n
/// generators weighted by products of challenges.
///
/// Returns `Ok(false)` when the algebra does not balance; structural
/// violations (wrong round count, mismatched L/R) are malformed-input errors.
pub fn verify<G>(
    transcript: &mut Transcript,
    gs: &GeneratorVector<G>,
    hs: &GeneratorVector<G>,
    u: &G,
    proof: &InnerProductProof<G>,
    p: &G,
    n: usize,
) -> ProofResult<bool>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    proof.validate_structure()?;
    if n == 0 || !is_power_of_two(n) {
        return Err(ProofError::InvalidParameters(format!(
            "vector length {} is not a positive power of two",
            n
        )));
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
    let rounds = log2(n);
    if proof.rounds() != rounds {
        return Err(ProofError::InvalidProof(format!(
            "expected {} rounds for vector length {}, got {}",
            rounds,
            n,
            proof.rounds()
        )));
    }

    // Replay the challenge schedule in the prover's exact transcript order.
    let mut challenges = Vec::with_capacity(rounds);
    let mut challenges_inv = Vec::with_capacity(rounds);
    for (l, r) in proof.l_vec.iter().zip(proof.r_vec.iter()) {
        transcript.append_point(b"L", l);
        transcript.append_point(b"R", r);
        let x: G::Scalar = transcript.challenge_nonzero_scalar(b"x")?;
        let x_inv = Option::from(x.invert()).ok_or(ProofError::DegenerateChallenge)?;
        challenges.push(x);
        challenges_inv.push(x_inv);
    }

    let (s_l, s_r) = fold_scalars::<G>(&challenges, &challenges_inv, n);

    // Left side: P + Σ L_j·x_j² + Σ R_j·x_j⁻²
    let mut lr_points = Vec::with_capacity(2 * rounds);
    let mut lr_scalars = Vec::with_capacity(2 * rounds);
    for j in 0..rounds {
        lr_points.push(proof.l_vec[j]);
        lr_scalars.push(challenges[j].square());
        lr_points.push(proof.r_vec[j]);
        lr_scalars.push(challenges_inv[j].square());
    }
    let left = *p + multiexp(&lr_points, &lr_scalars)?;

    // Right side: ⟨a·s_l, g⟩ + ⟨b·s_r, h⟩ + u·(a·b), one multi-exponentiation
    // over the original generators.
    let mut points = Vec::with_capacity(2 * n + 1);
    let mut scalars = Vec::with_capacity(2 * n + 1);
    points.extend_from_slice(gs.as_slice());
    points.extend_from_slice(hs.as_slice());
    points.push(*u);
    scalars.extend(s_l.iter().map(|s| proof.a * s));
    scalars.extend(s_r.iter().map(|s| proof.b * s));
    scalars.push(proof.a * proof.b);
    let right = multiexp(&points, &scalars)?;

    Ok(left == right)
}

/// Per-index products of challenges that express the fully-folded generators
/// as combinations of the originals: s_l[i] = Π x_j^{±1}, sign chosen by bit
/// (k−1−j) of i; s_r is the mirror image.
fn fold_scalars<G>(
    challenges: &[G::Scalar],
    challenges_inv: &[G::Scalar],
    n: usize,
) -> (Vec<G::Scalar>, Vec<G::Scalar>)
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    let rounds = challenges.len();
    let mut s_l = vec![G::Scalar::ONE; n];
    let mut s_r = vec![G::Scalar::ONE; n];
    for (round, (x, x_inv)) in challenges.iter().zip(challenges_inv.iter()).enumerate() {
        let bit = rounds - 1 - round;
        for i in 0..n {
            if (i >> bit) & 1 == 1 {
                s_l[i] *= x;
                s_r[i] *= x_inv;
            } else {
                s_l[i] *= x_inv;
                s_r[i] *= x;
            }
        }
    }
    (s_l, s_r)
}
