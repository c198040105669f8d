//! Range proof prover

use crate::RangeProof;
use bp_core::utils::{
    bit_decomposition, constant_vector, hadamard, inner_product, is_power_of_two, scalar_powers,
    vector_add, vector_scale, vector_sub,
};
use bp_core::{
    multiexp, proof_transcript, GeneratorParams, GeneratorVector, PedersenCommitment, ProofError,
    ProofGroup, ProofResult, TranscriptProtocol,
};
use ff::{Field, FromUniformBytes, PrimeFieldBits};
use rand_core::{CryptoRng, RngCore};

/// One vector Pedersen commitment ⟨l, gs⟩ + ⟨r, hs⟩ + blind·H, as a single
/// multi-exponentiation.
fn vector_commit<G>(
    params: &GeneratorParams<G>,
    l: &[G::Scalar],
    r: &[G::Scalar],
    blind: G::Scalar,
) -> ProofResult<G>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    let n = params.vector_length();
    let mut points = Vec::with_capacity(2 * n + 1);
    let mut scalars = Vec::with_capacity(2 * n + 1);
    points.extend_from_slice(params.gs.as_slice());
    points.extend_from_slice(params.hs.as_slice());
    points.push(params.base.h);
    scalars.extend_from_slice(l);
    scalars.extend_from_slice(r);
    scalars.push(blind);
    multiexp(&points, &scalars)
}

/// Prove that the value inside `witness` lies in `[0, 2^N − 1]`, where N is
/// the parameter vector length.
///
/// The public commitment the proof verifies against is
/// `witness.commitment(&params.base)`; the prover derives it internally so
/// both sides bind the identical V into the transcript.
///
/// A degenerate (zero) Fiat-Shamir challenge aborts the attempt with
/// `DegenerateChallenge`; the caller may retry with fresh randomness.
pub fn prove<G, R>(
    params: &GeneratorParams<G>,
    witness: &PedersenCommitment<G>,
    rng: &mut R,
) -> ProofResult<RangeProof<G>>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
    R: RngCore + CryptoRng,
{
    let n = params.vector_length();
    if !is_power_of_two(n) || n > 64 {
        return Err(ProofError::InvalidParameters(format!(
            "bit width {} must be a power of two in [1, 64]",
            n
        )));
    }
    if n < 64 && witness.value >> n != 0 {
        return Err(ProofError::ValueOutOfRange {
            value: witness.value,
            bits: n,
        });
    }

    let gamma = witness.blinding;
    let v = witness.commitment(&params.base);

    let mut transcript = proof_transcript(b"range-proof");
    transcript.append_point(b"V", &v);

    // Bit decomposition, LSB first: a_L · 2ⁿ = v, a_R = a_L − 1.
    let a_l: Vec<G::Scalar> = bit_decomposition(witness.value, n);
    let ones = constant_vector(G::Scalar::ONE, n);
    let a_r = vector_sub(&a_l, &ones)?;

    let alpha = G::Scalar::random(&mut *rng);
    let a_commit = vector_commit(params, &a_l, &a_r, alpha)?;

    let s_l: Vec<G::Scalar> = (0..n).map(|_| G::Scalar::random(&mut *rng)).collect();
    let s_r: Vec<G::Scalar> = (0..n).map(|_| G::Scalar::random(&mut *rng)).collect();
    let rho = G::Scalar::random(&mut *rng);
    let s_commit = vector_commit(params, &s_l, &s_r, rho)?;

    transcript.append_point(b"A", &a_commit);
    transcript.append_point(b"S", &s_commit);
    let y: G::Scalar = transcript.challenge_nonzero_scalar(b"y")?;
    let z: G::Scalar = transcript.challenge_nonzero_scalar(b"z")?;

    let ys = scalar_powers(&y, n);
    let twos = scalar_powers(&G::Scalar::from(2u64), n);
    let z_sq = z.square();

    // l(X) = (a_L − z·1) + s_L·X
    // r(X) = yⁿ ∘ (a_R + z·1 + s_R·X) + z²·2ⁿ
    let l0 = vector_sub(&a_l, &vector_scale(&ones, &z))?;
    let l1 = s_l;
    let r0 = vector_add(
        &hadamard(&ys, &vector_add(&a_r, &vector_scale(&ones, &z))?)?,
        &vector_scale(&twos, &z_sq),
    )?;
    let r1 = hadamard(&ys, &s_r)?;

    // t(X) = ⟨l(X), r(X)⟩ = t₀ + t₁·X + t₂·X²; t₁ via t(1) − t₀ − t₂.
    let t0 = inner_product(&l0, &r0)?;
    let t2 = inner_product(&l1, &r1)?;
    let t1 = inner_product(&vector_add(&l0, &l1)?, &vector_add(&r0, &r1)?)? - t0 - t2;

    let tau1 = G::Scalar::random(&mut *rng);
    let tau2 = G::Scalar::random(&mut *rng);
    let t1_commit = params.base.commit(t1, tau1);
    let t2_commit = params.base.commit(t2, tau2);

    transcript.append_point(b"T1", &t1_commit);
    transcript.append_point(b"T2", &t2_commit);
    let x: G::Scalar = transcript.challenge_nonzero_scalar(b"x")?;
    let x_sq = x.square();

    let l = vector_add(&l0, &vector_scale(&l1, &x))?;
    let r = vector_add(&r0, &vector_scale(&r1, &x))?;
    let t_hat = inner_product(&l, &r)?;
    let tau_x = tau2 * x_sq + tau1 * x + z_sq * gamma;
    let mu = alpha + rho * x;

    // Bind the opening, then derive the auxiliary IPA base from the full
    // transcript so it is tied to x and everything before it.
    transcript.append_scalar(b"t", &t_hat);
    transcript.append_scalar(b"tau_x", &tau_x);
    transcript.append_scalar(b"mu", &mu);
    let u_challenge: G::Scalar = transcript.challenge_nonzero_scalar(b"u")?;
    let u_base = params.base.g * u_challenge;

    // The IPA runs over (gs, hs ∘ y⁻ⁱ) so that r's yⁿ weighting cancels.
    let y_inv = Option::from(y.invert()).ok_or(ProofError::DegenerateChallenge)?;
    let hs_prime = params.hs.hadamard(&scalar_powers(&y_inv, n))?;

    let ipp = bp_ipa::prove(&mut transcript, &params.gs, &hs_prime, &u_base, &l, &r)?;

    Ok(RangeProof {
        a: a_commit,
        s: s_commit,
        t_commits: GeneratorVector::new(vec![t1_commit, t2_commit]),
        tau_x,
        mu,
        t_hat,
        ipp,
    })
}
