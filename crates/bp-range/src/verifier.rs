//! Range proof verifier

use crate::RangeProof;
use bp_core::utils::{is_power_of_two, scalar_powers, sum_scalars, vector_add, vector_scale};
use bp_core::{
    multiexp, proof_transcript, GeneratorParams, ProofError, ProofGroup, ProofResult,
    TranscriptProtocol,
};
use ff::{Field, FromUniformBytes, PrimeFieldBits};

/// Verify a range proof against the public commitment `v`.
///
/// Verification is a pure function of the proof and public inputs. The
/// outcome is three-valued in practice:
/// - `Ok(true)` — the statement holds;
/// - `Ok(false)` — the proof is well-formed but false (wrong commitment,
///   tampered opening, forged transcript);
/// - `Err(_)` — the input is malformed (structure, lengths, degenerate
///   challenge), before any judgement about the statement.
pub fn verify<G>(
    params: &GeneratorParams<G>,
    v: &G,
    proof: &RangeProof<G>,
) -> ProofResult<bool>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    proof.validate_structure()?;
    let n = params.vector_length();
    if !is_power_of_two(n) || n > 64 {
        return Err(ProofError::InvalidParameters(format!(
            "bit width {} must be a power of two in [1, 64]",
            n
        )));
    }
    // k is fixed by the bit width; check before any algebra so malformed
    // proofs are reported as such, not as false statements.
    let rounds = bp_core::utils::log2(n);
    if proof.ipp.rounds() != rounds {
        return Err(ProofError::InvalidProof(format!(
            "expected {} inner-product rounds for width {}, got {}",
            rounds,
            n,
            proof.ipp.rounds()
        )));
    }

    // Replay the prover's transcript schedule exactly.
    let mut transcript = proof_transcript(b"range-proof");
    transcript.append_point(b"V", v);
    transcript.append_point(b"A", &proof.a);
    transcript.append_point(b"S", &proof.s);
    let y: G::Scalar = transcript.challenge_nonzero_scalar(b"y")?;
    let z: G::Scalar = transcript.challenge_nonzero_scalar(b"z")?;
    transcript.append_point(b"T1", proof.t1());
    transcript.append_point(b"T2", proof.t2());
    let x: G::Scalar = transcript.challenge_nonzero_scalar(b"x")?;

    let ys = scalar_powers(&y, n);
    let twos = scalar_powers(&G::Scalar::from(2u64), n);
    let z_sq = z.square();
    let x_sq = x.square();

    // δ(y,z) = (z − z²)·⟨1, yⁿ⟩ − z³·⟨1, 2ⁿ⟩
    let delta = (z - z_sq) * sum_scalars(&ys) - z_sq * z * sum_scalars(&twos);

    // First check: the t(x) opening.
    //   G·t̂ + H·τx == V·z² + G·δ(y,z) + T1·x + T2·x²
    let opening = params.base.commit(proof.t_hat, proof.tau_x);
    let expected = multiexp(
        &[*v, params.base.g, *proof.t1(), *proof.t2()],
        &[z_sq, delta, x, x_sq],
    )?;
    if opening != expected {
        return Ok(false);
    }

    // Second check: delegate ⟨l, r⟩ = t̂ to the inner product argument.
    transcript.append_scalar(b"t", &proof.t_hat);
    transcript.append_scalar(b"tau_x", &proof.tau_x);
    transcript.append_scalar(b"mu", &proof.mu);
    let u_challenge: G::Scalar = transcript.challenge_nonzero_scalar(b"u")?;
    let u_base = params.base.g * u_challenge;

    let y_inv = Option::from(y.invert()).ok_or(ProofError::DegenerateChallenge)?;
    let hs_prime = params.hs.hadamard(&scalar_powers(&y_inv, n))?;

    // Target for the IPA, assembled from public values only:
    //   P = A + S·x − z·Σgᵢ + ⟨z·yⁿ + z²·2ⁿ, hs'⟩ − μ·H + t̂·U
    let hs_exponents = vector_add(&vector_scale(&ys, &z), &vector_scale(&twos, &z_sq))?;
    let p = proof.a
        + proof.s * x
        + params.gs.sum() * (-z)
        + hs_prime.commit(&hs_exponents)?
        + params.base.h * (-proof.mu)
        + u_base * proof.t_hat;

    bp_ipa::verify(
        &mut transcript,
        &params.gs,
        &hs_prime,
        &u_base,
        &proof.ipp,
        &p,
        n,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prover::prove;
    use bp_core::PedersenCommitment;
    use curve25519_dalek::ristretto::RistrettoPoint;
    use curve25519_dalek::scalar::Scalar;
    use rand::rngs::OsRng;

    fn params8() -> GeneratorParams<RistrettoPoint> {
        GeneratorParams::new(8)
    }

    #[test]
    fn completeness_across_the_range() {
        let params = params8();
        for value in [0u64, 1, 5, 127, 128, 254, 255] {
            let witness = PedersenCommitment::new(value, Scalar::random(&mut OsRng));
            let v = witness.commitment(&params.base);
            let proof = prove(&params, &witness, &mut OsRng).unwrap();
            assert!(
                verify(&params, &v, &proof).unwrap(),
                "honest proof rejected for v = {}",
                value
            );
        }
    }

    #[test]
    fn concrete_scenario_v5_accepts_v6_rejects() {
        // N = 8, v = 5 (bit pattern 00000101, LSB first): the proof must
        // verify against the true commitment and fail against one for v = 6.
        let params = params8();
        let blinding = Scalar::random(&mut OsRng);
        let witness = PedersenCommitment::new(5, blinding);
        let v5 = witness.commitment(&params.base);
        let proof = prove(&params, &witness, &mut OsRng).unwrap();

        assert!(verify(&params, &v5, &proof).unwrap());

        let v6 = PedersenCommitment::<RistrettoPoint>::new(6, blinding)
            .commitment(&params.base);
        assert!(!verify(&params, &v6, &proof).unwrap());
    }

    #[test]
    fn binding_same_value_different_blinding_rejects() {
        let params = params8();
        let witness = PedersenCommitment::new(99, Scalar::random(&mut OsRng));
        let v = witness.commitment(&params.base);
        let proof = prove(&params, &witness, &mut OsRng).unwrap();

        // Same hidden value, different blinding: a different commitment,
        // so the proof must not transfer.
        let other = PedersenCommitment::<RistrettoPoint>::new(99, Scalar::random(&mut OsRng));
        let v_prime = other.commitment(&params.base);
        assert_ne!(v, v_prime);
        assert!(!verify(&params, &v_prime, &proof).unwrap());
    }

    #[test]
    fn tampered_scalars_reject() {
        let params = params8();
        let witness = PedersenCommitment::new(77, Scalar::random(&mut OsRng));
        let v = witness.commitment(&params.base);
        let proof = prove(&params, &witness, &mut OsRng).unwrap();

        let mut bad = proof.clone();
        bad.t_hat += Scalar::ONE;
        assert!(!verify(&params, &v, &bad).unwrap());

        let mut bad = proof.clone();
        bad.tau_x += Scalar::ONE;
        assert!(!verify(&params, &v, &bad).unwrap());

        let mut bad = proof.clone();
        bad.mu += Scalar::ONE;
        assert!(!verify(&params, &v, &bad).unwrap());

        let mut bad = proof.clone();
        bad.ipp.a += Scalar::ONE;
        assert!(!verify(&params, &v, &bad).unwrap());

        let mut bad = proof;
        bad.ipp.b += Scalar::ONE;
        assert!(!verify(&params, &v, &bad).unwrap());
    }

    #[test]
    fn serialized_proof_survives_round_trip_and_verifies() {
        let params = params8();
        let witness = PedersenCommitment::new(203, Scalar::random(&mut OsRng));
        let v = witness.commitment(&params.base);
        let proof = prove(&params, &witness, &mut OsRng).unwrap();

        let bytes = proof.to_bytes();
        let restored = RangeProof::<RistrettoPoint>::from_bytes(&bytes).unwrap();
        assert_eq!(proof, restored);
        assert!(verify(&params, &v, &restored).unwrap());
    }

    #[test]
    fn single_byte_tamper_on_the_wire_rejects() {
        let params = params8();
        let witness = PedersenCommitment::new(11, Scalar::random(&mut OsRng));
        let v = witness.commitment(&params.base);
        let proof = prove(&params, &witness, &mut OsRng).unwrap();
        let bytes = proof.to_bytes();

        // Flip one byte inside each scalar field of the encoding. Either the
        // decode rejects a non-canonical scalar or verification fails; a
        // tampered proof must never be accepted.
        let scalar_region = bytes.len() - 3 * 36;
        let ipp_scalars = proof.ipp.size_bytes() - 2 * 36;
        for offset in [
            scalar_region + 4,      // first byte of tau_x
            scalar_region + 40,     // first byte of mu
            scalar_region + 76,     // first byte of t_hat
            ipp_scalars + 4,        // first byte of the folded a
            ipp_scalars + 40,       // first byte of the folded b
            4,                      // inside L_1
        ] {
            let mut tampered = bytes.clone();
            tampered[offset] ^= 0x01;
            let accepted = match RangeProof::<RistrettoPoint>::from_bytes(&tampered) {
                Ok(decoded) => verify(&params, &v, &decoded).unwrap_or(false),
                Err(_) => false,
            };
            assert!(!accepted, "tampered byte at {} was accepted", offset);
        }
    }

    #[test]
    fn wrong_width_params_reject_or_error() {
        let params = params8();
        let witness = PedersenCommitment::new(5, Scalar::random(&mut OsRng));
        let v = witness.commitment(&params.base);
        let proof = prove(&params, &witness, &mut OsRng).unwrap();

        // A 16-bit verifier expects 4 IPA rounds, so the 3-round proof is
        // structurally invalid for it.
        let wide: GeneratorParams<RistrettoPoint> = GeneratorParams::new(16);
        assert!(matches!(
            verify(&wide, &v, &proof),
            Err(ProofError::InvalidProof(_))
        ));
    }

    #[test]
    fn proof_size_is_logarithmic() {
        let params: GeneratorParams<RistrettoPoint> = GeneratorParams::new(64);
        let witness = PedersenCommitment::new(1u64 << 40, Scalar::random(&mut OsRng));
        let proof = prove(&params, &witness, &mut OsRng).unwrap();

        // 2·log₂(64) + 4 group elements and 5 scalars.
        assert_eq!(proof.element_count(), 2 * 6 + 4);
        assert_eq!(proof.scalar_count(), 5);
    }
}
