//! # bp-range
//!
//! Zero-knowledge proofs that a Pedersen-committed value lies in
//! `[0, 2^N − 1]`, without revealing the value, in O(log N) proof size.
//!
//! ## Protocol sketch
//!
//! For `V = G·v + H·γ` and bit-width N (a power of two):
//!
//! 1. The prover commits to the bit decomposition of `v` (commitment `A`)
//!    and to random masking vectors (commitment `S`).
//! 2. Transcript challenges `y`, `z` fix a polynomial identity
//!    `t(X) = ⟨l(X), r(X)⟩ = t₀ + t₁·X + t₂·X²` whose constant term encodes
//!    "every coefficient is a bit and the bits recompose to `v`".
//! 3. The prover commits to `t₁`, `t₂` (commitments `T1`, `T2`), receives
//!    `x`, and opens `t(x)`, together with the blinding aggregates `τx`, `μ`.
//! 4. The verifier checks the opening against `V`, `T1`, `T2` and delegates
//!    the claim `⟨l, r⟩ = t̂` to the inner product argument, which needs only
//!    2·log₂(N) further group elements.
//!
//! Verification is a pure function of the proof and public inputs: it can be
//! repeated, and many prove/verify calls may run concurrently against shared
//! immutable `GeneratorParams`.

pub mod proof;
pub mod prover;
pub mod verifier;


pub use proof::*;
pub use prover::*;
pub use verifier::*;
