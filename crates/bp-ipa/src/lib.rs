//! # bp-ipa
//!
//! The recursive inner product argument at the heart of Bulletproofs: given
//! generator vectors `g`, `h` of length n = 2^k, an auxiliary base `u` and a
//! target
//!
//! ```text
//! P = ⟨a, g⟩ + ⟨b, h⟩ + u·⟨a, b⟩
//! ```
//!
//! the prover convinces the verifier it knows `a`, `b` with a proof of only
//! 2·log₂(n) group elements and two scalars, instead of transmitting the
//! vectors themselves.
//!
//! Each round halves the problem: the prover publishes the cross commitments
//! `L`, `R` of the low/high halves, the transcript yields a challenge `x`,
//! and vectors and generators are folded with `x` and `x⁻¹`. The verifier
//! never re-folds round by round; it replays the challenges and collapses all
//! k foldings into one multi-exponentiation over the original 2n generators.
//!
//! Both sides must bind the target `P` (and any surrounding statement) into
//! the transcript *before* invoking this crate, so challenge replay is
//! byte-identical.

pub mod proof;
pub mod prover;
pub mod verifier;

pub use proof::*;
pub use prover::*;
pub use verifier::*;
