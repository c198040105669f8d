//! # bp-core
//!
//! Foundational types and tooling for Bulletproof range proofs:
//!
//! - A prime-order group abstraction (`ProofGroup`) over the standard
//!   `group`/`ff` traits, with a simultaneous multi-scalar multiplication
//! - Generator vectors with vectorized linear-algebra operations
//! - Pedersen commitments and deterministic generator parameters
//! - Fiat-Shamir transcript management over `merlin`
//! - Canonical, fixed-order byte encoding of points and scalars
//!
//! ## Mathematical background
//!
//! The protocols built on this crate operate over a cyclic group of prime
//! order q with generators:
//! - `G`: value generator for Pedersen commitments
//! - `H`: blinding generator (no known discrete-log relation to `G`)
//! - `{g_i}`, `{h_i}`: generator vectors for multi-scalar commitments
//!
//! A Pedersen commitment `V = G·v + H·γ` is binding and hiding; the vector
//! commitment `⟨e, g⟩ = Σ g_i·e_i` generalizes it to vectors and is the
//! workhorse of both proving and verifying.

pub mod encoding;
pub mod errors;
pub mod generators;
pub mod group;
pub mod transcript;
pub mod utils;
pub mod vector;

pub use self::encoding::*;
pub use self::errors::*;
pub use self::generators::*;
pub use self::group::*;
pub use self::transcript::*;
pub use self::vector::*;

/// Re-export the trait crates backends implement against
pub use ::ff;
pub use ::group as group_traits;

/// Re-export merlin transcript
pub use merlin::Transcript;
