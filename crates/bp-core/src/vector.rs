//! Ordered vectors of group elements with vectorized operations

use crate::{multiexp, ProofError, ProofGroup, ProofResult};
use ff::{FromUniformBytes, PrimeFieldBits};

/// An immutable ordered sequence of group elements, all from one group.
///
/// Every binary operation requires equal operand lengths; a violated length
/// is a caller error surfaced as `LengthMismatch`, never silently truncated
/// or padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorVector<G> {
    elements: Vec<G>,
}

impl<G> GeneratorVector<G>
where
    G: ProofGroup,
    G::Scalar: PrimeFieldBits + FromUniformBytes<64>,
{
    pub fn new(elements: Vec<G>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, i: usize) -> &G {
        &self.elements[i]
    }

    pub fn as_slice(&self) -> &[G] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, G> {
        self.elements.iter()
    }

    /// Independent vector over the half-open index range [start, end).
    pub fn sub_vector(&self, start: usize, end: usize) -> Self {
        Self::new(self.elements[start..end].to_vec())
    }

    /// Multi-scalar commitment Σ Gᵢ·eᵢ. The dominant cost center of both
    /// proving and verifying; backed by the shared-doubling multiexp.
    pub fn commit(&self, exponents: &[G::Scalar]) -> ProofResult<G> {
        if exponents.len() != self.len() {
            return Err(ProofError::LengthMismatch {
                expected: self.len(),
                actual: exponents.len(),
            });
        }
        multiexp(&self.elements, exponents)
    }

    /// Component-wise scalar multiplication, returning a new vector.
    pub fn hadamard(&self, exponents: &[G::Scalar]) -> ProofResult<Self> {
        if exponents.len() != self.len() {
            return Err(ProofError::LengthMismatch {
                expected: self.len(),
                actual: exponents.len(),
            });
        }
        Ok(Self::new(
            self.elements
                .iter()
                .zip(exponents.iter())
                .map(|(g, e)| *g * *e)
                .collect(),
        ))
    }

    /// Component-wise group addition.
    pub fn add(&self, other: &Self) -> ProofResult<Self> {
        if other.len() != self.len() {
            return Err(ProofError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(Self::new(
            self.elements
                .iter()
                .zip(other.elements.iter())
                .map(|(a, b)| *a + *b)
                .collect(),
        ))
    }

    /// Group-add reduction of all elements, seeded at the identity.
    pub fn sum(&self) -> G {
        self.elements
            .iter()
            .fold(G::identity(), |acc, g| acc + g)
    }

    /// Append an element, returning a longer vector.
    pub fn plus(&self, element: G) -> Self {
        let mut elements = self.elements.clone();
        elements.push(element);
        Self::new(elements)
    }
}

impl<'a, G> IntoIterator for &'a GeneratorVector<G> {
    type Item = &'a G;
    type IntoIter = std::slice::Iter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
