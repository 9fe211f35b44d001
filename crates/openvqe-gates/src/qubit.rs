//! Qubit indices and qubit lists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a qubit in a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// An ordered list of qubits, as given to a gate constructor.
///
/// Built explicitly from one qubit ([`Qubits::single`]) or from a sequence
/// ([`Qubits::from_sequence`]); the `From` conversions cover the same two
/// shapes. Order is preserved and nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Qubits(Vec<QubitId>);

impl Qubits {
    /// An empty list (used for "no control qubits").
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// A list holding exactly one qubit.
    pub fn single(qubit: u32) -> Self {
        Self(vec![QubitId(qubit)])
    }

    /// A list holding the given qubit indices, in order.
    pub fn from_sequence(qubits: impl IntoIterator<Item = u32>) -> Self {
        Self(qubits.into_iter().map(QubitId).collect())
    }

    /// A list holding the given qubit ids, in order.
    pub fn from_ids(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self(qubits.into_iter().collect())
    }

    /// Get the number of qubits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the qubits as a slice.
    pub fn as_slice(&self) -> &[QubitId] {
        &self.0
    }

    /// Iterate over the qubits.
    pub fn iter(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.0.iter().copied()
    }

    /// Consume the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<QubitId> {
        self.0
    }
}

impl fmt::Display for Qubits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_indices(f, &self.0)
    }
}

/// Write qubit indices as `[0, 1, 2]`.
pub(crate) fn fmt_indices(f: &mut fmt::Formatter<'_>, qubits: &[QubitId]) -> fmt::Result {
    write!(f, "[")?;
    for (i, q) in qubits.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", q.0)?;
    }
    write!(f, "]")
}

impl From<u32> for Qubits {
    fn from(qubit: u32) -> Self {
        Self::single(qubit)
    }
}

impl From<QubitId> for Qubits {
    fn from(qubit: QubitId) -> Self {
        Self(vec![qubit])
    }
}

impl From<Vec<u32>> for Qubits {
    fn from(qubits: Vec<u32>) -> Self {
        Self::from_sequence(qubits)
    }
}

impl From<Vec<QubitId>> for Qubits {
    fn from(qubits: Vec<QubitId>) -> Self {
        Self(qubits)
    }
}

impl From<&[u32]> for Qubits {
    fn from(qubits: &[u32]) -> Self {
        Self::from_sequence(qubits.iter().copied())
    }
}

impl<const N: usize> From<[u32; N]> for Qubits {
    fn from(qubits: [u32; N]) -> Self {
        Self::from_sequence(qubits)
    }
}

impl<const N: usize> From<[QubitId; N]> for Qubits {
    fn from(qubits: [QubitId; N]) -> Self {
        Self::from_ids(qubits)
    }
}

impl FromIterator<QubitId> for Qubits {
    fn from_iter<I: IntoIterator<Item = QubitId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

impl<'a> IntoIterator for &'a Qubits {
    type Item = &'a QubitId;
    type IntoIter = std::slice::Iter<'a, QubitId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
