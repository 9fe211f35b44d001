//! Error types for the gates crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// A gate invariant that construction found violated.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InvariantViolation {
    /// The target list is empty.
    #[error("received no target qubits")]
    EmptyTarget,

    /// A qubit appears in both the control and the target list.
    #[error("control and target are the same qubit {qubit}")]
    ControlTargetOverlap {
        /// The shared qubit.
        qubit: QubitId,
    },

    /// The global phase is off the complex unit circle.
    #[error("phase must lie on the complex unit circle, got modulus {modulus}")]
    NonUnitaryPhase {
        /// Modulus of the rejected phase.
        modulus: f64,
    },

    /// A parametrized gate was given no usable parameter.
    #[error("parametrized gates require a finite parameter")]
    MissingParameter,

    /// Rotation axis selector outside {0, 1, 2}.
    #[error("rotation axis must be 0 (x), 1 (y) or 2 (z), got {0}")]
    InvalidAxis(u32),
}

/// Errors that can occur when building or querying gates.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GateError {
    /// A gate invariant failed at construction.
    #[error("Cannot construct gate '{gate}': {violation}")]
    Construction {
        /// Name of the gate being built.
        gate: String,
        /// Which invariant failed.
        violation: InvariantViolation,
    },

    /// The operation is meaningless for this kind of gate.
    #[error("Gate '{gate}' does not support {operation}: {reason}")]
    UnsupportedOperation {
        /// Name of the gate.
        gate: String,
        /// The rejected operation.
        operation: &'static str,
        /// Why the gate cannot support it.
        reason: &'static str,
    },

    /// The gate kind provides no implementation of the operation.
    #[error("Gate '{gate}' does not implement {operation}")]
    NotImplemented {
        /// Name of the gate.
        gate: String,
        /// The missing operation.
        operation: &'static str,
    },
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;
