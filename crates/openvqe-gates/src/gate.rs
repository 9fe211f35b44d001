//! The validated gate record, the gate capability trait and plain gates.

use num_complex::Complex64;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::any_gate::AnyGate;
use crate::error::{GateError, GateResult, InvariantViolation};
use crate::parameter::Parameter;
use crate::qubit::{QubitId, Qubits, fmt_indices};
use crate::tolerance::Tolerance;

/// Optional construction arguments shared by every gate kind.
#[derive(Debug, Clone, PartialEq)]
pub struct GateOptions {
    /// Control qubits. Empty means the gate is uncontrolled.
    pub control: Qubits,
    /// Global phase; must have unit modulus.
    pub phase: Complex64,
    /// Initial frozen flag. Plain gates have nothing to freeze and ignore it.
    pub frozen: bool,
    /// Tolerance for the unit-modulus phase check.
    pub tolerance: Tolerance,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            control: Qubits::none(),
            phase: Complex64::new(1.0, 0.0),
            frozen: false,
            tolerance: Tolerance::default(),
        }
    }
}

impl GateOptions {
    /// Set the control qubits.
    #[must_use]
    pub fn with_control(mut self, control: impl Into<Qubits>) -> Self {
        self.control = control.into();
        self
    }

    /// Set the global phase.
    #[must_use]
    pub fn with_phase(mut self, phase: impl Into<Complex64>) -> Self {
        self.phase = phase.into();
        self
    }

    /// Mark the gate frozen.
    #[must_use]
    pub fn frozen(mut self, frozen: bool) -> Self {
        self.frozen = frozen;
        self
    }

    /// Override the phase tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// The record every gate kind carries: name, qubits and global phase.
///
/// A `GateData` can only be obtained through [`GateData::new`], which checks
/// that the target is non-empty, that control and target are disjoint and
/// that the phase lies on the unit circle. None of these fields can be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateData {
    name: String,
    target: Vec<QubitId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    control: Vec<QubitId>,
    phase: Complex64,
    #[serde(skip)]
    tolerance: Tolerance,
}

impl GateData {
    /// Build and validate a gate record.
    pub fn new(
        name: impl Into<String>,
        target: impl Into<Qubits>,
        options: &GateOptions,
    ) -> GateResult<Self> {
        let data = Self {
            name: name.into(),
            target: target.into().into_vec(),
            control: options.control.clone().into_vec(),
            phase: options.phase,
            tolerance: options.tolerance,
        };
        data.verify()?;
        Ok(data)
    }

    /// Get the gate name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the target qubits.
    pub fn target(&self) -> &[QubitId] {
        &self.target
    }

    /// Get the control qubits (empty when uncontrolled).
    pub fn control(&self) -> &[QubitId] {
        &self.control
    }

    /// Get the global phase.
    pub fn phase(&self) -> Complex64 {
        self.phase
    }

    /// Get the tolerance used for the phase check.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Check the record invariants.
    ///
    /// Checked in order: non-empty target, control/target disjointness, unit
    /// phase modulus. The first violation found is reported.
    pub fn verify(&self) -> GateResult<()> {
        if self.target.is_empty() {
            return Err(self.violation(InvariantViolation::EmptyTarget));
        }
        if let Some(&qubit) = self.target.iter().find(|q| self.control.contains(*q)) {
            return Err(self.violation(InvariantViolation::ControlTargetOverlap { qubit }));
        }
        let modulus = self.phase.norm();
        if !self.tolerance.is_close(modulus, 1.0) {
            return Err(self.violation(InvariantViolation::NonUnitaryPhase { modulus }));
        }
        Ok(())
    }

    /// One past the highest qubit index used by target or control.
    pub fn max_qubit(&self) -> usize {
        self.target
            .iter()
            .chain(&self.control)
            .map(|q| q.0 as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// A copy of this record with the phase conjugated.
    pub fn daggered(&self) -> Self {
        Self {
            phase: self.phase.conj(),
            ..self.clone()
        }
    }

    pub(crate) fn violation(&self, violation: InvariantViolation) -> GateError {
        debug!(gate = %self.name, %violation, "rejected gate construction");
        GateError::Construction {
            gate: self.name.clone(),
            violation,
        }
    }
}

/// Capabilities shared by every gate kind.
///
/// Implementors provide the validated record and their adjoint; everything
/// else has a default derived from the record. Parametrized kinds override
/// [`is_parametrized`](QuantumGate::is_parametrized),
/// [`is_frozen`](QuantumGate::is_frozen) and
/// [`parameter`](QuantumGate::parameter). Kinds with a known decomposition
/// override [`decompose`](QuantumGate::decompose).
pub trait QuantumGate: fmt::Debug {
    /// The validated record of this gate.
    fn data(&self) -> &GateData;

    /// The hermitian conjugate of this gate as a new, independent value.
    fn dagger(&self) -> Self
    where
        Self: Sized;

    /// Get the gate name.
    fn name(&self) -> &str {
        self.data().name()
    }

    /// Get the target qubits.
    fn target(&self) -> &[QubitId] {
        self.data().target()
    }

    /// Get the control qubits (empty when uncontrolled).
    fn control(&self) -> &[QubitId] {
        self.data().control()
    }

    /// Get the global phase.
    fn phase(&self) -> Complex64 {
        self.data().phase()
    }

    /// Re-check the gate invariants.
    fn verify(&self) -> GateResult<()> {
        self.data().verify()
    }

    /// Check if the gate has control qubits.
    fn is_controlled(&self) -> bool {
        !self.control().is_empty()
    }

    /// Check if the gate carries a parameter.
    fn is_parametrized(&self) -> bool {
        false
    }

    /// Check if the gate acts on exactly one qubit without controls.
    fn is_single_qubit_gate(&self) -> bool {
        !self.is_controlled() && self.target().len() == 1
    }

    /// Check if the gate can be differentiated with respect to a parameter.
    fn is_differentiable(&self) -> bool {
        self.is_parametrized()
    }

    /// Whether the gate parameter is excluded from optimization.
    ///
    /// Fails on gates without a parameter.
    fn is_frozen(&self) -> GateResult<bool> {
        Err(GateError::UnsupportedOperation {
            gate: self.name().to_string(),
            operation: "is_frozen",
            reason: "unparametrized gates cannot be frozen because there is nothing to freeze; \
                     check is_parametrized first",
        })
    }

    /// The gate parameter, if any.
    fn parameter(&self) -> Option<Parameter> {
        None
    }

    /// Rewrite the gate into a sequence of gates every backend supports.
    fn decompose(&self) -> GateResult<Vec<AnyGate>> {
        Err(GateError::NotImplemented {
            gate: self.name().to_string(),
            operation: "decompose",
        })
    }

    /// One past the highest qubit index the gate touches.
    fn max_qubit(&self) -> usize {
        self.data().max_qubit()
    }

    /// Check if the phase differs from exactly `1 + 0i`.
    fn is_phased(&self) -> bool {
        self.phase() != Complex64::new(1.0, 0.0)
    }
}

/// Write a gate as `Name(target=[..], control=[..], parameter=..)`.
pub(crate) fn fmt_gate(f: &mut fmt::Formatter<'_>, gate: &dyn QuantumGate) -> fmt::Result {
    write!(f, "{}(target=", gate.name())?;
    fmt_indices(f, gate.target())?;
    if !gate.is_single_qubit_gate() {
        write!(f, ", control=")?;
        fmt_indices(f, gate.control())?;
    }
    if let Some(parameter) = gate.parameter() {
        write!(f, ", parameter={parameter}")?;
    }
    write!(f, ")")
}

/// A named gate without parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gate {
    #[serde(flatten)]
    data: GateData,
}

impl Gate {
    /// Create an uncontrolled gate with unit phase.
    pub fn new(name: impl Into<String>, target: impl Into<Qubits>) -> GateResult<Self> {
        Self::with_options(name, target, GateOptions::default())
    }

    /// Create a gate with explicit control, phase and tolerance.
    pub fn with_options(
        name: impl Into<String>,
        target: impl Into<Qubits>,
        options: GateOptions,
    ) -> GateResult<Self> {
        Ok(Self {
            data: GateData::new(name, target, &options)?,
        })
    }
}

impl QuantumGate for Gate {
    fn data(&self) -> &GateData {
        &self.data
    }

    fn dagger(&self) -> Self {
        Self {
            data: self.data.daggered(),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_gate(f, self)
    }
}
