//! Gates carrying a scalar parameter: generic, rotation and power gates.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::error::{GateError, GateResult, InvariantViolation};
use crate::gate::{GateData, GateOptions, QuantumGate, fmt_gate};
use crate::parameter::Parameter;
use crate::qubit::Qubits;

/// A named gate with one parameter and a frozen flag.
///
/// The parameter must be finite. Frozen gates keep their parameter fixed
/// during optimization; the flag has no effect on the gate itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParametrizedGate {
    #[serde(flatten)]
    data: GateData,
    parameter: Parameter,
    frozen: bool,
}

impl ParametrizedGate {
    /// Create an uncontrolled, unfrozen gate with unit phase.
    pub fn new(
        name: impl Into<String>,
        parameter: impl Into<Parameter>,
        target: impl Into<Qubits>,
    ) -> GateResult<Self> {
        Self::with_options(name, parameter, target, GateOptions::default())
    }

    /// Create a gate with explicit control, phase, frozen flag and tolerance.
    pub fn with_options(
        name: impl Into<String>,
        parameter: impl Into<Parameter>,
        target: impl Into<Qubits>,
        options: GateOptions,
    ) -> GateResult<Self> {
        let data = GateData::new(name, target, &options)?;
        let parameter = parameter.into();
        if !parameter.is_finite() {
            return Err(data.violation(InvariantViolation::MissingParameter));
        }
        Ok(Self {
            data,
            parameter,
            frozen: options.frozen,
        })
    }

    /// Replace the parameter.
    ///
    /// Non-finite values are rejected and leave the gate unchanged.
    pub fn set_parameter(&mut self, parameter: impl Into<Parameter>) -> GateResult<()> {
        let parameter = parameter.into();
        if !parameter.is_finite() {
            return Err(self.data.violation(InvariantViolation::MissingParameter));
        }
        self.parameter = parameter;
        Ok(())
    }

    /// Freeze or unfreeze the parameter.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// Get the current parameter.
    #[inline]
    pub fn value(&self) -> Parameter {
        self.parameter
    }

    fn with_parameter(&self, parameter: Parameter) -> Self {
        Self {
            data: self.data.daggered(),
            parameter,
            frozen: self.frozen,
        }
    }
}

impl QuantumGate for ParametrizedGate {
    fn data(&self) -> &GateData {
        &self.data
    }

    /// Conjugates the phase and keeps the parameter.
    fn dagger(&self) -> Self {
        self.with_parameter(self.parameter)
    }

    fn verify(&self) -> GateResult<()> {
        self.data.verify()?;
        if !self.parameter.is_finite() {
            return Err(self.data.violation(InvariantViolation::MissingParameter));
        }
        Ok(())
    }

    fn is_parametrized(&self) -> bool {
        true
    }

    fn is_frozen(&self) -> GateResult<bool> {
        Ok(self.frozen)
    }

    fn parameter(&self) -> Option<Parameter> {
        Some(self.parameter)
    }
}

impl fmt::Display for ParametrizedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_gate(f, self)
    }
}

/// Axis of a single-axis rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationAxis {
    /// Rotation about x (index 0).
    X,
    /// Rotation about y (index 1).
    Y,
    /// Rotation about z (index 2).
    Z,
}

impl RotationAxis {
    /// Name of the rotation gate about this axis.
    pub fn gate_name(self) -> &'static str {
        match self {
            RotationAxis::X => "Rx",
            RotationAxis::Y => "Ry",
            RotationAxis::Z => "Rz",
        }
    }

    /// Numeric selector of this axis.
    pub fn index(self) -> u32 {
        match self {
            RotationAxis::X => 0,
            RotationAxis::Y => 1,
            RotationAxis::Z => 2,
        }
    }
}

impl TryFrom<u32> for RotationAxis {
    type Error = GateError;

    fn try_from(axis: u32) -> GateResult<Self> {
        match axis {
            0 => Ok(RotationAxis::X),
            1 => Ok(RotationAxis::Y),
            2 => Ok(RotationAxis::Z),
            _ => {
                debug!(axis, "rejected rotation axis");
                Err(GateError::Construction {
                    gate: "rotation".to_string(),
                    violation: InvariantViolation::InvalidAxis(axis),
                })
            }
        }
    }
}

impl fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gate_name())
    }
}

/// Rotation by an angle about the x, y or z axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotationGate {
    #[serde(flatten)]
    inner: ParametrizedGate,
    axis: RotationAxis,
}

impl RotationGate {
    /// Create an uncontrolled rotation with unit phase.
    pub fn new(
        axis: RotationAxis,
        angle: impl Into<Parameter>,
        target: impl Into<Qubits>,
    ) -> GateResult<Self> {
        Self::with_options(axis, angle, target, GateOptions::default())
    }

    /// Create a rotation with explicit control, phase, frozen flag and tolerance.
    pub fn with_options(
        axis: RotationAxis,
        angle: impl Into<Parameter>,
        target: impl Into<Qubits>,
        options: GateOptions,
    ) -> GateResult<Self> {
        let inner = ParametrizedGate::with_options(axis.gate_name(), angle, target, options)?;
        Ok(Self { inner, axis })
    }

    /// Create a rotation from a numeric axis selector (0 = x, 1 = y, 2 = z).
    pub fn from_axis_index(
        axis: u32,
        angle: impl Into<Parameter>,
        target: impl Into<Qubits>,
        options: GateOptions,
    ) -> GateResult<Self> {
        Self::with_options(RotationAxis::try_from(axis)?, angle, target, options)
    }

    /// Get the rotation axis.
    pub fn axis(&self) -> RotationAxis {
        self.axis
    }

    /// Get the rotation angle.
    pub fn angle(&self) -> Parameter {
        self.inner.parameter
    }

    /// Replace the rotation angle. Non-finite angles are rejected.
    pub fn set_angle(&mut self, angle: impl Into<Parameter>) -> GateResult<()> {
        self.inner.set_parameter(angle)
    }

    /// Freeze or unfreeze the angle.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.inner.set_frozen(frozen);
    }

    /// View this rotation as a generic parametrized gate.
    pub fn as_parametrized(&self) -> &ParametrizedGate {
        &self.inner
    }

    pub(crate) fn as_parametrized_mut(&mut self) -> &mut ParametrizedGate {
        &mut self.inner
    }
}

impl QuantumGate for RotationGate {
    fn data(&self) -> &GateData {
        &self.inner.data
    }

    /// Conjugates the phase and maps the angle to `-conj(angle)`.
    fn dagger(&self) -> Self {
        Self {
            inner: self.inner.with_parameter(-self.inner.parameter.conj()),
            axis: self.axis,
        }
    }

    fn verify(&self) -> GateResult<()> {
        self.inner.verify()
    }

    fn is_parametrized(&self) -> bool {
        true
    }

    fn is_frozen(&self) -> GateResult<bool> {
        self.inner.is_frozen()
    }

    fn parameter(&self) -> Option<Parameter> {
        Some(self.inner.parameter)
    }
}

impl fmt::Display for RotationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_gate(f, self)
    }
}

/// A named base gate raised to a power.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerGate {
    #[serde(flatten)]
    inner: ParametrizedGate,
}

impl PowerGate {
    /// Default exponent.
    pub const DEFAULT_POWER: f64 = 1.0;

    /// Create the base gate itself, i.e. with power 1.
    pub fn new(name: impl Into<String>, target: impl Into<Qubits>) -> GateResult<Self> {
        Self::with_power(name, Self::DEFAULT_POWER, target)
    }

    /// Create an uncontrolled power gate with unit phase.
    pub fn with_power(
        name: impl Into<String>,
        power: impl Into<Parameter>,
        target: impl Into<Qubits>,
    ) -> GateResult<Self> {
        Self::with_options(name, power, target, GateOptions::default())
    }

    /// Create a power gate with explicit control, phase, frozen flag and tolerance.
    pub fn with_options(
        name: impl Into<String>,
        power: impl Into<Parameter>,
        target: impl Into<Qubits>,
        options: GateOptions,
    ) -> GateResult<Self> {
        Ok(Self {
            inner: ParametrizedGate::with_options(name, power, target, options)?,
        })
    }

    /// Get the exponent.
    pub fn power(&self) -> Parameter {
        self.inner.parameter
    }

    /// Replace the exponent. Non-finite exponents are rejected.
    pub fn set_power(&mut self, power: impl Into<Parameter>) -> GateResult<()> {
        self.inner.set_parameter(power)
    }

    /// Freeze or unfreeze the exponent.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.inner.set_frozen(frozen);
    }

    /// View this power gate as a generic parametrized gate.
    pub fn as_parametrized(&self) -> &ParametrizedGate {
        &self.inner
    }

    pub(crate) fn as_parametrized_mut(&mut self) -> &mut ParametrizedGate {
        &mut self.inner
    }
}

impl QuantumGate for PowerGate {
    fn data(&self) -> &GateData {
        &self.inner.data
    }

    /// Conjugates the phase and maps the exponent to `-conj(power)`.
    fn dagger(&self) -> Self {
        Self {
            inner: self.inner.with_parameter(-self.inner.parameter.conj()),
        }
    }

    fn verify(&self) -> GateResult<()> {
        self.inner.verify()
    }

    fn is_parametrized(&self) -> bool {
        true
    }

    fn is_frozen(&self) -> GateResult<bool> {
        self.inner.is_frozen()
    }

    fn parameter(&self) -> Option<Parameter> {
        Some(self.inner.parameter)
    }
}

impl fmt::Display for PowerGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_gate(f, self)
    }
}
