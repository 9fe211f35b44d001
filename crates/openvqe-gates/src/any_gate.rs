//! A closed sum over every gate kind, for heterogeneous gate sequences.

use serde::Serialize;
use std::fmt;

use crate::error::GateResult;
use crate::gate::{Gate, GateData, QuantumGate};
use crate::parameter::Parameter;
use crate::parametrized::{ParametrizedGate, PowerGate, RotationGate};

/// Any gate kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyGate {
    /// A gate without parameters.
    Plain(Gate),
    /// A generic parametrized gate.
    Parametrized(ParametrizedGate),
    /// A single-axis rotation.
    Rotation(RotationGate),
    /// A base gate raised to a power.
    Power(PowerGate),
}

impl AnyGate {
    /// Borrow the wrapped gate through the capability trait.
    #[inline]
    pub fn as_dyn(&self) -> &dyn QuantumGate {
        match self {
            AnyGate::Plain(g) => g,
            AnyGate::Parametrized(g) => g,
            AnyGate::Rotation(g) => g,
            AnyGate::Power(g) => g,
        }
    }

    /// The generic parametrized view, if this gate carries a parameter.
    pub fn as_parametrized(&self) -> Option<&ParametrizedGate> {
        match self {
            AnyGate::Plain(_) => None,
            AnyGate::Parametrized(g) => Some(g),
            AnyGate::Rotation(g) => Some(g.as_parametrized()),
            AnyGate::Power(g) => Some(g.as_parametrized()),
        }
    }

    /// Mutable parametrized view, for optimizers updating parameters in place.
    ///
    /// Parameter updates through this view go through
    /// [`ParametrizedGate::set_parameter`] and keep the finiteness check.
    pub fn as_parametrized_mut(&mut self) -> Option<&mut ParametrizedGate> {
        match self {
            AnyGate::Plain(_) => None,
            AnyGate::Parametrized(g) => Some(g),
            AnyGate::Rotation(g) => Some(g.as_parametrized_mut()),
            AnyGate::Power(g) => Some(g.as_parametrized_mut()),
        }
    }
}

impl QuantumGate for AnyGate {
    fn data(&self) -> &GateData {
        self.as_dyn().data()
    }

    fn dagger(&self) -> Self {
        match self {
            AnyGate::Plain(g) => AnyGate::Plain(g.dagger()),
            AnyGate::Parametrized(g) => AnyGate::Parametrized(g.dagger()),
            AnyGate::Rotation(g) => AnyGate::Rotation(g.dagger()),
            AnyGate::Power(g) => AnyGate::Power(g.dagger()),
        }
    }

    fn verify(&self) -> GateResult<()> {
        self.as_dyn().verify()
    }

    fn is_parametrized(&self) -> bool {
        self.as_dyn().is_parametrized()
    }

    fn is_differentiable(&self) -> bool {
        self.as_dyn().is_differentiable()
    }

    fn is_frozen(&self) -> GateResult<bool> {
        self.as_dyn().is_frozen()
    }

    fn parameter(&self) -> Option<Parameter> {
        self.as_dyn().parameter()
    }

    fn decompose(&self) -> GateResult<Vec<AnyGate>> {
        self.as_dyn().decompose()
    }
}

impl fmt::Display for AnyGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyGate::Plain(g) => fmt::Display::fmt(g, f),
            AnyGate::Parametrized(g) => fmt::Display::fmt(g, f),
            AnyGate::Rotation(g) => fmt::Display::fmt(g, f),
            AnyGate::Power(g) => fmt::Display::fmt(g, f),
        }
    }
}

impl From<Gate> for AnyGate {
    fn from(gate: Gate) -> Self {
        AnyGate::Plain(gate)
    }
}

impl From<ParametrizedGate> for AnyGate {
    fn from(gate: ParametrizedGate) -> Self {
        AnyGate::Parametrized(gate)
    }
}

impl From<RotationGate> for AnyGate {
    fn from(gate: RotationGate) -> Self {
        AnyGate::Rotation(gate)
    }
}

impl From<PowerGate> for AnyGate {
    fn from(gate: PowerGate) -> Self {
        AnyGate::Power(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateOptions;
    use crate::parametrized::RotationAxis;

    fn sequence() -> Vec<AnyGate> {
        vec![
            Gate::new("H", 0u32).unwrap().into(),
            Gate::with_options("X", 1u32, GateOptions::default().with_control(0u32))
                .unwrap()
                .into(),
            RotationGate::new(RotationAxis::Z, 0.4, 1u32).unwrap().into(),
            PowerGate::with_power("X", 0.5, 2u32).unwrap().into(),
            ParametrizedGate::new("U", 1.0, 0u32).unwrap().into(),
        ]
    }

    #[test]
    fn test_delegates_to_kind() {
        let gates = sequence();
        let names: Vec<&str> = gates.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["H", "X", "Rz", "X", "U"]);

        let parametrized: Vec<bool> = gates.iter().map(|g| g.is_parametrized()).collect();
        assert_eq!(parametrized, vec![false, false, true, true, true]);

        let width = gates.iter().map(|g| g.max_qubit()).max();
        assert_eq!(width, Some(3));
    }

    #[test]
    fn test_frozen_filter() {
        let gates = sequence();
        let frozen: Vec<bool> = gates
            .iter()
            .filter(|g| g.is_differentiable())
            .map(|g| g.is_frozen().unwrap())
            .collect();
        assert_eq!(frozen, vec![false, false, false]);
        assert!(gates[0].is_frozen().is_err());
    }

    #[test]
    fn test_dagger_keeps_kind() {
        for gate in sequence() {
            let adjoint = gate.dagger();
            assert_eq!(
                std::mem::discriminant(&adjoint),
                std::mem::discriminant(&gate)
            );
            assert_eq!(adjoint.dagger(), gate);
        }
    }

    #[test]
    fn test_update_parameter_in_place() {
        let mut gate: AnyGate = RotationGate::new(RotationAxis::X, 0.1, 0u32).unwrap().into();
        gate.as_parametrized_mut().unwrap().set_parameter(0.9).unwrap();
        assert_eq!(gate.parameter(), Some(Parameter::Real(0.9)));

        let mut plain: AnyGate = Gate::new("H", 0u32).unwrap().into();
        assert!(plain.as_parametrized_mut().is_none());
    }

    #[test]
    fn test_display_matches_kind() {
        let gate: AnyGate = PowerGate::with_power("X", 0.5, 2u32).unwrap().into();
        assert_eq!(gate.to_string(), "X(target=[2], parameter=0.5)");
    }
}
