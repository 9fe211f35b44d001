//! Tests for the public gate surface.

use num_complex::Complex64;
use openvqe_gates::{
    AnyGate, Gate, GateError, GateOptions, InvariantViolation, Parameter, ParametrizedGate,
    PowerGate, QuantumGate, QubitId, Qubits, RotationAxis, RotationGate,
};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn controlled_rotation_scenario() {
    let options = GateOptions::default().with_control(Qubits::from_sequence([0, 1]));
    let gate = RotationGate::from_axis_index(0, 0.5, Qubits::single(2), options).unwrap();

    assert_eq!(gate.name(), "Rx");
    assert_eq!(gate.angle(), Parameter::Real(0.5));
    assert!(gate.is_controlled());
    assert!(!gate.is_single_qubit_gate());
    assert_eq!(gate.max_qubit(), 3);
    assert!(gate.is_differentiable());
    assert_eq!(gate.is_frozen(), Ok(false));
}

#[test]
fn rejected_constructions() {
    let empty = Gate::new("X", Vec::<u32>::new()).unwrap_err();
    assert!(matches!(
        empty,
        GateError::Construction {
            violation: InvariantViolation::EmptyTarget,
            ..
        }
    ));

    let overlap = Gate::with_options("X", [0u32], GateOptions::default().with_control([0u32]))
        .unwrap_err();
    assert!(matches!(
        overlap,
        GateError::Construction {
            violation: InvariantViolation::ControlTargetOverlap { qubit: QubitId(0) },
            ..
        }
    ));

    let phased =
        Gate::with_options("X", 0u32, GateOptions::default().with_phase(Complex64::new(2.0, 0.0)))
            .unwrap_err();
    match phased {
        GateError::Construction {
            violation: InvariantViolation::NonUnitaryPhase { modulus },
            ..
        } => assert!((modulus - 2.0).abs() < 1e-12),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parametrized_kinds_validate_their_record() {
    let options = GateOptions::default().with_control(3u32);
    assert!(RotationGate::with_options(RotationAxis::Y, 0.1, 3u32, options.clone()).is_err());
    assert!(PowerGate::with_options("X", 0.5, 3u32, options.clone()).is_err());
    assert!(ParametrizedGate::with_options("U", 0.5, 3u32, options).is_err());
}

#[test]
fn rotation_axis_selector() {
    let names: Vec<&str> = (0u32..3)
        .map(|axis| RotationAxis::try_from(axis).map(RotationAxis::gate_name))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["Rx", "Ry", "Rz"]);

    let err = RotationGate::from_axis_index(7, 0.1, 0u32, GateOptions::default()).unwrap_err();
    assert!(err.to_string().contains("got 7"));
}

#[test]
fn unit_phase_off_the_real_axis_is_accepted() {
    let phase = Complex64::from_polar(1.0, std::f64::consts::FRAC_PI_3);
    let gate = Gate::with_options("Z", 0u32, GateOptions::default().with_phase(phase)).unwrap();
    assert!(gate.is_phased());
    assert!(gate.verify().is_ok());
}

// ---------------------------------------------------------------------------
// Dagger
// ---------------------------------------------------------------------------

#[test]
fn dagger_of_each_kind() {
    let phase = Complex64::new(0.0, 1.0);
    let options = GateOptions::default().with_control(0u32).with_phase(phase);

    let plain = Gate::with_options("S", 1u32, options.clone()).unwrap().dagger();
    assert_eq!(plain.phase(), phase.conj());

    let generic = ParametrizedGate::with_options("U", 0.2, 1u32, options.clone())
        .unwrap()
        .dagger();
    assert_eq!(generic.value(), Parameter::Real(0.2));

    let rotation = RotationGate::with_options(RotationAxis::Z, 0.2, 1u32, options.clone())
        .unwrap()
        .dagger();
    assert_eq!(rotation.angle(), Parameter::Real(-0.2));
    assert_eq!(rotation.name(), "Rz");

    let power = PowerGate::with_options("X", 0.5, 1u32, options).unwrap().dagger();
    assert_eq!(power.power(), Parameter::Real(-0.5));
    assert_eq!(power.control(), &[QubitId(0)]);
}

#[test]
fn dagger_of_complex_parameters_is_hermitian() {
    let exponent = Complex64::new(0.5, -0.25);
    let power = PowerGate::with_power("X", exponent, 0u32).unwrap();
    assert_eq!(power.dagger().power(), Parameter::Complex(-exponent.conj()));

    let gate: AnyGate = RotationGate::new(RotationAxis::Y, exponent, 0u32).unwrap().into();
    assert_eq!(
        gate.dagger().parameter(),
        Some(Parameter::Complex(Complex64::new(-0.5, -0.25)))
    );
}

#[test]
fn dagger_is_an_independent_value() {
    let mut gate = RotationGate::new(RotationAxis::X, 0.3, 0u32).unwrap();
    let adjoint = gate.dagger();
    gate.set_angle(1.0).unwrap();
    assert_eq!(adjoint.angle(), Parameter::Real(-0.3));
}

// ---------------------------------------------------------------------------
// Capability queries
// ---------------------------------------------------------------------------

#[test]
fn frozen_query_by_kind() {
    let plain = Gate::new("H", 0u32).unwrap();
    match plain.is_frozen() {
        Err(GateError::UnsupportedOperation { gate, reason, .. }) => {
            assert_eq!(gate, "H");
            assert!(reason.contains("is_parametrized"));
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let mut power = PowerGate::with_options(
        "X",
        0.5,
        0u32,
        GateOptions::default().frozen(true),
    )
    .unwrap();
    assert_eq!(power.is_frozen(), Ok(true));
    power.set_frozen(false);
    assert_eq!(power.is_frozen(), Ok(false));
}

#[test]
fn decompose_is_not_implemented_by_default() {
    let gates: Vec<AnyGate> = vec![
        Gate::new("H", 0u32).unwrap().into(),
        RotationGate::new(RotationAxis::Y, 0.1, 0u32).unwrap().into(),
    ];
    for gate in &gates {
        assert!(matches!(
            gate.decompose(),
            Err(GateError::NotImplemented { operation: "decompose", .. })
        ));
    }
}

#[derive(Debug)]
struct Cnot {
    inner: Gate,
}

impl QuantumGate for Cnot {
    fn data(&self) -> &openvqe_gates::GateData {
        self.inner.data()
    }

    fn dagger(&self) -> Self {
        Self {
            inner: self.inner.dagger(),
        }
    }

    fn decompose(&self) -> Result<Vec<AnyGate>, GateError> {
        Ok(vec![self.inner.clone().into()])
    }
}

#[test]
fn downstream_kind_can_override_decompose() {
    let cnot = Cnot {
        inner: Gate::with_options("X", 1u32, GateOptions::default().with_control(0u32)).unwrap(),
    };
    let parts = cnot.decompose().unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name(), "X");
    assert!(cnot.is_controlled());
}

// ---------------------------------------------------------------------------
// Display and serialization
// ---------------------------------------------------------------------------

#[test]
fn display_forms() {
    let swap = Gate::new("SWAP", [0u32, 1]).unwrap();
    assert_eq!(swap.to_string(), "SWAP(target=[0, 1], control=[])");

    let rotation = RotationGate::new(RotationAxis::Y, 0.25, 4u32).unwrap();
    assert_eq!(rotation.to_string(), "Ry(target=[4], parameter=0.25)");
}

#[test]
fn serialize_tags_kind() {
    let gate: AnyGate = RotationGate::with_options(
        RotationAxis::X,
        0.5,
        2u32,
        GateOptions::default().with_control([0u32, 1]),
    )
    .unwrap()
    .into();
    let json = serde_json::to_value(&gate).unwrap();
    assert_eq!(json["kind"], "rotation");
    assert_eq!(json["name"], "Rx");
    assert_eq!(json["target"], serde_json::json!([2]));
    assert_eq!(json["control"], serde_json::json!([0, 1]));
    assert_eq!(json["axis"], "x");
    assert_eq!(json["parameter"], serde_json::json!({ "Real": 0.5 }));
    assert_eq!(json["frozen"], false);

    let plain = serde_json::to_value(AnyGate::from(Gate::new("H", 0u32).unwrap())).unwrap();
    assert_eq!(plain["kind"], "plain");
    assert!(plain.get("control").is_none());
}
