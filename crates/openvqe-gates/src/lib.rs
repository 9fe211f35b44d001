//! Validated quantum gate descriptors.
//!
//! This crate provides the gate values a variational circuit is assembled
//! from. Every gate carries a name, target and control qubits and a global
//! phase; parametrized gates add a scalar parameter and a frozen flag for
//! optimizers. Gates are checked on construction and stay valid afterwards.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] and [`Qubits`] for addressing qubits
//! - **Gates**: [`Gate`] for plain named gates, [`ParametrizedGate`],
//!   [`RotationGate`] and [`PowerGate`] for gates with a parameter
//! - **Capabilities**: the [`QuantumGate`] trait shared by every gate kind
//! - **Sequences**: [`AnyGate`] for storing different gate kinds together
//! - **Options**: [`GateOptions`] and [`Tolerance`] for optional arguments
//!
//! # Example: A Controlled Rotation
//!
//! ```rust
//! use openvqe_gates::{GateOptions, QuantumGate, RotationGate};
//!
//! let options = GateOptions::default().with_control([0u32, 1]);
//! let gate = RotationGate::from_axis_index(0, 0.5, 2u32, options).unwrap();
//!
//! assert_eq!(gate.name(), "Rx");
//! assert!(gate.is_controlled());
//! assert!(!gate.is_single_qubit_gate());
//! assert_eq!(gate.max_qubit(), 3);
//! assert!(gate.is_differentiable());
//! ```
//!
//! # Example: Rejected Construction
//!
//! ```rust
//! use openvqe_gates::{Gate, GateError, GateOptions, InvariantViolation};
//!
//! let err = Gate::with_options("X", 0u32, GateOptions::default().with_control(0u32))
//!     .unwrap_err();
//! assert!(matches!(
//!     err,
//!     GateError::Construction {
//!         violation: InvariantViolation::ControlTargetOverlap { .. },
//!         ..
//!     }
//! ));
//! ```

pub mod any_gate;
pub mod error;
pub mod gate;
pub mod parameter;
pub mod parametrized;
pub mod qubit;
pub mod tolerance;

pub use any_gate::AnyGate;
pub use error::{GateError, GateResult, InvariantViolation};
pub use gate::{Gate, GateData, GateOptions, QuantumGate};
pub use parameter::Parameter;
pub use parametrized::{ParametrizedGate, PowerGate, RotationAxis, RotationGate};
pub use qubit::{QubitId, Qubits};
pub use tolerance::Tolerance;
