//! Unravel circuit intermediate representation
//!
//! This crate provides the circuit data structures shared by the algorithm
//! builders, the simulator and the presentation layers.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`]
//! - **Gates**: [`StandardGate`] for the built-in gate set
//! - **Instructions**: [`Instruction`] combining a gate, measurement or
//!   barrier with its operands
//! - **Circuit**: [`Circuit`] validated builder with composition, depth and
//!   layering queries, plus a Unicode text drawer
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use unravel_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3);
//! println!("{}", circuit.draw());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X` | 1 | Pauli-X (NOT) gate |
//! | `Ry` | 1 | Rotation around the Y axis |
//! | `CX` | 2 | Controlled-NOT (CNOT) |

pub mod circuit;
pub mod draw;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{StandardGate, format_angle};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
