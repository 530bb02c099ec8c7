//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The gates the algorithm circuits are built from.
///
/// Rotation angles are concrete radians; the circuits built here never carry
/// symbolic parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X (NOT) gate.
    X,
    /// Hadamard gate.
    H,
    /// Rotation around Y axis.
    Ry(f64),
    /// Controlled-X (CNOT) gate. Operands are `[control, target]`.
    CX,
}

impl StandardGate {
    /// Get the name of this gate (OpenQASM naming).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::H => "h",
            StandardGate::Ry(_) => "ry",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::X | StandardGate::H | StandardGate::Ry(_) => 1,
            StandardGate::CX => 2,
        }
    }

    /// Number of leading operands that act as controls.
    pub fn num_controls(&self) -> u32 {
        match self {
            StandardGate::CX => 1,
            _ => 0,
        }
    }

    /// The rotation angle, for parameterized gates.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Ry(t) => Some(*t),
            _ => None,
        }
    }

    /// Label drawn in the target box of a diagram, e.g. `H`, `X`, `RY(π/2)`.
    ///
    /// Controlled gates are labelled by the operation applied to the target.
    pub fn label(&self) -> String {
        match self {
            StandardGate::X | StandardGate::CX => "X".into(),
            StandardGate::H => "H".into(),
            StandardGate::Ry(t) => format!("RY({})", format_angle(*t)),
        }
    }
}

/// Format an angle for display, naming common multiples of π.
pub fn format_angle(value: f64) -> String {
    const NAMED: [(f64, &str); 8] = [
        (PI, "π"),
        (PI / 2.0, "π/2"),
        (PI / 4.0, "π/4"),
        (2.0 * PI, "2π"),
        (-PI, "-π"),
        (-PI / 2.0, "-π/2"),
        (-PI / 4.0, "-π/4"),
        (0.0, "0"),
    ];

    NAMED
        .iter()
        .find(|(v, _)| (value - v).abs() < 1e-10)
        .map_or_else(|| format!("{value:.2}"), |(_, name)| (*name).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::CX.num_controls(), 1);
        assert_eq!(StandardGate::Ry(1.0).num_controls(), 0);
        assert_eq!(StandardGate::Ry(0.5).angle(), Some(0.5));
        assert_eq!(StandardGate::X.angle(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StandardGate::CX.label(), "X");
        assert_eq!(StandardGate::Ry(PI / 2.0).label(), "RY(π/2)");
        assert_eq!(StandardGate::Ry(1.9106).label(), "RY(1.91)");
        assert_eq!(StandardGate::Ry(-0.0).label(), "RY(0)");
        assert_eq!(format_angle(-PI / 4.0), "-π/4");
    }
}
