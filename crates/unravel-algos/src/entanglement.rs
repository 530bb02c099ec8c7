//! Multi-qubit entangled states: GHZ and W.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use unravel_ir::{Circuit, QubitId};

use crate::error::{AlgoError, AlgoResult};

/// Supported register sizes.
pub const QUBIT_RANGE: RangeInclusive<u32> = 2..=10;

fn check_size(state: &'static str, n: u32) -> AlgoResult<()> {
    if n < *QUBIT_RANGE.start() {
        return Err(AlgoError::QubitCountOutOfRange {
            algorithm: state,
            got: n,
            min: *QUBIT_RANGE.start(),
            max: *QUBIT_RANGE.end(),
        });
    }
    Ok(())
}

/// `(|0…0⟩ + |1…1⟩)/√2`: H on qubit 0 fanned out by CX to every other qubit,
/// then a barrier and a full measurement.
pub fn ghz_state(n: u32) -> AlgoResult<Circuit> {
    check_size("GHZ state", n)?;

    let mut circuit = Circuit::with_size("ghz_state", n, n);
    circuit.h(QubitId(0))?;
    for k in 1..n {
        circuit.cx(QubitId(0), QubitId(k))?;
    }
    circuit.barrier_all()?;
    circuit.measure_all()?;
    Ok(circuit)
}

/// RY angles of the W-state cascade; entry `k` rotates qubit `k`.
///
/// Qubit 0 gets `2·acos(√(1/n))`, qubit `k ≥ 1` gets `-2·acos(√(1/(n-k)))`.
pub fn w_angles(n: u32) -> Vec<f64> {
    let n = f64::from(n);
    let first = 2.0 * (1.0 / n).sqrt().acos();
    std::iter::once(first)
        .chain((1..n as u32).map(|k| -2.0 * (1.0 / (n - f64::from(k))).sqrt().acos()))
        .collect()
}

/// The W-state cascade: RY on qubit 0, then CX(k-1, k) and RY on qubit `k`
/// for each following qubit, then a barrier and a full measurement.
pub fn w_state(n: u32) -> AlgoResult<Circuit> {
    check_size("W state", n)?;

    let angles = w_angles(n);
    let mut circuit = Circuit::with_size("w_state", n, n);
    circuit.ry(angles[0], QubitId(0))?;
    for k in 1..n {
        circuit.cx(QubitId(k - 1), QubitId(k))?;
        circuit.ry(angles[k as usize], QubitId(k))?;
    }
    circuit.barrier_all()?;
    circuit.measure_all()?;
    Ok(circuit)
}

/// Entangled state selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Greenberger-Horne-Zeilinger state.
    #[default]
    Ghz,
    /// W state.
    W,
}

impl Scheme {
    /// Every scheme, in selector order.
    pub const ALL: [Scheme; 2] = [Scheme::Ghz, Scheme::W];

    /// Selector value.
    pub fn slug(self) -> &'static str {
        match self {
            Scheme::Ghz => "ghz",
            Scheme::W => "w",
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            Scheme::Ghz => "GHZ State",
            Scheme::W => "W State",
        }
    }

    /// Build the state preparation circuit.
    pub fn circuit(self, n: u32) -> AlgoResult<Circuit> {
        match self {
            Scheme::Ghz => ghz_state(n),
            Scheme::W => w_state(n),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scheme {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| AlgoError::UnknownSelection {
                what: "entanglement scheme",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unravel_ir::StandardGate;

    #[test]
    fn test_ghz_structure() {
        let circuit = ghz_state(4).unwrap();
        let gates: Vec<_> = circuit.gates().collect();
        assert_eq!(gates.len(), 4);
        assert_eq!(gates[0].as_gate(), Some(&StandardGate::H));
        assert_eq!(gates[0].qubits, vec![QubitId(0)]);
        for (k, gate) in gates[1..].iter().enumerate() {
            assert_eq!(gate.as_gate(), Some(&StandardGate::CX));
            assert_eq!(gate.qubits, vec![QubitId(0), QubitId(k as u32 + 1)]);
        }
        assert_eq!(circuit.instructions().iter().filter(|i| i.is_measure()).count(), 4);
    }

    #[test]
    fn test_w_angles() {
        let angles = w_angles(3);
        assert!((angles[0] - 2.0 * (1.0f64 / 3.0).sqrt().acos()).abs() < 1e-12);
        assert!((angles[1] + 2.0 * (0.5f64).sqrt().acos()).abs() < 1e-12);
        assert!(angles[2].abs() < 1e-12);
    }

    #[test]
    fn test_w_structure() {
        let circuit = w_state(3).unwrap();
        let names: Vec<_> = circuit.gates().map(|g| g.name()).collect();
        assert_eq!(names, ["ry", "cx", "ry", "cx", "ry"]);
    }

    #[test]
    fn test_rejects_single_qubit() {
        assert!(matches!(
            ghz_state(1),
            Err(AlgoError::QubitCountOutOfRange { got: 1, min: 2, .. })
        ));
        assert!(w_state(0).is_err());
    }

    #[test]
    fn test_scheme_selector() {
        assert_eq!("W".parse::<Scheme>().unwrap(), Scheme::W);
        assert!("cluster".parse::<Scheme>().is_err());
    }
}
