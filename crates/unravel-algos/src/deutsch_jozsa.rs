//! Deutsch-Jozsa: decide with one query whether an oracle is constant or balanced.
//!
//! Oracles act on `n` input qubits plus an ancilla at index `n`. A constant
//! oracle always yields the all-zeros readout; a balanced one never does.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use unravel_ir::{Circuit, QubitId};

use crate::bitstring::BitString;
use crate::error::{AlgoError, AlgoResult};
use crate::kickback::query_circuit;

/// Supported input-register sizes.
pub const QUBIT_RANGE: RangeInclusive<u32> = 1..=10;

/// Oracle for `f(x) = output` on `n` input bits.
///
/// `f = 0` is the empty circuit; `f = 1` is a single X on the ancilla, which
/// flips the output for every input.
pub fn constant_oracle(n: u32, output: u8) -> AlgoResult<Circuit> {
    let mut oracle = Circuit::with_size(format!("constant_{output}"), n + 1, 0);
    match output {
        0 => {}
        1 => {
            oracle.x(QubitId(n))?;
        }
        other => return Err(AlgoError::InvalidOracleOutput(other)),
    }
    Ok(oracle)
}

/// Oracle for a balanced function.
///
/// X on input `i` wherever `x_gates[i]` is set, then CX from input `i` to
/// the ancilla wherever `cx_gates[i]` is set, then the X layer again to
/// restore the inputs.
pub fn balanced_oracle(n: u32, x_gates: &BitString, cx_gates: &BitString) -> AlgoResult<Circuit> {
    x_gates.require_len("X gate", n as usize)?;
    cx_gates.require_len("CX gate", n as usize)?;

    let mut oracle = Circuit::with_size("balanced", n + 1, 0);
    for i in x_gates.ones() {
        oracle.x(QubitId(i as u32))?;
    }
    for i in cx_gates.ones() {
        oracle.cx(QubitId(i as u32), QubitId(n))?;
    }
    for i in x_gates.ones() {
        oracle.x(QubitId(i as u32))?;
    }
    Ok(oracle)
}

/// Gate pattern of a balanced oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalancedPattern {
    /// Inputs wrapped in X gates.
    pub x_gates: BitString,
    /// Inputs controlling a CX onto the ancilla.
    pub cx_gates: BitString,
}

impl BalancedPattern {
    /// Create a pattern, requiring a non-zero CX string.
    pub fn new(x_gates: BitString, cx_gates: BitString) -> AlgoResult<Self> {
        if cx_gates.is_zero() {
            return Err(AlgoError::EmptyCxPattern);
        }
        Ok(Self { x_gates, cx_gates })
    }

    /// `"1010..."` for both strings.
    pub fn alternating(n: u32) -> Self {
        Self {
            x_gates: BitString::alternating(n as usize),
            cx_gates: BitString::alternating(n as usize),
        }
    }

    /// Uniformly random X string and uniformly random non-zero CX string.
    pub fn random<R: Rng>(n: u32, rng: &mut R) -> Self {
        let x_gates = BitString::random(n as usize, rng);
        let cx_gates = loop {
            let candidate = BitString::random(n as usize, rng);
            if !candidate.is_zero() || n == 0 {
                break candidate;
            }
        };
        Self { x_gates, cx_gates }
    }

    /// Build the oracle for this pattern.
    pub fn oracle(&self, n: u32) -> AlgoResult<Circuit> {
        balanced_oracle(n, &self.x_gates, &self.cx_gates)
    }
}

/// The oracle functions offered on the Deutsch-Jozsa page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DjFunction {
    /// `f(x) = 0`.
    #[default]
    #[serde(rename = "constant0")]
    ConstantZero,
    /// `f(x) = 1`.
    #[serde(rename = "constant1")]
    ConstantOne,
    /// Half the inputs map to 1.
    #[serde(rename = "balanced")]
    Balanced,
}

impl DjFunction {
    /// Every function, in selector order.
    pub const ALL: [DjFunction; 3] = [
        DjFunction::ConstantZero,
        DjFunction::ConstantOne,
        DjFunction::Balanced,
    ];

    /// Selector value.
    pub fn slug(self) -> &'static str {
        match self {
            DjFunction::ConstantZero => "constant0",
            DjFunction::ConstantOne => "constant1",
            DjFunction::Balanced => "balanced",
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            DjFunction::ConstantZero => "Constant Function (f(x) = 0)",
            DjFunction::ConstantOne => "Constant Function (f(x) = 1)",
            DjFunction::Balanced => "Balanced Function",
        }
    }

    /// Whether the function is constant.
    pub fn is_constant(self) -> bool {
        !matches!(self, DjFunction::Balanced)
    }

    /// Build the oracle; `pattern` is only consulted for the balanced function.
    pub fn oracle(self, n: u32, pattern: &BalancedPattern) -> AlgoResult<Circuit> {
        match self {
            DjFunction::ConstantZero => constant_oracle(n, 0),
            DjFunction::ConstantOne => constant_oracle(n, 1),
            DjFunction::Balanced => pattern.oracle(n),
        }
    }
}

impl fmt::Display for DjFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DjFunction {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DjFunction::ALL
            .into_iter()
            .find(|f| f.slug() == s)
            .ok_or_else(|| AlgoError::UnknownSelection {
                what: "function",
                value: s.to_string(),
            })
    }
}

/// Assemble the Deutsch-Jozsa circuit around `oracle`.
///
/// The result has `n + 1` qubits and `n` classical bits; the oracle must be
/// exactly `n + 1` qubits wide.
pub fn deutsch_jozsa(n: u32, oracle: &Circuit) -> AlgoResult<Circuit> {
    query_circuit("deutsch_jozsa", n, oracle, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unravel_ir::{IrError, StandardGate};

    #[test]
    fn test_constant_oracles() {
        let zero = constant_oracle(3, 0).unwrap();
        assert_eq!(zero.num_qubits(), 4);
        assert!(zero.is_empty());

        let one = constant_oracle(3, 1).unwrap();
        assert_eq!(one.instructions().len(), 1);
        assert_eq!(one.instructions()[0].as_gate(), Some(&StandardGate::X));
        assert_eq!(one.instructions()[0].qubits, vec![QubitId(3)]);

        assert_eq!(constant_oracle(3, 2).unwrap_err(), AlgoError::InvalidOracleOutput(2));
    }

    #[test]
    fn test_balanced_oracle_layout() {
        let x: BitString = "101".parse().unwrap();
        let cx: BitString = "011".parse().unwrap();
        let oracle = balanced_oracle(3, &x, &cx).unwrap();

        let ops: Vec<_> = oracle
            .instructions()
            .iter()
            .map(|inst| (inst.name().to_string(), inst.qubits.clone()))
            .collect();
        assert_eq!(
            ops,
            vec![
                ("x".into(), vec![QubitId(0)]),
                ("x".into(), vec![QubitId(2)]),
                ("cx".into(), vec![QubitId(1), QubitId(3)]),
                ("cx".into(), vec![QubitId(2), QubitId(3)]),
                ("x".into(), vec![QubitId(0)]),
                ("x".into(), vec![QubitId(2)]),
            ]
        );
    }

    #[test]
    fn test_balanced_oracle_rejects_length_mismatch() {
        let x: BitString = "101".parse().unwrap();
        let err = balanced_oracle(4, &x, &BitString::alternating(4)).unwrap_err();
        assert_eq!(
            err,
            AlgoError::BitStringLength { role: "X gate", expected: 4, got: 3 }
        );
    }

    #[test]
    fn test_random_pattern_is_balanced() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        for n in 1..=10 {
            let pattern = BalancedPattern::random(n, &mut rng);
            assert_eq!(pattern.x_gates.len(), n as usize);
            assert!(!pattern.cx_gates.is_zero());
        }
    }

    #[test]
    fn test_pattern_rejects_zero_cx() {
        assert_eq!(
            BalancedPattern::new(BitString::zeros(2), BitString::zeros(2)).unwrap_err(),
            AlgoError::EmptyCxPattern
        );
    }

    #[test]
    fn test_deutsch_jozsa_shape() {
        let circuit = deutsch_jozsa(3, &constant_oracle(3, 1).unwrap()).unwrap();
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.num_clbits(), 3);

        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            [
                "h", "h", "h", "x", "h", "barrier", "x", "barrier", "h", "h", "h", "barrier",
                "measure", "measure", "measure"
            ]
        );
    }

    #[test]
    fn test_deutsch_jozsa_rejects_wide_oracle() {
        let oracle = constant_oracle(4, 1).unwrap();
        let err = deutsch_jozsa(3, &oracle).unwrap_err();
        assert!(matches!(err, AlgoError::Ir(IrError::WidthMismatch { .. })));
    }

    #[test]
    fn test_deutsch_jozsa_rejects_narrow_oracle() {
        let oracle = Circuit::with_size("narrow", 2, 0);
        let err = deutsch_jozsa(3, &oracle).unwrap_err();
        assert!(matches!(err, AlgoError::Ir(IrError::WidthMismatch { other_qubits: 2, .. })));
    }

    #[test]
    fn test_function_selector() {
        assert_eq!("balanced".parse::<DjFunction>().unwrap(), DjFunction::Balanced);
        assert!("linear".parse::<DjFunction>().is_err());
        assert_eq!(DjFunction::ConstantOne.label(), "Constant Function (f(x) = 1)");
    }
}
