//! Bernstein-Vazirani: recover a hidden bit-string `s` from one query of
//! `f(x) = s · x (mod 2)`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use unravel_ir::{Circuit, QubitId};

use crate::bitstring::BitString;
use crate::error::AlgoResult;
use crate::kickback::query_circuit;

/// Supported secret lengths.
pub const QUBIT_RANGE: RangeInclusive<u32> = 1..=10;

/// Draw a secret uniformly at random.
pub fn random_secret<R: Rng>(n: u32, rng: &mut R) -> BitString {
    BitString::random(n as usize, rng)
}

/// Oracle computing `s · x` into the ancilla at index `n`.
///
/// Character `k` of the secret controls input qubit `n - 1 - k`, so the
/// secret reads back in the classical register's order (bit `n-1` leftmost).
pub fn bernstein_vazirani_oracle(n: u32, secret: &BitString) -> AlgoResult<Circuit> {
    secret.require_len("secret", n as usize)?;

    let mut oracle = Circuit::with_size(format!("bv_oracle_{secret}"), n + 1, 0);
    for k in secret.ones() {
        oracle.cx(QubitId(n - 1 - k as u32), QubitId(n))?;
    }
    Ok(oracle)
}

/// Assemble the Bernstein-Vazirani circuit around `oracle`.
pub fn bernstein_vazirani(n: u32, oracle: &Circuit) -> AlgoResult<Circuit> {
    query_circuit("bernstein_vazirani", n, oracle, false)
}

/// Where the secret comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretMode {
    /// Generate a fresh random secret on every build.
    #[default]
    Random,
    /// Use the secret typed by the user.
    Custom,
}

impl SecretMode {
    /// Radio button label.
    pub fn label(self) -> &'static str {
        match self {
            SecretMode::Random => "Generate Random Secret Bitstring",
            SecretMode::Custom => "Enter Your Own Secret Bitstring",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoError;
    use rand::SeedableRng;

    #[test]
    fn test_oracle_reverses_positions() {
        let secret: BitString = "110".parse().unwrap();
        let oracle = bernstein_vazirani_oracle(3, &secret).unwrap();

        let controls: Vec<_> = oracle.instructions().iter().map(|i| i.qubits.clone()).collect();
        assert_eq!(
            controls,
            vec![vec![QubitId(2), QubitId(3)], vec![QubitId(1), QubitId(3)]]
        );
    }

    #[test]
    fn test_zero_secret_is_empty_oracle() {
        let oracle = bernstein_vazirani_oracle(4, &BitString::zeros(4)).unwrap();
        assert!(oracle.is_empty());
        assert_eq!(oracle.num_qubits(), 5);
    }

    #[test]
    fn test_secret_length_checked() {
        let secret: BitString = "10".parse().unwrap();
        assert!(matches!(
            bernstein_vazirani_oracle(3, &secret),
            Err(AlgoError::BitStringLength { role: "secret", expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_circuit_has_no_trailing_barrier() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(4);
        let secret = random_secret(3, &mut rng);
        let circuit =
            bernstein_vazirani(3, &bernstein_vazirani_oracle(3, &secret).unwrap()).unwrap();

        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        let first_measure = names.iter().position(|n| *n == "measure").unwrap();
        assert_eq!(names[first_measure - 1], "h");
        assert_eq!(circuit.num_clbits(), 3);
    }
}
