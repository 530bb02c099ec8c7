//! Typed algorithm parameters and the single entry point that builds them.

use rand::Rng;
use tracing::debug;
use unravel_ir::Circuit;

use crate::bernstein_vazirani::{bernstein_vazirani, bernstein_vazirani_oracle, random_secret};
use crate::bitstring::BitString;
use crate::descriptor::AlgorithmKind;
use crate::deutsch_jozsa::{BalancedPattern, DjFunction, deutsch_jozsa};
use crate::entanglement::Scheme;
use crate::error::AlgoResult;

/// Parameters for one build of one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmRequest {
    /// Deutsch-Jozsa with the chosen oracle function.
    DeutschJozsa {
        /// Input qubits.
        qubits: u32,
        /// Oracle function.
        function: DjFunction,
        /// Balanced gate pattern; defaults to the alternating pattern.
        pattern: Option<BalancedPattern>,
    },
    /// Bernstein-Vazirani with a fixed or random secret.
    BernsteinVazirani {
        /// Secret length.
        qubits: u32,
        /// Secret; a fresh random one is drawn when absent.
        secret: Option<BitString>,
    },
    /// GHZ or W state preparation.
    Entanglement {
        /// Register size.
        qubits: u32,
        /// Which state.
        scheme: Scheme,
    },
}

/// A built circuit plus the choices that went into it.
#[derive(Debug, Clone)]
pub struct BuiltCircuit {
    /// Which algorithm was built.
    pub kind: AlgorithmKind,
    /// The complete circuit, measurements included.
    pub circuit: Circuit,
    /// The oracle on its own, for query algorithms.
    pub oracle: Option<Circuit>,
    /// The Bernstein-Vazirani secret actually used.
    pub secret: Option<BitString>,
    /// The balanced pattern actually used.
    pub pattern: Option<BalancedPattern>,
}

impl BuiltCircuit {
    /// Readout the algorithm predicts with certainty, if any.
    ///
    /// Constant Deutsch-Jozsa oracles give all zeros, Bernstein-Vazirani
    /// gives the secret.
    pub fn expected_outcome(&self) -> Option<String> {
        match (self.kind, &self.secret) {
            (AlgorithmKind::BernsteinVazirani, Some(secret)) => Some(secret.to_string()),
            (AlgorithmKind::DeutschJozsa, _) if self.pattern.is_none() => {
                Some("0".repeat(self.circuit.num_clbits()))
            }
            _ => None,
        }
    }
}

impl AlgorithmRequest {
    /// Default parameters for an algorithm page.
    pub fn default_for(kind: AlgorithmKind) -> Self {
        let qubits = kind.descriptor().default_qubits;
        match kind {
            AlgorithmKind::DeutschJozsa => AlgorithmRequest::DeutschJozsa {
                qubits,
                function: DjFunction::default(),
                pattern: None,
            },
            AlgorithmKind::BernsteinVazirani => AlgorithmRequest::BernsteinVazirani {
                qubits,
                secret: None,
            },
            AlgorithmKind::Entanglement => AlgorithmRequest::Entanglement {
                qubits,
                scheme: Scheme::default(),
            },
        }
    }

    /// Which algorithm this requests.
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            AlgorithmRequest::DeutschJozsa { .. } => AlgorithmKind::DeutschJozsa,
            AlgorithmRequest::BernsteinVazirani { .. } => AlgorithmKind::BernsteinVazirani,
            AlgorithmRequest::Entanglement { .. } => AlgorithmKind::Entanglement,
        }
    }

    /// Requested qubit count (input register size for query algorithms).
    pub fn qubits(&self) -> u32 {
        match self {
            AlgorithmRequest::DeutschJozsa { qubits, .. }
            | AlgorithmRequest::BernsteinVazirani { qubits, .. }
            | AlgorithmRequest::Entanglement { qubits, .. } => *qubits,
        }
    }

    /// Validate the parameters and build the circuit.
    ///
    /// `rng` is only drawn from when a random secret is needed.
    pub fn build<R: Rng>(&self, rng: &mut R) -> AlgoResult<BuiltCircuit> {
        let kind = self.kind();
        let n = self.qubits();
        kind.descriptor().check_qubits(n)?;
        debug!(algorithm = kind.slug(), qubits = n, "building circuit");

        let built = match self {
            AlgorithmRequest::DeutschJozsa {
                function, pattern, ..
            } => {
                let pattern = pattern
                    .clone()
                    .unwrap_or_else(|| BalancedPattern::alternating(n));
                let oracle = function.oracle(n, &pattern)?;
                BuiltCircuit {
                    kind,
                    circuit: deutsch_jozsa(n, &oracle)?,
                    oracle: Some(oracle),
                    secret: None,
                    pattern: (!function.is_constant()).then_some(pattern),
                }
            }
            AlgorithmRequest::BernsteinVazirani { secret, .. } => {
                let secret = secret.clone().unwrap_or_else(|| random_secret(n, rng));
                let oracle = bernstein_vazirani_oracle(n, &secret)?;
                BuiltCircuit {
                    kind,
                    circuit: bernstein_vazirani(n, &oracle)?,
                    oracle: Some(oracle),
                    secret: Some(secret),
                    pattern: None,
                }
            }
            AlgorithmRequest::Entanglement { scheme, .. } => BuiltCircuit {
                kind,
                circuit: scheme.circuit(n)?,
                oracle: None,
                secret: None,
                pattern: None,
            },
        };
        Ok(built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults_build() {
        let mut rng = StdRng::seed_from_u64(0);
        for kind in AlgorithmKind::ALL {
            let built = AlgorithmRequest::default_for(kind).build(&mut rng).unwrap();
            assert_eq!(built.kind, kind);
            assert!(built.circuit.num_qubits() >= 3);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let request = AlgorithmRequest::BernsteinVazirani {
            qubits: 11,
            secret: None,
        };
        assert!(matches!(
            request.build(&mut rng),
            Err(AlgoError::QubitCountOutOfRange { got: 11, max: 10, .. })
        ));
    }

    #[test]
    fn test_random_secret_is_reported() {
        let mut rng = StdRng::seed_from_u64(8);
        let request = AlgorithmRequest::BernsteinVazirani {
            qubits: 5,
            secret: None,
        };
        let built = request.build(&mut rng).unwrap();
        let secret = built.secret.clone().unwrap();
        assert_eq!(secret.len(), 5);
        assert_eq!(built.expected_outcome(), Some(secret.to_string()));
    }

    #[test]
    fn test_dj_pattern_only_for_balanced() {
        let mut rng = StdRng::seed_from_u64(0);
        let constant = AlgorithmRequest::DeutschJozsa {
            qubits: 4,
            function: DjFunction::ConstantOne,
            pattern: None,
        }
        .build(&mut rng)
        .unwrap();
        assert!(constant.pattern.is_none());
        assert_eq!(constant.expected_outcome().as_deref(), Some("0000"));

        let balanced = AlgorithmRequest::DeutschJozsa {
            qubits: 4,
            function: DjFunction::Balanced,
            pattern: None,
        }
        .build(&mut rng)
        .unwrap();
        assert_eq!(balanced.pattern, Some(BalancedPattern::alternating(4)));
        assert_eq!(balanced.expected_outcome(), None);
    }

    #[test]
    fn test_dj_pattern_length_checked() {
        let mut rng = StdRng::seed_from_u64(0);
        let request = AlgorithmRequest::DeutschJozsa {
            qubits: 4,
            function: DjFunction::Balanced,
            pattern: Some(BalancedPattern::alternating(3)),
        };
        assert!(matches!(
            request.build(&mut rng),
            Err(AlgoError::BitStringLength { expected: 4, got: 3, .. })
        ));
    }
}
