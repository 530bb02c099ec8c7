//! Form state of one page render.
//!
//! Every widget value arrives as an optional query parameter. The session
//! keeps the value each widget should show next, falling back to defaults
//! where a parameter is missing, and remembers the first parameter that
//! could not be read so the page can report it inline.

use serde::Deserialize;
use unravel_algos::{
    AlgorithmKind, AlgorithmRequest, BalancedPattern, BitString, DjFunction, Scheme, SecretMode,
};
use unravel_hal::{BackendSpec, Provider};

use crate::error::ApiError;
use crate::state::DashboardConfig;

/// Raw query string of an algorithm page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub qubits: Option<String>,
    pub function: Option<String>,
    pub x_gates: Option<String>,
    pub cx_gates: Option<String>,
    pub mode: Option<String>,
    pub secret: Option<String>,
    pub scheme: Option<String>,
    pub provider: Option<String>,
    pub backend: Option<String>,
    pub shots: Option<String>,
    pub run: Option<String>,
}

/// Resolved widget state of one page.
#[derive(Debug)]
pub struct Session {
    pub kind: AlgorithmKind,
    pub qubits: u32,
    pub function: DjFunction,
    /// Balanced X pattern as typed; empty means the default pattern.
    pub x_gates: String,
    /// Balanced CX pattern as typed; empty means the default pattern.
    pub cx_gates: String,
    pub mode: SecretMode,
    /// Custom secret as typed.
    pub secret: String,
    pub scheme: Scheme,
    pub provider: Provider,
    pub backend: &'static BackendSpec,
    pub shots: u32,
    /// Whether the run button was pressed.
    pub run: bool,
    /// First parameter that could not be read.
    pub invalid: Option<ApiError>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Session {
    /// Read the page parameters, defaulting what is absent.
    pub fn from_query(kind: AlgorithmKind, query: &PageQuery, config: &DashboardConfig) -> Self {
        let descriptor = kind.descriptor();
        let mut invalid = None;
        let mut reject = |err: ApiError| {
            invalid.get_or_insert(err);
        };

        let qubits = match non_empty(&query.qubits).map(str::parse::<u32>) {
            None => descriptor.default_qubits,
            Some(Ok(n)) => n,
            Some(Err(_)) => {
                reject(ApiError::BadRequest(format!(
                    "Qubit count must be a whole number between {} and {}",
                    descriptor.min_qubits, descriptor.max_qubits
                )));
                descriptor.default_qubits
            }
        };

        let function = match non_empty(&query.function).map(str::parse::<DjFunction>) {
            None => DjFunction::default(),
            Some(Ok(function)) => function,
            Some(Err(e)) => {
                reject(e.into());
                DjFunction::default()
            }
        };

        let mode = match non_empty(&query.mode) {
            None | Some("random") => SecretMode::Random,
            Some("custom") => SecretMode::Custom,
            Some(other) => {
                reject(ApiError::BadRequest(format!("Unknown secret mode '{other}'")));
                SecretMode::Random
            }
        };

        let scheme = match non_empty(&query.scheme).map(str::parse::<Scheme>) {
            None => Scheme::default(),
            Some(Ok(scheme)) => scheme,
            Some(Err(e)) => {
                reject(e.into());
                Scheme::default()
            }
        };

        let provider = match non_empty(&query.provider).map(str::parse::<Provider>) {
            None => config.default_provider,
            Some(Ok(provider)) => provider,
            Some(Err(e)) => {
                reject(e.into());
                config.default_provider
            }
        };
        let backend = provider.backend_or_default(non_empty(&query.backend));

        let shots = match non_empty(&query.shots).map(str::parse::<u32>) {
            None => config.default_shots,
            Some(Ok(shots)) if (1..=config.max_shots).contains(&shots) => shots,
            Some(_) => {
                reject(ApiError::BadRequest(format!(
                    "Shots must be between 1 and {}",
                    config.max_shots
                )));
                config.default_shots
            }
        };

        Self {
            kind,
            qubits,
            function,
            x_gates: non_empty(&query.x_gates).unwrap_or_default().to_string(),
            cx_gates: non_empty(&query.cx_gates).unwrap_or_default().to_string(),
            mode,
            secret: non_empty(&query.secret).unwrap_or_default().to_string(),
            scheme,
            provider,
            backend,
            shots,
            run: query.run.is_some(),
            invalid,
        }
    }

    /// Balanced pattern from the typed strings, if any were typed.
    ///
    /// A string left empty takes the alternating default.
    fn pattern(&self) -> Result<Option<BalancedPattern>, ApiError> {
        if self.x_gates.is_empty() && self.cx_gates.is_empty() {
            return Ok(None);
        }
        let fallback = BalancedPattern::alternating(self.qubits);
        let x_gates = if self.x_gates.is_empty() {
            fallback.x_gates
        } else {
            self.x_gates.parse::<BitString>()?
        };
        let cx_gates = if self.cx_gates.is_empty() {
            fallback.cx_gates
        } else {
            self.cx_gates.parse::<BitString>()?
        };
        Ok(Some(BalancedPattern::new(x_gates, cx_gates)?))
    }

    /// The typed build request described by the widgets.
    pub fn request(&self) -> Result<AlgorithmRequest, ApiError> {
        let request = match self.kind {
            AlgorithmKind::DeutschJozsa => AlgorithmRequest::DeutschJozsa {
                qubits: self.qubits,
                function: self.function,
                pattern: match self.function {
                    DjFunction::Balanced => self.pattern()?,
                    _ => None,
                },
            },
            AlgorithmKind::BernsteinVazirani => AlgorithmRequest::BernsteinVazirani {
                qubits: self.qubits,
                secret: match self.mode {
                    SecretMode::Random => None,
                    SecretMode::Custom => Some(self.secret.parse::<BitString>()?),
                },
            },
            AlgorithmKind::Entanglement => AlgorithmRequest::Entanglement {
                qubits: self.qubits,
                scheme: self.scheme,
            },
        };
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> PageQuery {
        let mut query = PageQuery::default();
        for (key, value) in pairs {
            let value = Some((*value).to_string());
            match *key {
                "qubits" => query.qubits = value,
                "function" => query.function = value,
                "x_gates" => query.x_gates = value,
                "cx_gates" => query.cx_gates = value,
                "mode" => query.mode = value,
                "secret" => query.secret = value,
                "scheme" => query.scheme = value,
                "provider" => query.provider = value,
                "backend" => query.backend = value,
                "shots" => query.shots = value,
                "run" => query.run = value,
                other => panic!("unknown key {other}"),
            }
        }
        query
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        let session = Session::from_query(AlgorithmKind::DeutschJozsa, &query(&[]), &config);

        assert_eq!(session.qubits, 3);
        assert_eq!(session.function, DjFunction::ConstantZero);
        assert_eq!(session.provider, Provider::BasicAer);
        assert_eq!(session.backend.name, "qasm_simulator");
        assert_eq!(session.shots, 1024);
        assert!(!session.run);
        assert!(session.invalid.is_none());
    }

    #[test]
    fn test_foreign_backend_falls_back() {
        let config = DashboardConfig::default();
        let session = Session::from_query(
            AlgorithmKind::Entanglement,
            &query(&[("provider", "aer"), ("backend", "qasm_simulator")]),
            &config,
        );
        assert_eq!(session.provider, Provider::Aer);
        assert_eq!(session.backend.name, "aer_simulator");
        assert!(session.invalid.is_none());
    }

    #[test]
    fn test_first_bad_parameter_is_kept() {
        let config = DashboardConfig::default();
        let session = Session::from_query(
            AlgorithmKind::BernsteinVazirani,
            &query(&[("qubits", "many"), ("shots", "0")]),
            &config,
        );
        assert_eq!(session.qubits, 3);
        let message = session.invalid.unwrap().to_string();
        assert!(message.contains("Qubit count"), "{message}");
    }

    #[test]
    fn test_custom_secret_request() {
        let config = DashboardConfig::default();
        let session = Session::from_query(
            AlgorithmKind::BernsteinVazirani,
            &query(&[("mode", "custom"), ("secret", "110"), ("run", "1")]),
            &config,
        );
        assert!(session.run);
        match session.request().unwrap() {
            AlgorithmRequest::BernsteinVazirani { qubits, secret } => {
                assert_eq!(qubits, 3);
                assert_eq!(secret.unwrap().to_string(), "110");
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn test_non_binary_secret_rejected() {
        let config = DashboardConfig::default();
        let session = Session::from_query(
            AlgorithmKind::BernsteinVazirani,
            &query(&[("mode", "custom"), ("secret", "1a0")]),
            &config,
        );
        assert!(matches!(session.request(), Err(ApiError::BuildError(_))));
    }

    #[test]
    fn test_partial_pattern_takes_default() {
        let config = DashboardConfig::default();
        let session = Session::from_query(
            AlgorithmKind::DeutschJozsa,
            &query(&[("function", "balanced"), ("cx_gates", "001")]),
            &config,
        );
        match session.request().unwrap() {
            AlgorithmRequest::DeutschJozsa { pattern, .. } => {
                let pattern = pattern.unwrap();
                assert_eq!(pattern.x_gates.to_string(), "101");
                assert_eq!(pattern.cx_gates.to_string(), "001");
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn test_zero_cx_pattern_rejected() {
        let config = DashboardConfig::default();
        let session = Session::from_query(
            AlgorithmKind::DeutschJozsa,
            &query(&[("function", "balanced"), ("cx_gates", "000")]),
            &config,
        );
        assert!(session.request().is_err());
    }
}
