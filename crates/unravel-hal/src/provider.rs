//! Simulator providers and the backends they offer.
//!
//! Each [`Provider`] exposes a fixed table of [`BackendSpec`]s. The table is
//! the only source of valid backend names; the registry and the dashboard's
//! backend selector are both populated from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::backend::BackendConfig;
use crate::error::{HalError, HalResult};

/// How a backend turns a circuit into counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMethod {
    /// Re-run the circuit from scratch for every shot, measuring as it goes.
    Shots,
    /// Evolve the state once and sample the final distribution.
    Statevector,
}

impl fmt::Display for SimulationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationMethod::Shots => write!(f, "shots"),
            SimulationMethod::Statevector => write!(f, "statevector"),
        }
    }
}

/// A named backend offered by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackendSpec {
    /// Backend name, unique across providers.
    pub name: &'static str,
    /// Provider offering the backend.
    pub provider: Provider,
    /// Simulation strategy.
    pub method: SimulationMethod,
    /// One-line description.
    pub description: &'static str,
}

impl BackendSpec {
    /// Every backend of every provider.
    pub fn all() -> impl Iterator<Item = &'static BackendSpec> {
        Provider::ALL.iter().flat_map(|p| p.backends().iter())
    }

    /// Look a backend up by name across all providers.
    pub fn find(name: &str) -> Option<&'static BackendSpec> {
        Self::all().find(|spec| spec.name == name)
    }

    /// Configuration for creating this backend.
    pub fn config(&self) -> BackendConfig {
        BackendConfig::new(self.name)
    }
}

/// A family of simulator backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// The basic reference simulators.
    #[default]
    BasicAer,
    /// The Aer simulator family.
    Aer,
}

const BASIC_AER_BACKENDS: [BackendSpec; 2] = [
    BackendSpec {
        name: "qasm_simulator",
        provider: Provider::BasicAer,
        method: SimulationMethod::Shots,
        description: "Shot-by-shot simulation with measurement collapse",
    },
    BackendSpec {
        name: "statevector_simulator",
        provider: Provider::BasicAer,
        method: SimulationMethod::Statevector,
        description: "Single statevector evolution, sampled at the end",
    },
];

const AER_BACKENDS: [BackendSpec; 2] = [
    BackendSpec {
        name: "aer_simulator",
        provider: Provider::Aer,
        method: SimulationMethod::Shots,
        description: "General-purpose simulator, one trajectory per shot",
    },
    BackendSpec {
        name: "aer_simulator_statevector",
        provider: Provider::Aer,
        method: SimulationMethod::Statevector,
        description: "Statevector method, sampled from the final state",
    },
];

impl Provider {
    /// Every provider, in selector order.
    pub const ALL: [Provider; 2] = [Provider::BasicAer, Provider::Aer];

    /// Name shown to users.
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::BasicAer => "Basic Aer",
            Provider::Aer => "Aer",
        }
    }

    /// Identifier used in URLs and JSON.
    pub fn slug(self) -> &'static str {
        match self {
            Provider::BasicAer => "basic_aer",
            Provider::Aer => "aer",
        }
    }

    /// Backends offered by this provider, default first.
    pub fn backends(self) -> &'static [BackendSpec] {
        match self {
            Provider::BasicAer => &BASIC_AER_BACKENDS,
            Provider::Aer => &AER_BACKENDS,
        }
    }

    /// The backend selected when none (or a foreign one) is requested.
    pub fn default_backend(self) -> &'static BackendSpec {
        &self.backends()[0]
    }

    /// Resolve a backend name offered by this provider.
    pub fn backend(self, name: &str) -> HalResult<&'static BackendSpec> {
        self.backends()
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| HalError::UnknownBackend {
                provider: self.display_name().to_string(),
                backend: name.to_string(),
            })
    }

    /// Resolve a requested backend, falling back to the default when the
    /// name is missing or belongs to another provider.
    pub fn backend_or_default(self, name: Option<&str>) -> &'static BackendSpec {
        name.and_then(|n| self.backend(n).ok())
            .unwrap_or_else(|| self.default_backend())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = HalError;

    /// Accepts the slug or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Provider::ALL
            .into_iter()
            .find(|p| {
                p.slug().eq_ignore_ascii_case(needle)
                    || p.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| HalError::UnknownProvider(s.to_string()))
    }
}
