//! Application state for the dashboard server.

use std::net::SocketAddr;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use unravel_adapter_sim::register_simulators;
use unravel_hal::{BackendRegistry, Provider};

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Shot count preset in the forms.
    pub default_shots: u32,
    /// Largest shot count a request may ask for.
    pub max_shots: u32,
    /// Provider preselected in the forms.
    pub default_provider: Provider,
    /// Fixed seed for circuit randomness and sampling.
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 3000).into(),
            default_shots: 1024,
            max_shots: 100_000,
            default_provider: Provider::default(),
            seed: None,
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `UNRAVEL_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(bind) = lookup("UNRAVEL_BIND") {
            config.bind_address = bind
                .parse()
                .with_context(|| format!("Invalid UNRAVEL_BIND address '{bind}'"))?;
        }
        if let Some(shots) = lookup("UNRAVEL_DEFAULT_SHOTS") {
            config.default_shots = shots
                .parse()
                .with_context(|| format!("Invalid UNRAVEL_DEFAULT_SHOTS '{shots}'"))?;
        }
        if let Some(shots) = lookup("UNRAVEL_MAX_SHOTS") {
            config.max_shots = shots
                .parse()
                .with_context(|| format!("Invalid UNRAVEL_MAX_SHOTS '{shots}'"))?;
        }
        if let Some(provider) = lookup("UNRAVEL_PROVIDER") {
            config.default_provider = provider.parse()?;
        }
        if let Some(seed) = lookup("UNRAVEL_SEED") {
            config.seed = Some(
                seed.parse()
                    .with_context(|| format!("Invalid UNRAVEL_SEED '{seed}'"))?,
            );
        }

        anyhow::ensure!(
            (1..=config.max_shots).contains(&config.default_shots),
            "Default shots {} outside 1..={}",
            config.default_shots,
            config.max_shots
        );
        Ok(config)
    }
}

/// Shared application state. Immutable once the server starts.
pub struct AppState {
    /// Dashboard configuration.
    pub config: DashboardConfig,
    /// One factory per simulator backend.
    pub registry: BackendRegistry,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: DashboardConfig) -> Self {
        let mut registry = BackendRegistry::new();
        register_simulators(&mut registry);
        Self { config, registry }
    }

    /// Randomness for one request.
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
