//! Unravel execution layer
//!
//! This crate sits between circuit construction and presentation. It provides:
//! - A common [`Backend`] trait for job submission and management
//! - The [`Provider`] catalog: which simulator backends exist and how each
//!   one simulates ([`SimulationMethod`])
//! - A [`BackendRegistry`] creating backend instances by name
//! - The dispatcher ([`run_circuit`], [`dispatch`]) returning
//!   [`ExecutionResult`]s holding [`Counts`]
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use unravel_hal::{BackendRegistry, Provider, dispatch};
//! use unravel_ir::Circuit;
//!
//! let mut registry = BackendRegistry::new();
//! unravel_adapter_sim::register_simulators(&mut registry);
//!
//! let spec = Provider::BasicAer.backend("qasm_simulator")?;
//! let result = dispatch(&registry, spec, &circuit, 1024, None).await?;
//! if let Some((bitstring, count)) = result.counts.most_frequent() {
//!     println!("Most frequent: {bitstring} ({count} times)");
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod execute;
pub mod job;
pub mod provider;
pub mod registry;
pub mod result;

pub use backend::{
    Backend, BackendAvailability, BackendConfig, BackendFactory, POLL_INTERVAL, ValidationResult,
    WAIT_TIMEOUT,
};
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use execute::{dispatch, run_circuit};
pub use job::{Job, JobId, JobStatus};
pub use provider::{BackendSpec, Provider, SimulationMethod};
pub use registry::BackendRegistry;
pub use result::{Counts, ExecutionResult};
