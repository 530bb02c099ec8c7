//! Unravel Dashboard - interactive pages for textbook quantum algorithms.
//!
//! Every algorithm page is a plain HTML form submitted with GET. Each request
//! reads the form into a [`Session`], builds the circuit, optionally runs it
//! on the selected simulator backend and renders the diagram, counts and
//! histogram. The same pipeline is exposed as a JSON API under `/api`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use unravel_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone()));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod pages;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod session;
pub mod state;

pub use dto::{
    CircuitRequest, CircuitResponse, CircuitVisualization, HealthResponse, ProviderView,
    ResultHistogram, RunRequest, RunResponse,
};
pub use error::ApiError;
pub use server::create_router;
pub use session::{PageQuery, Session};
pub use state::{AppState, DashboardConfig};
