//! CLI command implementations.

pub mod algorithms;
pub mod backends;
pub mod common;
pub mod draw;
pub mod run;
pub mod version;
