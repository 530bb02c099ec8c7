//! API endpoint handlers.

pub mod algorithms;
pub mod circuits;
pub mod health;
pub mod providers;
pub mod run;
