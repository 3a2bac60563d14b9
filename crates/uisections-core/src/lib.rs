//! uisections core
//!
//! Shared plumbing for the uisections layout engine: logging bootstrap,
//! configuration, axis/geometry helpers and profiling hooks.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{BenchmarkMode, Config};
pub use geometry::{Axis, Size};
