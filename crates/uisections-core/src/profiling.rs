//! Profiling utilities based on the `puffin` crate.
//!
//! Without the `profiling` feature the macros expand to nothing.

use std::sync::Once;
#[cfg(feature = "profiling")]
use std::sync::OnceLock;

#[cfg(feature = "profiling")]
pub use puffin::{GlobalProfiler, profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

use crate::config::BenchmarkMode;

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Record scopes in-process only.
    InProcess,
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

#[cfg(feature = "profiling")]
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

static BENCHMARK_INIT: Once = Once::new();

/// Apply a [`BenchmarkMode`] from [`Config`](crate::config::Config).
///
/// Only the first mode other than [`BenchmarkMode::Off`] takes effect; later
/// calls are ignored so repeated construction never rebinds the server port.
pub fn apply_benchmark_mode(mode: BenchmarkMode) {
    let backend = match mode {
        BenchmarkMode::Off => return,
        BenchmarkMode::On => ProfilingBackend::InProcess,
        BenchmarkMode::WithWebserver => ProfilingBackend::PuffinHttp,
    };
    BENCHMARK_INIT.call_once(|| init_profiling(backend));
}

/// Whether [`apply_benchmark_mode`] has already initialized profiling.
pub fn benchmark_mode_applied() -> bool {
    BENCHMARK_INIT.is_completed()
}

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use uisections_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling(backend: ProfilingBackend) {
    puffin::set_scopes_on(true);

    if backend == ProfilingBackend::PuffinHttp {
        match puffin_http::Server::new("0.0.0.0:8585") {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        }
    }
}

#[cfg(not(feature = "profiling"))]
pub fn init_profiling(backend: ProfilingBackend) {
    tracing::warn!(?backend, "profiling requested but the `profiling` feature is disabled");
}

/// Mark the start of a new frame for profiling.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_mode_applies_once() {
        apply_benchmark_mode(BenchmarkMode::Off);
        assert!(!benchmark_mode_applied());

        apply_benchmark_mode(BenchmarkMode::On);
        assert!(benchmark_mode_applied());

        // Already initialized, so no HTTP server is started.
        apply_benchmark_mode(BenchmarkMode::WithWebserver);
        #[cfg(feature = "profiling")]
        assert!(PROFILING_SERVER.get().is_none());
    }
}
