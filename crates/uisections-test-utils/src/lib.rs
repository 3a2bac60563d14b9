//! Test utilities for uisections.
//!
//! This crate provides testing infrastructure for the sections engine:
//!
//! - `MockPaneRenderer` - a [`uisections::PaneRenderer`] that records every
//!   call instead of touching real elements (requires the `mock` feature)
//! - [`px_layout`] - builds pixel [`PaneSize`](uisections::PaneSize) records
//!   from plain lengths for assertions
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use uisections::{PaneGeometry, PaneRenderer};
//! use uisections_test_utils::MockPaneRenderer;
//!
//! let mock = MockPaneRenderer::with_lengths([400.0, 600.0]);
//! assert_eq!(mock.measured_length(1), 600.0);
//!
//! mock.set_pane_geometry(0, PaneGeometry::new(0.0, 300.0, 700.0));
//! assert_eq!(mock.count_geometry_writes(), 1);
//! assert_eq!(mock.measured_length(0), 300.0);
//! # }
//! ```
//!
//! # Design
//!
//! [`PaneRenderer`](uisections::PaneRenderer) methods take `&self`, so the
//! mock keeps its state behind `parking_lot::Mutex` and can be shared between
//! the engine and the test body.

#[cfg(feature = "mock")]
pub mod mock_render;

#[cfg(feature = "mock")]
pub use mock_render::*;

use uisections::PaneSize;
use uisections::recalc::accumulate_offsets;

/// Pixel pane records laid end to end, as the engine would commit them.
pub fn px_layout(sizes: &[f32]) -> Vec<PaneSize> {
    accumulate_offsets(sizes, false)
}

/// `true` when `a` and `b` differ by less than a thousandth.
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
