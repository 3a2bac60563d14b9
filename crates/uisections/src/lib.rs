//! uisections - resizable section layouts
//!
//! Lays out a row or column of panes inside a container and keeps that layout
//! consistent while the user drags splitters, the container resizes or panes
//! are shown and hidden:
//! - Fixed sizes plus one dynamic pane absorbing the remaining room
//! - Pixel or percentage units
//! - Minimum sizes with a full-screen fallback when they cannot all fit
//! - Pointer and keyboard resizing with per-frame coalescing
//! - Animated show/hide transitions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # use uisections::{Config, LayoutConfiguration, PaneGeometry, PaneRenderer, Sections, SectionsProps};
//! # struct Host;
//! # impl PaneRenderer for Host {
//! #     fn measured_length(&self, _pane: usize) -> f32 { 0.0 }
//! #     fn set_pane_geometry(&self, _pane: usize, _geometry: PaneGeometry) {}
//! #     fn set_drag_overlay(&self, _active: bool) {}
//! #     fn set_document_listeners(&self, _attached: bool) {}
//! # }
//! # fn main() -> uisections::Result<()> {
//! let props = SectionsProps::new(2)
//!     .layout(LayoutConfiguration::new().sizes([Some(400.0), None]).min_section_size(100.0))
//!     .splitter(true)
//!     .on_resize(|sizes| println!("resized: {:?}", sizes));
//!
//! let host = Host;
//! let mut sections = Sections::new(props, Config::default())?;
//! sections.mount(1000.0, &host);
//!
//! // Each render produces inline styles for every pane and splitter.
//! let plan = sections.render();
//! for style in &plan.panes {
//!     println!("{}", style.to_css());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod frame;
pub mod length;
pub mod pane;
pub mod recalc;
pub mod renderer;
pub mod resize;
pub mod sections;
pub mod splitter;
pub mod style;
pub mod visibility;

pub use error::{Result, SectionsError};
pub use frame::FrameScheduler;
pub use length::Length;
pub use pane::{LayoutConfiguration, MinSectionSize, PaneSize, SizeEntry};
pub use recalc::{LayoutOutcome, LayoutRequest, compute_layout};
pub use renderer::{PaneGeometry, PaneRenderer};
pub use resize::{ResizeController, ResizeSession};
pub use sections::{
    CloseCallback, LayoutState, PaneProps, ResizeCallback, Sections, SectionsProps, ToggleCallback,
};
pub use splitter::{Splitter, SplitterAction, SplitterKey, SplitterType};
pub use style::{PaneClass, PaneStyle, SplitterPlacement, SplitterRole, StyleProperty};
pub use visibility::{AnimationSetting, RenderPlan, VisibilityCoordinator};

// Re-export common types from dependencies
pub use uisections_core::math::Vec2;
pub use uisections_core::{Axis, Config, Size};
