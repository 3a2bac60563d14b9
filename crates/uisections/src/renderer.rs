//! Renderer capability injected into the sections engine.
//!
//! During a drag the engine bypasses the full render pipeline and writes pane
//! geometry straight to the host's elements through this trait, then commits
//! once on release. Hosts implement it over whatever owns the real elements
//! (DOM nodes, retained widgets, terminal regions).

/// Pixel geometry of one pane along the layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaneGeometry {
    /// Offset from the leading edge of the container.
    pub start: f32,
    /// Offset from the trailing edge of the container.
    pub end: f32,
    /// Length along the layout axis.
    pub size: f32,
}

impl PaneGeometry {
    pub fn new(start: f32, size: f32, end: f32) -> Self {
        Self { start, end, size }
    }
}

/// Host-side operations the engine needs while a pane is being resized.
///
/// Methods take `&self` so one renderer can be shared between the engine and
/// the host; implementations use interior mutability where they record state.
///
/// # Example
///
/// ```rust
/// use uisections::{PaneGeometry, PaneRenderer};
///
/// struct Fixed;
///
/// impl PaneRenderer for Fixed {
///     fn measured_length(&self, _pane: usize) -> f32 {
///         250.0
///     }
///     fn set_pane_geometry(&self, _pane: usize, _geometry: PaneGeometry) {}
///     fn set_drag_overlay(&self, _active: bool) {}
///     fn set_document_listeners(&self, _attached: bool) {}
/// }
///
/// let renderer: &dyn PaneRenderer = &Fixed;
/// assert_eq!(renderer.measured_length(0), 250.0);
/// ```
pub trait PaneRenderer: Send + Sync {
    /// Current rendered length of a pane in pixels.
    ///
    /// Hosts that cannot measure return `0.0`.
    fn measured_length(&self, pane: usize) -> f32;

    /// Write a pane's geometry directly, outside of a full render.
    fn set_pane_geometry(&self, pane: usize, geometry: PaneGeometry);

    /// Show or remove the full-viewport overlay that shields underlying
    /// content from pointer events while dragging.
    fn set_drag_overlay(&self, active: bool);

    /// Attach or detach document-level move/up/leave listeners for a drag.
    fn set_document_listeners(&self, attached: bool);
}
