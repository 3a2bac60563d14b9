//! Mock implementation of PaneRenderer for testing.
//!
//! The mock stands in for the host's real pane elements. It records every
//! renderer call for verification and answers `measured_length` from the
//! geometry it was last given, so drags read back what they wrote.

use parking_lot::Mutex;
use uisections::{PaneGeometry, PaneRenderer};

/// Records a renderer call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Measure { pane: usize },
    SetGeometry { pane: usize, geometry: PaneGeometry },
    Overlay { active: bool },
    Listeners { attached: bool },
}

/// Mock implementation of [`PaneRenderer`] for testing.
///
/// # Example
///
/// ```rust
/// use uisections::PaneRenderer;
/// use uisections_test_utils::{MockPaneRenderer, RenderCall};
///
/// let mock = MockPaneRenderer::new();
/// mock.set_drag_overlay(true);
///
/// assert!(mock.overlay_active());
/// assert_eq!(mock.calls(), vec![RenderCall::Overlay { active: true }]);
/// ```
#[derive(Debug, Default)]
pub struct MockPaneRenderer {
    /// Recorded calls for verification
    calls: Mutex<Vec<RenderCall>>,

    /// Current geometry per pane; `None` until written or seeded
    geometry: Mutex<Vec<Option<PaneGeometry>>>,

    overlay: Mutex<bool>,
    listeners: Mutex<bool>,
}

impl MockPaneRenderer {
    /// Create a mock with no known pane geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose panes already measure `lengths`, laid end to end.
    pub fn with_lengths(lengths: impl IntoIterator<Item = f32>) -> Self {
        let lengths: Vec<f32> = lengths.into_iter().collect();
        let total: f32 = lengths.iter().sum();

        let mut start = 0.0;
        let geometry = lengths
            .iter()
            .map(|size| {
                let pane = PaneGeometry::new(start, *size, total - start - size);
                start += size;
                Some(pane)
            })
            .collect();

        Self {
            geometry: Mutex::new(geometry),
            ..Self::default()
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    /// Current geometry of `pane`, if any was written.
    pub fn geometry(&self, pane: usize) -> Option<PaneGeometry> {
        self.geometry.lock().get(pane).copied().flatten()
    }

    /// Geometry writes recorded for `pane`, oldest first.
    pub fn writes_for(&self, pane: usize) -> Vec<PaneGeometry> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                RenderCall::SetGeometry { pane: written, geometry } if *written == pane => Some(*geometry),
                _ => None,
            })
            .collect()
    }

    /// Count geometry writes.
    pub fn count_geometry_writes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RenderCall::SetGeometry { .. }))
            .count()
    }

    /// Count measurements.
    pub fn count_measures(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RenderCall::Measure { .. }))
            .count()
    }

    pub fn overlay_active(&self) -> bool {
        *self.overlay.lock()
    }

    pub fn listeners_attached(&self) -> bool {
        *self.listeners.lock()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl PaneRenderer for MockPaneRenderer {
    fn measured_length(&self, pane: usize) -> f32 {
        self.calls.lock().push(RenderCall::Measure { pane });
        self.geometry(pane).map_or(0.0, |geometry| geometry.size)
    }

    fn set_pane_geometry(&self, pane: usize, geometry: PaneGeometry) {
        let mut all = self.geometry.lock();
        if all.len() <= pane {
            all.resize(pane + 1, None);
        }
        all[pane] = Some(geometry);

        self.calls.lock().push(RenderCall::SetGeometry { pane, geometry });
    }

    fn set_drag_overlay(&self, active: bool) {
        *self.overlay.lock() = active;
        self.calls.lock().push(RenderCall::Overlay { active });
    }

    fn set_document_listeners(&self, attached: bool) {
        *self.listeners.lock() = attached;
        self.calls.lock().push(RenderCall::Listeners { attached });
    }
}
