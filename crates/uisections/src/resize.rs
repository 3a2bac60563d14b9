//! Resize session controller.
//!
//! A [`ResizeController`] lives for exactly one drag or keyboard step. It
//! snapshots every visible pane when the interaction starts, turns the
//! splitter delta into new lengths for the panes around the splitter, and
//! writes the result straight to the [`PaneRenderer`] on every move. The
//! owner copies the final sections into its committed state once, when the
//! interaction ends.
//!
//! Lengths in here are always pixels.

use uisections_core::profiling::profile_function;

use crate::pane::PaneSize;
use crate::recalc::accumulate_offsets;
use crate::renderer::{PaneGeometry, PaneRenderer};

/// Below this a delta or a slack is treated as zero.
const EPSILON: f32 = 0.001;

/// Snapshot and live working copy of one pane during a resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    /// Length when the session started.
    pub size: f32,
    pub min_size: f32,
    /// Ceiling that still leaves every other pane its minimum.
    pub max_size: f32,
    /// Live geometry, updated on every accepted move.
    pub section: PaneSize,
}

impl ResizeSession {
    /// Panes whose minimum equals their maximum never change length.
    pub fn is_resizable(&self) -> bool {
        self.max_size - self.min_size > EPSILON
    }

    fn slack(&self) -> f32 {
        if self.is_resizable() {
            (self.size - self.min_size).max(0.0)
        } else {
            0.0
        }
    }

    fn headroom(&self) -> f32 {
        if self.is_resizable() {
            (self.max_size - self.size).max(0.0)
        } else {
            0.0
        }
    }
}

/// Drives one resize interaction over the visible panes.
#[derive(Debug)]
pub struct ResizeController {
    /// Boundary being dragged: between `sessions[boundary]` and `sessions[boundary + 1]`.
    boundary: usize,
    /// Pane index (in the full pane list) of each session.
    panes: Vec<usize>,
    sessions: Vec<ResizeSession>,
    container_length: f32,
    /// Effective delta currently written to the renderer.
    applied: f32,
}

impl ResizeController {
    /// Start a session on the boundary after `panes[boundary]`.
    ///
    /// `panes` lists the visible pane indices in order and `min_sizes` their
    /// minimums. Returns `None` when there is no pane after the boundary.
    pub fn start(
        boundary: usize,
        panes: Vec<usize>,
        min_sizes: &[f32],
        container_length: f32,
        renderer: &dyn PaneRenderer,
    ) -> Option<Self> {
        if boundary + 1 >= panes.len() {
            return None;
        }

        let sizes: Vec<f32> = panes
            .iter()
            .map(|pane| renderer.measured_length(*pane).max(0.0))
            .collect();
        let mins: Vec<f32> = (0..panes.len())
            .map(|position| min_sizes.get(position).copied().unwrap_or(0.0))
            .collect();
        let min_total: f32 = mins.iter().sum();

        let sessions = accumulate_offsets(&sizes, false)
            .into_iter()
            .zip(sizes.iter().zip(&mins))
            .map(|(section, (size, min))| ResizeSession {
                size: *size,
                min_size: *min,
                max_size: min.max(container_length - (min_total - min)),
                section,
            })
            .collect();

        tracing::debug!(boundary, ?panes, ?sizes, "resize session started");

        Some(Self {
            boundary,
            panes,
            sessions,
            container_length,
            applied: 0.0,
        })
    }

    pub fn sessions(&self) -> &[ResizeSession] {
        &self.sessions
    }

    /// Pane on the leading side of the dragged boundary.
    pub fn leading_pane(&self) -> usize {
        self.panes[self.boundary]
    }

    pub fn container_length(&self) -> f32 {
        self.container_length
    }

    /// Effective delta applied so far.
    pub fn applied_delta(&self) -> f32 {
        self.applied
    }

    /// Clamp a requested delta so no pane leaves `[min_size, max_size]`.
    ///
    /// Shrinking cascades from the pane next to the boundary outwards; growth
    /// goes to the nearest resizable pane on the other side.
    pub fn correct_boundary_position(&self, delta: f32) -> f32 {
        if delta.abs() < EPSILON {
            return 0.0;
        }

        let (shrinking, growing) = self.sides(delta);
        let shrinkable: f32 = shrinking.iter().map(|position| self.sessions[*position].slack()).sum();
        let headroom = growing
            .iter()
            .map(|position| &self.sessions[*position])
            .find(|session| session.is_resizable())
            .map_or(0.0, ResizeSession::headroom);

        let magnitude = delta.abs().min(shrinkable).min(headroom);
        magnitude.copysign(delta)
    }

    /// Move the boundary to `delta` pixels from where the session started.
    ///
    /// Returns `true` when the move changed the layout; moves that are fully
    /// clamped, or equal to the current one, leave the renderer untouched.
    pub fn move_to(&mut self, delta: f32, renderer: &dyn PaneRenderer) -> bool {
        profile_function!();

        let effective = self.correct_boundary_position(delta);
        if (effective - self.applied).abs() < EPSILON {
            return false;
        }

        let sizes = self.distribute(effective);
        let sections = accumulate_offsets(&sizes, false);
        for (position, section) in sections.into_iter().enumerate() {
            let session = &mut self.sessions[position];
            if session.section.differs_from(&section) {
                session.section = section;
                renderer.set_pane_geometry(self.panes[position], geometry_of(&section));
            }
        }

        tracing::trace!(requested = delta, effective, "resize move applied");
        self.applied = effective;
        true
    }

    /// Consume the session, returning the final sections keyed by pane index,
    /// or `None` when nothing changed since the start.
    pub fn finish(self) -> Option<Vec<(usize, PaneSize)>> {
        let changed = self
            .sessions
            .iter()
            .any(|session| (session.section.size.unwrap_or(session.size) - session.size).abs() >= EPSILON);
        if !changed {
            tracing::debug!("resize session ended without changes");
            return None;
        }

        tracing::debug!(delta = self.applied, "resize session committed");
        Some(
            self.panes
                .into_iter()
                .zip(self.sessions)
                .map(|(pane, session)| (pane, session.section))
                .collect(),
        )
    }

    /// Discard the session and put the starting geometry back.
    pub fn cancel(self, renderer: &dyn PaneRenderer) {
        let sizes: Vec<f32> = self.sessions.iter().map(|session| session.size).collect();
        for (position, original) in accumulate_offsets(&sizes, false).iter().enumerate() {
            if self.sessions[position].section.differs_from(original) {
                renderer.set_pane_geometry(self.panes[position], geometry_of(original));
            }
        }
        tracing::debug!("resize session cancelled");
    }

    /// Session positions that shrink and grow for a delta, nearest first.
    fn sides(&self, delta: f32) -> (Vec<usize>, Vec<usize>) {
        let leading: Vec<usize> = (0..=self.boundary).rev().collect();
        let trailing: Vec<usize> = (self.boundary + 1..self.sessions.len()).collect();
        if delta < 0.0 {
            (leading, trailing)
        } else {
            (trailing, leading)
        }
    }

    /// Lengths after applying an already-corrected delta to the snapshot.
    fn distribute(&self, effective: f32) -> Vec<f32> {
        let mut sizes: Vec<f32> = self.sessions.iter().map(|session| session.size).collect();
        if effective == 0.0 {
            return sizes;
        }

        let (shrinking, growing) = self.sides(effective);
        let mut remaining = effective.abs();
        for position in shrinking {
            if remaining <= 0.0 {
                break;
            }
            let take = self.sessions[position].slack().min(remaining);
            sizes[position] -= take;
            remaining -= take;
        }

        if let Some(position) = growing
            .into_iter()
            .find(|position| self.sessions[*position].is_resizable())
        {
            sizes[position] += effective.abs() - remaining;
        }
        sizes
    }
}

fn geometry_of(section: &PaneSize) -> PaneGeometry {
    PaneGeometry {
        start: section.start.unwrap_or(0.0),
        end: section.end.unwrap_or(0.0),
        size: section.size.unwrap_or(0.0),
    }
}
