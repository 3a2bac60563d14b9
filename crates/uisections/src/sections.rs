//! The sections component.
//!
//! [`Sections`] owns the committed layout of a row (or column) of panes and
//! wires the recalculation engine, resize sessions, splitters and the
//! visibility coordinator together. Hosts feed it container sizes and input
//! events, read a [`RenderPlan`] back, and hand it a [`PaneRenderer`] for the
//! direct geometry writes done while dragging.

use std::fmt;
use std::sync::Arc;

use uisections_core::config::Config;
use uisections_core::geometry::{Axis, Size};
use uisections_core::math::Vec2;
use uisections_core::profiling;

use crate::error::{Result, SectionsError};
use crate::frame::FrameScheduler;
use crate::length::px_to_percent;
use crate::pane::{LayoutConfiguration, PaneSize, SizeEntry};
use crate::recalc::{LayoutRequest, compute_layout};
use crate::renderer::{PaneGeometry, PaneRenderer};
use crate::resize::ResizeController;
use crate::splitter::{Splitter, SplitterAction, SplitterKey, SplitterType};
use crate::visibility::{
    AnimationSetting, RenderInput, RenderPlan, SplitterOptions, VisibilityCoordinator, visible_indices,
};

/// Called with the committed pane sizes after a resize.
pub type ResizeCallback = Arc<dyn Fn(&[PaneSize]) + Send + Sync>;
/// Called when full-screen mode turns on (`true`) or off (`false`).
pub type ToggleCallback = Arc<dyn Fn(bool) + Send + Sync>;
/// Called when a toggle splitter is activated.
pub type CloseCallback = Arc<dyn Fn() + Send + Sync>;

/// Per-pane props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneProps {
    pub hidden: bool,
}

/// Props of a [`Sections`] component.
#[derive(Clone, Default)]
pub struct SectionsProps {
    pub panes: Vec<PaneProps>,
    pub layout: LayoutConfiguration,
    /// Render splitters between visible panes.
    pub splitter: bool,
    pub splitter_type: SplitterType,
    pub animation: AnimationSetting,
    pub on_resize: Option<ResizeCallback>,
    pub on_close: Option<CloseCallback>,
    pub on_toggle_fullscreen: Option<ToggleCallback>,
}

impl fmt::Debug for SectionsProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionsProps")
            .field("panes", &self.panes)
            .field("layout", &self.layout)
            .field("splitter", &self.splitter)
            .field("splitter_type", &self.splitter_type)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

impl SectionsProps {
    /// Props for `count` visible panes.
    pub fn new(count: usize) -> Self {
        Self {
            panes: vec![PaneProps::default(); count],
            ..Default::default()
        }
    }

    pub fn layout(mut self, layout: LayoutConfiguration) -> Self {
        self.layout = layout;
        self
    }

    pub fn hidden(mut self, index: usize, hidden: bool) -> Self {
        if let Some(pane) = self.panes.get_mut(index) {
            pane.hidden = hidden;
        }
        self
    }

    pub fn splitter(mut self, enabled: bool) -> Self {
        self.splitter = enabled;
        self
    }

    pub fn splitter_type(mut self, splitter_type: SplitterType) -> Self {
        self.splitter_type = splitter_type;
        self
    }

    pub fn animation(mut self, animation: impl Into<AnimationSetting>) -> Self {
        self.animation = animation.into();
        self
    }

    pub fn on_resize(mut self, callback: impl Fn(&[PaneSize]) + Send + Sync + 'static) -> Self {
        self.on_resize = Some(Arc::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Arc::new(callback));
        self
    }

    pub fn on_toggle_fullscreen(mut self, callback: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_toggle_fullscreen = Some(Arc::new(callback));
        self
    }

    pub fn hidden_flags(&self) -> Vec<bool> {
        self.panes.iter().map(|pane| pane.hidden).collect()
    }

    pub fn axis(&self) -> Axis {
        Axis::from_vertical(self.layout.vertical)
    }
}

/// Committed layout of every pane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutState {
    /// One record per pane; hidden panes keep their last known geometry.
    pub panes: Vec<PaneSize>,
    /// Pane absorbing the remaining room, if sizes are configured.
    pub dynamic_index: Option<usize>,
    /// Container length in pixels.
    pub container_length: f32,
    /// Minimum sizes do not fit; only one pane is shown.
    pub full_screen: bool,
}

#[derive(Debug)]
struct ActiveResize {
    splitter: usize,
    controller: ResizeController,
}

/// A row or column of resizable panes.
pub struct Sections {
    props: SectionsProps,
    config: Config,
    /// Baseline sizes; updated by configuration changes and resize commits.
    entries: Option<Vec<SizeEntry>>,
    state: LayoutState,
    coordinator: VisibilityCoordinator,
    splitters: Vec<Splitter>,
    session: Option<ActiveResize>,
    pending_moves: FrameScheduler<Vec2>,
    focused_pane: Option<usize>,
}

impl fmt::Debug for Sections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sections")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("resizing", &self.session.is_some())
            .finish_non_exhaustive()
    }
}

impl Sections {
    pub fn new(props: SectionsProps, config: Config) -> Result<Self> {
        check_configuration(&props, &config)?;
        profiling::apply_benchmark_mode(config.benchmark);

        let mut sections = Self {
            entries: props.layout.sizes.clone(),
            props,
            config,
            state: LayoutState::default(),
            coordinator: VisibilityCoordinator::new(),
            splitters: Vec::new(),
            session: None,
            pending_moves: FrameScheduler::new(),
            focused_pane: None,
        };
        sections.rebuild_splitters();
        Ok(sections)
    }

    pub fn props(&self) -> &SectionsProps {
        &self.props
    }

    pub fn layout(&self) -> &LayoutState {
        &self.state
    }

    pub fn splitters(&self) -> &[Splitter] {
        &self.splitters
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    pub fn has_pending_move(&self) -> bool {
        self.pending_moves.has_pending()
    }

    /// First layout against the initial container length.
    pub fn mount(&mut self, container_length: f32, renderer: &dyn PaneRenderer) {
        self.state.container_length = container_length.max(0.0);
        self.recompute(self.state.container_length);
        self.sync_renderer(renderer);
    }

    /// The container changed size. Recomputes synchronously and skips
    /// animation for the next render.
    pub fn window_resized(&mut self, container_length: f32, renderer: &dyn PaneRenderer) {
        // The drag snapshot was measured against the old container.
        if self.session.is_some() {
            tracing::debug!(container_length, "container resized during a drag, cancelling it");
            self.cancel_resize(renderer);
        }
        let previous = self.state.container_length;
        self.state.container_length = container_length.max(0.0);
        self.coordinator.ignore_next_animation();
        self.recompute(previous);
        self.sync_renderer(renderer);
    }

    /// [`window_resized`](Self::window_resized) with the container's full
    /// size; the length along the layout axis is used.
    pub fn container_resized(&mut self, size: Size<f32>, renderer: &dyn PaneRenderer) {
        let length = self.props.axis().length(size);
        self.window_resized(length, renderer);
    }

    /// Replace the props. Size-related changes reset the baseline sizes;
    /// visibility changes only re-run the layout.
    pub fn set_props(&mut self, props: SectionsProps, renderer: &dyn PaneRenderer) -> Result<()> {
        check_configuration(&props, &self.config)?;

        let layout_changed = props.layout != self.props.layout || props.panes.len() != self.props.panes.len();
        let visibility_changed = props.hidden_flags() != self.props.hidden_flags();
        let splitters_changed = props.splitter_type != self.props.splitter_type
            || props.layout.vertical != self.props.layout.vertical;

        // A drag in progress refers to the old splitters and visible panes.
        if (visibility_changed || splitters_changed || layout_changed) && self.session.is_some() {
            tracing::debug!("props changed during a drag, cancelling it");
            self.cancel_resize(renderer);
        }

        if layout_changed {
            self.entries = props.layout.sizes.clone();
        }
        self.props = props;

        if visibility_changed || splitters_changed || layout_changed {
            self.rebuild_splitters();
        }
        if layout_changed || visibility_changed {
            tracing::debug!(layout_changed, visibility_changed, "sections props changed");
            self.recompute(self.state.container_length);
            self.sync_renderer(renderer);
        }
        Ok(())
    }

    /// Remember `pane` as the most recently used one; it is the pane shown in
    /// full-screen mode.
    pub fn focus_pane(&mut self, pane: usize) {
        if pane < self.props.panes.len() {
            self.focused_pane = Some(pane);
        }
    }

    /// Pane shown while in full-screen mode.
    pub fn active_pane(&self) -> Option<usize> {
        let visible = visible_indices(&self.props.hidden_flags());
        [self.focused_pane, self.state.dynamic_index]
            .into_iter()
            .flatten()
            .find(|pane| visible.contains(pane))
            .or_else(|| visible.first().copied())
    }

    /// Styles for the current committed state.
    pub fn render(&mut self) -> RenderPlan {
        let hidden = self.props.hidden_flags();
        let pressed: Vec<bool> = self.splitters.iter().map(Splitter::is_pressed).collect();
        let full_screen_pane = if self.state.full_screen {
            self.active_pane()
        } else {
            None
        };

        self.coordinator.render(&RenderInput {
            axis: self.props.axis(),
            container_length: self.state.container_length,
            panes: &self.state.panes,
            hidden: &hidden,
            animation: &self.props.animation,
            full_screen_pane,
            splitters: SplitterOptions {
                enabled: self.props.splitter,
                splitter_type: self.props.splitter_type,
                pressed: &pressed,
            },
        })
    }

    /// Pointer pressed on splitter `index`. Returns whether a resize started.
    pub fn pointer_down(&mut self, index: usize, position: Vec2, renderer: &dyn PaneRenderer) -> Result<bool> {
        self.check_splitter(index)?;
        if !self.can_resize() {
            return Ok(false);
        }

        let Some(controller) = self.start_controller(index, renderer) else {
            return Ok(false);
        };
        if self.splitters[index].pointer_down(position, renderer) != SplitterAction::ResizeStart {
            return Ok(false);
        }

        self.focused_pane = Some(controller.leading_pane());
        self.session = Some(ActiveResize {
            splitter: index,
            controller,
        });
        Ok(true)
    }

    /// Pointer moved during a drag. The move is applied on the next
    /// [`animation_frame`](Self::animation_frame); a newer move replaces it.
    pub fn pointer_move(&mut self, position: Vec2) {
        if self.session.is_some() {
            self.pending_moves.request(position);
        }
    }

    /// Display frame callback: applies the latest pending pointer move.
    ///
    /// Returns whether the layout changed.
    pub fn animation_frame(&mut self, renderer: &dyn PaneRenderer) -> bool {
        profiling::new_frame();
        let Some(position) = self.pending_moves.take_ready() else {
            return false;
        };
        let Some(active) = self.session.as_mut() else {
            return false;
        };

        let controller = &mut active.controller;
        self.splitters
            .get_mut(active.splitter)
            .is_some_and(|splitter| splitter.pointer_move(position, |delta| controller.move_to(delta, renderer)))
    }

    /// Pointer released. Commits the drag and returns the new sizes when
    /// anything changed.
    pub fn pointer_up(&mut self, renderer: &dyn PaneRenderer) -> Option<Vec<PaneSize>> {
        self.end_drag(renderer)
    }

    /// Pointer left the document mid-drag; handled like a release.
    pub fn pointer_leave(&mut self, renderer: &dyn PaneRenderer) -> Option<Vec<PaneSize>> {
        self.end_drag(renderer)
    }

    /// Abort the drag and restore the geometry it started from.
    pub fn cancel_resize(&mut self, renderer: &dyn PaneRenderer) {
        self.pending_moves.cancel();
        if let Some(active) = self.session.take() {
            if let Some(splitter) = self.splitters.get_mut(active.splitter) {
                splitter.pointer_leave(renderer);
            }
            active.controller.cancel(renderer);
        }
    }

    /// Key pressed on splitter `index`. Returns whether the key did anything.
    pub fn key_down(&mut self, index: usize, key: SplitterKey, renderer: &dyn PaneRenderer) -> Result<bool> {
        self.check_splitter(index)?;
        if !self.props.splitter || self.session.is_some() {
            return Ok(false);
        }

        match self.splitters[index].key_down(key, self.config.keyboard_step) {
            SplitterAction::KeyboardStep(step) => Ok(self.keyboard_resize(index, step, renderer)),
            SplitterAction::Toggle { pressed } => {
                self.fire_close(pressed);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Click on splitter `index`; only toggle splitters react.
    pub fn click(&mut self, index: usize) -> Result<bool> {
        self.check_splitter(index)?;
        if !self.props.splitter {
            return Ok(false);
        }
        match self.splitters[index].click() {
            SplitterAction::Toggle { pressed } => {
                self.fire_close(pressed);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Write the committed geometry of every visible pane to the renderer.
    pub fn sync_renderer(&self, renderer: &dyn PaneRenderer) {
        let container = self.state.container_length;
        let visible = visible_indices(&self.props.hidden_flags());
        let share = container / visible.len().max(1) as f32;

        for (position, pane) in visible.iter().enumerate() {
            let geometry = match self.state.panes.get(*pane) {
                Some(size) if size.size.is_some() => {
                    let to_px = |value: Option<f32>| {
                        let value = value.unwrap_or(0.0);
                        if size.percentage { value * container / 100.0 } else { value }
                    };
                    PaneGeometry::new(to_px(size.start), to_px(size.size).max(0.0), to_px(size.end))
                }
                _ => {
                    let start = position as f32 * share;
                    PaneGeometry::new(start, share, container - start - share)
                }
            };
            renderer.set_pane_geometry(*pane, geometry);
        }
    }

    fn can_resize(&self) -> bool {
        self.props.splitter
            && self.props.splitter_type == SplitterType::Resize
            && !self.state.full_screen
            && self.session.is_none()
    }

    fn check_splitter(&self, index: usize) -> Result<()> {
        if index < self.splitters.len() {
            Ok(())
        } else {
            Err(SectionsError::SplitterOutOfRange {
                index,
                splitters: self.splitters.len(),
            })
        }
    }

    fn start_controller(&self, boundary: usize, renderer: &dyn PaneRenderer) -> Option<ResizeController> {
        let visible = visible_indices(&self.props.hidden_flags());
        let mins = self.min_sizes(&visible);
        ResizeController::start(boundary, visible, &mins, self.state.container_length, renderer)
    }

    /// A full start / move / end cycle for one key press.
    fn keyboard_resize(&mut self, index: usize, step: f32, renderer: &dyn PaneRenderer) -> bool {
        if !self.can_resize() {
            return false;
        }
        let Some(mut controller) = self.start_controller(index, renderer) else {
            return false;
        };
        self.focused_pane = Some(controller.leading_pane());

        if !controller.move_to(step, renderer) {
            return false;
        }
        controller
            .finish()
            .is_some_and(|sections| self.commit(sections).is_some())
    }

    fn end_drag(&mut self, renderer: &dyn PaneRenderer) -> Option<Vec<PaneSize>> {
        // The latest pointer position still counts.
        self.animation_frame(renderer);

        let active = self.session.take()?;
        if let Some(splitter) = self.splitters.get_mut(active.splitter) {
            splitter.pointer_up(renderer);
        }
        let sections = active.controller.finish()?;
        self.commit(sections)
    }

    /// Copy session results into the committed state and notify the caller.
    fn commit(&mut self, sections: Vec<(usize, PaneSize)>) -> Option<Vec<PaneSize>> {
        let container = self.state.container_length;
        let percentage = self.props.layout.sizes_as_percents;
        let pane_count = self.props.panes.len();

        if self.state.panes.len() < pane_count {
            self.state.panes.resize(pane_count, PaneSize::default());
        }
        let entries = self.entries.get_or_insert_with(|| {
            let fallback = if percentage {
                100.0 / pane_count.max(1) as f32
            } else {
                container / pane_count.max(1) as f32
            };
            vec![SizeEntry::Fixed(fallback); pane_count]
        });
        if entries.len() < pane_count {
            entries.resize(pane_count, SizeEntry::Fixed(0.0));
        }

        let mut changed = false;
        for (pane, section) in sections {
            let section = if percentage {
                section.map(true, |value| px_to_percent(value, container))
            } else {
                section
            };
            changed |= self.state.panes[pane].differs_from(&section);
            self.state.panes[pane] = section;
            // The dynamic pane keeps absorbing the remainder after a commit.
            if !entries[pane].is_dynamic() {
                entries[pane] = SizeEntry::Resolved(section);
            }
        }

        if !changed {
            return None;
        }

        tracing::debug!(sizes = ?self.state.panes, "sections resized");
        if let Some(on_resize) = &self.props.on_resize {
            on_resize(&self.state.panes);
        }
        Some(self.state.panes.clone())
    }

    /// Re-run the recalculation engine over the visible panes.
    fn recompute(&mut self, previous_length: f32) {
        let container = self.state.container_length;
        let percentage = self.props.layout.sizes_as_percents;
        let pane_count = self.props.panes.len();
        let visible = visible_indices(&self.props.hidden_flags());
        let mins = self.min_sizes(&visible);

        let mut panes: Vec<PaneSize> = (0..pane_count)
            .map(|pane| self.last_known(pane, percentage))
            .collect();

        let full_screen = match &self.entries {
            Some(entries) => {
                let visible_entries: Vec<SizeEntry> = visible
                    .iter()
                    .map(|pane| entries.get(*pane).copied().unwrap_or(SizeEntry::Fixed(0.0)))
                    .collect();
                let outcome = compute_layout(&LayoutRequest {
                    container_length: container,
                    previous_container_length: previous_length,
                    entries: &visible_entries,
                    min_sizes: &mins,
                    percentage,
                });
                for (position, pane) in visible.iter().enumerate() {
                    panes[*pane] = outcome.panes[position];
                }
                self.state.dynamic_index = outcome.dynamic_index.map(|position| visible[position]);
                outcome.full_screen
            }
            None => {
                for pane in &visible {
                    panes[*pane] = PaneSize {
                        percentage,
                        ..PaneSize::default()
                    };
                }
                self.state.dynamic_index = None;
                mins.iter().sum::<f32>() > container
            }
        };

        self.state.panes = panes;
        self.set_full_screen(full_screen);
    }

    /// Geometry a pane had before this pass, or what its entry implies.
    fn last_known(&self, pane: usize, percentage: bool) -> PaneSize {
        if let Some(known) = self.state.panes.get(pane).filter(|known| known.size.is_some()) {
            return *known;
        }
        match self.entries.as_ref().and_then(|entries| entries.get(pane)) {
            Some(SizeEntry::Fixed(size)) => PaneSize::with_size(*size, percentage),
            Some(SizeEntry::Resolved(resolved)) => *resolved,
            _ => PaneSize {
                percentage,
                ..PaneSize::default()
            },
        }
    }

    fn min_sizes(&self, panes: &[usize]) -> Vec<f32> {
        panes
            .iter()
            .map(|pane| {
                self.props
                    .layout
                    .min_section_size
                    .for_pane(*pane, self.config.default_min_section_size)
            })
            .collect()
    }

    fn set_full_screen(&mut self, full_screen: bool) {
        if self.state.full_screen == full_screen {
            return;
        }
        self.state.full_screen = full_screen;
        tracing::info!(full_screen, container = self.state.container_length, "full-screen mode changed");
        if let Some(callback) = &self.props.on_toggle_fullscreen {
            callback(full_screen);
        }
    }

    fn fire_close(&self, pressed: bool) {
        tracing::debug!(pressed, "toggle splitter activated");
        if let Some(on_close) = &self.props.on_close {
            on_close();
        }
    }

    fn rebuild_splitters(&mut self) {
        let visible = self.props.panes.iter().filter(|pane| !pane.hidden).count();
        let count = visible.saturating_sub(1);
        let axis = self.props.axis();
        let splitter_type = self.props.splitter_type;

        // Rebuilding resets toggle state, so keep splitters that still match.
        let unchanged = self.splitters.len() == count
            && self
                .splitters
                .iter()
                .all(|splitter| splitter.splitter_type() == splitter_type && splitter.axis() == axis);
        if !unchanged {
            self.splitters = (0..count).map(|_| Splitter::new(splitter_type, axis)).collect();
        }
    }
}

fn check_configuration(props: &SectionsProps, config: &Config) -> Result<()> {
    match props.layout.validate(props.panes.len()) {
        Ok(()) => Ok(()),
        Err(err) if config.strict_validation => Err(err),
        Err(err) => {
            tracing::warn!("sections configuration: {}", err);
            Ok(())
        }
    }
}
