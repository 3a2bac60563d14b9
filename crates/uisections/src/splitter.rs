//! Splitter input surface.
//!
//! A [`Splitter`] sits between two visible panes and turns raw pointer and
//! keyboard input into resize or toggle actions. It owns no layout state: the
//! resize itself is delegated through the `on_resize` callback, whose return
//! value decides whether the splitter moves visually.

use uisections_core::geometry::Axis;
use uisections_core::math::Vec2;

use crate::renderer::PaneRenderer;

/// How a splitter reacts to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitterType {
    /// Drag or arrow keys resize the neighbouring panes.
    #[default]
    Resize,
    /// Click or Enter flips a show/hide state.
    Toggle,
}

/// Keys a splitter responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Other,
}

impl SplitterKey {
    /// Direction of a resize key: -1 towards the leading edge, +1 towards the trailing edge.
    pub fn resize_direction(&self) -> Option<f32> {
        match self {
            SplitterKey::ArrowLeft | SplitterKey::ArrowUp => Some(-1.0),
            SplitterKey::ArrowRight | SplitterKey::ArrowDown => Some(1.0),
            SplitterKey::Enter | SplitterKey::Other => None,
        }
    }
}

/// Outcome of a discrete splitter input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitterAction {
    /// Input ignored.
    None,
    /// A pointer drag began.
    ResizeStart,
    /// A pointer drag ended (released, left the document or cancelled).
    ResizeEnd,
    /// One keyboard resize step of the given signed length.
    KeyboardStep(f32),
    /// The toggle state flipped.
    Toggle {
        /// New pressed state.
        pressed: bool,
    },
}

/// Pointer drag in progress, tracked along the layout axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SplitterDrag {
    start: f32,
    current: f32,
}

/// Draggable / keyboard-operable element between two panes.
#[derive(Debug, Clone)]
pub struct Splitter {
    splitter_type: SplitterType,
    axis: Axis,
    drag: Option<SplitterDrag>,
    /// Visual offset from the resting position while dragging.
    offset: f32,
    /// Toggle state, exposed as `aria-pressed`.
    pressed: bool,
}

impl Splitter {
    pub fn new(splitter_type: SplitterType, axis: Axis) -> Self {
        Self {
            splitter_type,
            axis,
            drag: None,
            offset: 0.0,
            pressed: false,
        }
    }

    pub fn resize(axis: Axis) -> Self {
        Self::new(SplitterType::Resize, axis)
    }

    pub fn toggle(axis: Axis) -> Self {
        Self::new(SplitterType::Toggle, axis)
    }

    pub fn splitter_type(&self) -> SplitterType {
        self.splitter_type
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Begin a drag. Attaches document listeners and the shielding overlay
    /// for the duration of the drag.
    pub fn pointer_down(&mut self, position: Vec2, renderer: &dyn PaneRenderer) -> SplitterAction {
        if self.splitter_type != SplitterType::Resize || self.drag.is_some() {
            return SplitterAction::None;
        }

        let start = self.axis.component(position);
        self.drag = Some(SplitterDrag { start, current: start });
        self.offset = 0.0;
        renderer.set_document_listeners(true);
        renderer.set_drag_overlay(true);
        SplitterAction::ResizeStart
    }

    /// Track the pointer. `on_resize` receives the delta from the drag start
    /// and reports whether it was accepted; only accepted deltas move the
    /// splitter.
    ///
    /// Returns whether the delta was accepted.
    pub fn pointer_move(&mut self, position: Vec2, on_resize: impl FnOnce(f32) -> bool) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        drag.current = self.axis.component(position);
        let delta = drag.current - drag.start;

        let accepted = on_resize(delta);
        if accepted {
            self.offset = delta;
        }
        accepted
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, renderer: &dyn PaneRenderer) -> SplitterAction {
        self.teardown(renderer)
    }

    /// Pointer left the document mid-drag; ends the drag like a release.
    pub fn pointer_leave(&mut self, renderer: &dyn PaneRenderer) -> SplitterAction {
        self.teardown(renderer)
    }

    /// Click on a toggle splitter.
    pub fn click(&mut self) -> SplitterAction {
        match self.splitter_type {
            SplitterType::Toggle => self.flip(),
            SplitterType::Resize => SplitterAction::None,
        }
    }

    /// Key press while the splitter has focus.
    pub fn key_down(&mut self, key: SplitterKey, step: f32) -> SplitterAction {
        match (self.splitter_type, key) {
            (SplitterType::Toggle, SplitterKey::Enter) => self.flip(),
            (SplitterType::Resize, key) => key
                .resize_direction()
                .map_or(SplitterAction::None, |direction| SplitterAction::KeyboardStep(direction * step)),
            (SplitterType::Toggle, _) => SplitterAction::None,
        }
    }

    fn flip(&mut self) -> SplitterAction {
        self.pressed = !self.pressed;
        SplitterAction::Toggle { pressed: self.pressed }
    }

    /// Single exit path for every way a drag can end.
    fn teardown(&mut self, renderer: &dyn PaneRenderer) -> SplitterAction {
        if self.drag.take().is_none() {
            return SplitterAction::None;
        }
        self.offset = 0.0;
        renderer.set_drag_overlay(false);
        renderer.set_document_listeners(false);
        SplitterAction::ResizeEnd
    }
}
