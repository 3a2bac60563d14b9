//! Per-pane and per-splitter style records.
//!
//! Styles are plain ordered key/value records produced by the visibility
//! coordinator, so hosts can write them to inline styles as-is and tests can
//! check single properties.

use std::fmt;

use bitflags::bitflags;
use indexmap::IndexMap;
use uisections_core::geometry::Axis;

use crate::length::Length;

bitflags! {
    /// State classes toggled on a pane element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PaneClass: u8 {
        /// Pane is pushed off-screen.
        const HIDDEN      = 1 << 0;
        /// Position changes transition smoothly.
        const ANIMATED    = 1 << 1;
        /// Pane fills the container because the minimums do not fit.
        const FULL_SCREEN = 1 << 2;
        /// Layout runs along the vertical axis.
        const VERTICAL    = 1 << 3;
    }
}

impl PaneClass {
    /// CSS class names for the set flags, in a stable order.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names = vec!["sections__item"];
        if self.contains(PaneClass::HIDDEN) {
            names.push("sections__item--hidden");
        }
        if self.contains(PaneClass::ANIMATED) {
            names.push("sections__item--animated");
        }
        if self.contains(PaneClass::FULL_SCREEN) {
            names.push("sections__item--full");
        }
        if self.contains(PaneClass::VERTICAL) {
            names.push("sections__item--vertical");
        }
        names
    }
}

/// Inline position properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Left,
    Right,
    Top,
    Bottom,
}

impl StyleProperty {
    /// Property holding the offset from the leading edge.
    pub fn leading(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => StyleProperty::Left,
            Axis::Vertical => StyleProperty::Top,
        }
    }

    /// Property holding the offset from the trailing edge.
    pub fn trailing(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => StyleProperty::Right,
            Axis::Vertical => StyleProperty::Bottom,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleProperty::Left => "left",
            StyleProperty::Right => "right",
            StyleProperty::Top => "top",
            StyleProperty::Bottom => "bottom",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computed style of one pane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaneStyle {
    pub properties: IndexMap<StyleProperty, Length>,
    pub classes: PaneClass,
}

impl PaneStyle {
    /// Style placing a pane between `start` and `end` offsets.
    pub fn positioned(axis: Axis, start: Length, end: Length, classes: PaneClass) -> Self {
        let mut properties = IndexMap::with_capacity(2);
        properties.insert(StyleProperty::leading(axis), start);
        properties.insert(StyleProperty::trailing(axis), end);
        let classes = if axis.is_vertical() {
            classes | PaneClass::VERTICAL
        } else {
            classes
        };
        Self { properties, classes }
    }

    pub fn get(&self, property: StyleProperty) -> Option<Length> {
        self.properties.get(&property).copied()
    }

    pub fn is_hidden(&self) -> bool {
        self.classes.contains(PaneClass::HIDDEN)
    }

    pub fn is_animated(&self) -> bool {
        self.classes.contains(PaneClass::ANIMATED)
    }

    /// Inline CSS text, e.g. `left: 0px; right: 600px`.
    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Accessibility role of a splitter element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterRole {
    /// Resize splitter, `role="separator"`.
    Separator,
    /// Toggle splitter, `role="button"` with `aria-pressed`.
    Button { pressed: bool },
}

impl SplitterRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitterRole::Separator => "separator",
            SplitterRole::Button { .. } => "button",
        }
    }

    pub fn aria_pressed(&self) -> Option<bool> {
        match self {
            SplitterRole::Separator => None,
            SplitterRole::Button { pressed } => Some(*pressed),
        }
    }
}

/// Where and how a splitter is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterPlacement {
    /// Pane on the leading side.
    pub leading_pane: usize,
    /// Pane on the trailing side.
    pub trailing_pane: usize,
    /// Offset from the leading edge of the container.
    pub position: Length,
    pub role: SplitterRole,
    pub hidden: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positioned_properties_follow_axis() {
        let style = PaneStyle::positioned(
            Axis::Horizontal,
            Length::px(0.0),
            Length::px(600.0),
            PaneClass::empty(),
        );
        assert_eq!(style.get(StyleProperty::Left), Some(Length::px(0.0)));
        assert_eq!(style.get(StyleProperty::Right), Some(Length::px(600.0)));
        assert_eq!(style.to_css(), "left: 0px; right: 600px");

        let style = PaneStyle::positioned(Axis::Vertical, Length::percent(0.0), Length::percent(50.0), PaneClass::HIDDEN);
        assert_eq!(style.to_css(), "top: 0%; bottom: 50%");
        assert!(style.classes.contains(PaneClass::VERTICAL));
        assert!(style.is_hidden());
    }

    #[test]
    fn test_class_names() {
        let classes = PaneClass::HIDDEN | PaneClass::ANIMATED;
        assert_eq!(
            classes.class_names(),
            vec!["sections__item", "sections__item--hidden", "sections__item--animated"]
        );
    }

    #[test]
    fn test_splitter_role() {
        assert_eq!(SplitterRole::Separator.as_str(), "separator");
        assert_eq!(SplitterRole::Separator.aria_pressed(), None);
        assert_eq!(SplitterRole::Button { pressed: true }.aria_pressed(), Some(true));
    }
}
