//! Pixel and percent lengths used in pane position styles.

use std::fmt;

/// A length written into an inline position style.
///
/// # Examples
/// ```
/// use uisections::Length;
///
/// assert_eq!(Length::Px(400.0).to_string(), "400px");
/// assert_eq!(Length::Percent(50.0).to_string(), "50%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Fixed pixel value
    Px(f32),
    /// Percentage of the container (0.0 - 100.0)
    Percent(f32),
}

impl Length {
    /// Create a pixel length.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create a percentage length.
    pub fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Create a length in whichever unit `percentage` selects.
    pub fn in_unit(value: f32, percentage: bool) -> Self {
        if percentage {
            Self::Percent(value)
        } else {
            Self::Px(value)
        }
    }

    /// Check if this is a fixed pixel value.
    pub fn is_px(&self) -> bool {
        matches!(self, Length::Px(_))
    }

    /// Check if this is a percentage value.
    pub fn is_percent(&self) -> bool {
        matches!(self, Length::Percent(_))
    }

    /// Raw numeric value regardless of unit.
    pub fn value(&self) -> f32 {
        match self {
            Length::Px(v) | Length::Percent(v) => *v,
        }
    }

    /// Resolve to pixels against a container length.
    pub fn to_px(&self, container: f32) -> f32 {
        match self {
            Length::Px(v) => *v,
            Length::Percent(v) => v * container / 100.0,
        }
    }

    /// Negated length in the same unit.
    pub fn negate(self) -> Self {
        match self {
            Length::Px(v) => Length::Px(-v),
            Length::Percent(v) => Length::Percent(-v),
        }
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Length::Px(value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 would render as "-0px"
        let clean = |v: f32| if v == 0.0 { 0.0 } else { v };
        match self {
            Length::Px(v) => write!(f, "{}px", clean(*v)),
            Length::Percent(v) => write!(f, "{}%", clean(*v)),
        }
    }
}

/// Convert a pixel value into percent of `container`.
pub(crate) fn px_to_percent(value: f32, container: f32) -> f32 {
    if container > 0.0 {
        value * 100.0 / container
    } else {
        0.0
    }
}
