use crate::math::Vec2;

/// Container size reported by the host window or element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

/// Axis along which sections are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Sections side by side, lengths are widths.
    #[default]
    Horizontal,
    /// Sections stacked, lengths are heights.
    Vertical,
}

impl Axis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Component of a pointer position along this axis.
    pub fn component(&self, point: Vec2) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Length of a container along this axis.
    pub fn length(&self, size: Size<f32>) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_component() {
        let point = Vec2::new(12.0, 34.0);
        assert_eq!(Axis::Horizontal.component(point), 12.0);
        assert_eq!(Axis::Vertical.component(point), 34.0);
    }

    #[test]
    fn test_axis_length() {
        let size = Size::new(800.0, 600.0);
        assert_eq!(Axis::from_vertical(false).length(size), 800.0);
        assert_eq!(Axis::from_vertical(true).length(size), 600.0);
    }
}
