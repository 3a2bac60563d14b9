/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// Pointer positions handed to splitters are [`Vec2`]s; only the component
/// along the layout [`Axis`](crate::geometry::Axis) is used.
///
/// # Examples
///
/// ```
/// use uisections_core::math::Vec2;
///
/// let start = Vec2::new(100.0, 40.0);
/// let current = Vec2::new(50.0, 42.0);
/// let delta = current - start;
/// assert_eq!(delta.x, -50.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::{Vec2, vec2};

/// Interop with other math libraries through `mint`.
pub fn to_mint(v: Vec2) -> mint::Vector2<f32> {
    v.into()
}

/// Convert a `mint` vector coming from a host toolkit.
pub fn from_mint(v: mint::Vector2<f32>) -> Vec2 {
    v.into()
}
