//! Error types for the sections layout engine.
//!
//! Layout computation itself never fails; these errors come from explicit
//! configuration validation and from input entry points given bad indices.

use std::fmt;

/// Errors reported by validation and input entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionsError {
    /// More than one size entry was marked dynamic.
    MultipleDynamicPanes {
        /// Indices of every dynamic entry, in order.
        indices: Vec<usize>,
    },

    /// The size list does not have one entry per pane.
    SizeCountMismatch {
        /// Number of managed panes.
        panes: usize,
        /// Number of size entries supplied.
        sizes: usize,
    },

    /// The per-pane minimum list does not have one entry per pane.
    MinSizeCountMismatch {
        /// Number of managed panes.
        panes: usize,
        /// Number of minimums supplied.
        min_sizes: usize,
    },

    /// A splitter index outside the rendered splitters.
    SplitterOutOfRange {
        /// The requested splitter.
        index: usize,
        /// Number of splitters currently rendered.
        splitters: usize,
    },

    /// A length that must not be negative was.
    NegativeLength {
        /// The offending value.
        value: f32,
    },
}

impl fmt::Display for SectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionsError::MultipleDynamicPanes { indices } => {
                write!(f, "Several dynamic panes configured at indices {:?}", indices)
            }
            SectionsError::SizeCountMismatch { panes, sizes } => {
                write!(f, "Expected {} size entries, got {}", panes, sizes)
            }
            SectionsError::MinSizeCountMismatch { panes, min_sizes } => {
                write!(f, "Expected {} minimum sizes, got {}", panes, min_sizes)
            }
            SectionsError::SplitterOutOfRange { index, splitters } => {
                write!(f, "Splitter {} out of range ({} splitters)", index, splitters)
            }
            SectionsError::NegativeLength { value } => {
                write!(f, "Negative length: {}", value)
            }
        }
    }
}

impl std::error::Error for SectionsError {}

/// Result alias for section operations.
pub type Result<T> = std::result::Result<T, SectionsError>;
