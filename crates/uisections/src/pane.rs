//! Pane size records and the caller-facing layout configuration.

use crate::error::{Result, SectionsError};

/// Size and position of one managed pane along the layout axis.
///
/// Units are pixels, or percent of the container when `percentage` is set.
/// Whenever `start`, `end` and `size` are all known they satisfy
/// `start + size + end == container`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaneSize {
    /// Offset from the leading edge of the container.
    pub start: Option<f32>,
    /// Offset from the trailing edge of the container.
    pub end: Option<f32>,
    /// Length along the layout axis.
    pub size: Option<f32>,
    /// Whether the values are percent of the container length.
    pub percentage: bool,
}

impl PaneSize {
    /// A pane with only a known length.
    pub fn with_size(size: f32, percentage: bool) -> Self {
        Self {
            start: None,
            end: None,
            size: Some(size),
            percentage,
        }
    }

    /// A fully positioned pane.
    pub fn positioned(start: f32, size: f32, end: f32, percentage: bool) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            size: Some(size),
            percentage,
        }
    }

    /// Length of the pane, re-derived from `start`/`end` against
    /// `container` when `size` itself is missing.
    pub fn resolved_size(&self, container: f32) -> Option<f32> {
        self.size.or(match (self.start, self.end) {
            (Some(start), Some(end)) => Some(container - start - end),
            _ => None,
        })
    }

    /// Whether any of the positional fields differ beyond float noise.
    pub fn differs_from(&self, other: &PaneSize) -> bool {
        fn differs(a: Option<f32>, b: Option<f32>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => (a - b).abs() > f32::EPSILON * 16.0 * a.abs().max(1.0),
                (None, None) => false,
                _ => true,
            }
        }
        differs(self.start, other.start) || differs(self.end, other.end) || differs(self.size, other.size)
    }

    /// Convert every field with `convert`, keeping `None`s.
    pub(crate) fn map(&self, percentage: bool, convert: impl Fn(f32) -> f32) -> PaneSize {
        PaneSize {
            start: self.start.map(&convert),
            end: self.end.map(&convert),
            size: self.size.map(&convert),
            percentage,
        }
    }
}

/// One caller-supplied size entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeEntry {
    /// A target length in the layout's unit.
    Fixed(f32),
    /// The pane that absorbs whatever room the others leave.
    Dynamic,
    /// A pane size already produced by a previous layout pass.
    Resolved(PaneSize),
}

impl SizeEntry {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, SizeEntry::Dynamic)
    }
}

impl From<f32> for SizeEntry {
    fn from(value: f32) -> Self {
        SizeEntry::Fixed(value)
    }
}

impl From<Option<f32>> for SizeEntry {
    fn from(value: Option<f32>) -> Self {
        value.map_or(SizeEntry::Dynamic, SizeEntry::Fixed)
    }
}

impl From<PaneSize> for SizeEntry {
    fn from(value: PaneSize) -> Self {
        SizeEntry::Resolved(value)
    }
}

/// Minimum pane length in pixels, uniform or per pane.
#[derive(Debug, Clone, PartialEq)]
pub enum MinSectionSize {
    Uniform(f32),
    PerPane(Vec<f32>),
}

impl Default for MinSectionSize {
    fn default() -> Self {
        MinSectionSize::Uniform(0.0)
    }
}

impl MinSectionSize {
    /// Minimum for pane `index`, or `fallback` when a per-pane list is too short.
    pub fn for_pane(&self, index: usize, fallback: f32) -> f32 {
        match self {
            MinSectionSize::Uniform(min) => *min,
            MinSectionSize::PerPane(mins) => mins.get(index).copied().unwrap_or(fallback),
        }
    }
}

impl From<f32> for MinSectionSize {
    fn from(value: f32) -> Self {
        MinSectionSize::Uniform(value)
    }
}

impl From<Vec<f32>> for MinSectionSize {
    fn from(value: Vec<f32>) -> Self {
        MinSectionSize::PerPane(value)
    }
}

/// Caller-supplied layout configuration, read-only per render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutConfiguration {
    /// Target sizes; `None` leaves every pane at an even share.
    pub sizes: Option<Vec<SizeEntry>>,
    pub min_section_size: MinSectionSize,
    pub sizes_as_percents: bool,
    pub vertical: bool,
}

impl LayoutConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SizeEntry>,
    {
        self.sizes = Some(sizes.into_iter().map(Into::into).collect());
        self
    }

    pub fn min_section_size(mut self, min: impl Into<MinSectionSize>) -> Self {
        self.min_section_size = min.into();
        self
    }

    pub fn sizes_as_percents(mut self, percents: bool) -> Self {
        self.sizes_as_percents = percents;
        self
    }

    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Indices of every [`SizeEntry::Dynamic`] entry.
    pub fn dynamic_indices(&self) -> Vec<usize> {
        self.sizes
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, entry)| entry.is_dynamic())
            .map(|(index, _)| index)
            .collect()
    }

    /// Check the configuration against the number of managed panes.
    pub fn validate(&self, pane_count: usize) -> Result<()> {
        if let Some(sizes) = &self.sizes {
            if sizes.len() != pane_count {
                return Err(SectionsError::SizeCountMismatch {
                    panes: pane_count,
                    sizes: sizes.len(),
                });
            }
            for entry in sizes {
                if let SizeEntry::Fixed(value) = entry
                    && *value < 0.0
                {
                    return Err(SectionsError::NegativeLength { value: *value });
                }
            }
        }

        let dynamic = self.dynamic_indices();
        if dynamic.len() > 1 {
            return Err(SectionsError::MultipleDynamicPanes { indices: dynamic });
        }

        match &self.min_section_size {
            MinSectionSize::PerPane(mins) if mins.len() != pane_count => {
                Err(SectionsError::MinSizeCountMismatch {
                    panes: pane_count,
                    min_sizes: mins.len(),
                })
            }
            MinSectionSize::PerPane(mins) => match mins.iter().find(|min| **min < 0.0) {
                Some(min) => Err(SectionsError::NegativeLength { value: *min }),
                None => Ok(()),
            },
            MinSectionSize::Uniform(min) if *min < 0.0 => {
                Err(SectionsError::NegativeLength { value: *min })
            }
            MinSectionSize::Uniform(_) => Ok(()),
        }
    }
}
