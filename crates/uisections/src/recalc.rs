//! Size recalculation engine.
//!
//! Pure functions turning size entries, minimum sizes and a container length
//! into a consistent list of [`PaneSize`]s. Used on mount, when the caller
//! changes the configuration and when the container is resized.
//!
//! The engine works in "units": pixels, or percent of the container when the
//! layout is percentage based (the container is then 100 units long).
//! Minimum sizes are always given in pixels and converted as needed.

use uisections_core::profiling::profile_function;

use crate::length::px_to_percent;
use crate::pane::{PaneSize, SizeEntry};

/// Everything one layout pass needs.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRequest<'a> {
    /// Current container length in pixels.
    pub container_length: f32,
    /// Container length the `Resolved` entries were computed against.
    pub previous_container_length: f32,
    /// One entry per laid-out pane.
    pub entries: &'a [SizeEntry],
    /// Minimum length in pixels, one per entry.
    pub min_sizes: &'a [f32],
    /// Whether entries are percent of the container.
    pub percentage: bool,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    pub panes: Vec<PaneSize>,
    /// Index (into the entries) of the pane that absorbed the remainder.
    pub dynamic_index: Option<usize>,
    /// The container cannot fit every minimum at once.
    pub full_screen: bool,
}

/// Position of the dynamic entry. When several entries are dynamic the last
/// one wins.
pub fn resolve_dynamic_index(entries: &[SizeEntry]) -> Option<usize> {
    let mut found = None;
    let mut count = 0usize;
    for (index, entry) in entries.iter().enumerate() {
        if entry.is_dynamic() {
            found = Some(index);
            count += 1;
        }
    }
    if count > 1 {
        tracing::warn!(count, chosen = ?found, "several dynamic panes configured, using the last");
    }
    found
}

/// Lay out `request.entries` along a container.
pub fn compute_layout(request: &LayoutRequest<'_>) -> LayoutOutcome {
    profile_function!();

    let entries = request.entries;
    if entries.is_empty() {
        return LayoutOutcome {
            panes: Vec::new(),
            dynamic_index: None,
            full_screen: false,
        };
    }

    let container = request.container_length.max(0.0);
    let total = if request.percentage { 100.0 } else { container };
    let dynamic_index = resolve_dynamic_index(entries).unwrap_or(0);

    let mut sizes: Vec<f32> = entries
        .iter()
        .map(|entry| entry_length(entry, request))
        .collect();

    let others: f32 = sizes
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != dynamic_index)
        .map(|(_, size)| *size)
        .sum();
    // May go negative when the container shrank past capacity.
    sizes[dynamic_index] = total - others;

    let mins_px: Vec<f32> = (0..entries.len())
        .map(|index| request.min_sizes.get(index).copied().unwrap_or(0.0).max(0.0))
        .collect();
    let full_screen = mins_px.iter().sum::<f32>() > container;

    if full_screen {
        tracing::debug!(container, "not enough room for every minimum size");
        // No repair runs, so the dynamic remainder can still be negative.
        for size in &mut sizes {
            *size = size.max(0.0);
        }
    } else {
        let mins: Vec<f32> = if request.percentage {
            mins_px.iter().map(|min| px_to_percent(*min, container)).collect()
        } else {
            mins_px
        };
        enforce_min_sizes(&mut sizes, &mins);
    }

    tracing::trace!(container, dynamic_index, ?sizes, "layout computed");

    LayoutOutcome {
        panes: accumulate_offsets(&sizes, request.percentage),
        dynamic_index: Some(dynamic_index),
        full_screen,
    }
}

/// Length of a non-dynamic entry in the request's unit.
fn entry_length(entry: &SizeEntry, request: &LayoutRequest<'_>) -> f32 {
    match entry {
        SizeEntry::Fixed(value) => *value,
        SizeEntry::Dynamic => 0.0,
        SizeEntry::Resolved(pane) => {
            let previous = if pane.percentage {
                100.0
            } else {
                request.previous_container_length
            };
            let length = pane.resolved_size(previous).unwrap_or(0.0);
            match (pane.percentage, request.percentage) {
                (false, true) => px_to_percent(length, request.container_length),
                (true, false) => length * request.container_length / 100.0,
                _ => length,
            }
        }
    }
}

/// Build pane records from sizes: `start` is the sum of everything before a
/// pane, `end` the sum of everything after it.
pub fn accumulate_offsets(sizes: &[f32], percentage: bool) -> Vec<PaneSize> {
    let mut panes: Vec<PaneSize> = Vec::with_capacity(sizes.len());
    let mut start = 0.0;
    for size in sizes {
        panes.push(PaneSize {
            start: Some(start),
            end: None,
            size: Some(*size),
            percentage,
        });
        start += size;
    }

    let mut end = 0.0;
    for (pane, size) in panes.iter_mut().zip(sizes).rev() {
        pane.end = Some(end);
        end += size;
    }
    panes
}

/// Raise every pane below its minimum by taking length from panes with slack,
/// in index order. Callers check beforehand that the minimums fit at all.
pub fn enforce_min_sizes(sizes: &mut [f32], mins: &[f32]) {
    for index in 0..sizes.len() {
        let min = mins.get(index).copied().unwrap_or(0.0);
        if sizes[index] >= min {
            continue;
        }

        let mut shortfall = min - sizes[index];
        for donor in 0..sizes.len() {
            if donor == index || shortfall <= 0.0 {
                continue;
            }
            let slack = sizes[donor] - mins.get(donor).copied().unwrap_or(0.0);
            if slack > 0.0 {
                let take = slack.min(shortfall);
                sizes[donor] -= take;
                shortfall -= take;
            }
        }
        sizes[index] = min - shortfall.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(container: f32, entries: &'a [SizeEntry], mins: &'a [f32]) -> LayoutRequest<'a> {
        LayoutRequest {
            container_length: container,
            previous_container_length: container,
            entries,
            min_sizes: mins,
            percentage: false,
        }
    }

    fn approx(a: Option<f32>, b: f32) -> bool {
        a.is_some_and(|a| (a - b).abs() < 0.001)
    }

    #[test]
    fn test_fixed_and_dynamic() {
        let entries = [SizeEntry::Fixed(400.0), SizeEntry::Dynamic];
        let outcome = compute_layout(&request(1000.0, &entries, &[0.0, 0.0]));

        assert_eq!(outcome.dynamic_index, Some(1));
        assert!(!outcome.full_screen);
        assert_eq!(outcome.panes[0], PaneSize::positioned(0.0, 400.0, 600.0, false));
        assert_eq!(outcome.panes[1], PaneSize::positioned(400.0, 600.0, 0.0, false));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let entries = [SizeEntry::Fixed(300.0), SizeEntry::Dynamic, SizeEntry::Fixed(200.0)];
        let mins = [100.0, 100.0, 100.0];
        let first = compute_layout(&request(900.0, &entries, &mins));

        let resolved: Vec<SizeEntry> = first
            .panes
            .iter()
            .enumerate()
            .map(|(index, pane)| {
                if index == 1 {
                    SizeEntry::Dynamic
                } else {
                    SizeEntry::Resolved(*pane)
                }
            })
            .collect();
        let second = compute_layout(&request(900.0, &resolved, &mins));
        let third = compute_layout(&request(900.0, &entries, &mins));

        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn test_no_dynamic_defaults_to_first() {
        let entries = [SizeEntry::Fixed(100.0), SizeEntry::Fixed(300.0)];
        let outcome = compute_layout(&request(1000.0, &entries, &[]));
        assert_eq!(outcome.dynamic_index, Some(0));
        assert!(approx(outcome.panes[0].size, 700.0));
    }

    #[test]
    fn test_last_dynamic_wins() {
        let entries = [SizeEntry::Dynamic, SizeEntry::Fixed(100.0), SizeEntry::Dynamic];
        assert_eq!(resolve_dynamic_index(&entries), Some(2));
        let outcome = compute_layout(&request(1000.0, &entries, &[]));
        assert!(approx(outcome.panes[0].size, 0.0));
        assert!(approx(outcome.panes[2].size, 900.0));
    }

    #[test]
    fn test_negative_dynamic_is_repaired_by_minimums() {
        let entries = [SizeEntry::Fixed(800.0), SizeEntry::Dynamic, SizeEntry::Fixed(800.0)];
        let outcome = compute_layout(&request(1000.0, &entries, &[100.0, 100.0, 100.0]));

        assert!(!outcome.full_screen);
        assert!(approx(outcome.panes[0].size, 100.0));
        assert!(approx(outcome.panes[1].size, 100.0));
        assert!(approx(outcome.panes[2].size, 800.0));
        assert!(approx(outcome.panes[2].start, 200.0));
        assert!(approx(outcome.panes[0].end, 900.0));
    }

    #[test]
    fn test_full_screen_when_minimums_do_not_fit() {
        let entries = [SizeEntry::Fixed(400.0), SizeEntry::Dynamic];
        let outcome = compute_layout(&request(500.0, &entries, &[300.0, 300.0]));
        assert!(outcome.full_screen);
        // Sizes are left as computed.
        assert!(approx(outcome.panes[1].size, 100.0));
    }

    #[test]
    fn test_full_screen_never_reports_negative_sizes() {
        let entries = [SizeEntry::Fixed(600.0), SizeEntry::Dynamic];
        let outcome = compute_layout(&request(500.0, &entries, &[300.0, 300.0]));
        assert!(outcome.full_screen);
        assert!(approx(outcome.panes[0].size, 600.0));
        assert!(approx(outcome.panes[1].size, 0.0));
        assert!(outcome.panes.iter().all(|pane| pane.size.is_some_and(|size| size >= 0.0)));
    }

    #[test]
    fn test_resolved_without_size_uses_previous_container() {
        let stale = PaneSize {
            start: Some(0.0),
            end: Some(600.0),
            size: None,
            percentage: false,
        };
        let entries = [SizeEntry::Resolved(stale), SizeEntry::Dynamic];
        let outcome = compute_layout(&LayoutRequest {
            container_length: 1200.0,
            previous_container_length: 1000.0,
            entries: &entries,
            min_sizes: &[],
            percentage: false,
        });
        assert!(approx(outcome.panes[0].size, 400.0));
        assert!(approx(outcome.panes[1].size, 800.0));
    }

    #[test]
    fn test_percentage_layout() {
        let entries = [SizeEntry::Fixed(25.0), SizeEntry::Dynamic];
        let outcome = compute_layout(&LayoutRequest {
            container_length: 800.0,
            previous_container_length: 800.0,
            entries: &entries,
            // 400px is 50% of 800px
            min_sizes: &[400.0, 0.0],
            percentage: true,
        });
        assert!(outcome.panes.iter().all(|pane| pane.percentage));
        assert!(approx(outcome.panes[0].size, 50.0));
        assert!(approx(outcome.panes[1].size, 50.0));
        assert!(approx(outcome.panes[1].start, 50.0));
    }

    #[test]
    fn test_accumulate_offsets() {
        let panes = accumulate_offsets(&[1000.0, 1000.0, 1000.0], false);
        assert_eq!(panes[0].end, Some(2000.0));
        assert_eq!(panes[1].start, Some(1000.0));
        assert_eq!(panes[1].end, Some(1000.0));
        assert_eq!(panes[2].start, Some(2000.0));
        assert_eq!(panes[2].end, Some(0.0));
    }

    #[test]
    fn test_enforce_takes_from_slack_in_index_order() {
        let mut sizes = [500.0, 450.0, 50.0];
        enforce_min_sizes(&mut sizes, &[450.0, 100.0, 100.0]);
        assert_eq!(sizes, [450.0, 450.0, 100.0]);
    }

    #[test]
    fn test_empty_entries() {
        let outcome = compute_layout(&request(100.0, &[], &[]));
        assert!(outcome.panes.is_empty());
        assert_eq!(outcome.dynamic_index, None);
    }
}
