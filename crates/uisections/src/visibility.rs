//! Visibility and animation coordinator.
//!
//! Decides per pane and per render whether the pane is visible, which
//! position style it gets and whether the change should animate. Hidden panes
//! are pushed off the leading edge (first pane) or trailing edge (all others)
//! at their last known length, so showing them again slides them back from a
//! realistic position.
//!
//! Style rules, in evaluation order:
//!
//! 1. full-screen mode: the active pane fills the container, every other pane
//!    is hidden;
//! 2. hidden pane: off-screen at its last known length;
//! 3. single visible pane: fills the container;
//! 4. known size: pixel (or percent) offsets from the committed layout;
//! 5. unknown size: even share among the visible panes.

use uisections_core::geometry::Axis;

use crate::length::Length;
use crate::pane::PaneSize;
use crate::splitter::SplitterType;
use crate::style::{PaneClass, PaneStyle, SplitterPlacement, SplitterRole};

/// Whether pane transitions animate.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationSetting {
    /// Every pane animates, or none does.
    Enabled(bool),
    /// A pane animates when its own visibility flips and its entry is `true`.
    PerPane(Vec<bool>),
}

impl Default for AnimationSetting {
    fn default() -> Self {
        AnimationSetting::Enabled(false)
    }
}

impl From<bool> for AnimationSetting {
    fn from(value: bool) -> Self {
        AnimationSetting::Enabled(value)
    }
}

impl From<Vec<bool>> for AnimationSetting {
    fn from(value: Vec<bool>) -> Self {
        AnimationSetting::PerPane(value)
    }
}

/// Splitter options for one render.
#[derive(Debug, Clone, Copy)]
pub struct SplitterOptions<'a> {
    pub enabled: bool,
    pub splitter_type: SplitterType,
    /// Toggle state per boundary between visible panes.
    pub pressed: &'a [bool],
}

/// Everything one render needs.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub axis: Axis,
    pub container_length: f32,
    /// Committed layout, one entry per pane.
    pub panes: &'a [PaneSize],
    /// Hidden flag per pane.
    pub hidden: &'a [bool],
    pub animation: &'a AnimationSetting,
    /// Pane shown alone while the minimums do not fit.
    pub full_screen_pane: Option<usize>,
    pub splitters: SplitterOptions<'a>,
}

/// Styles for every pane and splitter of one render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPlan {
    pub panes: Vec<PaneStyle>,
    pub splitters: Vec<SplitterPlacement>,
}

impl RenderPlan {
    /// Splitters that are actually shown.
    pub fn visible_splitters(&self) -> impl Iterator<Item = &SplitterPlacement> {
        self.splitters.iter().filter(|splitter| !splitter.hidden)
    }
}

/// Indices of the panes not flagged hidden, in order.
pub fn visible_indices(hidden: &[bool]) -> Vec<usize> {
    hidden
        .iter()
        .enumerate()
        .filter(|(_, hidden)| !**hidden)
        .map(|(index, _)| index)
        .collect()
}

/// Tracks visibility between renders to drive transitions.
#[derive(Debug, Default)]
pub struct VisibilityCoordinator {
    previous_hidden: Option<Vec<bool>>,
    ignore_animation: bool,
}

impl VisibilityCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress animation for exactly the next render, e.g. after the window
    /// was resized and the whole layout reflows.
    pub fn ignore_next_animation(&mut self) {
        self.ignore_animation = true;
    }

    pub fn is_ignoring_animation(&self) -> bool {
        self.ignore_animation
    }

    /// Compute the styles for one render and remember its visibility.
    pub fn render(&mut self, input: &RenderInput<'_>) -> RenderPlan {
        let visible = visible_indices(input.hidden);
        let ignore_animation = std::mem::take(&mut self.ignore_animation);

        let panes = (0..input.hidden.len())
            .map(|index| {
                let mut classes = PaneClass::empty();
                if !ignore_animation && self.animates(index, input) {
                    classes |= PaneClass::ANIMATED;
                }
                self.pane_style(index, &visible, classes, input)
            })
            .collect();

        let splitters = splitter_placements(&visible, input);

        self.previous_hidden = Some(input.hidden.to_vec());
        RenderPlan { panes, splitters }
    }

    fn animates(&self, index: usize, input: &RenderInput<'_>) -> bool {
        match input.animation {
            AnimationSetting::Enabled(enabled) => *enabled,
            AnimationSetting::PerPane(flags) => {
                let transitioned = self
                    .previous_hidden
                    .as_ref()
                    .and_then(|previous| previous.get(index))
                    .is_some_and(|was_hidden| *was_hidden != input.hidden[index]);
                transitioned && flags.get(index).copied().unwrap_or(false)
            }
        }
    }

    fn pane_style(
        &self,
        index: usize,
        visible: &[usize],
        classes: PaneClass,
        input: &RenderInput<'_>,
    ) -> PaneStyle {
        let axis = input.axis;
        let fill = || Length::percent(0.0);

        if let Some(active) = input.full_screen_pane {
            return if index == active {
                PaneStyle::positioned(axis, fill(), fill(), classes | PaneClass::FULL_SCREEN)
            } else {
                hidden_style(index, input, classes)
            };
        }

        if input.hidden[index] {
            return hidden_style(index, input, classes);
        }

        if visible.len() == 1 {
            return PaneStyle::positioned(axis, fill(), fill(), classes);
        }

        let pane = input.panes.get(index);
        if let Some(pane) = pane.filter(|pane| pane.size.is_some()) {
            let start = pane.start.unwrap_or(0.0);
            let end = pane.end.unwrap_or(0.0);
            return PaneStyle::positioned(
                axis,
                Length::in_unit(start, pane.percentage),
                Length::in_unit(end, pane.percentage),
                classes,
            );
        }

        let count = visible.len() as f32;
        let position = visible.iter().position(|v| *v == index).unwrap_or(0) as f32;
        let share = 100.0 / count;
        PaneStyle::positioned(
            axis,
            Length::percent(position * share),
            Length::percent((count - position - 1.0) * share),
            classes,
        )
    }
}

/// Off-screen style keeping the pane's last known length.
fn hidden_style(index: usize, input: &RenderInput<'_>, classes: PaneClass) -> PaneStyle {
    let classes = classes | PaneClass::HIDDEN;
    let known = input
        .panes
        .get(index)
        .and_then(|pane| pane.size.map(|size| (size.max(0.0), pane.percentage)));
    let (length, full) = match known {
        Some((size, true)) => (Length::percent(size), Length::percent(100.0)),
        Some((size, false)) => (Length::px(size), Length::px(input.container_length)),
        None => {
            let count = input.hidden.len().max(1) as f32;
            (Length::percent(100.0 / count), Length::percent(100.0))
        }
    };

    if index == 0 {
        PaneStyle::positioned(input.axis, length.negate(), full, classes)
    } else {
        PaneStyle::positioned(input.axis, full, length.negate(), classes)
    }
}

fn splitter_placements(visible: &[usize], input: &RenderInput<'_>) -> Vec<SplitterPlacement> {
    let suppressed = !input.splitters.enabled || visible.len() < 2 || input.full_screen_pane.is_some();

    visible
        .windows(2)
        .enumerate()
        .map(|(boundary, pair)| {
            let trailing = pair[1];
            let position = match input.panes.get(trailing) {
                Some(pane) if pane.size.is_some() => {
                    Length::in_unit(pane.start.unwrap_or(0.0), pane.percentage)
                }
                _ => Length::percent((boundary + 1) as f32 * 100.0 / visible.len() as f32),
            };
            let role = match input.splitters.splitter_type {
                SplitterType::Resize => SplitterRole::Separator,
                SplitterType::Toggle => SplitterRole::Button {
                    pressed: input.splitters.pressed.get(boundary).copied().unwrap_or(false),
                },
            };
            SplitterPlacement {
                leading_pane: pair[0],
                trailing_pane: trailing,
                position,
                role,
                hidden: suppressed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recalc::accumulate_offsets;
    use crate::style::StyleProperty;

    fn input<'a>(
        panes: &'a [PaneSize],
        hidden: &'a [bool],
        animation: &'a AnimationSetting,
    ) -> RenderInput<'a> {
        RenderInput {
            axis: Axis::Horizontal,
            container_length: 1000.0,
            panes,
            hidden,
            animation,
            full_screen_pane: None,
            splitters: SplitterOptions {
                enabled: true,
                splitter_type: SplitterType::Resize,
                pressed: &[],
            },
        }
    }

    #[test]
    fn test_known_sizes_use_pixel_offsets() {
        let panes = accumulate_offsets(&[400.0, 600.0], false);
        let animation = AnimationSetting::default();
        let plan = VisibilityCoordinator::new().render(&input(&panes, &[false, false], &animation));

        assert_eq!(plan.panes[0].to_css(), "left: 0px; right: 600px");
        assert_eq!(plan.panes[1].to_css(), "left: 400px; right: 0px");
        assert_eq!(plan.splitters.len(), 1);
        assert_eq!(plan.splitters[0].position, Length::px(400.0));
        assert!(!plan.splitters[0].hidden);
    }

    #[test]
    fn test_unknown_sizes_split_evenly() {
        let panes = vec![PaneSize::default(); 4];
        let animation = AnimationSetting::default();
        let plan =
            VisibilityCoordinator::new().render(&input(&panes, &[false, false, true, false], &animation));

        let value = |pane: usize, property| plan.panes[pane].get(property).map(|length| length.value());
        let approx = |a: Option<f32>, b: f32| a.is_some_and(|a| (a - b).abs() < 0.001);
        assert!(approx(value(0, StyleProperty::Right), 200.0 / 3.0));
        assert!(approx(value(1, StyleProperty::Left), 100.0 / 3.0));
        assert!(approx(value(3, StyleProperty::Left), 200.0 / 3.0));
        assert!(approx(value(3, StyleProperty::Right), 0.0));
        assert!(plan.panes.iter().all(|pane| pane.get(StyleProperty::Left).is_some_and(|l| l.is_percent())));
        // Hidden pane with unknown size is pushed off the trailing edge.
        assert_eq!(plan.panes[2].get(StyleProperty::Left), Some(Length::percent(100.0)));
        assert_eq!(plan.panes[2].get(StyleProperty::Right), Some(Length::percent(-25.0)));
    }

    #[test]
    fn test_hidden_panes_keep_last_length() {
        let panes = accumulate_offsets(&[300.0, 700.0], false);
        let animation = AnimationSetting::default();
        let plan = VisibilityCoordinator::new().render(&input(&panes, &[true, false], &animation));

        assert!(plan.panes[0].is_hidden());
        assert_eq!(plan.panes[0].to_css(), "left: -300px; right: 1000px");
        // The remaining pane fills the container and its splitter is hidden.
        assert_eq!(plan.panes[1].to_css(), "left: 0%; right: 0%");
        assert!(plan.splitters.is_empty());
    }

    #[test]
    fn test_hidden_pane_with_negative_size_stays_off_screen() {
        let panes = accumulate_offsets(&[1200.0, -200.0], false);
        let animation = AnimationSetting::default();
        let plan = VisibilityCoordinator::new().render(&input(&panes, &[false, true], &animation));

        assert_eq!(plan.panes[1].to_css(), "left: 1000px; right: 0px");
    }

    #[test]
    fn test_single_visible_pane_fills_container() {
        let panes = accumulate_offsets(&[100.0, 200.0, 700.0], false);
        let animation = AnimationSetting::default();
        let plan = VisibilityCoordinator::new().render(&input(&panes, &[true, false, true], &animation));

        assert_eq!(plan.panes[1].to_css(), "left: 0%; right: 0%");
        assert_eq!(plan.panes[2].to_css(), "left: 1000px; right: -700px");
        assert_eq!(plan.visible_splitters().count(), 0);
    }

    #[test]
    fn test_full_screen_shows_active_pane_only() {
        let panes = accumulate_offsets(&[500.0, 500.0], false);
        let animation = AnimationSetting::default();
        let mut render = input(&panes, &[false, false], &animation);
        render.full_screen_pane = Some(1);
        let plan = VisibilityCoordinator::new().render(&render);

        assert!(plan.panes[0].is_hidden());
        assert!(plan.panes[1].classes.contains(PaneClass::FULL_SCREEN));
        assert!(plan.splitters.iter().all(|splitter| splitter.hidden));
    }

    #[test]
    fn test_per_pane_animation_needs_transition() {
        let panes = accumulate_offsets(&[500.0, 500.0], false);
        let animation = AnimationSetting::PerPane(vec![true, false]);
        let mut coordinator = VisibilityCoordinator::new();

        let plan = coordinator.render(&input(&panes, &[false, false], &animation));
        assert!(!plan.panes[0].is_animated());

        let plan = coordinator.render(&input(&panes, &[true, true], &animation));
        assert!(plan.panes[0].is_animated());
        assert!(!plan.panes[1].is_animated());

        let plan = coordinator.render(&input(&panes, &[true, true], &animation));
        assert!(!plan.panes[0].is_animated());
    }

    #[test]
    fn test_ignore_animation_lasts_one_render() {
        let panes = accumulate_offsets(&[500.0, 500.0], false);
        let animation = AnimationSetting::Enabled(true);
        let mut coordinator = VisibilityCoordinator::new();

        coordinator.ignore_next_animation();
        let plan = coordinator.render(&input(&panes, &[false, false], &animation));
        assert!(plan.panes.iter().all(|pane| !pane.is_animated()));

        let plan = coordinator.render(&input(&panes, &[false, false], &animation));
        assert!(plan.panes.iter().all(|pane| pane.is_animated()));
    }

    #[test]
    fn test_toggle_splitter_role() {
        let panes = accumulate_offsets(&[500.0, 500.0], false);
        let animation = AnimationSetting::default();
        let mut render = input(&panes, &[false, false], &animation);
        render.splitters = SplitterOptions {
            enabled: true,
            splitter_type: SplitterType::Toggle,
            pressed: &[true],
        };
        let plan = VisibilityCoordinator::new().render(&render);
        assert_eq!(plan.splitters[0].role, SplitterRole::Button { pressed: true });
    }
}
