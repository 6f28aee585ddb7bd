use indexmap::IndexMap;

use crate::core::{Series, Viewport};
use crate::interaction::InteractionState;

use super::resize::ResizeTransition;
use super::selection::SelectionState;
use super::tooltip::TooltipState;

/// Core chart state grouped behind the engine facade.
///
/// Series are keyed by id in insertion order: the map enforces id uniqueness
/// and its order is the base draw order (selection reorders at frame-build
/// time, not here).
pub(super) struct PlotModel {
    /// Target viewport; during a resize transition frames are built at the
    /// interpolated viewport instead.
    pub(super) viewport: Viewport,
    pub(super) series: IndexMap<String, Series>,
    pub(super) interaction: InteractionState,
    pub(super) selection: SelectionState,
    pub(super) tooltip: Option<TooltipState>,
    pub(super) resize_transition: Option<ResizeTransition>,
    /// Axis titles loaded from a service response; fall back to config.
    pub(super) x_title: Option<String>,
    pub(super) y_title: Option<String>,
}

impl PlotModel {
    pub(super) fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            series: IndexMap::new(),
            interaction: InteractionState::default(),
            selection: SelectionState::default(),
            tooltip: None,
            resize_transition: None,
            x_title: None,
            y_title: None,
        }
    }

    /// Drops all transient view state; called when data is replaced.
    pub(super) fn reset_transient_state(&mut self) {
        self.interaction = InteractionState::default();
        self.selection.clear();
        self.tooltip = None;
    }
}
