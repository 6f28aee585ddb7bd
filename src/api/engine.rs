use tracing::debug;

use crate::core::{Axis, AxisScale, Extent, Series, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{HoverTarget, PointerState};
use crate::render::{RenderFrame, Renderer};

use super::layout::PlotArea;
use super::plot_model::PlotModel;
use super::resize::ResizeTransition;
use super::tooltip::TooltipState;
use super::validation::validate_config;
use super::PlotConfig;

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` coordinates axis scales, series data, selection/hover state,
/// and renderer calls. All methods are synchronous; the host event loop is
/// the only serialization mechanism, matching the single-threaded UI this
/// engine drives.
pub struct PlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotConfig,
    pub(super) model: PlotModel,
}

impl<R: Renderer> PlotEngine<R> {
    pub fn new(renderer: R, config: PlotConfig) -> PlotResult<Self> {
        validate_config(&config)?;
        let model = PlotModel::new(config.viewport);
        Ok(Self {
            renderer,
            config,
            model,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Target viewport (the destination of any in-flight resize transition).
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.model.viewport
    }

    /// Viewport frames are currently built at: the eased interpolation while
    /// a resize transition runs, the target viewport otherwise.
    #[must_use]
    pub fn effective_viewport(&self) -> Viewport {
        match &self.model.resize_transition {
            Some(transition) => transition.current_viewport(),
            None => self.model.viewport,
        }
    }

    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.model.series.values()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.model.series.len()
    }

    #[must_use]
    pub fn selected_series(&self) -> Option<&str> {
        self.model.selection.selected()
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.model.tooltip.as_ref()
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoverTarget> {
        self.model.interaction.hover()
    }

    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.model.interaction.pointer()
    }

    /// Overrides axis titles (service responses do this on load).
    pub fn set_axis_titles(
        &mut self,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
    ) {
        self.model.x_title = Some(x_title.into());
        self.model.y_title = Some(y_title.into());
    }

    /// Builds and hands one full frame to the renderer.
    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_frame()?;
        debug!(
            lines = frame.line_count(),
            circles = frame.circle_count(),
            texts = frame.text_count(),
            "render full pass"
        );
        self.renderer.render(&frame)
    }

    /// Materializes the deterministic frame for the current state.
    ///
    /// Exposed so tests and snapshot tooling can inspect geometry without a
    /// rendering backend.
    pub fn build_frame(&self) -> PlotResult<RenderFrame> {
        self.build_frame_at(self.effective_viewport())
    }

    /// Changes the target viewport.
    ///
    /// With the resize transition enabled this starts an eased interpolation
    /// from the current effective viewport; the host drives it forward via
    /// `step_resize_transition`. Otherwise the new size applies immediately.
    pub fn resize(&mut self, viewport: Viewport) -> PlotResult<()> {
        PlotArea::from_viewport(viewport, self.config.margins)?;

        let from = self.effective_viewport();
        if self.config.resize_transition.enabled && from != viewport {
            self.model.resize_transition = Some(ResizeTransition::new(
                from,
                viewport,
                self.config.resize_transition.duration_seconds,
            ));
        } else {
            self.model.resize_transition = None;
        }
        self.model.viewport = viewport;
        debug!(
            width = viewport.width,
            height = viewport.height,
            animated = self.model.resize_transition.is_some(),
            "viewport resize"
        );
        Ok(())
    }

    /// Advances the resize transition and returns the new eased progress.
    ///
    /// Returns `None` when no transition is active; the transition is removed
    /// once it completes, so the final call reports progress `1.0`.
    pub fn step_resize_transition(&mut self, delta_seconds: f64) -> Option<f64> {
        let transition = self.model.resize_transition.as_mut()?;
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            transition.elapsed_seconds += delta_seconds;
        }

        let progress = transition.progress();
        if transition.is_finished() {
            self.model.resize_transition = None;
        }
        Some(progress)
    }

    #[must_use]
    pub fn resize_transition(&self) -> Option<&ResizeTransition> {
        self.model.resize_transition.as_ref()
    }

    /// Maps an x-domain value to viewport pixel space.
    pub fn map_x_to_pixel(&self, value: f64) -> PlotResult<f64> {
        let area = self.plot_area()?;
        let (x_scale, _) = self.resolved_scales()?;
        Ok(area.left + x_scale.domain_to_pixel(value, area.width)?)
    }

    /// Maps a y-domain value to viewport pixel space (inverted axis).
    pub fn map_y_to_pixel(&self, value: f64) -> PlotResult<f64> {
        let area = self.plot_area()?;
        let (_, y_scale) = self.resolved_scales()?;
        Ok(area.top + y_scale.domain_to_pixel(value, area.height)?)
    }

    /// Resolves both axis scales from overrides or a series scan.
    pub fn resolved_scales(&self) -> PlotResult<(AxisScale, AxisScale)> {
        let x_extent = match self.config.x_extent_override {
            Some((min, max)) => Extent::new(min, max)?,
            None => Extent::scan(self.model.series.values(), Axis::X)?,
        };
        let y_extent = match self.config.y_extent_override {
            Some((min, max)) => Extent::new(min, max)?,
            None => Extent::scan(self.model.series.values(), Axis::Y)?,
        };

        let x_scale = AxisScale::from_extent(self.config.x_scale_kind, x_extent)?;
        let y_scale = AxisScale::from_extent(self.config.y_scale_kind, y_extent)?.inverted();
        Ok((x_scale, y_scale))
    }

    pub fn plot_area(&self) -> PlotResult<PlotArea> {
        PlotArea::from_viewport(self.effective_viewport(), self.config.margins)
    }

    /// Current axis titles: response-loaded values win over config.
    #[must_use]
    pub fn axis_titles(&self) -> (Option<&str>, Option<&str>) {
        (
            self.model.x_title.as_deref().or(self.config.x_title.as_deref()),
            self.model.y_title.as_deref().or(self.config.y_title.as_deref()),
        )
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn series_index_of(&self, id: &str) -> Option<usize> {
        self.model.series.get_index_of(id)
    }

    fn build_frame_at(&self, viewport: Viewport) -> PlotResult<RenderFrame> {
        super::frame_builder::build_frame(self, viewport)
    }
}

impl<R: Renderer> PlotEngine<R> {
    /// Clears any active selection, e.g. when new data loads.
    pub fn clear_selection(&mut self) {
        if self.model.selection.clear() {
            debug!("selection cleared");
        }
    }

    /// Toggles selection of a series by id; unknown ids are rejected.
    pub fn toggle_series_selection(&mut self, id: &str) -> PlotResult<()> {
        if !self.model.series.contains_key(id) {
            return Err(PlotError::InvalidData(format!("unknown series id: {id}")));
        }
        self.model.selection.toggle(id);
        debug!(id, selected = self.model.selection.is_selected(id), "selection toggled");
        Ok(())
    }
}
