use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::error::PlotResult;
use crate::interaction::HoverTarget;
use crate::render::Renderer;

use super::tooltip::{place_tooltip, tooltip_size, TooltipState};
use super::PlotEngine;

/// Extra pixels beyond the stroke half-width accepted as a line click.
const LINE_CLICK_SLOP_PX: f64 = 2.0;

impl<R: Renderer> PlotEngine<R> {
    /// Pointer moved to a viewport position.
    ///
    /// Hover and tooltip state follow the nearest marker within the hover
    /// radius. Resolution failures (e.g. no data yet) clear hover instead of
    /// surfacing an error, mirroring how the UI treats a chart with nothing
    /// plotted.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.model.interaction.on_pointer_move(x, y);

        match self.resolve_hover(x, y) {
            Ok(Some((target, tooltip))) => {
                self.model.interaction.set_hover(Some(target));
                self.model.tooltip = Some(tooltip);
            }
            Ok(None) => {
                self.model.interaction.set_hover(None);
                self.model.tooltip = None;
            }
            Err(err) => {
                warn!(error = %err, "hover resolution skipped");
                self.model.interaction.set_hover(None);
                self.model.tooltip = None;
            }
        }
    }

    /// Pointer left the chart; hover and tooltip state are destroyed.
    pub fn pointer_leave(&mut self) {
        self.model.interaction.on_pointer_leave();
        self.model.tooltip = None;
    }

    /// Click at a viewport position: toggles selection of the hit series.
    ///
    /// A marker hit wins over a line hit; a miss leaves selection unchanged
    /// (deselection happens by re-clicking the selection or via
    /// `clear_selection`).
    pub fn click_at(&mut self, x: f64, y: f64) {
        match self.resolve_click(x, y) {
            Ok(Some(id)) => {
                self.model.selection.toggle(&id);
                debug!(id, "series clicked");
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "click resolution skipped"),
        }
    }

    /// Click on a legend entry; same toggle semantics as clicking the line.
    pub fn click_legend_entry(&mut self, id: &str) -> PlotResult<()> {
        self.toggle_series_selection(id)
    }

    fn resolve_hover(
        &self,
        x: f64,
        y: f64,
    ) -> PlotResult<Option<(HoverTarget, TooltipState)>> {
        if self.model.series.is_empty() {
            return Ok(None);
        }
        let area = self.plot_area()?;
        if !area.contains(x, y) {
            return Ok(None);
        }

        let Some((target, (marker_x, marker_y), distance)) = self.nearest_marker(x, y)? else {
            return Ok(None);
        };
        if distance > self.config.marker_radius.hover {
            return Ok(None);
        }

        let Some((_, series)) = self.model.series.get_index(target.series_index) else {
            return Ok(None);
        };
        let Some(point) = series
            .samples()
            .get(target.sample_index)
            .copied()
            .flatten()
        else {
            return Ok(None);
        };

        let behavior = &self.config.tooltip;
        let lines: SmallVec<[String; 3]> = SmallVec::from_vec(vec![
            format!("{}{}", behavior.label_prefix, series.label()),
            format!("{}{}", behavior.x_prefix, format_tooltip_value(point.x)),
            format!("{}{}", behavior.y_prefix, format_tooltip_value(point.y)),
        ]);

        let (box_width, box_height) = tooltip_size(&lines, behavior);
        let (anchor_x, anchor_y) = area.to_local(marker_x, marker_y);
        let rect = place_tooltip(
            anchor_x,
            anchor_y,
            box_width,
            box_height,
            area.width,
            area.height,
            behavior.marker_offset_px,
        );

        Ok(Some((
            target,
            TooltipState {
                series_id: series.id().to_owned(),
                anchor_x,
                anchor_y,
                lines,
                rect,
            },
        )))
    }

    fn resolve_click(&self, x: f64, y: f64) -> PlotResult<Option<String>> {
        if self.model.series.is_empty() {
            return Ok(None);
        }
        let area = self.plot_area()?;
        if !area.contains(x, y) {
            return Ok(None);
        }

        if let Some((target, _, distance)) = self.nearest_marker(x, y)? {
            if distance <= self.config.marker_radius.hover {
                if let Some((id, _)) = self.model.series.get_index(target.series_index) {
                    return Ok(Some(id.clone()));
                }
            }
        }

        let tolerance = self.config.line_width.selected / 2.0 + LINE_CLICK_SLOP_PX;
        self.series_hit_at(x, y, tolerance)
    }
}

/// Tooltip value formatting: plain decimal in a readable range, scientific
/// outside (hazard rates routinely sit below 1e-4).
fn format_tooltip_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if (1e-3..1e5).contains(&magnitude) {
        let formatted = format!("{value:.5}");
        formatted.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        format!("{value:.4e}")
    }
}
