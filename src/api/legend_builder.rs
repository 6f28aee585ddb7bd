use crate::render::{
    ChartLayer, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::layout::PlotArea;
use super::plot_config::LegendCorner;
use super::tooltip::estimate_text_width;
use super::PlotEngine;

const LEGEND_INSET_PX: f64 = 10.0;
const LEGEND_FILL: Color = Color::rgba(1.0, 1.0, 1.0, 0.9);
const LEGEND_BORDER: Color = Color::rgb(0.25, 0.25, 0.25);
const SWATCH_TEXT_GAP_PX: f64 = 6.0;

/// Legend box with one entry per series, anchored at the configured corner.
///
/// Entries follow series insertion order regardless of selection; the
/// selected series gets the wider swatch stroke so the highlight matches the
/// plotted line.
pub(super) fn build_legend<R: Renderer>(
    engine: &PlotEngine<R>,
    frame: &mut RenderFrame,
    area: PlotArea,
) {
    let behavior = engine.config.legend;
    if !behavior.visible || engine.model.series.is_empty() {
        return;
    }

    let max_label_width = engine
        .model
        .series
        .values()
        .map(|series| estimate_text_width(series.label(), behavior.font_size_px))
        .fold(0.0, f64::max);
    let box_width = behavior.padding_px * 2.0
        + behavior.swatch_length_px
        + SWATCH_TEXT_GAP_PX
        + max_label_width;
    let box_height =
        behavior.padding_px * 2.0 + engine.model.series.len() as f64 * behavior.entry_spacing_px;

    let box_x = match behavior.corner {
        LegendCorner::TopLeft | LegendCorner::BottomLeft => area.left + LEGEND_INSET_PX,
        LegendCorner::TopRight | LegendCorner::BottomRight => {
            area.right() - LEGEND_INSET_PX - box_width
        }
    };
    let box_y = match behavior.corner {
        LegendCorner::TopLeft | LegendCorner::TopRight => area.top + LEGEND_INSET_PX,
        LegendCorner::BottomLeft | LegendCorner::BottomRight => {
            area.bottom() - LEGEND_INSET_PX - box_height
        }
    };

    frame.push_rect(
        ChartLayer::Legend,
        RectPrimitive::filled(box_x, box_y, box_width, box_height, LEGEND_FILL)
            .with_stroke(1.0, LEGEND_BORDER),
    );

    let palette = &engine.config.palette;
    for (index, (id, series)) in engine.model.series.iter().enumerate() {
        let entry_y = box_y + behavior.padding_px + (index as f64 + 0.5) * behavior.entry_spacing_px;
        let color = palette[index % palette.len()];
        let stroke_width = if engine.model.selection.is_selected(id) {
            engine.config.line_width.selected
        } else {
            engine.config.line_width.normal
        };

        let swatch_x = box_x + behavior.padding_px;
        frame.push_line(
            ChartLayer::Legend,
            LinePrimitive::new(
                swatch_x,
                entry_y,
                swatch_x + behavior.swatch_length_px,
                entry_y,
                stroke_width,
                color,
            ),
        );
        frame.push_text(
            ChartLayer::Legend,
            TextPrimitive::new(
                series.label(),
                swatch_x + behavior.swatch_length_px + SWATCH_TEXT_GAP_PX,
                entry_y + behavior.font_size_px * 0.35,
                behavior.font_size_px,
                LEGEND_BORDER,
                TextHAlign::Left,
            ),
        );
    }
}
