use crate::core::{AxisScale, Viewport};
use crate::error::PlotResult;
use crate::render::{
    ChartLayer, CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::axis_ticks::{
    format_tick_value, select_ticks, tick_target_count, X_TICK_TARGET_SPACING_PX,
    Y_TICK_TARGET_SPACING_PX,
};
use super::hit_test::project_point;
use super::layout::PlotArea;
use super::legend_builder::build_legend;
use super::PlotEngine;

const AXIS_COLOR: Color = Color::rgb(0.25, 0.25, 0.25);
const TICK_LENGTH_PX: f64 = 6.0;
const TOOLTIP_FILL: Color = Color::rgba(1.0, 1.0, 1.0, 0.95);

/// Materializes the full scene for one draw pass.
///
/// Output depends only on engine state and the requested viewport, so
/// building twice with unchanged inputs yields identical geometry.
pub(super) fn build_frame<R: Renderer>(
    engine: &PlotEngine<R>,
    viewport: Viewport,
) -> PlotResult<RenderFrame> {
    let area = PlotArea::from_viewport(viewport, engine.config.margins)?;
    let mut frame = RenderFrame::new(viewport);

    // Nothing plotted yet: an empty frame, not an extent error.
    if engine.model.series.is_empty() {
        return Ok(frame);
    }

    let (x_scale, y_scale) = engine.resolved_scales()?;
    build_axes(engine, &mut frame, area, x_scale, y_scale)?;
    build_series(engine, &mut frame, area, x_scale, y_scale)?;
    build_legend(engine, &mut frame, area);
    build_tooltip_overlay(engine, &mut frame, area);

    frame.validate()?;
    Ok(frame)
}

fn build_axes<R: Renderer>(
    engine: &PlotEngine<R>,
    frame: &mut RenderFrame,
    area: PlotArea,
    x_scale: AxisScale,
    y_scale: AxisScale,
) -> PlotResult<()> {
    let font_size = engine.config.axis_font_size_px;

    // Plot border.
    let corners = [
        (area.left, area.top, area.right(), area.top),
        (area.right(), area.top, area.right(), area.bottom()),
        (area.left, area.bottom(), area.right(), area.bottom()),
        (area.left, area.top, area.left, area.bottom()),
    ];
    for (x1, y1, x2, y2) in corners {
        frame.push_line(
            ChartLayer::Axes,
            LinePrimitive::new(x1, y1, x2, y2, 1.0, AXIS_COLOR),
        );
    }

    let x_tick_count = tick_target_count(area.width, X_TICK_TARGET_SPACING_PX, 2, 10);
    for value in select_ticks(x_scale, x_tick_count) {
        let px = area.left + x_scale.domain_to_pixel(value, area.width)?;
        frame.push_line(
            ChartLayer::Axes,
            LinePrimitive::new(
                px,
                area.bottom(),
                px,
                area.bottom() + TICK_LENGTH_PX,
                1.0,
                AXIS_COLOR,
            ),
        );
        frame.push_text(
            ChartLayer::Axes,
            TextPrimitive::new(
                format_tick_value(value),
                px,
                area.bottom() + TICK_LENGTH_PX + font_size + 2.0,
                font_size,
                AXIS_COLOR,
                TextHAlign::Center,
            ),
        );
    }

    let y_tick_count = tick_target_count(area.height, Y_TICK_TARGET_SPACING_PX, 2, 10);
    for value in select_ticks(y_scale, y_tick_count) {
        let py = area.top + y_scale.domain_to_pixel(value, area.height)?;
        frame.push_line(
            ChartLayer::Axes,
            LinePrimitive::new(
                area.left - TICK_LENGTH_PX,
                py,
                area.left,
                py,
                1.0,
                AXIS_COLOR,
            ),
        );
        frame.push_text(
            ChartLayer::Axes,
            TextPrimitive::new(
                format_tick_value(value),
                area.left - TICK_LENGTH_PX - 4.0,
                py + font_size * 0.35,
                font_size,
                AXIS_COLOR,
                TextHAlign::Right,
            ),
        );
    }

    // Empty titles draw nothing rather than producing an empty text primitive.
    let (x_title, y_title) = engine.axis_titles();
    if let Some(title) = x_title.filter(|t| !t.is_empty()) {
        frame.push_text(
            ChartLayer::Axes,
            TextPrimitive::new(
                title,
                area.left + area.width / 2.0,
                f64::from(frame.viewport.height) - 10.0,
                font_size,
                AXIS_COLOR,
                TextHAlign::Center,
            ),
        );
    }
    if let Some(title) = y_title.filter(|t| !t.is_empty()) {
        frame.push_text(
            ChartLayer::Axes,
            TextPrimitive::new(
                title,
                16.0,
                area.top + area.height / 2.0,
                font_size,
                AXIS_COLOR,
                TextHAlign::Center,
            )
            .vertical(),
        );
    }

    Ok(())
}

/// Emits series polylines and markers; the selected series is pushed last so
/// it draws in front of every other series.
fn build_series<R: Renderer>(
    engine: &PlotEngine<R>,
    frame: &mut RenderFrame,
    area: PlotArea,
    x_scale: AxisScale,
    y_scale: AxisScale,
) -> PlotResult<()> {
    let palette = &engine.config.palette;
    let hover = engine.model.interaction.hover();

    for selected_pass in [false, true] {
        for (series_index, (id, series)) in engine.model.series.iter().enumerate() {
            let is_selected = engine.model.selection.is_selected(id);
            if is_selected != selected_pass {
                continue;
            }

            let color = palette[series_index % palette.len()];
            let stroke_width = if is_selected {
                engine.config.line_width.selected
            } else {
                engine.config.line_width.normal
            };

            for segment in series.segments() {
                for pair in segment.windows(2) {
                    let (x1, y1) = project_point(pair[0], x_scale, y_scale, area)?;
                    let (x2, y2) = project_point(pair[1], x_scale, y_scale, area)?;
                    frame.push_line(
                        ChartLayer::Series,
                        LinePrimitive::new(x1, y1, x2, y2, stroke_width, color),
                    );
                }
            }

            for (sample_index, point) in series.points() {
                let (cx, cy) = project_point(point, x_scale, y_scale, area)?;
                let hovered = hover
                    == Some(crate::interaction::HoverTarget {
                        series_index,
                        sample_index,
                    });
                let radius = if hovered {
                    engine.config.marker_radius.hover
                } else if is_selected {
                    engine.config.marker_radius.selected
                } else {
                    engine.config.marker_radius.normal
                };
                frame.push_circle(
                    ChartLayer::Series,
                    CirclePrimitive::new(cx, cy, radius, color),
                );
            }
        }
    }

    Ok(())
}

fn build_tooltip_overlay<R: Renderer>(
    engine: &PlotEngine<R>,
    frame: &mut RenderFrame,
    area: PlotArea,
) {
    let Some(tooltip) = &engine.model.tooltip else {
        return;
    };
    let behavior = &engine.config.tooltip;

    let rect = tooltip.rect;
    let x = area.left + rect.x;
    let y = area.top + rect.y;
    frame.push_rect(
        ChartLayer::Overlay,
        RectPrimitive::filled(x, y, rect.width, rect.height, TOOLTIP_FILL)
            .with_stroke(1.0, AXIS_COLOR),
    );

    let line_height = behavior.font_size_px * 1.35;
    for (index, line) in tooltip.lines.iter().enumerate() {
        frame.push_text(
            ChartLayer::Overlay,
            TextPrimitive::new(
                line.clone(),
                x + behavior.padding_px,
                y + behavior.padding_px + (index as f64 + 0.8) * line_height,
                behavior.font_size_px,
                AXIS_COLOR,
                TextHAlign::Left,
            ),
        );
    }
}
