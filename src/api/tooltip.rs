use smallvec::SmallVec;

use super::plot_config::TooltipBehavior;

/// Tooltip box geometry in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Ephemeral hover label: created on pointer-enter over a marker, destroyed
/// on pointer-leave. Owns only the anchor and its three formatted lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub series_id: String,
    /// Marker position in plot-local pixels.
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub lines: SmallVec<[String; 3]>,
    pub rect: TooltipBox,
}

/// Estimated rendered width of one text line.
///
/// Backends lay text out themselves, so the box size only needs a stable
/// approximation; the same per-character factor sizes axis and legend text.
pub(super) fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}

pub(super) fn tooltip_size(
    lines: &[String],
    behavior: &TooltipBehavior,
) -> (f64, f64) {
    let text_width = lines
        .iter()
        .map(|line| estimate_text_width(line, behavior.font_size_px))
        .fold(0.0, f64::max);
    let line_height = behavior.font_size_px * 1.35;
    (
        text_width + behavior.padding_px * 2.0,
        lines.len() as f64 * line_height + behavior.padding_px * 2.0,
    )
}

/// Places the tooltip box relative to its anchor so it stays inside the plot.
///
/// Horizontal: anchors in the left 30% of the plot extend the box rightward,
/// in the right 30% leftward, and in the middle center it. Vertical: anchors
/// in the top 25% put the box below the marker, otherwise above. The result
/// is then clamped to `[0, plot_width] x [0, plot_height]`.
pub(super) fn place_tooltip(
    anchor_x: f64,
    anchor_y: f64,
    box_width: f64,
    box_height: f64,
    plot_width: f64,
    plot_height: f64,
    marker_offset: f64,
) -> TooltipBox {
    let width = box_width.min(plot_width);
    let height = box_height.min(plot_height);

    let x = if anchor_x < plot_width * 0.30 {
        anchor_x
    } else if anchor_x > plot_width * 0.70 {
        anchor_x - width
    } else {
        anchor_x - width / 2.0
    };

    let y = if anchor_y < plot_height * 0.25 {
        anchor_y + marker_offset
    } else {
        anchor_y - marker_offset - height
    };

    TooltipBox {
        x: x.clamp(0.0, plot_width - width),
        y: y.clamp(0.0, plot_height - height),
        width,
        height,
    }
}
