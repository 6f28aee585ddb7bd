use crate::error::{PlotError, PlotResult};

use super::PlotConfig;
use super::layout::PlotArea;

pub(super) fn validate_config(config: &PlotConfig) -> PlotResult<()> {
    if !config.viewport.is_valid() {
        return Err(PlotError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    let margins = config.margins;
    for (name, value) in [
        ("top", margins.top),
        ("right", margins.right),
        ("bottom", margins.bottom),
        ("left", margins.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "margin `{name}` must be finite and >= 0"
            )));
        }
    }
    // Also checks that the margins leave a positive plot area.
    PlotArea::from_viewport(config.viewport, margins)?;

    for (name, value) in [
        ("marker radius normal", config.marker_radius.normal),
        ("marker radius selected", config.marker_radius.selected),
        ("marker radius hover", config.marker_radius.hover),
        ("line width normal", config.line_width.normal),
        ("line width selected", config.line_width.selected),
        ("axis font size", config.axis_font_size_px),
        ("legend font size", config.legend.font_size_px),
        ("legend entry spacing", config.legend.entry_spacing_px),
        ("legend padding", config.legend.padding_px),
        ("legend swatch length", config.legend.swatch_length_px),
        ("tooltip font size", config.tooltip.font_size_px),
        ("tooltip padding", config.tooltip.padding_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    if !config.tooltip.marker_offset_px.is_finite() || config.tooltip.marker_offset_px < 0.0 {
        return Err(PlotError::InvalidConfig(
            "tooltip marker offset must be finite and >= 0".to_owned(),
        ));
    }

    if config.resize_transition.enabled
        && (!config.resize_transition.duration_seconds.is_finite()
            || config.resize_transition.duration_seconds <= 0.0)
    {
        return Err(PlotError::InvalidConfig(
            "resize transition duration must be finite and > 0".to_owned(),
        ));
    }

    for (axis, override_) in [
        ("x", config.x_extent_override),
        ("y", config.y_extent_override),
    ] {
        if let Some((min, max)) = override_ {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(PlotError::InvalidConfig(format!(
                    "{axis} extent override must be finite with min < max"
                )));
            }
        }
    }

    if config.palette.is_empty() {
        return Err(PlotError::InvalidConfig(
            "palette must contain at least one color".to_owned(),
        ));
    }
    for color in &config.palette {
        color.validate()?;
    }

    Ok(())
}
