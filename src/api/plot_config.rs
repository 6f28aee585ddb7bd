use serde::{Deserialize, Serialize};

use crate::core::{ScaleKind, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Outer margins reserved for axis labels and titles, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 15.0,
            bottom: 50.0,
            left: 70.0,
        }
    }
}

/// Point-marker radii for the three visual states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerRadiusBehavior {
    pub normal: f64,
    pub selected: f64,
    pub hover: f64,
}

impl Default for MarkerRadiusBehavior {
    fn default() -> Self {
        Self {
            normal: 3.5,
            selected: 5.5,
            hover: 7.0,
        }
    }
}

/// Series line widths for the normal and selected states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineWidthBehavior {
    pub normal: f64,
    pub selected: f64,
}

impl Default for LineWidthBehavior {
    fn default() -> Self {
        Self {
            normal: 2.0,
            selected: 4.0,
        }
    }
}

/// Corner of the plot area the legend box anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendCorner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendBehavior {
    pub visible: bool,
    pub corner: LegendCorner,
    pub font_size_px: f64,
    pub entry_spacing_px: f64,
    pub padding_px: f64,
    pub swatch_length_px: f64,
}

impl Default for LegendBehavior {
    fn default() -> Self {
        Self {
            visible: true,
            corner: LegendCorner::default(),
            font_size_px: 12.0,
            entry_spacing_px: 16.0,
            padding_px: 8.0,
            swatch_length_px: 24.0,
        }
    }
}

/// Tooltip text template: three prefixes for the label, x, and y lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipBehavior {
    pub label_prefix: String,
    pub x_prefix: String,
    pub y_prefix: String,
    pub font_size_px: f64,
    pub padding_px: f64,
    /// Vertical gap between the marker and the tooltip box.
    pub marker_offset_px: f64,
}

impl Default for TooltipBehavior {
    fn default() -> Self {
        Self {
            label_prefix: String::new(),
            x_prefix: "x: ".to_owned(),
            y_prefix: "y: ".to_owned(),
            font_size_px: 12.0,
            padding_px: 6.0,
            marker_offset_px: 10.0,
        }
    }
}

/// Eased viewport interpolation applied by incremental resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeTransitionBehavior {
    pub enabled: bool,
    pub duration_seconds: f64,
}

impl Default for ResizeTransitionBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_seconds: 0.5,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub x_scale_kind: ScaleKind,
    #[serde(default)]
    pub y_scale_kind: ScaleKind,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub marker_radius: MarkerRadiusBehavior,
    #[serde(default)]
    pub line_width: LineWidthBehavior,
    #[serde(default)]
    pub legend: LegendBehavior,
    #[serde(default)]
    pub tooltip: TooltipBehavior,
    #[serde(default)]
    pub resize_transition: ResizeTransitionBehavior,
    /// Explicit x extent; skips scanning the series when set.
    #[serde(default)]
    pub x_extent_override: Option<(f64, f64)>,
    #[serde(default)]
    pub y_extent_override: Option<(f64, f64)>,
    #[serde(default)]
    pub x_title: Option<String>,
    #[serde(default)]
    pub y_title: Option<String>,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_axis_font_size")]
    pub axis_font_size_px: f64,
}

impl PlotConfig {
    /// Creates a config with linear axes and default styling.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            x_scale_kind: ScaleKind::default(),
            y_scale_kind: ScaleKind::default(),
            margins: Margins::default(),
            marker_radius: MarkerRadiusBehavior::default(),
            line_width: LineWidthBehavior::default(),
            legend: LegendBehavior::default(),
            tooltip: TooltipBehavior::default(),
            resize_transition: ResizeTransitionBehavior::default(),
            x_extent_override: None,
            y_extent_override: None,
            x_title: None,
            y_title: None,
            palette: default_palette(),
            axis_font_size_px: default_axis_font_size(),
        }
    }

    /// Sets axis scale kinds (hazard curves typically use log/log).
    #[must_use]
    pub fn with_scale_kinds(mut self, x: ScaleKind, y: ScaleKind) -> Self {
        self.x_scale_kind = x;
        self.y_scale_kind = y;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, behavior: MarkerRadiusBehavior) -> Self {
        self.marker_radius = behavior;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, behavior: LineWidthBehavior) -> Self {
        self.line_width = behavior;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, behavior: LegendBehavior) -> Self {
        self.legend = behavior;
        self
    }

    #[must_use]
    pub fn with_legend_corner(mut self, corner: LegendCorner) -> Self {
        self.legend.corner = corner;
        self
    }

    /// Sets the three tooltip text prefixes.
    #[must_use]
    pub fn with_tooltip_prefixes(
        mut self,
        label_prefix: impl Into<String>,
        x_prefix: impl Into<String>,
        y_prefix: impl Into<String>,
    ) -> Self {
        self.tooltip.label_prefix = label_prefix.into();
        self.tooltip.x_prefix = x_prefix.into();
        self.tooltip.y_prefix = y_prefix.into();
        self
    }

    #[must_use]
    pub fn with_resize_transition(mut self, behavior: ResizeTransitionBehavior) -> Self {
        self.resize_transition = behavior;
        self
    }

    #[must_use]
    pub fn with_x_extent_override(mut self, min: f64, max: f64) -> Self {
        self.x_extent_override = Some((min, max));
        self
    }

    #[must_use]
    pub fn with_y_extent_override(mut self, min: f64, max: f64) -> Self {
        self.y_extent_override = Some((min, max));
        self
    }

    /// Sets axis titles; service responses may override these on load.
    #[must_use]
    pub fn with_axis_titles(
        mut self,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
    ) -> Self {
        self.x_title = Some(x_title.into());
        self.y_title = Some(y_title.into());
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_axis_font_size() -> f64 {
    12.0
}

/// Default categorical series palette.
fn default_palette() -> Vec<Color> {
    vec![
        Color::from_rgb8(0x1f, 0x77, 0xb4),
        Color::from_rgb8(0xff, 0x7f, 0x0e),
        Color::from_rgb8(0x2c, 0xa0, 0x2c),
        Color::from_rgb8(0xd6, 0x27, 0x28),
        Color::from_rgb8(0x94, 0x67, 0xbd),
        Color::from_rgb8(0x8c, 0x56, 0x4b),
        Color::from_rgb8(0xe3, 0x77, 0xc2),
        Color::from_rgb8(0x7f, 0x7f, 0x7f),
        Color::from_rgb8(0xbc, 0xbd, 0x22),
        Color::from_rgb8(0x17, 0xbe, 0xcf),
    ]
}
