use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};

use super::plot_config::Margins;

/// Inner drawing region of the viewport after margins, in viewport pixels.
///
/// Scales map domains onto `width`/`height`; `left`/`top` shift plot-local
/// coordinates into viewport space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> PlotResult<Self> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "margins leave no plot area in a {}x{} viewport",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Converts a viewport-space position to plot-local coordinates.
    #[must_use]
    pub fn to_local(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.left, y - self.top)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}
