use serde::{Deserialize, Serialize};

use crate::core::extent::Extent;
use crate::error::{PlotError, PlotResult};

/// Mapping kind used by an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleKind {
    /// Uniform spacing in raw data units.
    #[default]
    Linear,
    /// Uniform spacing in log units (all domain values must be > 0).
    Log,
}

/// Axis model mapping a data domain onto a pixel span.
///
/// The y axis uses the inverted form so larger values map to smaller pixel y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    kind: ScaleKind,
    domain_start: f64,
    domain_end: f64,
    inverted: bool,
}

impl AxisScale {
    pub fn new(kind: ScaleKind, domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }

        if kind == ScaleKind::Log {
            for value in [domain_start, domain_end] {
                if value <= 0.0 {
                    return Err(PlotError::NonPositiveLogValue { value });
                }
            }
        }

        Ok(Self {
            kind,
            domain_start,
            domain_end,
            inverted: false,
        })
    }

    pub fn linear(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        Self::new(ScaleKind::Linear, domain_start, domain_end)
    }

    pub fn log(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        Self::new(ScaleKind::Log, domain_start, domain_end)
    }

    /// Builds a scale from a computed extent, widening degenerate domains so
    /// the mapping stays well-defined. Linear domains widen additively, log
    /// domains multiplicatively (keeps the domain positive).
    pub fn from_extent(kind: ScaleKind, extent: Extent) -> PlotResult<Self> {
        let (mut start, mut end) = (extent.min, extent.max);
        if start == end {
            match kind {
                ScaleKind::Linear => {
                    let pad = if start == 0.0 { 1.0 } else { start.abs() * 0.05 };
                    start -= pad;
                    end += pad;
                }
                ScaleKind::Log => {
                    start /= 2.0;
                    end *= 2.0;
                }
            }
        }
        Self::new(kind, start, end)
    }

    /// Flips the pixel direction; used by the y axis.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.inverted
    }

    pub fn domain_to_pixel(self, value: f64, span_px: f64) -> PlotResult<f64> {
        validate_span(span_px)?;
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }

        let transformed = self.transform(value)?;
        let t0 = self.transform(self.domain_start)?;
        let t1 = self.transform(self.domain_end)?;

        let mut normalized = (transformed - t0) / (t1 - t0);
        if self.inverted {
            normalized = 1.0 - normalized;
        }
        Ok(normalized * span_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, span_px: f64) -> PlotResult<f64> {
        validate_span(span_px)?;
        if !pixel.is_finite() {
            return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
        }

        let t0 = self.transform(self.domain_start)?;
        let t1 = self.transform(self.domain_end)?;

        let mut normalized = pixel / span_px;
        if self.inverted {
            normalized = 1.0 - normalized;
        }
        let transformed = t0 + normalized * (t1 - t0);

        Ok(match self.kind {
            ScaleKind::Linear => transformed,
            ScaleKind::Log => transformed.exp(),
        })
    }

    fn transform(self, value: f64) -> PlotResult<f64> {
        match self.kind {
            ScaleKind::Linear => Ok(value),
            ScaleKind::Log => {
                if value <= 0.0 {
                    return Err(PlotError::NonPositiveLogValue { value });
                }
                Ok(value.ln())
            }
        }
    }
}

fn validate_span(span_px: f64) -> PlotResult<()> {
    if !span_px.is_finite() || span_px <= 0.0 {
        return Err(PlotError::InvalidData(
            "pixel span must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
