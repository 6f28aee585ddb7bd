use serde::{Deserialize, Serialize};

use crate::core::series::Series;
use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Derived [min, max] domain range used to set an axis scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidData(
                "extent bounds must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Scans all series for the min/max value on one axis.
    ///
    /// Gap sentinels and non-finite samples are excluded from the scan. If
    /// every sample is a gap (or there are no series) the extent is an
    /// explicit `EmptyDomain` error rather than an undefined value.
    pub fn scan<'a, I>(series: I, axis: Axis) -> PlotResult<Self>
    where
        I: IntoIterator<Item = &'a Series>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for series in series {
            for (_, point) in series.points() {
                let value = match axis {
                    Axis::X => point.x,
                    Axis::Y => point.y,
                };
                min = min.min(value);
                max = max.max(value);
            }
        }

        if min > max {
            return Err(PlotError::EmptyDomain(axis.name()));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}
