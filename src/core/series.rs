use serde::{Deserialize, Serialize};

use crate::core::types::{PlotPoint, Sample};
use crate::error::{PlotError, PlotResult};

/// One named sequence of samples plotted as one line.
///
/// The id is unique within a chart and drives selection/highlight state; the
/// label is what the legend and tooltip display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    id: String,
    label: String,
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        samples: Vec<Sample>,
    ) -> PlotResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(PlotError::InvalidData(
                "series id must not be empty".to_owned(),
            ));
        }
        // The legend and tooltip render the label as-is, so it must hold text.
        let label = label.into();
        if label.is_empty() {
            return Err(PlotError::InvalidData(
                "series label must not be empty".to_owned(),
            ));
        }

        Ok(Self { id, label, samples })
    }

    /// Builds a series from parallel x/y arrays as delivered by the hazard
    /// services. A `None` y (or a non-finite pair) becomes a gap sentinel.
    pub fn from_xy(
        id: impl Into<String>,
        label: impl Into<String>,
        xs: &[f64],
        ys: &[Option<f64>],
    ) -> PlotResult<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::InvalidData(format!(
                "series arrays differ in length: xs={}, ys={}",
                xs.len(),
                ys.len()
            )));
        }

        let samples = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| match y {
                Some(y) => Some(PlotPoint::new(x, y)).filter(|p| p.is_finite()),
                None => None,
            })
            .collect();

        Self::new(id, label, samples)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterates non-gap samples together with their slot index.
    pub fn points(&self) -> impl Iterator<Item = (usize, PlotPoint)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .filter_map(|(index, sample)| sample.filter(|p| p.is_finite()).map(|p| (index, p)))
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    /// Splits the series at gap sentinels into contiguous polyline segments.
    ///
    /// Single-point segments are kept: they draw no line but still render a
    /// marker.
    #[must_use]
    pub fn segments(&self) -> Vec<Vec<PlotPoint>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for sample in &self.samples {
            match sample.filter(|p| p.is_finite()) {
                Some(point) => current.push(point),
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }
}
