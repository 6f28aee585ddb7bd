use serde::Deserialize;
use tracing::debug;

use crate::core::Series;
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::PlotEngine;

/// Hazard web-service response envelope.
///
/// All hazard, spectra, and ground-motion-vs-distance endpoints share this
/// shape: a status field, an optional error message, and one series group for
/// means and one for sigmas. The engine is a pure consumer; query building
/// and transport live with the host.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub means: Option<ResponseGroup>,
    #[serde(default)]
    pub sigmas: Option<ResponseGroup>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseGroup {
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    pub data: Vec<ResponseSeries>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseSeries {
    pub id: String,
    pub label: String,
    pub data: SeriesArrays,
}

/// Parallel coordinate arrays; a `null` y marks a gap in the line.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesArrays {
    pub xs: Vec<f64>,
    pub ys: Vec<Option<f64>>,
}

impl HazardResponse {
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse service response: {e}")))
    }

    /// Rejects error-status responses before any chart state is touched.
    pub fn ensure_ok(&self) -> PlotResult<()> {
        if self.status.eq_ignore_ascii_case("error") {
            return Err(PlotError::Service {
                message: self
                    .message
                    .clone()
                    .unwrap_or_else(|| "no message provided".to_owned()),
            });
        }
        Ok(())
    }
}

impl ResponseGroup {
    /// Converts the group payload into chart series.
    pub fn to_series(&self) -> PlotResult<Vec<Series>> {
        self.data
            .iter()
            .map(|entry| Series::from_xy(&entry.id, &entry.label, &entry.data.xs, &entry.data.ys))
            .collect()
    }
}

impl<R: Renderer> PlotEngine<R> {
    /// Replaces chart state from the means group of a service response.
    pub fn load_response_means(&mut self, response: &HazardResponse) -> PlotResult<()> {
        response.ensure_ok()?;
        let group = response.means.as_ref().ok_or_else(|| {
            PlotError::InvalidData("response contains no means group".to_owned())
        })?;
        self.load_group(group)
    }

    /// Replaces chart state from the sigmas group of a service response.
    pub fn load_response_sigmas(&mut self, response: &HazardResponse) -> PlotResult<()> {
        response.ensure_ok()?;
        let group = response.sigmas.as_ref().ok_or_else(|| {
            PlotError::InvalidData("response contains no sigmas group".to_owned())
        })?;
        self.load_group(group)
    }

    fn load_group(&mut self, group: &ResponseGroup) -> PlotResult<()> {
        let series = group.to_series()?;
        debug!(count = series.len(), "load response group");
        self.set_series(series)?;
        if let (Some(x_label), Some(y_label)) = (&group.x_label, &group.y_label) {
            self.set_axis_titles(x_label.clone(), y_label.clone());
        }
        Ok(())
    }
}
