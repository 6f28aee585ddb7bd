use indexmap::IndexMap;
use tracing::debug;

use crate::core::Series;
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    /// Replaces all series, resetting selection, hover, and tooltip state.
    ///
    /// Each service response rebuilds the chart wholesale, so there is no
    /// incremental merge path.
    pub fn set_series(&mut self, series: Vec<Series>) -> PlotResult<()> {
        let mut map = IndexMap::with_capacity(series.len());
        for series in series {
            let id = series.id().to_owned();
            if map.insert(id.clone(), series).is_some() {
                return Err(PlotError::InvalidData(format!(
                    "duplicate series id: {id}"
                )));
            }
        }

        debug!(count = map.len(), "set series");
        self.model.series = map;
        self.model.reset_transient_state();
        Ok(())
    }

    /// Adds one series at the end of the draw order.
    pub fn add_series(&mut self, series: Series) -> PlotResult<()> {
        if self.model.series.contains_key(series.id()) {
            return Err(PlotError::InvalidData(format!(
                "duplicate series id: {}",
                series.id()
            )));
        }

        debug!(id = series.id(), points = series.point_count(), "add series");
        self.model.series.insert(series.id().to_owned(), series);
        Ok(())
    }

    pub fn clear_series(&mut self) {
        self.model.series.clear();
        self.model.reset_transient_state();
        debug!("series cleared");
    }
}
