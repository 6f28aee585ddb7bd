pub mod extent;
pub mod scale;
pub mod series;
pub mod types;

pub use extent::{Axis, Extent};
pub use scale::{AxisScale, ScaleKind};
pub use series::Series;
pub use types::{PlotPoint, Sample, Viewport};
