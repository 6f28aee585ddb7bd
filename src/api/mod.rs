mod axis_ticks;
mod engine;
mod frame_builder;
mod interaction_controller;
mod layout;
mod legend_builder;
mod plot_config;
mod plot_model;
mod resize;
mod selection;
mod series_controller;
mod service_contract;
mod tooltip;
mod validation;

pub use engine::PlotEngine;
pub use layout::PlotArea;
pub use plot_config::{
    LegendBehavior, LegendCorner, LineWidthBehavior, Margins, MarkerRadiusBehavior, PlotConfig,
    ResizeTransitionBehavior, TooltipBehavior,
};
pub use resize::ResizeTransition;
pub use selection::SelectionState;
pub use service_contract::{HazardResponse, ResponseGroup, ResponseSeries, SeriesArrays};
pub use tooltip::{TooltipBox, TooltipState};
