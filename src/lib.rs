//! hazchart: deterministic charting engine for seismic-hazard visualization.
//!
//! This crate provides the line-chart core shared by hazard, response-spectra,
//! and ground-motion-vs-distance views: axis scales, extents, render-frame
//! building, selection/highlight state, and tooltip placement. Rendering is
//! backend-agnostic; an SVG backend and a null backend ship with the crate.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotConfig, PlotEngine};
pub use error::{PlotError, PlotResult};
