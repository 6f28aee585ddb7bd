use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("no finite samples to derive {0} extent")]
    EmptyDomain(&'static str),

    #[error("log scale requires strictly positive values, got {value}")]
    NonPositiveLogValue { value: f64 },

    #[error("service returned error status: {message}")]
    Service { message: String },
}
