use thiserror::Error;

/// Errors raised by the indicator math.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("insufficient data: need at least {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("invalid indicator period: {0}")]
    InvalidPeriod(usize),
}

/// Fatal pipeline errors. Everything else is absorbed into the `FinalResult`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error("missing required input: {0}")]
    MissingInput(&'static str),
}
