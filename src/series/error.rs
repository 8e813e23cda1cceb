use std::fmt;
use thiserror::Error;
/// Which raw input a validation failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Start,
    End,
    Harmonics,
    Samples,
}
impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Start => "start",
            InputField::End => "end",
            InputField::Harmonics => "harmonic count",
            InputField::Samples => "sample count",
        };
        f.write_str(name)
    }
}
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid number")]
    NonNumeric { field: InputField },
    #[error("sample count must be at least {min}, got {value}")]
    SampleCountTooSmall { value: i64, min: usize },
    #[error("sample count must be at most {max}, got {value}")]
    SampleCountTooLarge { value: i64, max: usize },
    #[error("harmonic count must not be negative, got {value}")]
    NegativeHarmonicCount { value: i64 },
    #[error("interval end ({end}) must be greater than start ({start})")]
    EmptyInterval { start: f64, end: f64 },
    #[error("interval [{start}, {end}) is too wide: its period overflows")]
    PeriodOverflow { start: f64, end: f64 },
    #[error("interval period {period} is shorter than the minimum {min}")]
    PeriodTooShort { period: f64, min: f64 },
    #[error("{field} magnitude {value} exceeds {max}")]
    BoundTooLarge { field: InputField, value: f64, max: f64 },
    #[error("sample step {step} is too small to separate abscissas of magnitude {magnitude}")]
    StepBelowPrecision { step: f64, magnitude: f64 },
    #[error("harmonic count must be at most {max}, got {value}")]
    HarmonicCountTooLarge { value: i64, max: usize },
    #[error("plot box leaves no drawing area: inner size {inner_width}x{inner_height}")]
    DegenerateBox { inner_width: f64, inner_height: f64 },
    #[error("at least one non-empty series is required to compute a transform")]
    EmptySeries,
    #[error("series abscissas differ in length: expected {expected}, got {actual}")]
    SeriesLengthMismatch { expected: usize, actual: usize },
}
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for SeriesError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        SeriesError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for SeriesError {
    fn from(value: image::ImageError) -> Self {
        SeriesError::Plot(value.to_string())
    }
}
