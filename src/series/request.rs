use serde::{Deserialize, Serialize};
use crate::series::error::{InputField, ValidationError};
use crate::series::signal::{checked_step, Interval, SampleCount, MAX_SAMPLES};
/// Largest harmonic order a request may ask for.
pub const MAX_HARMONICS: usize = MAX_SAMPLES;
/// The four form fields exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    pub start: String,
    pub end: String,
    pub harmonics: String,
    pub samples: String,
}
impl Default for RawInputs {
    fn default() -> Self {
        Self {
            start: "0".into(),
            end: std::f64::consts::TAU.to_string(),
            harmonics: "5".into(),
            samples: "200".into(),
        }
    }
}
/// Validated parameters for one plot action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRequest {
    pub interval: Interval,
    pub harmonics: usize,
    pub samples: SampleCount,
}
impl PlotRequest {
    /// Checks every field before anything is sampled: numbers first, then ranges.
    pub fn parse(raw: &RawInputs) -> Result<Self, ValidationError> {
        let start = parse_float(&raw.start, InputField::Start)?;
        let end = parse_float(&raw.end, InputField::End)?;
        let harmonics = parse_int(&raw.harmonics, InputField::Harmonics)?;
        let samples = parse_int(&raw.samples, InputField::Samples)?;
        let samples = SampleCount::new(samples)?;
        if harmonics < 0 {
            return Err(ValidationError::NegativeHarmonicCount { value: harmonics });
        }
        if harmonics > MAX_HARMONICS as i64 {
            return Err(ValidationError::HarmonicCountTooLarge {
                value: harmonics,
                max: MAX_HARMONICS,
            });
        }
        let interval = Interval::new(start, end)?;
        checked_step(&interval, samples)?;
        Ok(Self {
            interval,
            harmonics: harmonics as usize,
            samples,
        })
    }
}
fn parse_float(text: &str, field: InputField) -> Result<f64, ValidationError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NonNumeric { field })
}
fn parse_int(text: &str, field: InputField) -> Result<i64, ValidationError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NonNumeric { field })
}
