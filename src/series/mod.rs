// src/series/mod.rs
pub mod error;
pub mod fourier;
pub mod pipeline;
pub mod plot;
pub mod request;
pub mod scaling;
pub mod signal;
pub use error::{InputField, SeriesError, ValidationError};
pub use fourier::{approximate, approximate_with, ApproximationSet, CoefficientSet, Solver};
pub use pipeline::{HarmonicBar, HarmonicChart, PlotFrame, SeriesPipeline};
pub use plot::{render_harmonics_png, render_waveform_png, PlotStyle};
pub use request::{PlotRequest, RawInputs, MAX_HARMONICS};
pub use scaling::{
    compute_transform, Grid, GridLine, HarmonicTransform, PlotBox, PlotSeries, ViewTransform,
    HARMONIC_GRID_ROWS, WAVEFORM_GRID_DIVISIONS,
};
pub use signal::{
    checked_step, sample, sample_with, Interval, PiecewiseWave, SampleCount, SampleSet,
    WaveformSource, MAX_SAMPLES, MIN_SAMPLES,
};
