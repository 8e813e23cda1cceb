pub mod config;
pub mod export;
pub mod series;
pub use config::AppConfig;
pub use export::Exporter;
pub use series::{
    HarmonicChart, PlotBox, PlotFrame, PlotStyle, RawInputs, SeriesError, SeriesPipeline, Solver,
    ValidationError,
};
