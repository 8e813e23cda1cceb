use log::{debug, info, warn};
use crate::series::error::SeriesError;
use crate::series::fourier::{
    approximate_with, mean_squared_error, ApproximationSet, CoefficientSet, Solver,
};
use crate::series::request::{PlotRequest, RawInputs};
use crate::series::scaling::{
    compute_transform, HarmonicTransform, PlotBox, PlotSeries, ViewTransform,
};
use crate::series::signal::{sample_with, PiecewiseWave, SampleSet, WaveformSource};
/// Everything the waveform canvas needs after one plot action.
#[derive(Clone, Debug)]
pub struct PlotFrame {
    pub request: PlotRequest,
    pub samples: SampleSet,
    pub coefficients: CoefficientSet,
    pub approximation: ApproximationSet,
    pub view: ViewTransform,
    pub mean_squared_error: f64,
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarmonicBar {
    pub order: usize,
    pub magnitude: f64,
    pub x: f64,
    pub top: f64,
}
#[derive(Clone, Debug)]
pub struct HarmonicChart {
    pub bars: Vec<HarmonicBar>,
    pub transform: HarmonicTransform,
}
impl HarmonicChart {
    pub fn baseline(&self) -> f64 {
        self.transform.plot_box().baseline()
    }
}
/// Sample → approximate → scale, recomputed from scratch on every call.
pub struct SeriesPipeline<S: WaveformSource> {
    source: S,
    solver: Solver,
    waveform_box: PlotBox,
    harmonics_box: PlotBox,
}
impl SeriesPipeline<PiecewiseWave> {
    pub fn new(waveform_box: PlotBox, harmonics_box: PlotBox) -> Self {
        Self::with_source(PiecewiseWave, waveform_box, harmonics_box)
    }
}
impl<S: WaveformSource> SeriesPipeline<S> {
    pub fn with_source(source: S, waveform_box: PlotBox, harmonics_box: PlotBox) -> Self {
        Self {
            source,
            solver: Solver::default(),
            waveform_box,
            harmonics_box,
        }
    }
    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }
    pub fn solver(&self) -> Solver {
        self.solver
    }
    pub fn set_solver(&mut self, solver: Solver) {
        self.solver = solver;
    }
    pub fn waveform_box(&self) -> PlotBox {
        self.waveform_box
    }
    pub fn harmonics_box(&self) -> PlotBox {
        self.harmonics_box
    }
    pub fn plot(&self, raw: &RawInputs) -> Result<PlotFrame, SeriesError> {
        debug!(
            "plot inputs: start={:?} end={:?} harmonics={:?} samples={:?}",
            raw.start, raw.end, raw.harmonics, raw.samples
        );
        let request = PlotRequest::parse(raw).map_err(|err| {
            warn!("rejected plot inputs: {err}");
            err
        })?;
        self.plot_request(request)
    }
    pub fn plot_request(&self, request: PlotRequest) -> Result<PlotFrame, SeriesError> {
        self.waveform_box.validate()?;
        let samples = sample_with(&self.source, request.interval, request.samples);
        let (coefficients, approximation) =
            approximate_with(self.solver, &samples, request.harmonics);
        let series: [&dyn PlotSeries; 2] = [&samples, &approximation];
        let view = compute_transform(&series, self.waveform_box)?;
        let mse = mean_squared_error(&samples, &approximation);
        info!(
            "plotted {} samples over [{}, {}) with {} harmonics ({:?}): a0={:.4} mse={:.6}",
            samples.len(),
            request.interval.start(),
            request.interval.end(),
            request.harmonics,
            self.solver,
            coefficients.dc(),
            mse
        );
        Ok(PlotFrame {
            request,
            samples,
            coefficients,
            approximation,
            view,
            mean_squared_error: mse,
        })
    }
    /// Bar chart of `c_1..c_G`, independent of the waveform plot.
    pub fn harmonics(&self, coefficients: &CoefficientSet) -> Result<HarmonicChart, SeriesError> {
        let transform = HarmonicTransform::new(
            coefficients.order(),
            coefficients.max_magnitude(),
            self.harmonics_box,
        )?;
        let bars: Vec<HarmonicBar> = coefficients
            .magnitudes()
            .iter()
            .enumerate()
            .map(|(idx, &magnitude)| {
                let order = idx + 1;
                HarmonicBar {
                    order,
                    magnitude,
                    x: transform.bar_x(order),
                    top: transform.bar_top(magnitude),
                }
            })
            .collect();
        debug!(
            "harmonic chart: {} bars, peak magnitude {:.4}",
            bars.len(),
            transform.top()
        );
        Ok(HarmonicChart { bars, transform })
    }
}
