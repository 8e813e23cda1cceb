use std::f64::consts::PI;
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};
use crate::series::signal::SampleSet;
/// How the harmonic sums are evaluated. Both give the same coefficients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Solver {
    /// Accumulate cosine/sine sums per harmonic, O(N·G).
    #[default]
    Direct,
    /// One forward FFT of the samples, then a phase shift per harmonic.
    Fft,
}
/// Cosine, sine and magnitude coefficients for harmonics `0..=G`.
#[derive(Clone, Debug)]
pub struct CoefficientSet {
    cosine: Vec<f64>,
    sine: Vec<f64>,
    magnitude: Vec<f64>,
}
impl CoefficientSet {
    /// Highest harmonic order included.
    pub fn order(&self) -> usize {
        self.cosine.len() - 1
    }
    /// DC term, the mean of the samples.
    pub fn dc(&self) -> f64 {
        self.cosine[0]
    }
    pub fn cosine(&self, k: usize) -> f64 {
        self.cosine[k]
    }
    pub fn sine(&self, k: usize) -> f64 {
        self.sine[k]
    }
    pub fn magnitude(&self, k: usize) -> f64 {
        self.magnitude[k]
    }
    /// Magnitudes of harmonics `1..=G`, the bar chart input.
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitude[1..]
    }
    pub fn max_magnitude(&self) -> f64 {
        self.magnitudes().iter().copied().fold(0.0, f64::max)
    }
}
/// Truncated series evaluated at every sample abscissa.
#[derive(Clone, Debug)]
pub struct ApproximationSet {
    xs: Vec<f64>,
    values: Vec<f64>,
}
impl ApproximationSet {
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }
    pub fn values(&self) -> &[f64] {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.values.iter().copied())
    }
}
pub fn approximate(samples: &SampleSet, harmonics: usize) -> (CoefficientSet, ApproximationSet) {
    approximate_with(Solver::Direct, samples, harmonics)
}
pub fn approximate_with(
    solver: Solver,
    samples: &SampleSet,
    harmonics: usize,
) -> (CoefficientSet, ApproximationSet) {
    let coefficients = match solver {
        Solver::Direct => direct_coefficients(samples, harmonics),
        Solver::Fft => fft_coefficients(samples, harmonics),
    };
    let approximation = reconstruct(samples, &coefficients);
    (coefficients, approximation)
}
pub fn mean_squared_error(samples: &SampleSet, approximation: &ApproximationSet) -> f64 {
    let sum: f64 = samples
        .ys()
        .iter()
        .zip(approximation.values())
        .map(|(y, yg)| (y - yg).powi(2))
        .sum();
    sum / samples.len() as f64
}
fn fundamental(samples: &SampleSet) -> f64 {
    2.0 * PI / samples.interval().period()
}
fn dc_term(samples: &SampleSet) -> f64 {
    samples.ys().iter().sum::<f64>() / samples.len() as f64
}
fn assemble(
    dc: f64,
    sums: impl Iterator<Item = (f64, f64)>,
    n: usize,
    harmonics: usize,
) -> CoefficientSet {
    let mut cosine = Vec::with_capacity(harmonics + 1);
    let mut sine = Vec::with_capacity(harmonics + 1);
    let mut magnitude = Vec::with_capacity(harmonics + 1);
    cosine.push(dc);
    sine.push(0.0);
    magnitude.push(0.0);
    for (cos_sum, sin_sum) in sums {
        let a = 2.0 * cos_sum / n as f64;
        let b = 2.0 * sin_sum / n as f64;
        cosine.push(a);
        sine.push(b);
        magnitude.push(a.hypot(b));
    }
    CoefficientSet {
        cosine,
        sine,
        magnitude,
    }
}
fn direct_coefficients(samples: &SampleSet, harmonics: usize) -> CoefficientSet {
    let w = fundamental(samples);
    let sums = (1..=harmonics).map(|k| {
        let kw = k as f64 * w;
        samples.points().fold((0.0, 0.0), |(g, d), (x, y)| {
            let s = kw * x;
            (g + y * s.cos(), d + y * s.sin())
        })
    });
    assemble(dc_term(samples), sums, samples.len(), harmonics)
}
fn fft_coefficients(samples: &SampleSet, harmonics: usize) -> CoefficientSet {
    let n = samples.len();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let mut buffer: Vec<Complex64> = samples
        .ys()
        .iter()
        .map(|&y| Complex64::new(y, 0.0))
        .collect();
    fft.process(&mut buffer);
    // The grid is uniform, so sum(y_i * e^{ikw x_i}) = e^{ikw start} * conj(X[k mod N]).
    let phase = fundamental(samples) * samples.interval().start();
    let sums = (1..=harmonics).map(|k| {
        let shifted = Complex64::from_polar(1.0, k as f64 * phase) * buffer[k % n].conj();
        (shifted.re, shifted.im)
    });
    assemble(dc_term(samples), sums, n, harmonics)
}
fn reconstruct(samples: &SampleSet, coefficients: &CoefficientSet) -> ApproximationSet {
    let w = fundamental(samples);
    let values = samples
        .xs()
        .iter()
        .map(|&x| {
            let wx = x * w;
            let tail: f64 = (1..=coefficients.order())
                .map(|k| {
                    let s = k as f64 * wx;
                    coefficients.sine(k) * s.sin() + coefficients.cosine(k) * s.cos()
                })
                .sum();
            coefficients.dc() + tail
        })
        .collect();
    ApproximationSet {
        xs: samples.xs().to_vec(),
        values,
    }
}
