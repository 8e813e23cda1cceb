use crate::series::error::{InputField, ValidationError};
pub const MIN_SAMPLES: usize = 1;
pub const MAX_SAMPLES: usize = 1000;
/// Shortest period whose highest harmonic frequency stays finite.
pub const MIN_PERIOD: f64 = 1e-200;
/// Largest bound magnitude for which every wave segment stays finite.
pub const MAX_BOUND_MAGNITUDE: f64 = f64::MAX / 32.0;
/// Half-open period `[start, end)` the waveform is sampled over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}
impl Interval {
    pub fn new(start: f64, end: f64) -> Result<Self, ValidationError> {
        if !start.is_finite() {
            return Err(ValidationError::NonNumeric {
                field: InputField::Start,
            });
        }
        if !end.is_finite() {
            return Err(ValidationError::NonNumeric {
                field: InputField::End,
            });
        }
        if end <= start {
            return Err(ValidationError::EmptyInterval { start, end });
        }
        let period = end - start;
        if !period.is_finite() {
            return Err(ValidationError::PeriodOverflow { start, end });
        }
        if period < MIN_PERIOD {
            return Err(ValidationError::PeriodTooShort {
                period,
                min: MIN_PERIOD,
            });
        }
        for (field, value) in [(InputField::Start, start), (InputField::End, end)] {
            if value.abs() > MAX_BOUND_MAGNITUDE {
                return Err(ValidationError::BoundTooLarge {
                    field,
                    value,
                    max: MAX_BOUND_MAGNITUDE,
                });
            }
        }
        Ok(Self { start, end })
    }
    /// Largest absolute abscissa in the interval.
    pub fn magnitude(&self) -> f64 {
        self.start.abs().max(self.end.abs())
    }
    pub fn start(&self) -> f64 {
        self.start
    }
    pub fn end(&self) -> f64 {
        self.end
    }
    pub fn period(&self) -> f64 {
        self.end - self.start
    }
}
/// Number of samples taken over one period, bounded to `MIN_SAMPLES..=MAX_SAMPLES`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCount(usize);
impl SampleCount {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < MIN_SAMPLES as i64 {
            return Err(ValidationError::SampleCountTooSmall {
                value,
                min: MIN_SAMPLES,
            });
        }
        if value > MAX_SAMPLES as i64 {
            return Err(ValidationError::SampleCountTooLarge {
                value,
                max: MAX_SAMPLES,
            });
        }
        Ok(Self(value as usize))
    }
    pub fn get(self) -> usize {
        self.0
    }
}
/// Sample spacing for `count` points, rejected when neighbouring abscissas
/// could round to the same value.
///
/// Each abscissa carries at most `1.5 * EPSILON * magnitude` rounding error, so
/// a step above `8 * EPSILON * magnitude` keeps them strictly increasing.
pub fn checked_step(interval: &Interval, count: SampleCount) -> Result<f64, ValidationError> {
    let step = interval.period() / count.get() as f64;
    let magnitude = interval.magnitude();
    if step <= 8.0 * f64::EPSILON * magnitude || step <= 0.0 {
        return Err(ValidationError::StepBelowPrecision { step, magnitude });
    }
    Ok(step)
}
/// Something that can be evaluated at an abscissa of a given period.
pub trait WaveformSource {
    fn value(&self, x: f64, interval: &Interval) -> f64;
}
/// Fixed three-segment wave: a flat top, a falling ramp, then a rising ramp.
///
/// Segment boundaries are compared against the absolute abscissa, so the shape
/// is only phase-aligned with the interval when it starts at zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct PiecewiseWave;
impl WaveformSource for PiecewiseWave {
    fn value(&self, x: f64, interval: &Interval) -> f64 {
        let period = interval.period();
        if x < period / 2.0 {
            2.0
        } else if x < 3.0 * period / 4.0 {
            4.0 * (period - 2.0 * x) / period
        } else {
            8.0 * (x - period) / period
        }
    }
}
/// Equally spaced samples of a waveform over one period.
#[derive(Clone, Debug)]
pub struct SampleSet {
    interval: Interval,
    xs: Vec<f64>,
    ys: Vec<f64>,
}
impl SampleSet {
    pub fn interval(&self) -> Interval {
        self.interval
    }
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
    pub fn len(&self) -> usize {
        self.xs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
    pub fn step(&self) -> f64 {
        self.interval.period() / self.len() as f64
    }
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}
pub fn sample(interval: Interval, count: SampleCount) -> SampleSet {
    sample_with(&PiecewiseWave, interval, count)
}
pub fn sample_with<S: WaveformSource + ?Sized>(
    source: &S,
    interval: Interval,
    count: SampleCount,
) -> SampleSet {
    let n = count.get();
    let step = interval.period() / n as f64;
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for i in 0..n {
        let x = interval.start() + i as f64 * step;
        xs.push(x);
        ys.push(source.value(x, &interval));
    }
    SampleSet { interval, xs, ys }
}
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::PI;
    #[test]
    fn quarter_period_samples_hit_each_branch() {
        let interval = Interval::new(0.0, 2.0 * PI).unwrap();
        let set = sample(interval, SampleCount::new(4).unwrap());
        let expected_x = [0.0, PI / 2.0, PI, 3.0 * PI / 2.0];
        for (x, e) in set.xs().iter().zip(expected_x) {
            assert!((x - e).abs() < 1e-12, "{x} != {e}");
        }
        let expected_y = [2.0, 2.0, 0.0, -2.0];
        for (y, e) in set.ys().iter().zip(expected_y) {
            assert!((y - e).abs() < 1e-12, "{y} != {e}");
        }
    }
    #[test]
    fn sample_count_bounds_are_distinct() {
        assert_eq!(
            SampleCount::new(0),
            Err(ValidationError::SampleCountTooSmall { value: 0, min: 1 })
        );
        assert_eq!(
            SampleCount::new(1001),
            Err(ValidationError::SampleCountTooLarge {
                value: 1001,
                max: 1000
            })
        );
        assert_eq!(SampleCount::new(1).unwrap().get(), 1);
        assert_eq!(SampleCount::new(1000).unwrap().get(), 1000);
    }
    #[test]
    fn interval_rejects_reversed_and_non_finite_bounds() {
        assert_eq!(
            Interval::new(1.0, 1.0),
            Err(ValidationError::EmptyInterval {
                start: 1.0,
                end: 1.0
            })
        );
        assert!(matches!(
            Interval::new(2.0, -1.0),
            Err(ValidationError::EmptyInterval { .. })
        ));
        assert_eq!(
            Interval::new(f64::NAN, 1.0),
            Err(ValidationError::NonNumeric {
                field: InputField::Start
            })
        );
        assert_eq!(
            Interval::new(0.0, f64::INFINITY),
            Err(ValidationError::NonNumeric {
                field: InputField::End
            })
        );
    }
    #[test]
    fn overflowing_period_is_rejected() {
        assert_eq!(
            Interval::new(-1e308, 1e308),
            Err(ValidationError::PeriodOverflow {
                start: -1e308,
                end: 1e308
            })
        );
    }
    #[test]
    fn extreme_bounds_are_rejected() {
        assert!(matches!(
            Interval::new(1e308, 1.5e308),
            Err(ValidationError::BoundTooLarge {
                field: InputField::Start,
                ..
            })
        ));
        assert!(matches!(
            Interval::new(0.0, 1e-250),
            Err(ValidationError::PeriodTooShort { .. })
        ));
    }
    #[test]
    fn step_finer_than_float_spacing_is_rejected() {
        let interval = Interval::new(1e15, 1e15 + 1.0).unwrap();
        let count = SampleCount::new(1000).unwrap();
        assert!(matches!(
            checked_step(&interval, count),
            Err(ValidationError::StepBelowPrecision { .. })
        ));
        let interval = Interval::new(1e6, 1e6 + 10.0).unwrap();
        assert_eq!(checked_step(&interval, count), Ok(0.01));
    }
    #[test]
    fn accepted_extreme_intervals_sample_finite_increasing_values() {
        let cases = [
            (1e6, 1e6 + 10.0, 1000),
            (-1e12, 1e12, 1000),
            (1e300, 2e300, 1000),
            (0.0, 1e-150, 1000),
            (1e9, 1e9 + 1e-3, 7),
        ];
        for (start, end, n) in cases {
            let interval = Interval::new(start, end).unwrap();
            let count = SampleCount::new(n).unwrap();
            checked_step(&interval, count).unwrap();
            let set = sample(interval, count);
            assert!(set.xs().windows(2).all(|w| w[1] > w[0]), "[{start}, {end})");
            assert!(set.ys().iter().all(|y| y.is_finite()), "[{start}, {end})");
        }
    }
    #[test]
    fn samples_are_strictly_increasing_and_span_the_period() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let start: f64 = rng.gen_range(-50.0..50.0);
            let period: f64 = rng.gen_range(0.01..100.0);
            let n: i64 = rng.gen_range(1..=1000);
            let interval = Interval::new(start, start + period).unwrap();
            let set = sample(interval, SampleCount::new(n).unwrap());
            assert_eq!(set.len(), n as usize);
            assert_eq!(set.ys().len(), n as usize);
            assert_eq!(set.xs()[0], start);
            let last = start + (n - 1) as f64 * set.step();
            assert!((set.xs()[set.len() - 1] - last).abs() < 1e-9);
            assert!(set.xs().windows(2).all(|w| w[1] > w[0]));
            assert!(set.xs().iter().all(|&x| x < start + period));
        }
    }
    #[test]
    fn branches_compare_absolute_abscissa() {
        // Every x here lies beyond 3T/4 = 1.5, so only the last segment applies.
        let interval = Interval::new(10.0, 12.0).unwrap();
        let set = sample(interval, SampleCount::new(16).unwrap());
        for (x, y) in set.points() {
            assert!((y - 8.0 * (x - 2.0) / 2.0).abs() < 1e-12);
        }
    }
    #[test]
    fn wave_is_derived_from_the_interval_passed_in() {
        let wave = PiecewiseWave;
        let short = Interval::new(0.0, 2.0).unwrap();
        let long = Interval::new(0.0, 8.0).unwrap();
        // x = 1.2 sits in the falling ramp of the short period but on the flat top of the long one.
        assert!((wave.value(1.2, &short) - 4.0 * (2.0 - 2.4) / 2.0).abs() < 1e-12);
        assert_eq!(wave.value(1.2, &long), 2.0);
    }
}
