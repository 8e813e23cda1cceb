use serde::{Deserialize, Serialize};
use crate::series::error::ValidationError;
use crate::series::fourier::ApproximationSet;
use crate::series::signal::SampleSet;
pub const WAVEFORM_GRID_DIVISIONS: usize = 10;
pub const HARMONIC_GRID_ROWS: usize = 5;
/// Pixel canvas with a uniform margin on every side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotBox {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}
impl PlotBox {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }
    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }
    /// Bottom edge of the inner rectangle, where the x axis is drawn.
    pub fn baseline(&self) -> f64 {
        self.margin + self.inner_height()
    }
    pub fn validate(&self) -> Result<(), ValidationError> {
        let inner_width = self.inner_width();
        let inner_height = self.inner_height();
        let finite = self.margin.is_finite() && inner_width.is_finite() && inner_height.is_finite();
        if !finite || self.margin < 0.0 || inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(ValidationError::DegenerateBox {
                inner_width,
                inner_height,
            });
        }
        Ok(())
    }
}
/// A plottable series of ordinates over shared abscissas.
pub trait PlotSeries {
    fn xs(&self) -> &[f64];
    fn ys(&self) -> &[f64];
}
impl PlotSeries for SampleSet {
    fn xs(&self) -> &[f64] {
        SampleSet::xs(self)
    }
    fn ys(&self) -> &[f64] {
        SampleSet::ys(self)
    }
}
impl PlotSeries for ApproximationSet {
    fn xs(&self) -> &[f64] {
        ApproximationSet::xs(self)
    }
    fn ys(&self) -> &[f64] {
        self.values()
    }
}
/// Data ranges after degenerate spans have been widened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Pixel coordinate along the axis the line is perpendicular to.
    pub pixel: f64,
    /// Data value printed next to the line.
    pub value: f64,
}
#[derive(Clone, Debug, Default)]
pub struct Grid {
    pub vertical: Vec<GridLine>,
    pub horizontal: Vec<GridLine>,
}
/// Affine map from data coordinates to pixels, y growing downwards on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    bounds: DataBounds,
    plot_box: PlotBox,
}
impl ViewTransform {
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.plot_box.margin + (x - self.bounds.min_x) * self.scale_x,
            self.plot_box.baseline() - (y - self.bounds.min_y) * self.scale_y,
        )
    }
    pub fn bounds(&self) -> DataBounds {
        self.bounds
    }
    pub fn plot_box(&self) -> PlotBox {
        self.plot_box
    }
    pub fn grid(&self, divisions: usize) -> Grid {
        let divisions = divisions.max(1);
        let b = self.bounds;
        let pb = self.plot_box;
        let vertical = (0..=divisions)
            .map(|i| {
                let t = i as f64 / divisions as f64;
                GridLine {
                    pixel: pb.margin + t * pb.inner_width(),
                    value: b.min_x + t * (b.max_x - b.min_x),
                }
            })
            .collect();
        let horizontal = (0..=divisions)
            .map(|i| {
                let t = i as f64 / divisions as f64;
                GridLine {
                    pixel: pb.margin + t * pb.inner_height(),
                    value: b.max_y - t * (b.max_y - b.min_y),
                }
            })
            .collect();
        Grid {
            vertical,
            horizontal,
        }
    }
}
/// Widen a zero-length span to one unit centred on the value.
/// Keeps a range whose scale onto `inner` pixels is finite; otherwise pads its
/// centre by `0.5`, or by enough ulps to stay distinct at large magnitudes.
fn widen((min, max): (f64, f64), inner: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 && (inner / span).is_finite() {
        return (min, max);
    }
    let centre = min / 2.0 + max / 2.0;
    let half = 0.5_f64.max(centre.abs() * 64.0 * f64::EPSILON);
    (centre - half, centre + half)
}
fn extent<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}
pub fn compute_transform(
    series: &[&dyn PlotSeries],
    plot_box: PlotBox,
) -> Result<ViewTransform, ValidationError> {
    plot_box.validate()?;
    let first = series.first().ok_or(ValidationError::EmptySeries)?;
    let expected = first.xs().len();
    if expected == 0 {
        return Err(ValidationError::EmptySeries);
    }
    for s in series {
        for actual in [s.xs().len(), s.ys().len()] {
            if actual != expected {
                return Err(ValidationError::SeriesLengthMismatch { expected, actual });
            }
        }
    }
    let (min_x, max_x) = widen(extent(first.xs().iter()), plot_box.inner_width());
    let (min_y, max_y) = widen(
        extent(series.iter().flat_map(|s| s.ys().iter())),
        plot_box.inner_height(),
    );
    let scale_x = plot_box.inner_width() / (max_x - min_x);
    let scale_y = plot_box.inner_height() / (max_y - min_y);
    Ok(ViewTransform {
        scale_x,
        scale_y,
        offset_x: plot_box.margin - min_x * scale_x,
        offset_y: plot_box.baseline() + min_y * scale_y,
        bounds: DataBounds {
            min_x,
            max_x,
            min_y,
            max_y,
        },
        plot_box,
    })
}
/// Bar chart map: harmonic index along x, magnitude from zero along y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarmonicTransform {
    order: usize,
    step: f64,
    scale_y: f64,
    top: f64,
    plot_box: PlotBox,
}
impl HarmonicTransform {
    /// `order == 0` yields a single empty slot; a non-positive maximum is drawn as `1`.
    pub fn new(
        order: usize,
        max_magnitude: f64,
        plot_box: PlotBox,
    ) -> Result<Self, ValidationError> {
        plot_box.validate()?;
        let top = if max_magnitude > 0.0 && max_magnitude.is_finite() {
            max_magnitude
        } else {
            1.0
        };
        Ok(Self {
            order,
            step: plot_box.inner_width() / order.max(1) as f64,
            scale_y: plot_box.inner_height() / top,
            top,
            plot_box,
        })
    }
    pub fn order(&self) -> usize {
        self.order
    }
    /// Magnitude mapped to the top margin.
    pub fn top(&self) -> f64 {
        self.top
    }
    pub fn plot_box(&self) -> PlotBox {
        self.plot_box
    }
    pub fn bar_x(&self, k: usize) -> f64 {
        self.plot_box.margin + k as f64 * self.step
    }
    pub fn bar_top(&self, magnitude: f64) -> f64 {
        self.plot_box.baseline() - magnitude * self.scale_y
    }
    pub fn grid(&self) -> Grid {
        let pb = self.plot_box;
        let slots = self.order.max(1);
        let vertical = (0..=slots)
            .map(|i| GridLine {
                pixel: self.bar_x(i),
                value: i as f64,
            })
            .collect();
        let horizontal = (0..=HARMONIC_GRID_ROWS)
            .map(|i| {
                let t = i as f64 / HARMONIC_GRID_ROWS as f64;
                GridLine {
                    pixel: pb.margin + t * pb.inner_height(),
                    value: self.top - t * self.top,
                }
            })
            .collect();
        Grid {
            vertical,
            horizontal,
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    struct Raw {
        xs: Vec<f64>,
        ys: Vec<f64>,
    }
    impl PlotSeries for Raw {
        fn xs(&self) -> &[f64] {
            &self.xs
        }
        fn ys(&self) -> &[f64] {
            &self.ys
        }
    }
    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }
    fn reference_box() -> PlotBox {
        PlotBox::new(400.0, 300.0, 40.0)
    }
    #[test]
    fn corners_map_to_inner_rectangle() {
        let series = Raw {
            xs: vec![-1.0, 0.5, 3.0],
            ys: vec![-2.0, 5.0, 1.0],
        };
        let t = compute_transform(&[&series], reference_box()).unwrap();
        assert!(close(t.apply(-1.0, -2.0), (40.0, 260.0)));
        assert!(close(t.apply(3.0, 5.0), (360.0, 40.0)));
    }
    #[test]
    fn corners_stay_exact_far_from_the_origin() {
        let series = Raw {
            xs: vec![1e6, 1e6 + 5.0, 1e6 + 10.0],
            ys: vec![1e15, 1e15 + 8.0, 1e15 + 16.0],
        };
        let t = compute_transform(&[&series], reference_box()).unwrap();
        assert_eq!(t.apply(1e6, 1e15), (40.0, 260.0));
        assert_eq!(t.apply(1e6 + 10.0, 1e15 + 16.0), (360.0, 40.0));
    }
    #[test]
    fn unresolvable_ranges_fall_back_to_the_centre() {
        let huge = Raw {
            xs: vec![1e17],
            ys: vec![-3e300],
        };
        let t = compute_transform(&[&huge], reference_box()).unwrap();
        assert!(close(t.apply(1e17, -3e300), (200.0, 150.0)));
        let subnormal = Raw {
            xs: vec![0.0, 1e-320],
            ys: vec![1.0, 1.0],
        };
        let t = compute_transform(&[&subnormal], reference_box()).unwrap();
        assert!(t.scale_x.is_finite());
        let (px, py) = t.apply(1e-320, 1.0);
        assert!(px.is_finite() && py.is_finite());
        assert!((px - 200.0).abs() < 1e-6);
    }
    #[test]
    fn y_range_is_the_union_of_all_series() {
        let original = Raw {
            xs: vec![0.0, 1.0, 2.0],
            ys: vec![0.0, 1.0, 2.0],
        };
        let fitted = Raw {
            xs: vec![0.0, 1.0, 2.0],
            ys: vec![-1.0, 1.0, 4.0],
        };
        let t = compute_transform(&[&original, &fitted], reference_box()).unwrap();
        let b = t.bounds();
        assert_eq!((b.min_y, b.max_y), (-1.0, 4.0));
        assert!(close(t.apply(2.0, 4.0), (360.0, 40.0)));
    }
    #[test]
    fn constant_series_is_centred_vertically() {
        let series = Raw {
            xs: vec![0.0, 1.0, 2.0, 3.0],
            ys: vec![2.0; 4],
        };
        let t = compute_transform(&[&series], reference_box()).unwrap();
        for &x in &series.xs {
            let (px, py) = t.apply(x, 2.0);
            assert!(px.is_finite());
            assert_eq!(py, 150.0);
        }
        assert_eq!((t.bounds().min_y, t.bounds().max_y), (1.5, 2.5));
    }
    #[test]
    fn single_point_is_centred_horizontally() {
        let series = Raw {
            xs: vec![1.0],
            ys: vec![2.0],
        };
        let t = compute_transform(&[&series], reference_box()).unwrap();
        assert_eq!(t.apply(1.0, 2.0), (200.0, 150.0));
    }
    #[test]
    fn malformed_boxes_are_rejected() {
        let series = Raw {
            xs: vec![0.0, 1.0],
            ys: vec![0.0, 1.0],
        };
        for plot_box in [
            PlotBox::new(80.0, 300.0, 40.0),
            PlotBox::new(400.0, 50.0, 40.0),
            PlotBox::new(f64::NAN, 300.0, 40.0),
            PlotBox::new(400.0, 300.0, -5.0),
        ] {
            assert!(matches!(
                compute_transform(&[&series], plot_box),
                Err(ValidationError::DegenerateBox { .. })
            ));
        }
    }
    #[test]
    fn empty_and_mismatched_series_are_rejected() {
        assert_eq!(
            compute_transform(&[], reference_box()),
            Err(ValidationError::EmptySeries)
        );
        let empty = Raw {
            xs: vec![],
            ys: vec![],
        };
        assert_eq!(
            compute_transform(&[&empty], reference_box()),
            Err(ValidationError::EmptySeries)
        );
        let a = Raw {
            xs: vec![0.0, 1.0],
            ys: vec![0.0, 1.0],
        };
        let b = Raw {
            xs: vec![0.0],
            ys: vec![0.0],
        };
        assert_eq!(
            compute_transform(&[&a, &b], reference_box()),
            Err(ValidationError::SeriesLengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
    #[test]
    fn grid_labels_span_the_data_range() {
        let series = Raw {
            xs: vec![0.0, 10.0],
            ys: vec![-5.0, 5.0],
        };
        let t = compute_transform(&[&series], reference_box()).unwrap();
        let grid = t.grid(WAVEFORM_GRID_DIVISIONS);
        assert_eq!(grid.vertical.len(), 11);
        assert_eq!(grid.vertical[0], GridLine { pixel: 40.0, value: 0.0 });
        assert_eq!(grid.vertical[10], GridLine { pixel: 360.0, value: 10.0 });
        assert_eq!(grid.horizontal[0], GridLine { pixel: 40.0, value: 5.0 });
        assert_eq!(grid.horizontal[10], GridLine { pixel: 260.0, value: -5.0 });
    }
    #[test]
    fn tallest_harmonic_reaches_the_top_margin() {
        let t = HarmonicTransform::new(4, 2.5, reference_box()).unwrap();
        assert_eq!(t.bar_x(1), 120.0);
        assert_eq!(t.bar_x(4), 360.0);
        assert_eq!(t.bar_top(2.5), 40.0);
        assert_eq!(t.bar_top(0.0), 260.0);
        let grid = t.grid();
        assert_eq!(grid.vertical.len(), 5);
        assert_eq!(grid.horizontal.len(), HARMONIC_GRID_ROWS + 1);
        assert_eq!(grid.horizontal[0].value, 2.5);
        assert_eq!(grid.horizontal[HARMONIC_GRID_ROWS].value, 0.0);
    }
    #[test]
    fn all_zero_magnitudes_sit_on_the_baseline() {
        let t = HarmonicTransform::new(3, 0.0, reference_box()).unwrap();
        assert_eq!(t.top(), 1.0);
        assert_eq!(t.bar_top(0.0), 260.0);
        assert!(t.bar_x(3).is_finite());
    }
    #[test]
    fn zero_harmonics_use_a_single_slot() {
        let t = HarmonicTransform::new(0, 0.0, reference_box()).unwrap();
        assert_eq!(t.bar_x(1), 360.0);
        assert_eq!(t.grid().vertical.len(), 2);
    }
}
