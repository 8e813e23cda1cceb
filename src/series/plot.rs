use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use crate::series::error::SeriesError;
use crate::series::pipeline::{HarmonicChart, PlotFrame};
use crate::series::scaling::{Grid, PlotBox, WAVEFORM_GRID_DIVISIONS};
type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub background: RGBColor,
    pub grid: RGBColor,
    pub axis: RGBColor,
    pub original: RGBColor,
    pub approximation: RGBColor,
    pub harmonic: RGBColor,
    /// Tick labels need a system font; turn off for headless rendering.
    pub labels: bool,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: WHITE,
            grid: RGBColor(221, 221, 221),
            axis: BLACK,
            original: RED,
            approximation: BLUE,
            harmonic: GREEN,
            labels: true,
        }
    }
}
pub fn render_waveform_png(frame: &PlotFrame, style: &PlotStyle) -> Result<Vec<u8>, SeriesError> {
    let plot_box = frame.view.plot_box();
    let (width, height) = canvas_size(plot_box);
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background)?;
        let grid = frame.view.grid(WAVEFORM_GRID_DIVISIONS);
        draw_grid(&root, &grid, plot_box, style)?;
        draw_axes(&root, plot_box, style)?;
        if style.labels {
            let font = ("sans-serif", 12).into_font().color(&style.axis);
            for line in &grid.vertical {
                root.draw(&Text::new(
                    format!("{:.2}", line.value),
                    (px(line.pixel), px(plot_box.baseline() + 5.0)),
                    font.pos(Pos::new(HPos::Center, VPos::Top)),
                ))?;
            }
            for line in &grid.horizontal {
                root.draw(&Text::new(
                    format!("{:.2}", line.value),
                    (px(plot_box.margin - 5.0), px(line.pixel)),
                    font.pos(Pos::new(HPos::Right, VPos::Center)),
                ))?;
            }
        }
        let curves = [
            (frame.samples.points().collect::<Vec<_>>(), style.original),
            (frame.approximation.points().collect::<Vec<_>>(), style.approximation),
        ];
        for (points, color) in curves {
            let path: Vec<(i32, i32)> = points
                .into_iter()
                .map(|(x, y)| {
                    let (x, y) = frame.view.apply(x, y);
                    (px(x), px(y))
                })
                .collect();
            root.draw(&PathElement::new(path, color.stroke_width(2)))?;
        }
        root.present()?;
    }
    encode_png(&buffer, width, height)
}
pub fn render_harmonics_png(
    chart: &HarmonicChart,
    style: &PlotStyle,
) -> Result<Vec<u8>, SeriesError> {
    let plot_box = chart.transform.plot_box();
    let (width, height) = canvas_size(plot_box);
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background)?;
        let grid = chart.transform.grid();
        draw_grid(&root, &grid, plot_box, style)?;
        draw_axes(&root, plot_box, style)?;
        if style.labels {
            let font = ("sans-serif", 12).into_font().color(&style.axis);
            for line in &grid.horizontal {
                root.draw(&Text::new(
                    format!("{:.2}", line.value),
                    (px(plot_box.margin - 5.0), px(line.pixel)),
                    font.pos(Pos::new(HPos::Right, VPos::Center)),
                ))?;
            }
            for bar in &chart.bars {
                root.draw(&Text::new(
                    format!("C{}", bar.order),
                    (px(bar.x), px(chart.baseline() + 15.0)),
                    font.pos(Pos::new(HPos::Center, VPos::Top)),
                ))?;
            }
        }
        let baseline = px(chart.baseline());
        for bar in &chart.bars {
            root.draw(&PathElement::new(
                vec![(px(bar.x), baseline), (px(bar.x), px(bar.top))],
                style.harmonic.stroke_width(2),
            ))?;
        }
        root.present()?;
    }
    encode_png(&buffer, width, height)
}
fn px(value: f64) -> i32 {
    value.round() as i32
}
fn canvas_size(plot_box: PlotBox) -> (u32, u32) {
    (
        plot_box.width.round().max(1.0) as u32,
        plot_box.height.round().max(1.0) as u32,
    )
}
fn draw_grid(
    root: &Canvas<'_>,
    grid: &Grid,
    plot_box: PlotBox,
    style: &PlotStyle,
) -> Result<(), SeriesError> {
    let left = px(plot_box.margin);
    let right = px(plot_box.margin + plot_box.inner_width());
    let top = px(plot_box.margin);
    let bottom = px(plot_box.baseline());
    for line in &grid.vertical {
        let x = px(line.pixel);
        root.draw(&PathElement::new(vec![(x, top), (x, bottom)], style.grid))?;
    }
    for line in &grid.horizontal {
        let y = px(line.pixel);
        root.draw(&PathElement::new(vec![(left, y), (right, y)], style.grid))?;
    }
    Ok(())
}
fn draw_axes(root: &Canvas<'_>, plot_box: PlotBox, style: &PlotStyle) -> Result<(), SeriesError> {
    let left = px(plot_box.margin);
    let right = px(plot_box.margin + plot_box.inner_width());
    let top = px(plot_box.margin);
    let bottom = px(plot_box.baseline());
    let stroke = style.axis.stroke_width(2);
    root.draw(&PathElement::new(vec![(left, bottom), (right, bottom)], stroke))?;
    root.draw(&PathElement::new(vec![(left, top), (left, bottom)], stroke))?;
    Ok(())
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, SeriesError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| SeriesError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
