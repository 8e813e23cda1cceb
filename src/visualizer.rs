// src/visualizer.rs
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Shape, Stroke, Vec2};
use fourier_workbench::series::{Grid, WAVEFORM_GRID_DIVISIONS};
use fourier_workbench::{HarmonicChart, PlotBox, PlotFrame};
const BACKGROUND: Color32 = Color32::WHITE;
const GRID: Color32 = Color32::from_rgb(221, 221, 221);
const AXIS: Color32 = Color32::BLACK;
const ORIGINAL: Color32 = Color32::from_rgb(255, 0, 0);
const APPROXIMATION: Color32 = Color32::from_rgb(0, 0, 255);
const HARMONIC: Color32 = Color32::from_rgb(0, 255, 0);
/// Canvas-local pixel coordinates to screen positions.
struct Surface {
    origin: Pos2,
    plot_box: PlotBox,
}
impl Surface {
    fn allocate(ui: &mut egui::Ui, plot_box: PlotBox) -> (Self, egui::Painter) {
        let size = Vec2::new(plot_box.width as f32, plot_box.height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect: Rect = response.rect;
        painter.rect_filled(rect, Rounding::same(2.0), BACKGROUND);
        (
            Self {
                origin: rect.min,
                plot_box,
            },
            painter,
        )
    }
    fn pos(&self, x: f64, y: f64) -> Pos2 {
        self.origin + Vec2::new(x as f32, y as f32)
    }
    fn left(&self) -> f64 {
        self.plot_box.margin
    }
    fn right(&self) -> f64 {
        self.plot_box.margin + self.plot_box.inner_width()
    }
    fn top(&self) -> f64 {
        self.plot_box.margin
    }
    fn bottom(&self) -> f64 {
        self.plot_box.baseline()
    }
    fn grid(&self, painter: &egui::Painter, grid: &Grid) {
        let stroke = Stroke::new(1.0, GRID);
        for line in &grid.vertical {
            painter.line_segment(
                [self.pos(line.pixel, self.top()), self.pos(line.pixel, self.bottom())],
                stroke,
            );
        }
        for line in &grid.horizontal {
            painter.line_segment(
                [self.pos(self.left(), line.pixel), self.pos(self.right(), line.pixel)],
                stroke,
            );
        }
    }
    fn axes(&self, painter: &egui::Painter) {
        let stroke = Stroke::new(2.0, AXIS);
        painter.line_segment(
            [self.pos(self.left(), self.bottom()), self.pos(self.right(), self.bottom())],
            stroke,
        );
        painter.line_segment(
            [self.pos(self.left(), self.top()), self.pos(self.left(), self.bottom())],
            stroke,
        );
    }
    fn value_labels(&self, painter: &egui::Painter, grid: &Grid) {
        for line in &grid.horizontal {
            painter.text(
                self.pos(self.left() - 5.0, line.pixel),
                Align2::RIGHT_CENTER,
                format!("{:.2}", line.value),
                FontId::proportional(12.0),
                AXIS,
            );
        }
    }
    fn placeholder(&self, painter: &egui::Painter, message: &str) {
        painter.text(
            self.pos(self.plot_box.width / 2.0, self.plot_box.height / 2.0),
            Align2::CENTER_CENTER,
            message,
            FontId::proportional(14.0),
            Color32::GRAY,
        );
    }
}
pub fn draw_waveform(ui: &mut egui::Ui, frame: Option<&PlotFrame>, plot_box: PlotBox) {
    let Some(frame) = frame else {
        let (surface, painter) = Surface::allocate(ui, plot_box);
        surface.axes(&painter);
        surface.placeholder(&painter, "Enter the parameters and press Plot");
        return;
    };
    let (surface, painter) = Surface::allocate(ui, frame.view.plot_box());
    let grid = frame.view.grid(WAVEFORM_GRID_DIVISIONS);
    surface.grid(&painter, &grid);
    surface.axes(&painter);
    for line in &grid.vertical {
        painter.text(
            surface.pos(line.pixel, surface.bottom() + 5.0),
            Align2::CENTER_TOP,
            format!("{:.2}", line.value),
            FontId::proportional(12.0),
            AXIS,
        );
    }
    surface.value_labels(&painter, &grid);
    let curve = |points: Vec<(f64, f64)>| -> Vec<Pos2> {
        points
            .into_iter()
            .map(|(x, y)| {
                let (px, py) = frame.view.apply(x, y);
                surface.pos(px, py)
            })
            .collect()
    };
    painter.add(Shape::line(
        curve(frame.samples.points().collect()),
        Stroke::new(2.0, ORIGINAL),
    ));
    painter.add(Shape::line(
        curve(frame.approximation.points().collect()),
        Stroke::new(2.0, APPROXIMATION),
    ));
}
pub fn draw_harmonics(ui: &mut egui::Ui, chart: Option<&HarmonicChart>, plot_box: PlotBox) {
    let Some(chart) = chart else {
        let (surface, painter) = Surface::allocate(ui, plot_box);
        surface.axes(&painter);
        surface.placeholder(&painter, "Press Harmonics to show the amplitude spectrum");
        return;
    };
    let (surface, painter) = Surface::allocate(ui, chart.transform.plot_box());
    let grid = chart.transform.grid();
    surface.grid(&painter, &grid);
    surface.axes(&painter);
    surface.value_labels(&painter, &grid);
    let stroke = Stroke::new(2.0, HARMONIC);
    for bar in &chart.bars {
        painter.line_segment(
            [surface.pos(bar.x, chart.baseline()), surface.pos(bar.x, bar.top)],
            stroke,
        );
        painter.text(
            surface.pos(bar.x, chart.baseline() + 15.0),
            Align2::CENTER_TOP,
            format!("C{}", bar.order),
            FontId::proportional(12.0),
            AXIS,
        );
    }
}
