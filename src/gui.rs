// src/gui.rs
use eframe::egui;
use egui::Color32;
use log::{error, info};
use fourier_workbench::series::PiecewiseWave;
use fourier_workbench::{
    AppConfig, Exporter, HarmonicChart, PlotFrame, PlotStyle, RawInputs, SeriesPipeline, Solver,
};
use crate::visualizer;
pub struct FourierApp {
    // form
    inputs: RawInputs,
    // engine
    pipeline: SeriesPipeline<PiecewiseWave>,
    exporter: Exporter,
    // results of the last actions
    frame: Option<PlotFrame>,
    harmonics: Option<HarmonicChart>,
    validation_error: Option<String>,
    log_messages: Vec<String>,
}
impl FourierApp {
    pub fn new(config: AppConfig) -> Self {
        let pipeline = SeriesPipeline::new(config.waveform_canvas, config.harmonics_canvas)
            .with_solver(config.solver);
        Self {
            inputs: config.defaults,
            pipeline,
            exporter: Exporter::new(config.export_dir, PlotStyle::default()),
            frame: None,
            harmonics: None,
            validation_error: None,
            log_messages: vec!["Fourier series workbench ready.".to_owned()],
        }
    }
    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > 8 {
            self.log_messages.remove(0);
        }
    }
    fn run_plot(&mut self) {
        // A new plot supersedes everything derived from the previous one.
        self.harmonics = None;
        match self.pipeline.plot(&self.inputs) {
            Ok(frame) => {
                self.validation_error = None;
                self.log(&format!(
                    "Plotted {} samples, {} harmonics, MSE {:.5}",
                    frame.samples.len(),
                    frame.coefficients.order(),
                    frame.mean_squared_error
                ));
                self.frame = Some(frame);
            }
            Err(err) => {
                self.frame = None;
                self.validation_error = Some(err.to_string());
                self.log(&format!("Rejected: {err}"));
            }
        }
    }
    fn run_harmonics(&mut self) {
        let Some(frame) = &self.frame else {
            return;
        };
        match self.pipeline.harmonics(&frame.coefficients) {
            Ok(chart) => {
                let msg = format!("Harmonic spectrum: {} bars", chart.bars.len());
                self.harmonics = Some(chart);
                self.log(&msg);
            }
            Err(err) => self.log(&format!("Harmonics failed: {err}")),
        }
    }
    fn run_export(&mut self) {
        let Some(frame) = &self.frame else {
            return;
        };
        match self.exporter.export(frame, self.harmonics.as_ref()) {
            Ok(files) => {
                info!("export finished: {files:?}");
                let msg = format!(
                    "Exported {} files to {}",
                    files.len(),
                    self.exporter.dir().display()
                );
                self.log(&msg);
            }
            Err(err) => {
                error!("export failed: {err:#}");
                self.log(&format!("Export failed: {err:#}"));
            }
        }
    }
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Parameters");
        ui.add_space(6.0);
        egui::Grid::new("inputs").num_columns(2).show(ui, |ui| {
            ui.label("Start");
            ui.text_edit_singleline(&mut self.inputs.start);
            ui.end_row();
            ui.label("End");
            ui.text_edit_singleline(&mut self.inputs.end);
            ui.end_row();
            ui.label("Harmonics (0-1000)");
            ui.text_edit_singleline(&mut self.inputs.harmonics);
            ui.end_row();
            ui.label("Samples (1-1000)");
            ui.text_edit_singleline(&mut self.inputs.samples);
            ui.end_row();
        });
        ui.add_space(6.0);
        let mut solver = self.pipeline.solver();
        egui::ComboBox::from_label("Solver")
            .selected_text(format!("{solver:?}"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut solver, Solver::Direct, "Direct");
                ui.selectable_value(&mut solver, Solver::Fft, "Fft");
            });
        if solver != self.pipeline.solver() {
            self.pipeline.set_solver(solver);
            self.log(&format!("Solver set to {solver:?}"));
        }
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Plot").clicked() {
                self.run_plot();
            }
            let has_frame = self.frame.is_some();
            if ui
                .add_enabled(has_frame, egui::Button::new("Harmonics"))
                .clicked()
            {
                self.run_harmonics();
            }
            if ui
                .add_enabled(has_frame, egui::Button::new("Export"))
                .clicked()
            {
                self.run_export();
            }
        });
        if let Some(err) = &self.validation_error {
            ui.add_space(6.0);
            ui.colored_label(Color32::from_rgb(200, 50, 50), err);
        }
        if let Some(frame) = &self.frame {
            ui.add_space(10.0);
            ui.label(format!("a0 = {:.4}", frame.coefficients.dc()));
            ui.label(format!("MSE = {:.6}", frame.mean_squared_error));
        }
        ui.separator();
        ui.label("Log");
        for msg in &self.log_messages {
            ui.monospace(msg);
        }
    }
}
impl eframe::App for FourierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .min_width(260.0)
            .show(ctx, |ui| self.controls(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.label("Signal (red) and Fourier approximation (blue)");
                visualizer::draw_waveform(ui, self.frame.as_ref(), self.pipeline.waveform_box());
                ui.add_space(12.0);
                ui.label("Harmonic amplitudes");
                visualizer::draw_harmonics(
                    ui,
                    self.harmonics.as_ref(),
                    self.pipeline.harmonics_box(),
                );
            });
        });
    }
}
