// src/export.rs
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use anyhow::{Context, Result};
use log::info;
use crate::series::{
    render_harmonics_png, render_waveform_png, CoefficientSet, HarmonicChart, PlotFrame, PlotStyle,
};
/// Writes the current plot to disk as CSV tables and PNG images.
pub struct Exporter {
    dir: PathBuf,
    style: PlotStyle,
}
impl Exporter {
    pub fn new(dir: impl Into<PathBuf>, style: PlotStyle) -> Self {
        Self {
            dir: dir.into(),
            style,
        }
    }
    pub fn dir(&self) -> &Path {
        &self.dir
    }
    /// Returns the files written, in order: samples, coefficients, waveform, harmonics.
    pub fn export(&self, frame: &PlotFrame, chart: Option<&HarmonicChart>) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let mut written = Vec::new();
        let samples_path = self.dir.join(format!("samples_{stamp}.csv"));
        write_samples_csv(&samples_path, frame)?;
        written.push(samples_path);
        let coefficients_path = self.dir.join(format!("coefficients_{stamp}.csv"));
        write_coefficients_csv(&coefficients_path, &frame.coefficients)?;
        written.push(coefficients_path);
        let waveform_path = self.dir.join(format!("waveform_{stamp}.png"));
        let png = render_waveform_png(frame, &self.style)?;
        fs::write(&waveform_path, png)
            .with_context(|| format!("failed to write {}", waveform_path.display()))?;
        written.push(waveform_path);
        if let Some(chart) = chart {
            let harmonics_path = self.dir.join(format!("harmonics_{stamp}.png"));
            let png = render_harmonics_png(chart, &self.style)?;
            fs::write(&harmonics_path, png)
                .with_context(|| format!("failed to write {}", harmonics_path.display()))?;
            written.push(harmonics_path);
        }
        info!("exported {} files to {}", written.len(), self.dir.display());
        Ok(written)
    }
}
fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
pub fn write_samples_csv(path: &Path, frame: &PlotFrame) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "x,y,approximation")?;
    for ((x, y), yg) in frame
        .samples
        .points()
        .zip(frame.approximation.values().iter())
    {
        writeln!(w, "{x},{y},{yg}")?;
    }
    w.flush()?;
    Ok(())
}
pub fn write_coefficients_csv(path: &Path, coefficients: &CoefficientSet) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "k,a,b,c")?;
    for k in 0..=coefficients.order() {
        writeln!(
            w,
            "{k},{},{},{}",
            coefficients.cosine(k),
            coefficients.sine(k),
            coefficients.magnitude(k)
        )?;
    }
    w.flush()?;
    Ok(())
}
