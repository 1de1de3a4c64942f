use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::ballistics::{FlightSummary, ProjectileFlight};
use crate::core::error::SimError;
use crate::core::units::UnitSystem;

pub const DEFAULT_RESULTS_PATH: &str = "projectile_results.json";

/// Receives the finished run for display.
pub trait Presenter {
    fn present(&mut self, units: UnitSystem, flights: &[ProjectileFlight]) -> Result<(), SimError>;
}

/// Receives the ordered summaries for persistence.
pub trait ResultStore {
    fn persist(&mut self, summaries: &[FlightSummary]) -> Result<(), SimError>;
}

pub fn summary_line(summary: &FlightSummary, units: UnitSystem) -> String {
    let len = units.length_unit();
    format!(
        "Projectile {} - Time of Flight: {} {}, Max Height: {} {len}, Range: {} {len}",
        summary.projectile_index,
        summary.time_of_flight,
        units.time_unit(),
        summary.max_height,
        summary.range,
    )
}

pub fn detail_block(summary: &FlightSummary, units: UnitSystem) -> String {
    let len = units.length_unit();
    format!(
        "Projectile {} Information:\nTime of Flight: {} {}\nMax Height: {} {len}\nRange: {} {len}",
        summary.projectile_index,
        summary.time_of_flight,
        units.time_unit(),
        summary.max_height,
        summary.range,
    )
}

/// Writes the one-line results, then an information block per projectile.
pub struct TextPresenter<W> {
    writer: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, units: UnitSystem, flights: &[ProjectileFlight]) -> Result<(), SimError> {
        writeln!(self.writer, "Results:")?;
        for flight in flights {
            writeln!(self.writer, "{}", summary_line(&flight.summary, units))?;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "Projectile Information")?;
        for flight in flights {
            writeln!(self.writer, "{}", detail_block(&flight.summary, units))?;
            writeln!(self.writer)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

/// JSON array of summaries; the file is replaced on every run.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<FlightSummary>, SimError> {
        let file = File::open(&self.path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

pub fn write_summaries<W: Write>(writer: W, summaries: &[FlightSummary]) -> Result<(), SimError> {
    serde_json::to_writer_pretty(writer, summaries)?;
    Ok(())
}

impl ResultStore for JsonFileStore {
    fn persist(&mut self, summaries: &[FlightSummary]) -> Result<(), SimError> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        write_summaries(&mut writer, summaries)?;
        writer.flush()?;
        Ok(())
    }
}
