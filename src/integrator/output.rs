use std::fmt;
use std::fs::File;
use std::io::{self, Write, BufWriter};
use std::path::Path;
use std::str::FromStr;
use super::super::particles::{Universe, Particle};
use super::super::error::{Error, Result};

////////////////////////////////////////////////////////////////////////////////
//- History (trajectory) writers
////////////////////////////////////////////////////////////////////////////////

/// Destination of the trajectory: receives a header once, then the complete
/// state of the universe at t=0 and after every completed step.
pub trait HistoryWriter {
    fn write_header(&mut self, n_particles: usize, time_step: f64, time_limit: f64) -> Result<()>;
    fn write_state(&mut self, universe: &Universe, current_iteration: u32, current_time: f64) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Binary,
}

impl OutputFormat {
    /// `.csv` and `.bin` select their format, anything else is plain text
    pub fn from_path(path: &Path) -> OutputFormat {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("csv") => OutputFormat::Csv,
            Some("bin") => OutputFormat::Binary,
            _ => OutputFormat::Text,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Binary => f.write_str("binary"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<OutputFormat> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "binary" | "bin" => Ok(OutputFormat::Binary),
            other => Err(Error::Configuration(format!("unknown output format '{}' (expected 'text', 'csv' or 'binary')", other))),
        }
    }
}

/// Open the trajectory destination, standard output when no path is given
pub fn get_history_writer(output_path: Option<&Path>, format: OutputFormat) -> Result<Box<dyn HistoryWriter>> {
    match output_path {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::io(path.display().to_string(), e))?;
            Ok(new_history_writer(file, format))
        },
        None => Ok(new_history_writer(io::stdout(), format)),
    }
}

pub fn new_history_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn HistoryWriter> {
    match format {
        OutputFormat::Text => Box::new(TextHistoryWriter::new(writer)),
        OutputFormat::Csv => Box::new(CsvHistoryWriter::new(writer)),
        OutputFormat::Binary => Box::new(BinaryHistoryWriter::new(writer)),
    }
}

/// `N dt horizon` header followed by N `mass x y z vx vy vz` lines per state
pub struct TextHistoryWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> TextHistoryWriter<W> {
    pub fn new(writer: W) -> TextHistoryWriter<W> {
        TextHistoryWriter { writer: BufWriter::new(writer) }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| Error::Output(e.into_error()))
    }
}

impl<W: Write> HistoryWriter for TextHistoryWriter<W> {
    fn write_header(&mut self, n_particles: usize, time_step: f64, time_limit: f64) -> Result<()> {
        writeln!(self.writer, "{} {} {}", n_particles, time_step, time_limit)?;
        Ok(())
    }

    fn write_state(&mut self, universe: &Universe, _current_iteration: u32, _current_time: f64) -> Result<()> {
        for particle in universe.particles.iter() {
            write_particle(&mut self.writer, particle)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub iteration: u32,
    pub time: f64,
    pub body: usize,
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

/// One row per particle and emitted state, with a column header
pub struct CsvHistoryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvHistoryWriter<W> {
    pub fn new(writer: W) -> CsvHistoryWriter<W> {
        CsvHistoryWriter { writer: csv::Writer::from_writer(writer) }
    }
}

impl<W: Write> HistoryWriter for CsvHistoryWriter<W> {
    fn write_header(&mut self, _n_particles: usize, _time_step: f64, _time_limit: f64) -> Result<()> {
        // The column header is emitted by the first serialized record
        Ok(())
    }

    fn write_state(&mut self, universe: &Universe, current_iteration: u32, current_time: f64) -> Result<()> {
        for particle in universe.particles.iter() {
            self.writer.serialize(HistoryRecord {
                iteration: current_iteration,
                time: current_time,
                body: particle.id,
                mass: particle.mass,
                x: particle.position.x,
                y: particle.position.y,
                z: particle.position.z,
                vx: particle.velocity.x,
                vy: particle.velocity.y,
                vz: particle.velocity.z,
            })?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// bincode stream: `(n_particles, time_step, time_limit)` once, then per particle
/// and state `(time, time_step, id, x, y, z, vx, vy, vz, mass)`
pub struct BinaryHistoryWriter<W: Write> {
    writer: BufWriter<W>,
    time_step: f64,
}

impl<W: Write> BinaryHistoryWriter<W> {
    pub fn new(writer: W) -> BinaryHistoryWriter<W> {
        BinaryHistoryWriter { writer: BufWriter::new(writer), time_step: 0. }
    }
}

impl<W: Write> HistoryWriter for BinaryHistoryWriter<W> {
    fn write_header(&mut self, n_particles: usize, time_step: f64, time_limit: f64) -> Result<()> {
        self.time_step = time_step;
        bincode::serialize_into(&mut self.writer, &(n_particles as u64, time_step, time_limit))?;
        Ok(())
    }

    fn write_state(&mut self, universe: &Universe, _current_iteration: u32, current_time: f64) -> Result<()> {
        for particle in universe.particles.iter() {
            let output = (
                            current_time,
                            self.time_step,
                            (particle.id as i32),
                            particle.position.x,
                            particle.position.y,
                            particle.position.z,
                            particle.velocity.x,
                            particle.velocity.y,
                            particle.velocity.z,
                            particle.mass,
                        );
            bincode::serialize_into(&mut self.writer, &output)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub fn n_bytes_per_particle_in_historic_snapshot() -> u64 {
    let n_stored_fields : u64 = 10;
    8+8+4+8*(n_stored_fields-3)
}

////////////////////////////////////////////////////////////////////////////////
//- Snapshot of a single state (same layout the loader reads)
////////////////////////////////////////////////////////////////////////////////

pub fn write_particle<W: Write>(writer: &mut W, particle: &Particle) -> io::Result<()> {
    let fields = particle.to_fields();
    writeln!(writer, "{} {} {} {} {} {} {}", fields[0], fields[1], fields[2], fields[3], fields[4], fields[5], fields[6])
}

/// Body count followed by one line per particle, readable by `input::read_universe`
pub fn write_universe<W: Write>(writer: &mut W, universe: &Universe) -> io::Result<()> {
    writeln!(writer, "{}", universe.particles.len())?;
    for particle in universe.particles.iter() {
        write_particle(writer, particle)?;
    }
    Ok(())
}

/// Store the universe so that a new run can start from it (JSON for `.json` paths)
pub fn write_snapshot(snapshot_path: &Path, universe: &Universe, current_time: f64) -> Result<()> {
    let file = File::create(snapshot_path).map_err(|e| Error::io(snapshot_path.display().to_string(), e))?;
    let mut writer = BufWriter::new(file);

    if snapshot_path.extension().map_or(false, |extension| extension == "json") {
        let json_encoded = serde_json::to_string_pretty(universe)?;
        writer.write_all(json_encoded.as_bytes())?;
    } else {
        writeln!(writer, "# Snapshot at time {}", current_time)?;
        write_universe(&mut writer, universe)?;
    }
    writer.flush()?;
    Ok(())
}
