use std::path::PathBuf;
use super::integrator::IntegratorType;
use super::integrator::output::OutputFormat;
use super::error::{Error, Result};

/// Everything a run needs, as collected from the command line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Configuration {
    pub input_file: PathBuf,
    pub time_step: f64,
    pub time_limit: f64,
    pub output_file: Option<PathBuf>, // Standard output if none
    pub integrator: IntegratorType,
    pub output_format: Option<OutputFormat>, // Deduced from the output file extension if none
    pub snapshot_file: Option<PathBuf>,
    pub silent_mode: bool,
}

impl Configuration {
    pub fn new(input_file: PathBuf, time_step: f64, time_limit: f64) -> Configuration {
        Configuration {
            input_file: input_file,
            time_step: time_step,
            time_limit: time_limit,
            output_file: None,
            integrator: IntegratorType::default(),
            output_format: None,
            snapshot_file: None,
            silent_mode: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.) {
            return Err(Error::Configuration(format!("dt must be a positive number (got {})", self.time_step)));
        }
        if !(self.time_limit.is_finite() && self.time_limit > 0.) {
            return Err(Error::Configuration(format!("horizon must be a positive number (got {})", self.time_limit)));
        }
        if let (Some(output_file), Some(snapshot_file)) = (&self.output_file, &self.snapshot_file) {
            if output_file == snapshot_file {
                return Err(Error::Configuration(format!("output and snapshot cannot share the same file '{}'", output_file.display())));
            }
        }
        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        match (self.output_format, &self.output_file) {
            (Some(output_format), _) => output_format,
            (None, Some(output_file)) => OutputFormat::from_path(output_file),
            (None, None) => OutputFormat::Text,
        }
    }
}
