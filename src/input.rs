use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;
use super::constants::{COMMENT_PREFIX, N_FIELDS_PER_PARTICLE, MAX_PREALLOCATED_PARTICLES};
use super::particles::{Universe, Particle};
use super::error::{Error, Result};

/// Lazily yields the data lines of a text stream together with their 1-based
/// line number, skipping comments and blank lines.
pub struct DataLines<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> DataLines<R> {
    pub fn new(reader: R) -> DataLines<R> {
        DataLines { lines: reader.lines(), line_number: 0 }
    }
}

impl<R: BufRead> Iterator for DataLines<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;
            match line {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                        continue;
                    }
                    return Some(Ok((self.line_number, trimmed.to_string())));
                },
                Err(e) => return Some(Err(Error::input(self.line_number, e.to_string()))),
            }
        }
    }
}

pub fn parse_n_particles(line_number: usize, line: &str) -> Result<usize> {
    let mut fields = line.split_whitespace();
    let n_particles = match fields.next() {
        Some(field) => field.parse::<usize>()
                            .map_err(|_| Error::input(line_number, format!("expected the number of bodies, found '{}'", field)))?,
        None => return Err(Error::input(line_number, "expected the number of bodies")),
    };
    if let Some(extra) = fields.next() {
        return Err(Error::input(line_number, format!("unexpected field '{}' after the number of bodies", extra)));
    }
    Ok(n_particles)
}

/// Parse a `mass x y z vx vy vz` line
pub fn parse_particle(line_number: usize, line: &str) -> Result<Particle> {
    let mut fields = [0.; N_FIELDS_PER_PARTICLE];
    let mut n_fields = 0;
    for field in line.split_whitespace() {
        if n_fields == N_FIELDS_PER_PARTICLE {
            return Err(Error::input(line_number, format!("expected {} fields, found more", N_FIELDS_PER_PARTICLE)));
        }
        let value = field.parse::<f64>()
                         .map_err(|_| Error::input(line_number, format!("'{}' is not a number", field)))?;
        if !value.is_finite() {
            return Err(Error::input(line_number, format!("'{}' is not a finite number", field)));
        }
        fields[n_fields] = value;
        n_fields += 1;
    }
    if n_fields != N_FIELDS_PER_PARTICLE {
        return Err(Error::input(line_number, format!("expected {} fields (mass x y z vx vy vz), found {}", N_FIELDS_PER_PARTICLE, n_fields)));
    }
    Ok(Particle::from_fields(fields))
}

/// Read a universe from the text format: the number of bodies followed by
/// exactly that many particle lines. Nothing partial is ever returned.
pub fn read_universe<R: Read>(reader: R) -> Result<Universe> {
    let mut data_lines = DataLines::new(BufReader::new(reader));

    let n_particles = match data_lines.next() {
        Some(entry) => {
            let (line_number, line) = entry?;
            parse_n_particles(line_number, &line)?
        },
        None => return Err(Error::InputFile("missing the number of bodies".to_string())),
    };

    let mut particles = Vec::with_capacity(n_particles.min(MAX_PREALLOCATED_PARTICLES));
    for entry in data_lines {
        let (line_number, line) = entry?;
        if particles.len() == n_particles {
            return Err(Error::input(line_number, format!("more bodies than the {} declared", n_particles)));
        }
        particles.push(parse_particle(line_number, &line)?);
    }

    if particles.len() != n_particles {
        return Err(Error::InputFile(format!("{} bodies declared but {} found", n_particles, particles.len())));
    }
    Ok(Universe::new(particles))
}

#[derive(Debug, Deserialize)]
struct Case {
    particles: Vec<Particle>,
}

/// Read a universe from a JSON case description (`{"particles": [...]}`)
pub fn read_universe_from_json<R: Read>(reader: R) -> Result<Universe> {
    let case: Case = serde_json::from_reader(BufReader::new(reader))?;
    for (i, particle) in case.particles.iter().enumerate() {
        if !(particle.mass.is_finite() && particle.position.is_finite() && particle.velocity.is_finite()) {
            return Err(Error::InputFile(format!("body {} has non-finite values", i)));
        }
    }
    Ok(Universe::new(case.particles))
}

/// Load a universe from disk, JSON for `.json` files and the text format otherwise
pub fn load_universe(path: &Path) -> Result<Universe> {
    let file = File::open(path).map_err(|e| Error::io(path.display().to_string(), e))?;
    if path.extension().map_or(false, |extension| extension == "json") {
        read_universe_from_json(file)
    } else {
        read_universe(file)
    }
}
