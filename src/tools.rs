use std::io::{self, Write};
use time::OffsetDateTime;
use time::macros::format_description;
use super::particles::{Universe, Particle, Axes};

/// UTC wall-clock time used as prefix of every diagnostic message
pub fn timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(format_description!("[year].[month].[day] [hour]:[minute]:[second]"))
        .unwrap_or_default()
}

pub fn format_particle(particle: &Particle) -> String {
    format!("<M:{} P({},{},{}) V({},{},{})>",
            particle.mass,
            particle.position.x, particle.position.y, particle.position.z,
            particle.velocity.x, particle.velocity.y, particle.velocity.z)
}

pub fn print_particles<W: Write>(writer: &mut W, universe: &Universe) -> io::Result<()> {
    for (i, particle) in universe.particles.iter().enumerate() {
        writeln!(writer, "B[{}]: {}", i, format_particle(particle))?;
    }
    Ok(())
}

/// Energy change relative to the initial energy (absolute change if the initial energy is zero)
pub fn calculate_relative_energy_error(initial_energy: f64, final_energy: f64) -> f64 {
    let denergy = final_energy - initial_energy;
    if initial_energy != 0. {
        denergy / initial_energy.abs()
    } else {
        denergy
    }
}

/// Norm of the change of a conserved vector quantity
pub fn calculate_drift(initial: Axes, last: Axes) -> f64 {
    (last - initial).norm()
}
