mod euler;
mod leapfrog;
pub mod simulation;
pub mod output;

pub use self::euler::*;
pub use self::leapfrog::*;
pub use self::simulation::{Simulation, SimulationState};

use std::fmt;
use std::str::FromStr;
use super::particles::{Universe, Axes};
use super::error::Error;

/// Time-stepping schemes. Both share the same drift and kick primitives and
/// differ in how they order them within a step.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum IntegratorType {
    ForwardEuler,
    LeapFrog,
}

impl IntegratorType {
    /// Advance the universe by one time step, using `accelerations` as scratch space
    pub fn integrate(&self, universe: &mut Universe, accelerations: &mut [Axes], time_step: f64) {
        match self {
            IntegratorType::ForwardEuler => forward_euler_step(universe, accelerations, time_step),
            IntegratorType::LeapFrog => leapfrog_step(universe, accelerations, time_step),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IntegratorType::ForwardEuler => "euler",
            IntegratorType::LeapFrog => "leapfrog",
        }
    }
}

impl Default for IntegratorType {
    fn default() -> IntegratorType {
        IntegratorType::LeapFrog
    }
}

impl fmt::Display for IntegratorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntegratorType {
    type Err = Error;

    fn from_str(s: &str) -> Result<IntegratorType, Error> {
        match s.to_ascii_lowercase().as_str() {
            "euler" | "forward-euler" | "forwardeuler" => Ok(IntegratorType::ForwardEuler),
            "leapfrog" => Ok(IntegratorType::LeapFrog),
            other => Err(Error::Configuration(format!("unknown integrator '{}' (expected 'euler' or 'leapfrog')", other))),
        }
    }
}

/// Drift: x += v*dt
pub fn advance_positions(universe: &mut Universe, time_step: f64) {
    for particle in universe.particles.iter_mut() {
        particle.position += particle.velocity * time_step;
    }
}

/// Kick: v += a*dt
pub fn advance_velocities(universe: &mut Universe, time_step: f64, accelerations: &[Axes]) {
    for (particle, acceleration) in universe.particles.iter_mut().zip(accelerations.iter()) {
        particle.velocity += *acceleration * time_step;
    }
}
