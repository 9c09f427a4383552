use std::io::{self, Write};
use super::IntegratorType;
use super::output::HistoryWriter;
use super::super::particles::{Universe, Axes};
use super::super::constants::HALF_STEP_TOLERANCE;
use super::super::error::{Error, Result};
use super::super::configuration::Configuration;
use super::super::input::load_universe;

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SimulationState {
    Loaded,   // Universe populated, clock at the initial time, nothing written yet
    Running,
    Finished, // No further step will be taken
}

/// Owns the universe, the clock and the acceleration scratch buffer, and
/// advances them with the selected integrator until the time limit.
#[derive(Debug, Clone)]
pub struct Simulation {
    time_step: f64,
    pub time_limit: f64,
    pub integrator: IntegratorType,
    pub universe: Universe,
    pub current_time: f64,
    pub current_iteration: u32,
    state: SimulationState,
    accelerations: Vec<Axes>,
}

impl Simulation {
    pub fn new(universe: Universe, integrator: IntegratorType, time_step: f64, time_limit: f64) -> Result<Simulation> {
        if !(time_step.is_finite() && time_step > 0.) {
            return Err(Error::Configuration(format!("time step must be a positive number (got {})", time_step)));
        }
        if !(time_limit.is_finite() && time_limit > 0.) {
            return Err(Error::Configuration(format!("time limit must be a positive number (got {})", time_limit)));
        }
        let accelerations = universe.new_acceleration_buffer();
        Ok(Simulation {
            time_step: time_step,
            time_limit: time_limit,
            integrator: integrator,
            universe: universe,
            current_time: 0.,
            current_iteration: 0,
            state: SimulationState::Loaded,
            accelerations: accelerations,
        })
    }

    /// Validate the configuration, then load its input file. Configuration
    /// errors are reported before the input is touched.
    pub fn from_configuration(configuration: &Configuration) -> Result<Simulation> {
        configuration.validate()?;
        let universe = load_universe(&configuration.input_file)?;
        Simulation::new(universe, configuration.integrator, configuration.time_step, configuration.time_limit)
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Number of steps a full run performs: time_limit/time_step rounded half down
    pub fn expected_n_iterations(&self) -> u32 {
        (self.time_limit / self.time_step - HALF_STEP_TOLERANCE).ceil().max(0.) as u32
    }

    fn time_limit_reached(&self) -> bool {
        self.current_time + HALF_STEP_TOLERANCE * self.time_step >= self.time_limit
    }

    /// Write the header and the initial state, then enter the running state
    pub fn start(&mut self, universe_history_writer: &mut dyn HistoryWriter) -> Result<()> {
        if self.state != SimulationState::Loaded {
            return Ok(());
        }
        universe_history_writer.write_header(self.universe.particles.len(), self.time_step, self.time_limit)?;
        universe_history_writer.write_state(&self.universe, self.current_iteration, self.current_time)?;
        self.state = if self.time_limit_reached() { SimulationState::Finished } else { SimulationState::Running };
        Ok(())
    }

    /// Advance clock and universe by one time step without emitting anything
    fn step(&mut self) {
        if self.accelerations.len() != self.universe.particles.len() {
            self.accelerations = self.universe.new_acceleration_buffer();
        }
        self.current_iteration += 1;
        self.current_time += self.time_step;
        self.integrator.integrate(&mut self.universe, &mut self.accelerations, self.time_step);
    }

    /// Perform one iteration and emit the resulting state.
    ///
    /// Returns `Ok(true)` while further iterations remain and `Ok(false)` once
    /// the time limit has been reached, after which the universe is not touched again.
    pub fn iterate(&mut self, universe_history_writer: &mut dyn HistoryWriter, silent_mode: bool) -> Result<bool> {
        if self.state == SimulationState::Loaded {
            self.start(universe_history_writer)?;
        }
        if self.state == SimulationState::Finished {
            return Ok(false);
        }

        self.step();
        universe_history_writer.write_state(&self.universe, self.current_iteration, self.current_time)?;

        if ! silent_mode {
            eprint!("Time: {:0.3} | Iteration: {} | Time step: {:0.3}                    \r", self.current_time, self.current_iteration, self.time_step);
            let _ = io::stderr().flush();
        }

        if self.time_limit_reached() {
            self.state = SimulationState::Finished;
        }
        Ok(self.state == SimulationState::Running)
    }

    /// Iterate until the time limit and flush the writer, returns the number of steps taken
    pub fn run(&mut self, universe_history_writer: &mut dyn HistoryWriter, silent_mode: bool) -> Result<u32> {
        while self.iterate(universe_history_writer, silent_mode)? {}
        universe_history_writer.flush()?;
        if ! silent_mode {
            eprintln!();
        }
        Ok(self.current_iteration)
    }
}
