use super::super::particles::{Universe, Axes};
use super::{advance_positions, advance_velocities};

/// LeapFrog is a second order symplectic integrator
/// http://adsabs.harvard.edu/cgi-bin/bib_query?arXiv:astro-ph/9710043
///
///https://arxiv.org/pdf/1110.4876v2.pdf
///Leap-frog is a second-order accurate and symplectic integrator
///for non-rotating frames. Here, the Hamiltonian is split into the
///kinetic part and the potential part. Both
///the drift and kick sub-steps are simple Euler steps. First the positions
///of all particles are advanced for half a time-step while keeping
///the velocities fixed. Then the velocities are advanced for one
///time-step while keeping the positions fixed. In the last sub-step
///the positions are again advanced for half a time-step.
pub fn leapfrog_step(universe: &mut Universe, accelerations: &mut [Axes], time_step: f64) {
    let half_time_step = 0.5 * time_step;

    // A 'DKD'-like integrator will do the first 'D' part.
    advance_positions(universe, half_time_step);

    // Calculate accelerations at the drifted positions.
    universe.gravity_calculate_acceleration(accelerations);

    // A 'DKD'-like integrator will do the 'KD' part.
    advance_velocities(universe, time_step, accelerations);
    advance_positions(universe, half_time_step);
}
