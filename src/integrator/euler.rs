use super::super::particles::{Universe, Axes};
use super::{advance_positions, advance_velocities};

/// Forward (explicit) Euler, first order.
///
/// Forces are evaluated at the positions of the beginning of the step, then
/// velocities are kicked by a full step and positions drift by a full step
/// using the already updated velocities.
pub fn forward_euler_step(universe: &mut Universe, accelerations: &mut [Axes], time_step: f64) {
    universe.gravity_calculate_acceleration(accelerations);
    advance_velocities(universe, time_step, accelerations);
    advance_positions(universe, time_step);
}
