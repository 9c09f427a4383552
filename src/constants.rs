//// Physical constants
// Simulation units: the gravitational constant is one.
pub const G : f64 = 1.;
// Softening added to the pairwise distance (not to its square) before cubing,
// it bounds the force between coincident or very close bodies.
pub const ETA : f64 = 0.1;

//// Time loop
// The simulation stops once current_time + HALF_STEP_TOLERANCE*time_step reaches the time limit,
// so an integer time_limit/time_step ratio gives exactly that many steps despite rounding in current_time.
pub const HALF_STEP_TOLERANCE : f64 = 0.5;

//// Text formats
pub const COMMENT_PREFIX : char = '#';
pub const N_FIELDS_PER_PARTICLE : usize = 7; // mass x y z vx vy vz
pub const MAX_PREALLOCATED_PARTICLES : usize = 4096; // The declared count is not trusted for allocation before the bodies are read
