extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate bincode;
extern crate csv;
extern crate time;
extern crate thiserror;

pub mod constants;

mod error;
pub use self::error::{Error, Result};

mod particles;
pub use self::particles::Universe;
pub use self::particles::Particle;
pub use self::particles::Axes;
pub use self::particles::universe::{gravity_pairwise_force, calculate_center_of_mass};

mod integrator;
pub use self::integrator::*;

pub mod configuration;
pub use self::configuration::Configuration;

pub mod input;

pub mod tools;
