mod particle;
pub mod universe;
mod axes;

pub use self::particle::Particle;
pub use self::universe::Universe;
pub use self::axes::Axes;
