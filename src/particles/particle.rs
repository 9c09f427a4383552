use super::Axes;

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Particle {
    #[serde(default)]
    pub id: usize, // Index in the universe, to be set by the universe
    pub mass: f64,
    pub position: Axes,
    pub velocity: Axes,
}

impl Particle {
    pub fn new(mass: f64, position: Axes, velocity: Axes) -> Particle {
        Particle {
            id: 0,
            mass: mass,
            position: position,
            velocity: velocity,
        }
    }

    /// Build a particle from the `mass x y z vx vy vz` layout used by the text formats
    pub fn from_fields(fields: [f64; 7]) -> Particle {
        Particle::new(fields[0],
                      Axes{x: fields[1], y: fields[2], z: fields[3]},
                      Axes{x: fields[4], y: fields[5], z: fields[6]})
    }

    pub fn to_fields(&self) -> [f64; 7] {
        [self.mass,
         self.position.x, self.position.y, self.position.z,
         self.velocity.x, self.velocity.y, self.velocity.z]
    }

    pub fn momentum(&self) -> Axes {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_2()
    }
}
