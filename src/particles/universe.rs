use super::super::constants::{G, ETA};
use super::{Particle};
use super::{Axes};

/// Ordered, fixed-size collection of particles. The index of a particle is its
/// only identity and defines the output order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Universe {
    pub particles: Vec<Particle>,
    pub n_particles: usize,
}

impl Universe {
    pub fn new(mut particles: Vec<Particle>) -> Universe {
        for (i, particle) in particles.iter_mut().enumerate() {
            particle.id = i;
        }
        let n_particles = particles.len();
        Universe {
            particles: particles,
            n_particles: n_particles,
        }
    }

    /// Scratch buffer with one slot per particle, to be reused across steps
    pub fn new_acceleration_buffer(&self) -> Vec<Axes> {
        vec![Axes::zero(); self.particles.len()]
    }

    /// Net gravitational force on every particle, stored in `accelerations`.
    ///
    /// The stored value already includes the mass of the target particle, so it
    /// is consumed directly by the velocity update. Every pair is visited
    /// once and the equal and opposite contribution is applied to both members.
    ///
    /// Panics if `accelerations` does not hold one slot per particle.
    pub fn gravity_calculate_acceleration(&self, accelerations: &mut [Axes]) {
        assert_eq!(accelerations.len(), self.particles.len(), "acceleration buffer does not match the number of particles");

        for acceleration in accelerations.iter_mut() {
            *acceleration = Axes::zero();
        }

        for (i, particle_a) in self.particles.iter().enumerate() {
            if let Some((acceleration_a, accelerations_b)) = accelerations[i..].split_first_mut() {
                for (acceleration_b, particle_b) in accelerations_b.iter_mut().zip(self.particles[i+1..].iter()) {
                    let force = gravity_pairwise_force(particle_a, particle_b);
                    *acceleration_a += force;
                    *acceleration_b -= force;
                }
            }
        }
    }

    pub fn calculate_kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|particle| particle.kinetic_energy()).sum()
    }

    /// Potential energy with the same softened distance used for the forces
    pub fn calculate_potential_energy(&self) -> f64 {
        let mut potential_energy = 0.;
        for (i, particle_a) in self.particles.iter().enumerate() {
            for particle_b in self.particles[i+1..].iter() {
                let distance = (particle_b.position - particle_a.position).norm() + ETA;
                potential_energy -= G * particle_a.mass * particle_b.mass / distance;
            }
        }
        potential_energy
    }

    pub fn calculate_total_energy(&self) -> f64 {
        self.calculate_kinetic_energy() + self.calculate_potential_energy()
    }

    /// Sum of the velocities. The velocity update applies the net force
    /// without dividing by the mass, so this is the conserved linear
    /// quantity for any set of masses.
    pub fn calculate_velocity_sum(&self) -> Axes {
        let mut velocity_sum = Axes::zero();
        for particle in self.particles.iter() {
            velocity_sum += particle.velocity;
        }
        velocity_sum
    }

    /// Sum of m*v, conserved only when all masses are equal
    pub fn calculate_total_momentum(&self) -> Axes {
        let mut momentum = Axes::zero();
        for particle in self.particles.iter() {
            momentum += particle.momentum();
        }
        momentum
    }
}

/// Force exerted on `particle_a` by `particle_b` (the force on `particle_b` is its exact negative)
pub fn gravity_pairwise_force(particle_a: &Particle, particle_b: &Particle) -> Axes {
    let dx = particle_b.position - particle_a.position;
    let distance = dx.norm() + ETA;
    let prefac = G * particle_a.mass * particle_b.mass / (distance * distance * distance);
    dx * prefac
}

pub fn calculate_center_of_mass(particles: &[Particle]) -> (Axes, Axes) {
    let mut center_of_mass_position = Axes::zero();
    let mut center_of_mass_velocity = Axes::zero();
    let mut center_of_mass_mass = 0.;

    for particle in particles.iter() {
        center_of_mass_position += particle.position * particle.mass;
        center_of_mass_velocity += particle.velocity * particle.mass;
        center_of_mass_mass += particle.mass;
    }

    if center_of_mass_mass > 0. {
        center_of_mass_position = center_of_mass_position * (1. / center_of_mass_mass);
        center_of_mass_velocity = center_of_mass_velocity * (1. / center_of_mass_mass);
    }
    (center_of_mass_position, center_of_mass_velocity)
}
