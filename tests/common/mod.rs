#![allow(dead_code)]
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use nbody::constants::ETA;

/// Two equal masses at rest, placed symmetrically about the origin on the x axis
pub fn symmetric_pair(mass: f64, separation: f64) -> nbody::Universe {
    let particles = vec![
        nbody::Particle::new(mass, nbody::Axes::new(-0.5*separation, 0., 0.), nbody::Axes::zero()),
        nbody::Particle::new(mass, nbody::Axes::new(0.5*separation, 0., 0.), nbody::Axes::zero()),
    ];
    nbody::Universe::new(particles)
}

/// Two unit masses on a circular orbit around their center of mass (separation 1)
pub fn circular_binary() -> nbody::Universe {
    let separation: f64 = 1.;
    let softened_distance = separation + ETA;
    let acceleration = separation / (softened_distance * softened_distance * softened_distance);
    let speed = (0.5 * separation * acceleration).sqrt();
    let particles = vec![
        nbody::Particle::new(1., nbody::Axes::new(-0.5*separation, 0., 0.), nbody::Axes::new(0., -speed, 0.)),
        nbody::Particle::new(1., nbody::Axes::new(0.5*separation, 0., 0.), nbody::Axes::new(0., speed, 0.)),
    ];
    nbody::Universe::new(particles)
}

/// Deterministic, non-symmetric cluster of `n_particles` bodies
pub fn cluster(n_particles: usize) -> nbody::Universe {
    let golden_angle: f64 = 2.399963229728653;
    let mut particles = Vec::with_capacity(n_particles);
    for i in 0..n_particles {
        let angle = golden_angle * i as f64;
        let radius = 1. + 0.15 * i as f64;
        let mass = 1. + 0.25 * (i % 4) as f64;
        let position = nbody::Axes::new(radius * angle.cos(), radius * angle.sin(), 0.1 * ((i % 3) as f64 - 1.));
        let velocity = nbody::Axes::new(-0.3 * angle.sin(), 0.3 * angle.cos(), 0.02 * (i % 2) as f64);
        particles.push(nbody::Particle::new(mass, position, velocity));
    }
    nbody::Universe::new(particles)
}

/// Same layout as `cluster`, with every mass set to `mass`
pub fn equal_mass_cluster(n_particles: usize, mass: f64) -> nbody::Universe {
    let mut universe = cluster(n_particles);
    for particle in universe.particles.iter_mut() {
        particle.mass = mass;
    }
    universe
}

/// Unique path in the temporary directory, removed by the caller
pub fn temporary_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("nbody-{}-{}", process::id(), name))
}

pub fn write_temporary_file(name: &str, content: &str) -> PathBuf {
    let path = temporary_path(name);
    fs::write(&path, content).unwrap();
    path
}

/// Run a full simulation, discarding the trajectory
pub fn run(universe: nbody::Universe, integrator: nbody::IntegratorType, time_step: f64, time_limit: f64) -> nbody::Simulation {
    let mut simulation = nbody::Simulation::new(universe, integrator, time_step, time_limit).unwrap();
    let mut universe_history_writer = nbody::output::TextHistoryWriter::new(Vec::new());
    simulation.run(&mut universe_history_writer, true).unwrap();
    simulation
}
