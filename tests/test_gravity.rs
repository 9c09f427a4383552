extern crate nbody;
extern crate assert_approx_eq;

mod common;
use assert_approx_eq::assert_approx_eq;
use nbody::constants::ETA;

#[test]
fn empty_universe_has_no_forces() {
    let universe = nbody::Universe::new(vec![]);
    let mut accelerations = universe.new_acceleration_buffer();
    universe.gravity_calculate_acceleration(&mut accelerations);
    assert!(accelerations.is_empty());
}

#[test]
fn single_body_has_zero_acceleration_even_with_stale_buffer() {
    let universe = nbody::Universe::new(vec![nbody::Particle::new(3., nbody::Axes::new(1., 2., 3.), nbody::Axes::new(0.5, 0., 0.))]);
    let mut accelerations = vec![nbody::Axes::new(7., -7., 1.)];
    universe.gravity_calculate_acceleration(&mut accelerations);
    assert_eq!(accelerations[0], nbody::Axes::zero());
}

#[test]
fn stale_values_do_not_leak_into_the_next_pass() {
    let universe = common::cluster(5);
    let mut fresh = universe.new_acceleration_buffer();
    universe.gravity_calculate_acceleration(&mut fresh);

    let mut stale = vec![nbody::Axes::new(1e3, -1e3, 42.); universe.n_particles];
    universe.gravity_calculate_acceleration(&mut stale);
    assert_eq!(fresh, stale);

    // A second pass over the same buffer gives the same result
    universe.gravity_calculate_acceleration(&mut stale);
    assert_eq!(fresh, stale);
}

#[test]
fn pairwise_contributions_are_antisymmetric() {
    let universe = nbody::Universe::new(vec![
        nbody::Particle::new(2., nbody::Axes::new(0.3, -1.2, 0.7), nbody::Axes::zero()),
        nbody::Particle::new(5., nbody::Axes::new(-0.8, 0.4, 2.1), nbody::Axes::zero()),
    ]);
    let mut accelerations = universe.new_acceleration_buffer();
    universe.gravity_calculate_acceleration(&mut accelerations);
    assert_eq!(accelerations[0], -accelerations[1]);

    let force_on_a = nbody::gravity_pairwise_force(&universe.particles[0], &universe.particles[1]);
    let force_on_b = nbody::gravity_pairwise_force(&universe.particles[1], &universe.particles[0]);
    assert_approx_eq!(force_on_a.x, -force_on_b.x, 1e-15);
    assert_approx_eq!(force_on_a.y, -force_on_b.y, 1e-15);
    assert_approx_eq!(force_on_a.z, -force_on_b.z, 1e-15);
}

#[test]
fn force_follows_softened_inverse_square_law() {
    let universe = nbody::Universe::new(vec![
        nbody::Particle::new(2., nbody::Axes::zero(), nbody::Axes::zero()),
        nbody::Particle::new(5., nbody::Axes::new(3., 4., 0.), nbody::Axes::zero()),
    ]);
    let mut accelerations = universe.new_acceleration_buffer();
    universe.gravity_calculate_acceleration(&mut accelerations);

    // Softening is added to the distance (5), not to its square
    let distance: f64 = 5. + ETA;
    let prefac = 2. * 5. / distance.powi(3);
    assert_approx_eq!(accelerations[0].x, prefac * 3., 1e-15);
    assert_approx_eq!(accelerations[0].y, prefac * 4., 1e-15);
    assert_approx_eq!(accelerations[0].z, 0., 1e-15);
    assert_approx_eq!(accelerations[1].x, -prefac * 3., 1e-15);
    assert_approx_eq!(accelerations[1].y, -prefac * 4., 1e-15);
}

#[test]
fn contributions_from_every_pair_are_accumulated() {
    let universe = nbody::Universe::new(vec![
        nbody::Particle::new(1., nbody::Axes::new(0., 0., 0.), nbody::Axes::zero()),
        nbody::Particle::new(1., nbody::Axes::new(1., 0., 0.), nbody::Axes::zero()),
        nbody::Particle::new(1., nbody::Axes::new(2., 0., 0.), nbody::Axes::zero()),
    ]);
    let mut accelerations = universe.new_acceleration_buffer();
    universe.gravity_calculate_acceleration(&mut accelerations);

    let near = 1. / (1. + ETA).powi(3);
    let far = 2. / (2. + ETA).powi(3);
    assert_approx_eq!(accelerations[0].x, near + far, 1e-15);
    assert_approx_eq!(accelerations[1].x, 0., 1e-15);
    assert_approx_eq!(accelerations[2].x, -(near + far), 1e-15);
}

#[test]
fn coincident_bodies_produce_a_finite_force() {
    let universe = nbody::Universe::new(vec![
        nbody::Particle::new(1., nbody::Axes::new(1., 1., 1.), nbody::Axes::zero()),
        nbody::Particle::new(1., nbody::Axes::new(1., 1., 1.), nbody::Axes::zero()),
    ]);
    let mut accelerations = universe.new_acceleration_buffer();
    universe.gravity_calculate_acceleration(&mut accelerations);
    for acceleration in accelerations.iter() {
        assert!(acceleration.is_finite());
        assert_eq!(*acceleration, nbody::Axes::zero());
    }
    assert!(universe.calculate_potential_energy().is_finite());
}

#[test]
fn net_force_of_the_system_vanishes() {
    let universe = common::cluster(12);
    let mut accelerations = universe.new_acceleration_buffer();
    universe.gravity_calculate_acceleration(&mut accelerations);
    let mut total = nbody::Axes::zero();
    for acceleration in accelerations.iter() {
        total += *acceleration;
    }
    assert_approx_eq!(total.x, 0., 1e-13);
    assert_approx_eq!(total.y, 0., 1e-13);
    assert_approx_eq!(total.z, 0., 1e-13);
}

#[test]
fn potential_energy_uses_softened_distance() {
    let universe = common::symmetric_pair(2., 1.);
    assert_approx_eq!(universe.calculate_potential_energy(), -4. / (1. + ETA), 1e-15);
    assert_eq!(universe.calculate_kinetic_energy(), 0.);
}

#[test]
fn center_of_mass_is_mass_weighted() {
    let universe = nbody::Universe::new(vec![
        nbody::Particle::new(1., nbody::Axes::new(0., 0., 0.), nbody::Axes::new(0., 3., 0.)),
        nbody::Particle::new(3., nbody::Axes::new(4., 0., 0.), nbody::Axes::new(0., -1., 0.)),
    ]);
    let (position, velocity) = nbody::calculate_center_of_mass(&universe.particles);
    assert_approx_eq!(position.x, 3., 1e-15);
    assert_approx_eq!(velocity.y, 0., 1e-15);
}

#[test]
fn buffer_is_sized_from_the_particles() {
    let mut universe = common::symmetric_pair(1., 1.);
    universe.n_particles = 5;
    let mut accelerations = universe.new_acceleration_buffer();
    assert_eq!(accelerations.len(), 2);
    universe.gravity_calculate_acceleration(&mut accelerations);
    assert!(accelerations[0].x > 0.);
}

#[test]
#[should_panic(expected = "acceleration buffer does not match the number of particles")]
fn short_buffer_is_rejected() {
    let universe = common::cluster(3);
    let mut accelerations = vec![nbody::Axes::zero(); 2];
    universe.gravity_calculate_acceleration(&mut accelerations);
}
