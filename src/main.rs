extern crate nbody;
extern crate time;
extern crate clap;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::io;
use std::path::PathBuf;
use std::process;
use time::OffsetDateTime;
use nbody::{Configuration, Error, IntegratorType, Simulation};
use nbody::output::{self, OutputFormat};
use nbody::tools;

fn build_command() -> Command {
    Command::new("nbody")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Direct-summation N-body simulator with softened Newtonian gravity.")
        .arg(Arg::new("input_file")
            .required(true)
            .index(1)
            .value_parser(value_parser!(PathBuf))
            .help("Initial conditions: body count followed by 'mass x y z vx vy vz' lines (or a JSON case)"))
        .arg(Arg::new("dt")
            .required(true)
            .index(2)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .help("Time step (> 0)"))
        .arg(Arg::new("horizon")
            .required(true)
            .index(3)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .help("Time limit of the simulation (> 0)"))
        .arg(Arg::new("output_file")
            .required(false)
            .index(4)
            .value_parser(value_parser!(PathBuf))
            .help("Trajectory output file (standard output if omitted)"))
        .arg(Arg::new("integrator")
            .short('i')
            .long("integrator")
            .value_parser(["euler", "leapfrog"])
            .default_value("leapfrog")
            .help("Time-stepping scheme"))
        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .value_parser(["text", "csv", "binary"])
            .help("Trajectory format (deduced from the output file extension if omitted)"))
        .arg(Arg::new("snapshot")
            .long("snapshot")
            .value_name("file")
            .value_parser(value_parser!(PathBuf))
            .help("Write the final state to this file so that a new run can start from it"))
        .arg(Arg::new("silent")
            .short('s')
            .long("silent")
            .action(ArgAction::SetTrue)
            .help("Only print INFO/WARNING/ERROR messages"))
}

fn configuration_from_matches(matches: &ArgMatches) -> Result<Configuration, Error> {
    let input_file = matches.get_one::<PathBuf>("input_file")
                            .ok_or_else(|| Error::Configuration("missing input file".to_string()))?;
    let time_step = *matches.get_one::<f64>("dt")
                            .ok_or_else(|| Error::Configuration("missing dt".to_string()))?;
    let time_limit = *matches.get_one::<f64>("horizon")
                             .ok_or_else(|| Error::Configuration("missing horizon".to_string()))?;

    let mut configuration = Configuration::new(input_file.clone(), time_step, time_limit);
    configuration.output_file = matches.get_one::<PathBuf>("output_file").cloned();
    configuration.snapshot_file = matches.get_one::<PathBuf>("snapshot").cloned();
    configuration.silent_mode = matches.get_flag("silent");
    if let Some(integrator) = matches.get_one::<String>("integrator") {
        configuration.integrator = integrator.parse::<IntegratorType>()?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        configuration.output_format = Some(format.parse::<OutputFormat>()?);
    }
    configuration.validate()?;
    Ok(configuration)
}

fn run(configuration: &Configuration) -> Result<(), Error> {
    let silent_mode = configuration.silent_mode;
    let mut simulation = Simulation::from_configuration(configuration)?;
    eprintln!("[INFO {} UTC] Loaded {} bodies from '{}'.", tools::timestamp(), simulation.universe.n_particles, configuration.input_file.display());
    eprintln!("[INFO {} UTC] Integrator: {} | Time step: {} | Time limit: {} | Iterations: {}", tools::timestamp(), simulation.integrator, simulation.time_step(), simulation.time_limit, simulation.expected_n_iterations());
    if ! silent_mode {
        eprintln!("[INFO {} UTC] Initial state:", tools::timestamp());
        tools::print_particles(&mut io::stderr(), &simulation.universe)?;
    }

    let initial_energy = simulation.universe.calculate_total_energy();
    let initial_velocity_sum = simulation.universe.calculate_velocity_sum();

    let output_format = configuration.output_format();
    let mut universe_history_writer = output::get_history_writer(configuration.output_file.as_deref(), output_format)?;
    match &configuration.output_file {
        Some(output_file) => eprintln!("[INFO {} UTC] Writing {} trajectory to '{}'.", tools::timestamp(), output_format, output_file.display()),
        None => eprintln!("[INFO {} UTC] Writing {} trajectory to standard output.", tools::timestamp(), output_format),
    }

    let n_iterations = simulation.run(universe_history_writer.as_mut(), silent_mode)?;
    eprintln!("[INFO {} UTC] Simulation completed at time {} after {} iterations.", tools::timestamp(), simulation.current_time, n_iterations);

    if let Some(snapshot_file) = &configuration.snapshot_file {
        output::write_snapshot(snapshot_file, &simulation.universe, simulation.current_time)?;
        eprintln!("[INFO {} UTC] Final state saved to '{}'.", tools::timestamp(), snapshot_file.display());
    }

    if ! silent_mode {
        eprintln!("[INFO {} UTC] Final state:", tools::timestamp());
        tools::print_particles(&mut io::stderr(), &simulation.universe)?;
    }

    let energy_error = tools::calculate_relative_energy_error(initial_energy, simulation.universe.calculate_total_energy());
    let velocity_sum_drift = tools::calculate_drift(initial_velocity_sum, simulation.universe.calculate_velocity_sum());
    eprintln!("[INFO {} UTC] Relative energy error: {:e} | Velocity sum drift: {:e}", tools::timestamp(), energy_error, velocity_sum_drift);
    Ok(())
}

fn main() {
    let t1 = OffsetDateTime::now_utc();
    let matches = build_command().get_matches();

    let result = configuration_from_matches(&matches).and_then(|configuration| run(&configuration));
    if let Err(e) = result {
        eprintln!("[ERROR {} UTC] {}", tools::timestamp(), e);
        process::exit(1);
    }

    let t2 = OffsetDateTime::now_utc();
    eprintln!("[INFO {} UTC] Execution time: {} seconds", tools::timestamp(), (t2 - t1).as_seconds_f64());
}
