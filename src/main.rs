//! DOGS implementation of the Set Cover problem
//!
//! generates a random instance and compares three trivial strategies on it:
//! selecting every set, selecting a random subset, and a randomized local search.


// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

#[macro_use]
extern crate clap;
use clap::{App, ArgMatches};
use fastrand::Rng;
use tracing::{error, info};

use dogs_setcover::{
    errors::SetCoverError,
    generator::{generate_instance, GeneratorParams},
    logger::init_logging,
    search::{
        greedy_local_search::greedy_local_search,
        trivial::{random_subset, take_all},
    },
    stopping::NeverStop,
};

/// reads a numeric argument
fn parse_arg<T:std::str::FromStr>(main_args:&ArgMatches, name:&str) -> Result<T, SetCoverError> {
    let s = main_args.value_of(name).unwrap_or_default();
    s.parse::<T>().map_err(|_| SetCoverError::InvalidParameter(
        format!("unable to parse {} (found '{}')", name, s)
    ))
}

/// generates the instance, then evaluates each strategy
fn run(main_args:&ArgMatches) -> Result<(), SetCoverError> {
    let params = GeneratorParams {
        universe_size: parse_arg(main_args, "universe")?,
        num_sets: parse_arg(main_args, "sets")?,
        density: parse_arg(main_args, "density")?,
        seed: parse_arg(main_args, "seed")?,
        ..GeneratorParams::default()
    };
    info!("generating instance: {:?}", params);
    let inst = generate_instance(&params)?;
    inst.display_statistics();
    if let Some(filename) = main_args.value_of("export") {
        info!("writing instance in: {}", filename);
        inst.to_json_file(filename)?;
    }
    println!("=========================================================");
    let rng = Rng::with_seed(params.seed);
    // take everything
    let solution = take_all(&inst);
    println!("{:<20} valid: {:<6} cost: {:.3}", "take all", inst.is_valid(&solution), inst.cost(&solution));
    // random subset
    let solution = random_subset(&inst, 0.5, &rng);
    println!("{:<20} valid: {:<6} cost: {:.3}", "random subset", inst.is_valid(&solution), inst.cost(&solution));
    // randomized local search
    let res = greedy_local_search(&inst, &rng, NeverStop)?;
    println!("{:<20} valid: {:<6} cost: {:.3}", "local search", res.valid, res.cost);
    info!("local search took {} iterations", res.nb_iter);
    Ok(())
}

/**
generates a random instance, and compares the take-all, random and local search strategies.
prints the validity and the cost of each solution.
*/
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    init_logging(main_args.value_of("log").unwrap_or("info"));
    if let Err(e) = run(&main_args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
