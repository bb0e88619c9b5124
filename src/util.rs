use std::fs;

use clap::ArgMatches;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    cover::{SetCoverInstance, CheckerResult, checker},
    errors::SetCoverError,
    logger::init_logging,
    orlib,
};

/// parameters shared by the solver executables
#[derive(Debug)]
pub struct Params {
    /// instance file name
    pub inst_filename: String,
    /// instance read
    pub instance: SetCoverInstance,
    /// time limit (in seconds)
    pub time: f32,
    /// random seed
    pub seed: u64,
    /// where to write the solution (if any)
    pub sol_file: Option<String>,
    /// where to write the statistics (if any)
    pub perf_file: Option<String>,
}

/// reads an argument (or its default value) and parses it
fn parse_arg<T:std::str::FromStr>(main_args:&ArgMatches, name:&str, default:&str) -> Result<T, SetCoverError> {
    let s = main_args.value_of(name).unwrap_or(default);
    s.parse::<T>().map_err(|_| SetCoverError::InvalidParameter(
        format!("unable to parse {} (found '{}')", name, s)
    ))
}

/// reads an instance given its format ("orlib" or "json")
pub fn read_instance(filename:&str, instance_type:&str) -> Result<SetCoverInstance, SetCoverError> {
    match instance_type {
        "orlib" => orlib::read_instance(filename),
        "json" => SetCoverInstance::from_json_file(filename),
        _ => Err(SetCoverError::InvalidParameter(format!(
            "instance type unknown {} (valid: 'orlib', 'json')", instance_type
        )))
    }
}

/** reads command line input, initializes logging and reads the instance */
pub fn read_params(main_args:&ArgMatches) -> Result<Params, SetCoverError> {
    init_logging(main_args.value_of("log").unwrap_or("info"));
    let inst_filename = main_args.value_of("instance").ok_or_else(||
        SetCoverError::InvalidParameter("missing instance file".to_string())
    )?;
    let instance_type = main_args.value_of("type").unwrap_or("orlib");
    let time:f32 = parse_arg(main_args, "time", "10")?;
    let seed:u64 = parse_arg(main_args, "seed", "0")?;
    let sol_file = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    let perf_file = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    info!("reading instance: {}...", inst_filename);
    let instance = read_instance(inst_filename, instance_type)?;
    instance.display_statistics();
    println!("=======================");
    Ok(Params {
        inst_filename: inst_filename.to_string(),
        instance,
        time,
        seed,
        sol_file,
        perf_file,
    })
}

/// exports search results to files
pub fn export_results(
    instance:&SetCoverInstance,
    solution:&[bool],
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
    check_result:bool,
) -> Result<(), SetCoverError> {
    // export statistics
    if let Some(filename) = perf_file {
        fs::write(filename, serde_json::to_string(stats)?)?;
    }
    // export solution
    if let Some(filename) = sol_file {
        if check_result {
            match checker(instance, solution) {
                CheckerResult::Ok(_) => {},
                res => { warn!("invalid solution (reason: {:?})", res); }
            };
        }
        orlib::write_solution(filename, solution)?;
    }
    Ok(())
}
