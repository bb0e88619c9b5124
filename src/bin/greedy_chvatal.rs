use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;
use tracing::{error, info};

use dogs_setcover::errors::SetCoverError;
use dogs_setcover::search::{greedy_chvatal::greedy_chvatal, redundancy::remove_redundant};
use dogs_setcover::util::{read_params, export_results};

fn run() -> Result<(), SetCoverError> {
    // parse arguments
    let yaml = load_yaml!("greedy_chvatal.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    let instance = &params.instance;
    // solve it
    let t_start = Instant::now();
    let sol_greedy = greedy_chvatal(instance)?;
    let cost_greedy = instance.cost(&sol_greedy);
    let solution = remove_redundant(instance, &sol_greedy);
    let cost = instance.cost(&solution);
    let duration = t_start.elapsed().as_secs_f32();
    info!("greedy took {:.3} seconds. cost: {:.3} (before redundancy elimination: {:.3})",
        duration, cost, cost_greedy
    );
    println!("{:.3}", cost);
    let stats = json!({
        "primal_list": vec![cost_greedy, cost],
        "time_searched": duration,
        "inst_name": params.inst_filename
    });
    // export results
    export_results(
        instance,
        &solution,
        &stats,
        params.perf_file.as_deref(),
        params.sol_file.as_deref(),
        true
    )
}

/** solves a set cover instance using Chvátal's greedy */
pub fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
