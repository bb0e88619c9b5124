use clap::{App, load_yaml};
use fastrand::Rng;
use serde_json::json;
use tracing::{error, info};

use dogs_setcover::errors::SetCoverError;
use dogs_setcover::search::{
    greedy_chvatal::greedy_chvatal,
    hill_climbing::hill_climbing,
    redundancy::remove_redundant,
};
use dogs_setcover::stopping::TimeStoppingCriterion;
use dogs_setcover::util::{read_params, export_results};

fn run() -> Result<(), SetCoverError> {
    // parse arguments
    let yaml = load_yaml!("hill_climbing.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    let instance = &params.instance;
    let stopping_criterion = TimeStoppingCriterion::new(params.time);
    // initial solution
    let sol_greedy = remove_redundant(instance, &greedy_chvatal(instance)?);
    let cost_greedy = instance.cost(&sol_greedy);
    info!("greedy found a solution of cost {:.3}", cost_greedy);
    // improve it
    let res = hill_climbing(instance, &sol_greedy, &Rng::with_seed(params.seed), stopping_criterion.clone());
    let solution = remove_redundant(instance, &res.solution);
    let cost = instance.cost(&solution);
    info!("hill climbing found a solution of cost {:.3} ({} iterations)", cost, res.nb_iter);
    println!("{:.3}", cost);
    let mut stats = res.json_statistics();
    stats["primal_list"] = json!(vec![cost_greedy, cost]);
    stats["time_searched"] = json!(stopping_criterion.elapsed());
    stats["inst_name"] = json!(params.inst_filename);
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

/** solves a set cover instance using a greedy followed by a hill climbing */
pub fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
