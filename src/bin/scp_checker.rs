use clap::{App, load_yaml};

use dogs_setcover::{
    cover::{checker, CheckerResult},
    errors::SetCoverError,
    orlib::read_solution,
    util::read_instance,
};

fn run() -> Result<CheckerResult, SetCoverError> {
    // parse arguments
    let yaml = load_yaml!("scp_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let instance_type = main_args.value_of("type").unwrap_or("orlib");
    let sol_filename = main_args.value_of("solution").unwrap_or_default();
    // read files
    let instance = read_instance(inst_filename, instance_type)?;
    let solution = read_solution(sol_filename, instance.nb_sets())?;
    // call checker
    Ok(checker(&instance, &solution))
}

/** checks a set cover solution, prints its cost if valid */
pub fn main() {
    match run() {
        Ok(CheckerResult::Ok(cost)) => {
            println!("{}", cost);
        },
        Ok(CheckerResult::WrongLength { expected, found }) => {
            println!("ERROR: solution has {} entries ({} sets)", found, expected);
            std::process::exit(1);
        },
        Ok(CheckerResult::ElementNotCovered(e)) => {
            println!("ERROR: element {} not covered", e);
            std::process::exit(1);
        },
        Err(e) => {
            println!("ERROR: {}", e);
            std::process::exit(1);
        },
    };
}
