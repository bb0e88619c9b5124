use fastrand::Rng;
use tracing::{debug, warn};

use crate::{
    cover::SetCoverInstance,
    errors::SetCoverError,
    search::SearchResult,
    stopping::StoppingCriterion,
};

/** randomized local search, starting from the empty selection.
At each iteration, picks a random set:
 - if it is not selected, adds it (an addition is the only move that brings coverage)
 - if it is selected, removes it if the cost does not increase
stops as soon as the selection covers the universe (or when the stopping criterion is met).

Refuses infeasible instances, on which the walk would never end.
*/
pub fn greedy_local_search<Stopping:StoppingCriterion>(
    inst:&SetCoverInstance,
    rng:&Rng,
    stopping_criterion:Stopping,
) -> Result<SearchResult, SetCoverError> {
    if let Some(e) = inst.first_uncoverable() {
        return Err(SetCoverError::Infeasible(e));
    }
    let m = inst.nb_sets();
    let mut solution = vec![false ; m];
    let mut nb_iter:u64 = 0;
    while !inst.is_valid(&solution) {
        if stopping_criterion.is_finished() {
            warn!(nb_iter, "local search stopped before finding a cover");
            break;
        }
        nb_iter += 1;
        if nb_iter % 10000 == 0 {
            debug!("it: {:<15} cost: {:<15.3}", nb_iter, inst.cost(&solution));
        }
        let i = rng.usize(0..m);
        let mut candidate = solution.clone();
        candidate[i] = !candidate[i];
        if candidate[i] || inst.cost(&candidate) <= inst.cost(&solution) {
            solution = candidate;
        }
    }
    Ok(SearchResult::new(inst, solution, nb_iter))
}
