use fastrand::Rng;
use ordered_float::OrderedFloat;
use tracing::{debug, info};

use crate::{
    cover::SetCoverInstance,
    search::SearchResult,
    stopping::StoppingCriterion,
};

/// most covered elements first, then the cheapest
type Fitness = (usize, OrderedFloat<f64>);

fn fitness(inst:&SetCoverInstance, sol:&[bool]) -> Fitness {
    (inst.covered_elements(sol).len(), OrderedFloat(-inst.cost(sol)))
}

/** single flip hill climbing.
At each iteration, flips a random set of the current solution and accepts the move
if the fitness (number of covered elements, then cost) does not get worse.
Runs until the stopping criterion is met. The current solution is always the best found.
*/
pub fn hill_climbing<Stopping:StoppingCriterion>(
    inst:&SetCoverInstance,
    initial:&[bool],
    rng:&Rng,
    stopping_criterion:Stopping,
) -> SearchResult {
    let m = inst.nb_sets();
    let mut current = initial.to_vec();
    let mut current_fitness = fitness(inst, &current);
    let mut nb_iter:u64 = 0;
    let mut nb_improvements:u64 = 0;
    while m > 0 && !stopping_criterion.is_finished() {
        nb_iter += 1;
        let i = rng.usize(0..m);
        current[i] = !current[i];
        let new_fitness = fitness(inst, &current);
        if new_fitness >= current_fitness {
            if new_fitness > current_fitness {
                nb_improvements += 1;
                debug!("it: {:<15} covered: {:<10} cost: {:.3}", nb_iter, new_fitness.0, -(new_fitness.1).0);
            }
            current_fitness = new_fitness;
        } else {
            current[i] = !current[i]; // undo
        }
    }
    info!(nb_iter, nb_improvements, "hill climbing finished");
    SearchResult::new(inst, current, nb_iter)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        generator::{generate_instance, GeneratorParams},
        search::trivial::{take_all, random_subset},
        stopping::IterStoppingCriterion,
    };

    #[test]
    fn test_never_worse_than_start() {
        for seed in 0..10 {
            let inst = generate_instance(&GeneratorParams { seed, ..GeneratorParams::default() }).unwrap();
            let all = take_all(&inst);
            let res = hill_climbing(&inst, &all, &Rng::with_seed(seed), IterStoppingCriterion::new(1000));
            assert!(res.valid);
            assert!(res.cost <= inst.cost(&all));
            assert_eq!(res.nb_iter, 1000);
        }
    }

    #[test]
    fn test_reaches_validity() {
        let inst = generate_instance(&GeneratorParams::default()).unwrap();
        let rng = Rng::with_seed(3);
        let start = random_subset(&inst, 0.5, &rng);
        let res = hill_climbing(&inst, &start, &rng, IterStoppingCriterion::new(5000));
        assert!(res.valid);
        assert!(inst.is_valid(&res.solution));
    }

    #[test]
    fn test_no_sets() {
        let inst = SetCoverInstance::from_lists(0, &[], vec![]).unwrap();
        let res = hill_climbing(&inst, &[], &Rng::with_seed(0), IterStoppingCriterion::new(10));
        assert_eq!(res.nb_iter, 0);
        assert!(res.valid);
    }
}
