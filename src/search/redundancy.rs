use ordered_float::OrderedFloat;
use tracing::debug;

use crate::cover::{SetCoverInstance, Solution, selected_sets};

/** removes redundant sets from a solution.
Considers the selected sets from the most expensive to the cheapest, and deselects a set
if each of its elements is covered by some other selected set.
The covered part of the universe is unchanged (so a valid solution stays valid), and
the cost never increases.
*/
pub fn remove_redundant(inst:&SetCoverInstance, sol:&[bool]) -> Solution {
    let mut res = sol.to_vec();
    // nb_covering[e]: number of selected sets covering e
    let mut nb_covering = vec![0usize ; inst.nb_elements()];
    let mut selected = selected_sets(sol);
    for s in &selected {
        for e in inst.members(*s).iter() { nb_covering[e] += 1; }
    }
    selected.sort_by_key(|s| std::cmp::Reverse(OrderedFloat(inst.set_cost(*s))));
    let mut nb_removed = 0;
    for s in selected {
        if inst.members(s).iter().all(|e| nb_covering[e] >= 2) {
            res[s] = false;
            nb_removed += 1;
            for e in inst.members(s).iter() { nb_covering[e] -= 1; }
        }
    }
    debug!("removed {} redundant sets", nb_removed);
    res
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        cover::tests::small_instance,
        generator::{generate_instance, GeneratorParams},
        search::trivial::take_all,
    };

    #[test]
    fn test_small_instance() {
        let inst = small_instance();
        // {0,1,2} is the only set covering 1. Then {2,3} and {0,4} are redundant
        let sol = remove_redundant(&inst, &[true, true, true, true]);
        assert_eq!(sol, vec![true, false, true, false]);
        assert_eq!(inst.cost(&sol), 5.);
    }

    #[test]
    fn test_keeps_validity_and_cost() {
        for seed in 0..20 {
            let inst = generate_instance(&GeneratorParams {
                universe_size:200, num_sets:40, density:0.1, seed, ..GeneratorParams::default()
            }).unwrap();
            let all = take_all(&inst);
            let sol = remove_redundant(&inst, &all);
            assert!(inst.is_valid(&sol));
            assert!(inst.cost(&sol) <= inst.cost(&all));
            // every remaining set covers some element alone
            for s in selected_sets(&sol) {
                let mut without = sol.clone();
                without[s] = false;
                assert!(!inst.is_valid(&without));
            }
        }
    }

    #[test]
    fn test_empty_selection() {
        let inst = small_instance();
        assert_eq!(remove_redundant(&inst, &[false ; 4]), vec![false ; 4]);
    }
}
