use bit_set::BitSet;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use tracing::debug;

use crate::{
    cover::{SetCoverInstance, SetId, Solution},
    errors::SetCoverError,
};

/// number of newly covered elements per unit of cost (zero-cost sets come first)
fn coverage_ratio(nb_new:usize, cost:f64) -> OrderedFloat<f64> {
    if cost <= 0. { OrderedFloat(f64::INFINITY) }
    else { OrderedFloat(nb_new as f64 / cost) }
}

/** implements Chvátal's greedy algorithm for the weighted set cover.
    1. select the set that covers the most new elements per unit of cost
    2. mark its elements covered
    3. repeat until every element is covered
The ratio of a set can only decrease when the covered part grows, so the priorities are
updated lazily: a popped set whose ratio decreased is pushed back with its new ratio.
*/
pub fn greedy_chvatal(inst:&SetCoverInstance) -> Result<Solution, SetCoverError> {
    if let Some(e) = inst.first_uncoverable() {
        return Err(SetCoverError::Infeasible(e));
    }
    let mut uncovered:BitSet = (0..inst.nb_elements()).collect();
    let mut solution = vec![false ; inst.nb_sets()];
    let mut queue:PriorityQueue<SetId, OrderedFloat<f64>> = PriorityQueue::new();
    for s in inst.sets().filter(|s| inst.cardinality(*s) > 0) {
        queue.push(s, coverage_ratio(inst.cardinality(s), inst.set_cost(s)));
    }
    let mut nb_selected = 0;
    while !uncovered.is_empty() {
        let (s, ratio) = match queue.pop() {
            None => break, // cannot happen on a feasible instance
            Some(e) => e
        };
        let nb_new = inst.members(s).intersection(&uncovered).count();
        if nb_new == 0 { continue; }
        let current_ratio = coverage_ratio(nb_new, inst.set_cost(s));
        if current_ratio < ratio { // outdated priority
            queue.push(s, current_ratio);
            continue;
        }
        solution[s] = true;
        nb_selected += 1;
        uncovered.difference_with(inst.members(s));
        debug!("selected set {} (ratio {:.3}), {} elements left", s, current_ratio.0, uncovered.len());
    }
    debug!("greedy selected {} sets", nb_selected);
    Ok(solution)
}
