use bit_set::BitSet;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    cover::SetCoverInstance,
    errors::SetCoverError,
};

/** parameters of the random instance generator.
Each set contains each element with probability `density`. Elements that no set
covers are then added to a random set, so that a cover always exists.
The cost of a set is `|S|^cost_exponent`.
*/
#[derive(Debug, Clone)]
pub struct GeneratorParams {
    /// nb elements in the universe
    pub universe_size: usize,
    /// nb candidate sets
    pub num_sets: usize,
    /// probability for an element to belong to a set
    pub density: f64,
    /// random seed
    pub seed: u64,
    /// cost = cardinality ^ cost_exponent
    pub cost_exponent: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            universe_size: 100,
            num_sets: 10,
            density: 0.2,
            seed: 42,
            cost_exponent: 1.1,
        }
    }
}

/// generates a random instance (deterministic given the seed)
pub fn generate_instance(params:&GeneratorParams) -> Result<SetCoverInstance, SetCoverError> {
    let n = params.universe_size;
    let m = params.num_sets;
    if !(0. ..=1.).contains(&params.density) {
        return Err(SetCoverError::InvalidParameter(format!(
            "density must be in [0,1] (found {})", params.density
        )));
    }
    if m == 0 && n > 0 {
        return Err(SetCoverError::InvalidParameter(
            "at least one set is needed to cover a non-empty universe".to_string()
        ));
    }
    if !params.cost_exponent.is_finite() {
        return Err(SetCoverError::InvalidParameter(format!(
            "cost exponent must be finite (found {})", params.cost_exponent
        )));
    }
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut members = vec![BitSet::with_capacity(n) ; m];
    for set in members.iter_mut() {
        for e in 0..n {
            if rng.gen_bool(params.density) {
                set.insert(e);
            }
        }
    }
    // make sure every element is covered at least once
    let mut nb_repaired = 0;
    for e in 0..n {
        if !members.iter().any(|s| s.contains(e)) {
            let s = rng.gen_range(0..m);
            members[s].insert(e);
            nb_repaired += 1;
        }
    }
    debug!(nb_repaired, "generated {} sets over {} elements", m, n);
    let costs = members.iter()
        .map(|s| (s.len() as f64).powf(params.cost_exponent))
        .collect();
    SetCoverInstance::new(n, members, costs)
}
