use fastrand::Rng;

use crate::cover::{SetCoverInstance, Solution};

/// selects every candidate set (valid whenever the instance admits a cover)
pub fn take_all(inst:&SetCoverInstance) -> Solution {
    vec![true ; inst.nb_sets()]
}

/** selects each candidate set independently with probability p.
Deterministic for a given seeded generator.
*/
pub fn random_subset(inst:&SetCoverInstance, p:f64, rng:&Rng) -> Solution {
    inst.sets().map(|_| rng.f64() < p).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::generator::{generate_instance, GeneratorParams};

    #[test]
    fn test_take_all_valid() {
        for seed in 0..10 {
            let inst = generate_instance(&GeneratorParams { seed, ..GeneratorParams::default() }).unwrap();
            assert!(inst.is_valid(&take_all(&inst)));
        }
    }

    #[test]
    fn test_random_subset_deterministic() {
        let inst = generate_instance(&GeneratorParams { num_sets:50, ..GeneratorParams::default() }).unwrap();
        let a = random_subset(&inst, 0.5, &Rng::with_seed(12));
        let b = random_subset(&inst, 0.5, &Rng::with_seed(12));
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
    }

    #[test]
    fn test_random_subset_extremes() {
        let inst = generate_instance(&GeneratorParams::default()).unwrap();
        let rng = Rng::with_seed(1);
        assert!(random_subset(&inst, 0., &rng).iter().all(|b| !b));
        assert!(random_subset(&inst, 1., &rng).iter().all(|b| *b));
    }
}
