use std::fs;

use bit_set::BitSet;
use serde::{Serialize, Deserialize};

use crate::errors::SetCoverError;

/** Element Id (index in the universe) */
pub type ElementId = usize;

/** Candidate set Id */
pub type SetId = usize;

/** Solution of a set cover problem
(solution[s] is true iff the candidate set s is selected).
*/
pub type Solution = Vec<bool>;

/** serialized form of an instance: sets given as lists of elements */
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstanceData {
    /// number of elements in the universe
    pub universe_size: usize,
    /// sets[s]: elements covered by the set s
    pub sets: Vec<Vec<ElementId>>,
    /// costs[s]: cost of selecting s
    pub costs: Vec<f64>,
}

/** models a (weighted) Set Cover instance */
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "InstanceData", into = "InstanceData")]
pub struct SetCoverInstance {
    /// nb elements in the universe
    n: usize,
    /// members[s]: bitset of the elements covered by s
    members: Vec<BitSet>,
    /// costs[s]: cost of s
    costs: Vec<f64>,
    /// covering[e]: sets that cover e
    covering: Vec<Vec<SetId>>,
}

impl SetCoverInstance {

    /** constructor. fails if some set contains an element outside the universe, if the
    number of costs does not match the number of sets, or if a cost is negative or not finite.
    */
    pub fn new(universe_size:usize, members:Vec<BitSet>, costs:Vec<f64>) -> Result<Self, SetCoverError> {
        if members.len() != costs.len() {
            return Err(SetCoverError::InvalidInstance(format!(
                "{} sets but {} costs", members.len(), costs.len()
            )));
        }
        if let Some((s,c)) = costs.iter().enumerate().find(|(_,c)| !c.is_finite() || **c < 0.) {
            return Err(SetCoverError::InvalidInstance(format!("set {} has cost {}", s, c)));
        }
        let mut covering = vec![Vec::new() ; universe_size];
        for (s,set) in members.iter().enumerate() {
            for e in set.iter() {
                if e >= universe_size {
                    return Err(SetCoverError::InvalidInstance(format!(
                        "set {} contains element {} (universe size: {})", s, e, universe_size
                    )));
                }
                covering[e].push(s);
            }
        }
        Ok(Self { n:universe_size, members, costs, covering })
    }

    /// creates an instance from its element lists
    pub fn from_lists(universe_size:usize, sets:&[Vec<ElementId>], costs:Vec<f64>) -> Result<Self, SetCoverError> {
        let members = sets.iter().map(|l| l.iter().cloned().collect::<BitSet>()).collect();
        Self::new(universe_size, members, costs)
    }

    /// reads an instance from a JSON file
    pub fn from_json_file(filename:&str) -> Result<Self, SetCoverError> {
        let s = fs::read_to_string(filename)?;
        Ok(serde_json::from_str(&s)?)
    }

    /// writes the instance in a JSON file
    pub fn to_json_file(&self, filename:&str) -> Result<(), SetCoverError> {
        fs::write(filename, serde_json::to_string(self)?)?;
        Ok(())
    }

    /// number of elements in the universe
    pub fn nb_elements(&self) -> usize { self.n }

    /// number of candidate sets
    pub fn nb_sets(&self) -> usize { self.members.len() }

    /// elements covered by s
    pub fn members(&self, s:SetId) -> &BitSet { &self.members[s] }

    /// number of elements covered by s
    pub fn cardinality(&self, s:SetId) -> usize { self.members[s].len() }

    /// cost of s
    pub fn set_cost(&self, s:SetId) -> f64 { self.costs[s] }

    /// costs of all the sets
    pub fn costs(&self) -> &[f64] { &self.costs }

    /// sets covering the element e
    pub fn covering(&self, e:ElementId) -> &[SetId] { &self.covering[e] }

    /// iterator over the sets
    pub fn sets(&self) -> std::ops::Range<SetId> { 0..self.nb_sets() }

    /// first element covered by no set (None if a cover exists)
    pub fn first_uncoverable(&self) -> Option<ElementId> {
        (0..self.n).find(|e| self.covering[*e].is_empty())
    }

    /// union of the selected sets
    pub fn covered_elements(&self, sol:&[bool]) -> BitSet {
        assert_eq!(sol.len(), self.nb_sets(), "solution size differs from the number of sets");
        let mut res = BitSet::with_capacity(self.n);
        for (set,_) in self.members.iter().zip(sol.iter()).filter(|(_,selected)| **selected) {
            res.union_with(set);
        }
        res
    }

    /** true iff the selected sets cover the whole universe.

# Panics
- if sol.len() differs from the number of sets
    */
    pub fn is_valid(&self, sol:&[bool]) -> bool {
        self.covered_elements(sol).len() == self.n
    }

    /** sum of the costs of the selected sets.

# Panics
- if sol.len() differs from the number of sets
    */
    pub fn cost(&self, sol:&[bool]) -> f64 {
        assert_eq!(sol.len(), self.nb_sets(), "solution size differs from the number of sets");
        self.costs.iter().zip(sol.iter())
            .filter(|(_,selected)| **selected)
            .map(|(c,_)| c)
            .sum()
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{:>25}{:>10}", "nb elements:", self.nb_elements());
        println!("\t{:>25}{:>10}", "nb sets:", self.nb_sets());
        let cards:Vec<usize> = self.sets().map(|s| self.cardinality(s)).collect();
        if let (Some(min), Some(max)) = (cards.iter().min(), cards.iter().max()) {
            println!("\t{:>25}{:>10}", "min cardinality:", min);
            println!("\t{:>25}{:>10}", "max cardinality:", max);
        }
        println!("\t{:>25}{:>10.3}", "total cost:", self.costs.iter().sum::<f64>());
    }
}

impl std::convert::TryFrom<InstanceData> for SetCoverInstance {
    type Error = SetCoverError;

    fn try_from(data:InstanceData) -> Result<Self, Self::Error> {
        Self::from_lists(data.universe_size, &data.sets, data.costs)
    }
}

impl From<SetCoverInstance> for InstanceData {
    fn from(inst:SetCoverInstance) -> Self {
        Self {
            universe_size: inst.n,
            sets: inst.members.iter().map(|s| s.iter().collect()).collect(),
            costs: inst.costs,
        }
    }
}

/// result of the solution checker
#[derive(Debug, Clone, PartialEq)]
pub enum CheckerResult {
    /// solution is valid (contains its cost)
    Ok(f64),
    /// solution does not have one entry per set
    WrongLength {
        /// number of sets in the instance
        expected: usize,
        /// size of the solution given
        found: usize,
    },
    /// element not covered by the solution
    ElementNotCovered(ElementId),
}

/**
checks a solution. returns its cost if it is valid, the reason it is not otherwise.
*/
pub fn checker(inst:&SetCoverInstance, sol:&[bool]) -> CheckerResult {
    if sol.len() != inst.nb_sets() {
        return CheckerResult::WrongLength { expected:inst.nb_sets(), found:sol.len() };
    }
    let covered = inst.covered_elements(sol);
    match (0..inst.nb_elements()).find(|e| !covered.contains(*e)) {
        Some(e) => CheckerResult::ElementNotCovered(e),
        None => CheckerResult::Ok(inst.cost(sol)),
    }
}

/// list of the selected sets
pub fn selected_sets(sol:&[bool]) -> Vec<SetId> {
    sol.iter().enumerate().filter(|(_,b)| **b).map(|(s,_)| s).collect()
}

/// builds a solution vector from a list of selected sets
pub fn solution_from_sets(nb_sets:usize, selected:&[SetId]) -> Solution {
    let mut res = vec![false ; nb_sets];
    for s in selected { res[*s] = true; }
    res
}


#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 5 elements, 4 sets: {0,1,2} {2,3} {3,4} {0,4}
    pub(crate) fn small_instance() -> SetCoverInstance {
        SetCoverInstance::from_lists(
            5,
            &[vec![0,1,2], vec![2,3], vec![3,4], vec![0,4]],
            vec![3., 2., 2., 2.],
        ).unwrap()
    }

    #[test]
    fn test_validity() {
        let inst = small_instance();
        assert!(inst.is_valid(&[true, false, true, false]));
        assert!(!inst.is_valid(&[true, true, false, false]));
        assert!(!inst.is_valid(&[false ; 4]));
        assert!(inst.is_valid(&[true ; 4]));
    }

    #[test]
    fn test_cost() {
        let inst = small_instance();
        assert_eq!(inst.cost(&[false ; 4]), 0.);
        assert_eq!(inst.cost(&[true, false, true, false]), 5.);
        assert_eq!(inst.cost(&[true ; 4]), 9.);
    }

    #[test]
    fn test_cost_monotone_when_adding() {
        let inst = small_instance();
        let mut sol = vec![false ; 4];
        let mut previous = inst.cost(&sol);
        for s in inst.sets() {
            sol[s] = true;
            let current = inst.cost(&sol);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_empty_universe() {
        let inst = SetCoverInstance::from_lists(0, &[vec![]], vec![0.]).unwrap();
        assert!(inst.is_valid(&[false]));
    }

    #[test]
    #[should_panic]
    fn test_wrong_length_panics() {
        small_instance().is_valid(&[true]);
    }

    #[test]
    fn test_checker() {
        let inst = small_instance();
        assert_eq!(checker(&inst, &[true, false, true, false]), CheckerResult::Ok(5.));
        assert_eq!(checker(&inst, &[false, true, false, true]), CheckerResult::ElementNotCovered(1));
        assert_eq!(checker(&inst, &[true]), CheckerResult::WrongLength { expected:4, found:1 });
    }

    #[test]
    fn test_invalid_instances() {
        assert!(SetCoverInstance::from_lists(2, &[vec![0,2]], vec![1.]).is_err());
        assert!(SetCoverInstance::from_lists(2, &[vec![0,1]], vec![1., 2.]).is_err());
        assert!(SetCoverInstance::from_lists(2, &[vec![0,1]], vec![-1.]).is_err());
        assert!(SetCoverInstance::from_lists(2, &[vec![0,1]], vec![f64::NAN]).is_err());
    }

    #[test]
    fn test_uncoverable() {
        let inst = SetCoverInstance::from_lists(3, &[vec![0], vec![2]], vec![1., 1.]).unwrap();
        assert_eq!(inst.first_uncoverable(), Some(1));
        assert_eq!(small_instance().first_uncoverable(), None);
    }

    #[test]
    fn test_json_serialization() {
        let inst = small_instance();
        let s = serde_json::to_string(&inst).unwrap();
        let read:SetCoverInstance = serde_json::from_str(&s).unwrap();
        assert_eq!(read.nb_elements(), 5);
        assert_eq!(read.covering(2), &[0, 1]);
        assert!(serde_json::from_str::<SetCoverInstance>(
            r#"{"universe_size":1,"sets":[[3]],"costs":[1.0]}"#
        ).is_err());
    }

    #[test]
    fn test_selected_sets() {
        let sol = solution_from_sets(4, &[1, 3]);
        assert_eq!(sol, vec![false, true, false, true]);
        assert_eq!(selected_sets(&sol), vec![1, 3]);
    }
}
