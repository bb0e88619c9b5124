use std::cell::Cell;
use std::time::Instant;

/** tells a search procedure when to stop */
pub trait StoppingCriterion {
    /// true if the search should stop now
    fn is_finished(&self) -> bool;
}

/// stops after a given time (in seconds)
#[derive(Debug, Clone)]
pub struct TimeStoppingCriterion {
    /// time at which the criterion was created
    start: Instant,
    /// time limit (in seconds)
    limit: f32,
}

impl TimeStoppingCriterion {
    /// creates a criterion finishing `t` seconds from now
    pub fn new(t:f32) -> Self {
        Self { start: Instant::now(), limit: t }
    }

    /// time elapsed since the creation (in seconds)
    pub fn elapsed(&self) -> f32 { self.start.elapsed().as_secs_f32() }
}

impl StoppingCriterion for TimeStoppingCriterion {
    fn is_finished(&self) -> bool { self.elapsed() >= self.limit }
}

/** stops after a given number of checks.
Each call to `is_finished` counts as one iteration.
*/
#[derive(Debug, Clone)]
pub struct IterStoppingCriterion {
    /// maximum number of iterations
    max_iter: u64,
    /// number of calls so far
    nb_calls: Cell<u64>,
}

impl IterStoppingCriterion {
    /// creates a criterion that finishes after `max_iter` iterations
    pub fn new(max_iter:u64) -> Self {
        Self { max_iter, nb_calls: Cell::new(0) }
    }
}

impl StoppingCriterion for IterStoppingCriterion {
    fn is_finished(&self) -> bool {
        let nb = self.nb_calls.get();
        self.nb_calls.set(nb + 1);
        nb >= self.max_iter
    }
}

/// never stops (the search decides when it is done)
#[derive(Debug, Clone, Default)]
pub struct NeverStop;

impl StoppingCriterion for NeverStop {
    fn is_finished(&self) -> bool { false }
}
