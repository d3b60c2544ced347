mod config_tests;
mod expression_tests;
mod generator_tests;

use log::info;

use crate::models::problem::Problem;
use crate::traits::problem_generator::ProblemGenerator;

// Setup function to initialize logging
pub(crate) fn setup() {
    // Logger may already be initialized by another test, which is fine
    if env_logger::builder().is_test(true).try_init().is_ok() {
        info!("Logger initialized");
    }
}

/// Hands out a fixed list of problems in order, wrapping around
pub(crate) struct FixedGenerator {
    problems: Vec<Problem>,
    next: usize,
}

impl FixedGenerator {
    pub(crate) fn new(problems: Vec<Problem>) -> Self {
        assert!(!problems.is_empty(), "FixedGenerator needs at least one problem");
        FixedGenerator { problems, next: 0 }
    }
}

impl ProblemGenerator for FixedGenerator {
    fn generate(&mut self) -> Problem {
        let problem = self.problems[self.next % self.problems.len()];
        self.next += 1;
        problem
    }
}
