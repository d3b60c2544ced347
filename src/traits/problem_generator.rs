use crate::models::problem::Problem;

/// Source of fresh recurrence problems for a session
pub trait ProblemGenerator {
    /// Produce a new well-formed problem
    fn generate(&mut self) -> Problem;
}
