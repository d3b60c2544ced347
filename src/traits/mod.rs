pub mod problem_generator;

// Re-export traits
pub use problem_generator::ProblemGenerator;
