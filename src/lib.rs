pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ConfigError, GeneratorSettings, LabConfig};
pub use errors::{LabError, LabResult, RecoverableError};
pub use implementations::{
    checker::{check_constants, check_final_value, check_roots},
    expression::{parse_exact, parse_number},
    generator::RandomProblemGenerator,
    session::Session,
    solver::{solve_constants, verification_value},
    stats::{parse_series, round_to, summarize},
};
pub use models::{
    problem::{Problem, SolutionConstants},
    rational::Rational,
    summary::{DescribeTable, NumberSeries, Summary},
    wizard::{Verdict, WizardProgress, WizardStep},
};
pub use traits::ProblemGenerator;
