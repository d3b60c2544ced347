pub mod rational;
pub mod problem;
pub mod summary;
pub mod wizard;

// Re-export common model types
pub use rational::Rational;
pub use problem::{Problem, SolutionConstants};
pub use summary::{DescribeTable, NumberSeries, Summary};
pub use wizard::{Verdict, WizardProgress, WizardStep};
