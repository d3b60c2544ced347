use thiserror::Error;

use crate::models::wizard::WizardStep;

/// Custom error types for the lab
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabError {
    #[error("Could not parse input: {0}")]
    Parse(String),

    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Step locked: {attempted} opens at the {required} step, current step is {current}")]
    StepLocked { attempted: String, required: WizardStep, current: WizardStep },

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type specific to lab operations
pub type LabResult<T> = Result<T, LabError>;

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for LabError {
    fn is_recoverable(&self) -> bool {
        // Nothing here ends a session; config problems only stop startup.
        !matches!(self, LabError::Config(_))
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            LabError::Parse(_) =>
                Some("Enter a valid number or fraction (e.g. 5, 6.66, or 20/3).".to_string()),
            LabError::StepLocked { current, .. } =>
                Some(format!("Finish the {} step first.", current)),
            LabError::Overflow(_) => Some("Use smaller values.".to_string()),
            LabError::InvalidProblem(_) => Some("Generate a new problem.".to_string()),
            LabError::Config(_) => None,
        }
    }
}
