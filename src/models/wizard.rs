use serde::Serialize;
use std::fmt;

/// Steps of the guided recurrence exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WizardStep {
    RootsPending,
    ConstantsPending,
    FinalPending,
    Complete,
}

impl WizardStep {
    /// The step reached after the check for `self` succeeds
    pub fn next(self) -> WizardStep {
        match self {
            WizardStep::RootsPending => WizardStep::ConstantsPending,
            WizardStep::ConstantsPending => WizardStep::FinalPending,
            WizardStep::FinalPending | WizardStep::Complete => WizardStep::Complete,
        }
    }

    pub fn is_complete(self) -> bool {
        self == WizardStep::Complete
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::RootsPending => write!(f, "characteristic roots"),
            WizardStep::ConstantsPending => write!(f, "arbitrary constants"),
            WizardStep::FinalPending => write!(f, "final verification"),
            WizardStep::Complete => write!(f, "complete"),
        }
    }
}

/// Which steps the learner has already passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WizardProgress {
    pub roots_verified: bool,
    pub constants_verified: bool,
}

impl From<WizardStep> for WizardProgress {
    fn from(step: WizardStep) -> Self {
        WizardProgress {
            roots_verified: step > WizardStep::RootsPending,
            constants_verified: step > WizardStep::ConstantsPending,
        }
    }
}

/// Outcome of a single answer check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Correct,
    Incorrect,
    ParseError(String),
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    pub fn category(&self) -> &'static str {
        match self {
            Verdict::Correct => "Correct",
            Verdict::Incorrect => "Incorrect",
            Verdict::ParseError(_) => "ParseError",
        }
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed { Verdict::Correct } else { Verdict::Incorrect }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::ParseError(msg) => write!(f, "ParseError: {}", msg),
            other => write!(f, "{}", other.category()),
        }
    }
}
