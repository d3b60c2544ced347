use log::{ info, warn };

use crate::errors::{ LabError, LabResult };
use crate::implementations::checker::{ check_constants, check_final_value, check_roots };
use crate::implementations::solver::{ solve_constants, verification_value };
use crate::models::problem::{ Problem, SolutionConstants };
use crate::models::rational::Rational;
use crate::models::wizard::{ Verdict, WizardProgress, WizardStep };
use crate::traits::problem_generator::ProblemGenerator;

/// One learner's run through the recurrence exercise.
///
/// Owns the current problem and the wizard step. Checks for a step the
/// learner has not reached yet are refused with `LabError::StepLocked`;
/// checks for a step already passed are still answered but never move the
/// wizard. A failed check leaves the step unchanged.
pub struct Session<G: ProblemGenerator> {
    generator: G,
    problem: Problem,
    step: WizardStep,
    tolerance: Rational,
}

impl<G: ProblemGenerator> Session<G> {
    pub fn new(mut generator: G, tolerance: Rational) -> Self {
        let problem = generator.generate();
        info!("Session started: {}", problem);
        Session { generator, problem, step: WizardStep::RootsPending, tolerance }
    }

    /// Session using the standard `0.01` answer tolerance
    pub fn with_default_tolerance(generator: G) -> Self {
        Self::new(generator, Rational::ONE_HUNDREDTH)
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress::from(self.step)
    }

    pub fn tolerance(&self) -> Rational {
        self.tolerance
    }

    /// Step 1: the roots of the characteristic equation, in any order
    pub fn submit_roots(&mut self, user_r1: i64, user_r2: i64) -> LabResult<Verdict> {
        self.require(WizardStep::RootsPending, "root check")?;
        let verdict = Verdict::from(check_roots(user_r1, user_r2, &self.problem));
        self.record(WizardStep::RootsPending, &verdict);
        Ok(verdict)
    }

    /// Step 2: the arbitrary constants `A` and `B`
    pub fn submit_constants(&mut self, user_a: &str, user_b: &str) -> LabResult<Verdict> {
        self.require(WizardStep::ConstantsPending, "constants check")?;
        let truth = solve_constants(&self.problem);
        let verdict = to_verdict(check_constants(user_a, user_b, &truth, self.tolerance));
        self.record(WizardStep::ConstantsPending, &verdict);
        Ok(verdict)
    }

    /// Step 3: `a_2` computed from the learner's closed form
    pub fn submit_final_value(&mut self, user_value: &str) -> LabResult<Verdict> {
        self.require(WizardStep::FinalPending, "final verification")?;
        let truth = verification_value(&self.problem);
        let verdict = to_verdict(check_final_value(user_value, truth, self.tolerance));
        self.record(WizardStep::FinalPending, &verdict);
        Ok(verdict)
    }

    /// The constants, once the learner has found them
    pub fn revealed_constants(&self) -> Option<SolutionConstants> {
        self.progress().constants_verified.then(|| solve_constants(&self.problem))
    }

    /// `a_2` from the recurrence, shown as the first method of step 3
    pub fn revealed_verification_value(&self) -> Option<i64> {
        self.progress().constants_verified.then(|| verification_value(&self.problem))
    }

    /// Discard all progress and start over with a fresh problem
    pub fn reset(&mut self) -> &Problem {
        self.problem = self.generator.generate();
        self.step = WizardStep::RootsPending;
        info!("Session reset: {}", self.problem);
        &self.problem
    }

    fn require(&self, required: WizardStep, attempted: &str) -> LabResult<()> {
        if self.step < required {
            return Err(LabError::StepLocked {
                attempted: attempted.to_string(),
                required,
                current: self.step,
            });
        }
        Ok(())
    }

    fn record(&mut self, at: WizardStep, verdict: &Verdict) {
        if verdict.is_correct() && self.step == at {
            self.step = at.next();
            info!("Wizard advanced to {}", self.step);
        }
    }
}

fn to_verdict(result: LabResult<bool>) -> Verdict {
    match result {
        Ok(passed) => Verdict::from(passed),
        Err(e) => {
            warn!("Answer could not be parsed: {}", e);
            Verdict::ParseError(e.to_string())
        }
    }
}
