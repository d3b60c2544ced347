use log::debug;
use rand::rngs::StdRng;
use rand::{ Rng, SeedableRng };

use crate::config::GeneratorSettings;
use crate::errors::{ LabError, LabResult };
use crate::models::problem::Problem;
use crate::traits::problem_generator::ProblemGenerator;

/// Draws problems with distinct nonzero integer roots from an injected random source
#[derive(Debug, Clone)]
pub struct RandomProblemGenerator<R: Rng> {
    rng: R,
    settings: GeneratorSettings,
}

impl<R: Rng> RandomProblemGenerator<R> {
    pub fn new(rng: R, settings: GeneratorSettings) -> LabResult<Self> {
        settings.validate().map_err(|e| LabError::Config(e.to_string()))?;
        Ok(RandomProblemGenerator { rng, settings })
    }

    /// Uniform over `[-bound, bound] \ {0}`, skipping `exclude` when given
    fn draw_root(&mut self, exclude: Option<i64>) -> i64 {
        let bound = self.settings.root_bound;
        // nonzero values indexed 0..2*bound in ascending order
        let value_at = |index: i64| if index < bound { index - bound } else { index - bound + 1 };
        let index_of = |value: i64| if value < 0 { value + bound } else { value + bound - 1 };

        match exclude {
            None => value_at(self.rng.gen_range(0..2 * bound)),
            Some(excluded) => {
                let skipped = index_of(excluded);
                let index = self.rng.gen_range(0..2 * bound - 1);
                value_at(if index >= skipped { index + 1 } else { index })
            }
        }
    }

    fn draw_initial(&mut self) -> i64 {
        self.rng.gen_range(self.settings.initial_min..=self.settings.initial_max)
    }
}

impl RandomProblemGenerator<StdRng> {
    /// Deterministic generator for a fixed seed
    pub fn seeded(seed: u64, settings: GeneratorSettings) -> LabResult<Self> {
        Self::new(StdRng::seed_from_u64(seed), settings)
    }

    /// Generator seeded from operating system entropy
    pub fn from_entropy(settings: GeneratorSettings) -> LabResult<Self> {
        Self::new(StdRng::from_entropy(), settings)
    }
}

impl<R: Rng> ProblemGenerator for RandomProblemGenerator<R> {
    fn generate(&mut self) -> Problem {
        let r1 = self.draw_root(None);
        let r2 = self.draw_root(Some(r1));
        let a0 = self.draw_initial();
        let a1 = self.draw_initial();
        let problem = Problem::from_valid_parts(r1, r2, a0, a1);
        debug!("Generated problem: {} (roots {}, {})", problem, r1, r2);
        problem
    }
}
