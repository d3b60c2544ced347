#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use log::debug;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GeneratorSettings;
    use crate::errors::LabError;
    use crate::implementations::generator::RandomProblemGenerator;
    use crate::models::problem::Problem;
    use crate::tests::setup;
    use crate::traits::problem_generator::ProblemGenerator;

    fn seeded(seed: u64) -> RandomProblemGenerator<StdRng> {
        RandomProblemGenerator::seeded(seed, GeneratorSettings::default()).unwrap()
    }

    fn assert_invariants(problem: &Problem) {
        let (r1, r2) = problem.roots();
        assert_ne!(r1, r2, "roots must be distinct: {:?}", problem);
        assert_ne!(r1, 0, "r1 must be nonzero: {:?}", problem);
        assert_ne!(r2, 0, "r2 must be nonzero: {:?}", problem);
        assert!((-5..=5).contains(&r1) && (-5..=5).contains(&r2), "roots out of range: {:?}", problem);
        assert_eq!(problem.s(), r1 + r2);
        assert_eq!(problem.t(), -r1 * r2);
        assert!((1..=10).contains(&problem.a0()) && (1..=10).contains(&problem.a1()));
    }

    #[test]
    fn test_generated_problems_satisfy_invariants() {
        setup();
        for seed in 0..50 {
            let mut generator = seeded(seed);
            for _ in 0..20 {
                let problem = generator.generate();
                debug!("seed {}: {:?}", seed, problem);
                assert_invariants(&problem);
            }
        }
    }

    #[test]
    fn test_same_seed_gives_same_problems() {
        let mut first = seeded(42);
        let mut second = seeded(42);
        for _ in 0..25 {
            assert_eq!(first.generate(), second.generate());
        }
    }

    #[test]
    fn test_injected_rng_is_used() {
        let mut from_seed = seeded(7);
        let mut injected = RandomProblemGenerator::new(
            StdRng::seed_from_u64(7),
            GeneratorSettings::default()
        ).unwrap();
        assert_eq!(from_seed.generate(), injected.generate());
    }

    #[test]
    fn test_every_root_and_initial_value_is_reachable() {
        let mut generator = seeded(2024);
        let mut roots = HashSet::new();
        let mut initials = HashSet::new();
        for _ in 0..2000 {
            let problem = generator.generate();
            roots.insert(problem.r1());
            roots.insert(problem.r2());
            initials.insert(problem.a0());
            initials.insert(problem.a1());
        }
        let expected_roots: HashSet<i64> = (-5..=5).filter(|r| *r != 0).collect();
        let expected_initials: HashSet<i64> = (1..=10).collect();
        assert_eq!(roots, expected_roots);
        assert_eq!(initials, expected_initials);
    }

    #[test]
    fn test_smallest_root_bound_yields_plus_minus_one() {
        let settings = GeneratorSettings { root_bound: 1, initial_min: 3, initial_max: 3 };
        let mut generator = RandomProblemGenerator::seeded(1, settings).unwrap();
        for _ in 0..20 {
            let problem = generator.generate();
            let mut roots = [problem.r1(), problem.r2()];
            roots.sort();
            assert_eq!(roots, [-1, 1]);
            assert_eq!((problem.s(), problem.t()), (0, 1));
            assert_eq!((problem.a0(), problem.a1()), (3, 3));
        }
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let zero_bound = GeneratorSettings { root_bound: 0, ..GeneratorSettings::default() };
        assert!(matches!(RandomProblemGenerator::seeded(1, zero_bound), Err(LabError::Config(_))));

        let inverted = GeneratorSettings { initial_min: 5, initial_max: 4, ..GeneratorSettings::default() };
        assert!(matches!(RandomProblemGenerator::seeded(1, inverted), Err(LabError::Config(_))));
    }

    #[test]
    fn test_problem_new_validates_roots() {
        assert!(matches!(Problem::new(2, 2, 1, 1), Err(LabError::InvalidProblem(_))));
        assert!(matches!(Problem::new(0, 3, 1, 1), Err(LabError::InvalidProblem(_))));
        assert!(matches!(Problem::new(2, i64::MIN, 1, 1), Err(LabError::InvalidProblem(_))));

        let problem = Problem::new(2, 3, 1, 5).unwrap();
        assert_eq!((problem.s(), problem.t()), (5, -6));
        assert_eq!(problem.recurrence(), "a_n = 5a_{n-1} - 6a_{n-2}");
        assert_eq!(problem.characteristic_equation(), "r^2 - (5)r - (-6) = 0");
        assert_eq!(problem.initial_conditions(), "a_0 = 1, a_1 = 5");
        assert_eq!(problem.constant_equations(), ["A + B = 1".to_string(), "2A + 3B = 5".to_string()]);
    }
}
