#[cfg(test)]
mod tests {
    use crate::config::{ ConfigError, GeneratorSettings, LabConfig };
    use crate::models::rational::Rational;
    use crate::tests::setup;

    #[test]
    fn test_defaults_match_exercise() {
        setup();
        let config = LabConfig::default();
        assert_eq!(config.generator, GeneratorSettings { root_bound: 5, initial_min: 1, initial_max: 10 });
        assert_eq!(config.tolerance().unwrap(), Rational::ONE_HUNDREDTH);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = LabConfig::from_yaml("tolerance: \"1/50\"\nseed: 42\n").unwrap();
        assert_eq!(config.tolerance().unwrap(), Rational::new(1, 50).unwrap());
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.generator, GeneratorSettings::default());

        let config = LabConfig::from_yaml("generator:\n  root_bound: 3\n").unwrap();
        assert_eq!(config.generator.root_bound, 3);
        assert_eq!(config.generator.initial_max, 10);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            "generator:\n  root_bound: 0\n",
            "generator:\n  root_bound: 100000\n",
            "generator:\n  initial_min: 8\n  initial_max: 2\n",
            "tolerance: \"-0.01\"\n",
            "tolerance: \"0\"\n",
            "tolerance: \"small\"\n",
        ];
        for yaml in cases {
            match LabConfig::from_yaml(yaml) {
                Err(ConfigError::InvalidValue { .. }) => {}
                other => panic!("expected invalid value for {:?}, got {:?}", yaml, other),
            }
        }
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(LabConfig::from_yaml("generator: [1, 2"), Err(ConfigError::ParseError(_))));
    }
}
