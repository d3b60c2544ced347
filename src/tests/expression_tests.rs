#[cfg(test)]
mod tests {
    use crate::errors::LabError;
    use crate::implementations::expression::{ parse_exact, parse_number };
    use crate::models::rational::{ within_exact, Rational };
    use num_bigint::BigInt;
    use num_rational::BigRational;
    use crate::tests::setup;

    fn frac(numer: i64, denom: i64) -> Rational {
        Rational::new(numer, denom).unwrap()
    }

    #[test]
    fn test_parses_integers_and_signs() {
        setup();
        assert_eq!(parse_number("5").unwrap(), Rational::from(5));
        assert_eq!(parse_number("  -2 ").unwrap(), Rational::from(-2));
        assert_eq!(parse_number("+3").unwrap(), Rational::from(3));
        assert_eq!(parse_number("--2").unwrap(), Rational::from(2));
    }

    #[test]
    fn test_parses_decimals_exactly() {
        assert_eq!(parse_number("6.66").unwrap(), frac(333, 50));
        assert_eq!(parse_number("-2.005").unwrap(), frac(-401, 200));
        assert_eq!(parse_number(".5").unwrap(), frac(1, 2));
        assert_eq!(parse_number("5.").unwrap(), Rational::from(5));
    }

    #[test]
    fn test_keeps_fractions_exact() {
        let value = parse_number("20/3").unwrap();
        assert_eq!(value, frac(20, 3));
        assert_eq!(value.to_string(), "20/3");
        assert_eq!(parse_number("-5/3").unwrap(), frac(-5, 3));
        assert_eq!(parse_number("4/-6").unwrap(), frac(-2, 3));
    }

    #[test]
    fn test_evaluates_expressions_with_precedence() {
        assert_eq!(parse_number("(1 + 2)/3").unwrap(), Rational::ONE);
        assert_eq!(parse_number("-2 * 4/3").unwrap(), frac(-8, 3));
        assert_eq!(parse_number("1 + 2 * 3").unwrap(), Rational::from(7));
        assert_eq!(parse_number("10 - 4 - 3").unwrap(), Rational::from(3));
        assert_eq!(parse_number("2/3 + 1/3").unwrap(), Rational::ONE);
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in ["", "   ", "abc", "2 3", ".", "1.2.3", "((1)", "1 +", "*2", "2x", "1,5"] {
            match parse_number(input) {
                Err(LabError::Parse(_)) => {}
                other => panic!("expected parse error for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_division_by_zero_is_a_parse_error() {
        assert!(matches!(parse_number("1/0"), Err(LabError::Parse(_))));
        assert!(matches!(parse_number("1/(2 - 2)"), Err(LabError::Parse(_))));
    }

    #[test]
    fn test_long_literals_stay_exact() {
        let value = parse_exact("1.6666666666666666667").unwrap();
        let expected = BigRational::new(
            BigInt::from(16_666_666_666_666_666_667_i128),
            BigInt::from(10_000_000_000_000_000_000_i128)
        );
        assert_eq!(value, expected);

        let huge = parse_exact("99999999999999999999999999999999999999999").unwrap();
        assert!(huge.is_integer());
        assert_eq!(huge.to_string(), "99999999999999999999999999999999999999999");
        let product = parse_exact("9223372036854775807 * 9223372036854775807").unwrap();
        assert_eq!(product.to_string(), "85070591730234615847396907784232501249");
    }

    #[test]
    fn test_narrowing_reports_overflow() {
        assert!(matches!(parse_number("99999999999999999999999999999999999999999"), Err(LabError::Overflow(_))));
        assert!(matches!(parse_number("1.0000000000000000001"), Err(LabError::Overflow(_))));
        // reduces back into range
        assert_eq!(parse_number("1.5000000000000000000000").unwrap(), frac(3, 2));
    }

    #[test]
    fn test_rational_normalization_and_tolerance() {
        let value = frac(4, -6);
        assert_eq!((value.numer(), value.denom()), (-2, 3));
        assert!(frac(1, 3) < frac(1, 2));
        assert!(Rational::new(1, 0).is_err());

        let tolerance = Rational::ONE_HUNDREDTH;
        let truth = Rational::from(-2);
        assert!(frac(-401, 200).within(truth, tolerance));
        assert!(!frac(-201, 100).within(truth, tolerance));
        assert!(!frac(-199, 100).within(truth, tolerance));
        assert!(!truth.within(truth, Rational::ZERO));
    }

    #[test]
    fn test_tolerance_edge_with_long_decimals() {
        let tolerance = Rational::ONE_HUNDREDTH;
        let truth = Rational::from(-2);
        let near = |text: &str| within_exact(&parse_exact(text).unwrap(), truth, tolerance);
        assert!(near("-1.9900000000000000000000001"));
        assert!(near("-2.0099999999999999999999999"));
        assert!(!near("-2.0100000000000000000000001"));
        assert!(!near("-2.0100000000000000000000000"));
    }
}
