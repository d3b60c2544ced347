use log::debug;

use crate::errors::LabResult;
use crate::implementations::expression::parse_exact;
use crate::models::problem::{ Problem, SolutionConstants };
use crate::models::rational::{ within_exact, Rational };

/// Unordered comparison of the learner's roots with the problem's roots
pub fn check_roots(user_r1: i64, user_r2: i64, truth: &Problem) -> bool {
    let (r1, r2) = truth.roots();
    let passed = (user_r1 == r1 && user_r2 == r2) || (user_r1 == r2 && user_r2 == r1);
    debug!("Roots check ({}, {}) against ({}, {}): {}", user_r1, user_r2, r1, r2, passed);
    passed
}

/// Both constants must lie strictly within `tolerance` of the exact solution
pub fn check_constants(
    user_a: &str,
    user_b: &str,
    truth: &SolutionConstants,
    tolerance: Rational
) -> LabResult<bool> {
    let a = parse_exact(user_a)?;
    let b = parse_exact(user_b)?;
    let passed = within_exact(&a, truth.a, tolerance) && within_exact(&b, truth.b, tolerance);
    debug!("Constants check A={} B={} against A={} B={}: {}", a, b, truth.a, truth.b, passed);
    Ok(passed)
}

/// The learner's `a_2` must lie strictly within `tolerance` of the recurrence value
pub fn check_final_value(user_value: &str, truth: i64, tolerance: Rational) -> LabResult<bool> {
    let value = parse_exact(user_value)?;
    let passed = within_exact(&value, Rational::from(truth), tolerance);
    debug!("Final check {} against {}: {}", value, truth, passed);
    Ok(passed)
}
