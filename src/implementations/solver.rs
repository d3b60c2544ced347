use crate::models::problem::{ Problem, SolutionConstants };
use crate::models::rational::Rational;

/// Solve `A + B = a0`, `r1*A + r2*B = a1` exactly.
///
/// The determinant is `r2 - r1`, nonzero because the roots are distinct,
/// so Cramer's rule always applies:
/// `A = (a1 - r2*a0) / (r1 - r2)`, `B = (r1*a0 - a1) / (r1 - r2)`.
pub fn solve_constants(problem: &Problem) -> SolutionConstants {
    let (r1, r2) = problem.roots();
    let (a0, a1) = (problem.a0(), problem.a1());
    // problem bounds keep every product well inside i64
    let det = r1 - r2;
    SolutionConstants {
        a: Rational::reduced(a1 - r2 * a0, det),
        b: Rational::reduced(r1 * a0 - a1, det),
    }
}

/// `a_2 = s*a1 + t*a0`, straight from the recurrence
pub fn verification_value(problem: &Problem) -> i64 {
    problem.s() * problem.a1() + problem.t() * problem.a0()
}
