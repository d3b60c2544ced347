use serde::Serialize;
use std::fmt;

use crate::errors::{ LabError, LabResult };
use crate::models::rational::Rational;

/// Largest root magnitude a problem may carry
pub const MAX_ROOT_MAGNITUDE: i64 = 1000;

/// Largest initial-condition magnitude a problem may carry
pub const MAX_INITIAL_MAGNITUDE: i64 = 1_000_000_000;

/// A second-order homogeneous recurrence `a_n = s*a_{n-1} + t*a_{n-2}`
/// built from two distinct nonzero integer roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Problem {
    s: i64,
    t: i64,
    r1: i64,
    r2: i64,
    a0: i64,
    a1: i64,
}

impl Problem {
    /// Build a problem from its roots and initial conditions, deriving `s` and `t`
    pub fn new(r1: i64, r2: i64, a0: i64, a1: i64) -> LabResult<Self> {
        if r1 == 0 || r2 == 0 {
            return Err(LabError::InvalidProblem(format!("roots must be nonzero, got {} and {}", r1, r2)));
        }
        if r1 == r2 {
            return Err(LabError::InvalidProblem(format!("roots must be distinct, got {} twice", r1)));
        }
        if r1.unsigned_abs().max(r2.unsigned_abs()) > MAX_ROOT_MAGNITUDE as u64 {
            return Err(LabError::InvalidProblem(format!("roots must lie in [-{0}, {0}]", MAX_ROOT_MAGNITUDE)));
        }
        if a0.unsigned_abs().max(a1.unsigned_abs()) > MAX_INITIAL_MAGNITUDE as u64 {
            return Err(LabError::InvalidProblem(
                format!("initial conditions must lie in [-{0}, {0}]", MAX_INITIAL_MAGNITUDE)
            ));
        }
        Ok(Self::from_valid_parts(r1, r2, a0, a1))
    }

    /// Parts already known to satisfy the invariants checked by `new`
    pub(crate) fn from_valid_parts(r1: i64, r2: i64, a0: i64, a1: i64) -> Self {
        debug_assert!(r1 != 0 && r2 != 0 && r1 != r2);
        Problem { s: r1 + r2, t: -(r1 * r2), r1, r2, a0, a1 }
    }

    pub fn s(&self) -> i64 {
        self.s
    }

    pub fn t(&self) -> i64 {
        self.t
    }

    pub fn r1(&self) -> i64 {
        self.r1
    }

    pub fn r2(&self) -> i64 {
        self.r2
    }

    pub fn a0(&self) -> i64 {
        self.a0
    }

    pub fn a1(&self) -> i64 {
        self.a1
    }

    pub fn roots(&self) -> (i64, i64) {
        (self.r1, self.r2)
    }

    /// The recurrence as shown to the learner, e.g. `a_n = 5a_{n-1} - 6a_{n-2}`
    pub fn recurrence(&self) -> String {
        format!("a_n = {}a_{{n-1}} {}a_{{n-2}}", self.s, signed_term(self.t))
    }

    pub fn characteristic_equation(&self) -> String {
        format!("r^2 - ({})r - ({}) = 0", self.s, self.t)
    }

    pub fn initial_conditions(&self) -> String {
        format!("a_0 = {}, a_1 = {}", self.a0, self.a1)
    }

    /// The linear system for the arbitrary constants of `a_n = A*r1^n + B*r2^n`
    pub fn constant_equations(&self) -> [String; 2] {
        [
            format!("A + B = {}", self.a0),
            format!("{}A {}B = {}", self.r1, signed_term(self.r2), self.a1),
        ]
    }

    /// The n-th term, computed by iterating the recurrence
    pub fn term(&self, n: u32) -> Option<i64> {
        let (mut prev, mut curr) = (self.a0, self.a1);
        if n == 0 {
            return Some(prev);
        }
        for _ in 1..n {
            let next = self.s
                .checked_mul(curr)?
                .checked_add(self.t.checked_mul(prev)?)?;
            prev = curr;
            curr = next;
        }
        Some(curr)
    }
}

fn signed_term(value: i64) -> String {
    if value < 0 {
        format!("- {}", value.unsigned_abs())
    } else {
        format!("+ {}", value)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solve {} with {}", self.recurrence(), self.initial_conditions())
    }
}

/// Arbitrary constants of the general solution `a_n = A*r1^n + B*r2^n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolutionConstants {
    pub a: Rational,
    pub b: Rational,
}

impl SolutionConstants {
    /// Evaluate the closed form at `n`
    pub fn evaluate(&self, problem: &Problem, n: u32) -> Option<Rational> {
        let left = self.a.checked_mul(Rational::from(problem.r1()).checked_pow(n)?)?;
        let right = self.b.checked_mul(Rational::from(problem.r2()).checked_pow(n)?)?;
        left.checked_add(right)
    }

    pub fn general_solution(&self, problem: &Problem) -> String {
        format!("a_n = ({})({})^n + ({})({})^n", self.a, problem.r1(), self.b, problem.r2())
    }
}
