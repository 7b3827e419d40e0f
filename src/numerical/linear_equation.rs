use log::debug;
use std::fmt;

/// message shown instead of a number when the x coefficient vanishes
pub const NO_SOLUTION_MESSAGE: &str = "No solution (a cannot be 0 for a linear equation)";

/// Outcome of `a*x + b = 0`.
///
/// `NoSolution` covers both the inconsistent case (a = 0, b != 0) and the
/// degenerate one (a = 0, b = 0); callers do not tell them apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinearSolution {
    Root(f64),
    NoSolution,
}

impl LinearSolution {
    pub fn root(&self) -> Option<f64> {
        match self {
            LinearSolution::Root(x) => Some(*x),
            LinearSolution::NoSolution => None,
        }
    }
}

impl fmt::Display for LinearSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinearSolution::Root(x) => write!(f, "{:?}", x),
            LinearSolution::NoSolution => write!(f, "{}", NO_SOLUTION_MESSAGE),
        }
    }
}

/// closed form solution of a*x + b = 0
pub fn solve_linear(a: f64, b: f64) -> LinearSolution {
    if a == 0.0 {
        debug!("linear equation {}x + {} = 0 has no unique solution", a, b);
        return LinearSolution::NoSolution;
    }
    let x = -b / a;
    debug!("linear equation {}x + {} = 0 solved, x = {}", a, b, x);
    LinearSolution::Root(x)
}
