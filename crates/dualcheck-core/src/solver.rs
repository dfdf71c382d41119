use crate::matrix::Matrix;

/// Result of delegating a problem to an external solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolveOutcome {
    /// An optimal point, one value per variable.
    Solution(Vec<f64>),
    /// Infeasible, unbounded, or a numerical failure; the distinction is not
    /// carried further.
    Failure,
}

/// An external LP solver for the dual problem.
///
/// The problem is posed in the canonical form
/// `minimize objective . x subject to constraints * x >= rhs, x >= 0`
/// with one constraint row per matrix row. Implementations report
/// infeasibility or unboundedness as [`SolveOutcome::Failure`]; they must
/// not panic on unsolvable input.
pub trait DualSolver {
    fn solve(&self, objective: &[f64], constraints: &Matrix, rhs: &[f64]) -> SolveOutcome;
}
