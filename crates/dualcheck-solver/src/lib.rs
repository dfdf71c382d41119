use log::{debug, warn};
use microlp::{ComparisonOp, OptimizationDirection, Problem};

use dualcheck_core::{DualSolver, Matrix, SolveOutcome};

/// [`DualSolver`] backed by the `microlp` simplex implementation.
///
/// Poses the canonical form directly: a minimization over nonnegative
/// variables with one `>=` row per constraint. Infeasible and unbounded
/// problems come back from microlp as errors and are collapsed into
/// [`SolveOutcome::Failure`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl DualSolver for MicrolpSolver {
    fn solve(&self, objective: &[f64], constraints: &Matrix, rhs: &[f64]) -> SolveOutcome {
        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<_> = objective
            .iter()
            .map(|&c| problem.add_var(c, (0.0, f64::INFINITY)))
            .collect();
        for (row, &b) in constraints.iter_rows().zip(rhs) {
            let expr: Vec<_> = vars.iter().copied().zip(row.iter().copied()).collect();
            problem.add_constraint(expr, ComparisonOp::Ge, b);
        }

        match problem.solve() {
            Ok(solution) => {
                debug!("microlp found objective value {}", solution.objective());
                SolveOutcome::Solution(vars.iter().map(|&v| *solution.var_value(v)).collect())
            }
            Err(err) => {
                warn!("microlp could not solve the problem: {err}");
                SolveOutcome::Failure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_a_dual_in_canonical_form() {
        // Minimize 4y1 + 12y2 + 18y3 subject to
        //   y1 + 3y3 >= 3
        //   2y2 + 2y3 >= 5
        //   y >= 0
        // Optimal at y = (0, 1.5, 1) with objective 36.
        let constraints =
            Matrix::from_flat(vec![1.0, 0.0, 3.0, 0.0, 2.0, 2.0], 2, 3).unwrap();
        let outcome = MicrolpSolver::new().solve(&[4.0, 12.0, 18.0], &constraints, &[3.0, 5.0]);
        match outcome {
            SolveOutcome::Solution(point) => {
                assert_eq!(point.len(), 3);
                assert!((point[0] - 0.0).abs() < 1e-6, "y1 = {}", point[0]);
                assert!((point[1] - 1.5).abs() < 1e-6, "y2 = {}", point[1]);
                assert!((point[2] - 1.0).abs() < 1e-6, "y3 = {}", point[2]);
            }
            SolveOutcome::Failure => panic!("expected a solution"),
        }
    }

    #[test]
    fn infeasible_problem_reports_failure() {
        // x >= 1 and -x >= 0 cannot both hold.
        let constraints = Matrix::from_flat(vec![1.0, -1.0], 2, 1).unwrap();
        let outcome = MicrolpSolver::new().solve(&[1.0], &constraints, &[1.0, 0.0]);
        assert_eq!(outcome, SolveOutcome::Failure);
    }

    #[test]
    fn unbounded_problem_reports_failure() {
        // Minimize -x with x unbounded above.
        let constraints = Matrix::from_flat(vec![1.0], 1, 1).unwrap();
        let outcome = MicrolpSolver::new().solve(&[-1.0], &constraints, &[0.0]);
        assert_eq!(outcome, SolveOutcome::Failure);
    }
}
