use log::debug;

use crate::dual::{to_dual, DualProgram};
use crate::feasibility::is_feasible;
use crate::optimality::{check_optimality, OptimalityReport};
use crate::problem::{LinearProgram, ProblemError};
use crate::solver::{DualSolver, SolveOutcome};

/// Terminal state of the verification pipeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// The candidate violates at least one primal constraint; the dual was
    /// never built.
    Infeasible,
    /// The external solver could not solve the dual; no optimality check.
    SolveFailed { dual: DualProgram },
    /// Both objective values were computed and compared.
    Checked {
        dual: DualProgram,
        dual_solution: Vec<f64>,
        report: OptimalityReport,
    },
}

/// Run the verification pipeline: feasibility gate, dual transform, external
/// solve, optimality check. Each stage consumes the previous stage's output;
/// infeasibility and solver failure are terminal outcomes, not errors, and
/// nothing is retried.
pub fn run(
    lp: &LinearProgram,
    candidate: &[f64],
    solver: &dyn DualSolver,
) -> Result<Outcome, ProblemError> {
    lp.check_point(candidate)?;

    if !is_feasible(lp, candidate) {
        debug!("candidate is infeasible, stopping before the dual transform");
        return Ok(Outcome::Infeasible);
    }

    let dual = to_dual(lp);
    debug!(
        "dual built: {} variables, {} constraints",
        dual.num_variables(),
        dual.num_constraints()
    );

    match solver.solve(&dual.objective, &dual.constraints, &dual.rhs) {
        SolveOutcome::Solution(dual_solution) => {
            let report = check_optimality(lp.objective(), candidate, lp.rhs(), &dual_solution);
            Ok(Outcome::Checked {
                dual,
                dual_solution,
                report,
            })
        }
        SolveOutcome::Failure => Ok(Outcome::SolveFailed { dual }),
    }
}
