use log::debug;

use crate::numeric::{dot, is_close};
use crate::problem::{LinearProgram, Relation};

/// Check whether `point` satisfies every constraint of the primal problem.
///
/// Each row is evaluated as `dot(row, point) <relation> rhs`. Inequality
/// rows compare exactly; equality rows use the numeric closeness test. The
/// verdict is a conjunction over all rows and short-circuits on the first
/// violation, which cannot change the result.
///
/// The caller is expected to have validated the point length via
/// [`LinearProgram::check_point`].
pub fn is_feasible(lp: &LinearProgram, point: &[f64]) -> bool {
    for (i, row) in lp.constraints().iter_rows().enumerate() {
        let lhs = dot(row, point);
        let rhs = lp.rhs()[i];
        let relation = lp.relations()[i];
        let satisfied = match relation {
            Relation::Le => lhs <= rhs,
            Relation::Ge => lhs >= rhs,
            Relation::Eq => is_close(lhs, rhs),
        };
        if !satisfied {
            debug!("constraint {i} violated: {lhs} {relation} {rhs} does not hold");
            return false;
        }
    }
    true
}
