use crate::numeric::{dot, is_close};

/// Outcome of the strong-duality check: at optimality the primal and dual
/// objective values coincide (up to tolerance); weak duality alone only
/// bounds one by the other.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimalityReport {
    pub is_optimal: bool,
    pub primal_objective: f64,
    pub dual_objective: f64,
}

/// Compare the primal objective at `primal_point` against the dual objective
/// at `dual_point`. `objective` are the primal objective coefficients and
/// `rhs` the primal right-hand sides (= the dual objective coefficients).
pub fn check_optimality(
    objective: &[f64],
    primal_point: &[f64],
    rhs: &[f64],
    dual_point: &[f64],
) -> OptimalityReport {
    let primal_objective = dot(objective, primal_point);
    let dual_objective = dot(rhs, dual_point);
    OptimalityReport {
        is_optimal: is_close(primal_objective, dual_objective),
        primal_objective,
        dual_objective,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_objectives_certify_optimality() {
        // Primal: 3*2 + 5*6 = 36; dual: 4*0 + 12*1.5 + 18*1 = 36.
        let report = check_optimality(
            &[3.0, 5.0],
            &[2.0, 6.0],
            &[4.0, 12.0, 18.0],
            &[0.0, 1.5, 1.0],
        );
        assert!(report.is_optimal);
        assert_eq!(report.primal_objective, 36.0);
        assert_eq!(report.dual_objective, 36.0);
    }

    #[test]
    fn objective_gap_is_reported_as_suboptimal() {
        // Feasible but suboptimal primal point (0, 0): gap of 36.
        let report = check_optimality(
            &[3.0, 5.0],
            &[0.0, 0.0],
            &[4.0, 12.0, 18.0],
            &[0.0, 1.5, 1.0],
        );
        assert!(!report.is_optimal);
        assert_eq!(report.primal_objective, 0.0);
        assert_eq!(report.dual_objective, 36.0);
    }

    #[test]
    fn tiny_numerical_gap_still_counts_as_optimal() {
        let report = check_optimality(&[1.0], &[36.0], &[1.0], &[36.0 + 1e-7]);
        assert!(report.is_optimal);
    }
}
