use crate::matrix::Matrix;
use crate::problem::{Direction, LinearProgram, Relation};

/// The dual of a primal [`LinearProgram`], with one dual variable per primal
/// constraint and one dual constraint per primal variable.
///
/// `relations` holds the flipped primal relations and is indexed by dual
/// variable (= primal constraint), not by dual constraint row; in the
/// canonical primal-max form every entry is `>=` and the distinction is
/// invisible.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DualProgram {
    /// Dual objective coefficients: the primal rhs.
    pub objective: Vec<f64>,
    /// Dual constraint matrix: the transposed primal matrix.
    pub constraints: Matrix,
    /// Dual rhs: the primal objective coefficients.
    pub rhs: Vec<f64>,
    /// Flipped primal relations, one per dual variable.
    pub relations: Vec<Relation>,
    /// Opposite of the primal direction.
    pub direction: Direction,
}

impl DualProgram {
    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.rhs.len()
    }
}

/// Derive the dual problem: objective and rhs swap, the matrix transposes,
/// each relation flips (<= to >=, >= to <=, = stays), and the direction
/// reverses. Index correspondence is preserved: primal constraint i becomes
/// dual variable i.
pub fn to_dual(lp: &LinearProgram) -> DualProgram {
    DualProgram {
        objective: lp.rhs().to_vec(),
        constraints: lp.constraints().transposed(),
        rhs: lp.objective().to_vec(),
        relations: lp.relations().iter().map(|r| r.flipped()).collect(),
        direction: lp.direction().opposite(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wyndor() -> LinearProgram {
        // Maximize 3x1 + 5x2 subject to
        //   x1        <= 4
        //        2x2  <= 12
        //   3x1 + 2x2 <= 18
        let m = Matrix::from_flat(vec![1.0, 0.0, 0.0, 2.0, 3.0, 2.0], 3, 2).unwrap();
        LinearProgram::new(
            vec![3.0, 5.0],
            m,
            vec![4.0, 12.0, 18.0],
            vec![Relation::Le, Relation::Le, Relation::Le],
            Direction::Maximize,
        )
        .unwrap()
    }

    #[test]
    fn dual_swaps_objective_and_rhs() {
        let dual = to_dual(&wyndor());
        assert_eq!(dual.objective, vec![4.0, 12.0, 18.0]);
        assert_eq!(dual.rhs, vec![3.0, 5.0]);
        assert_eq!(dual.num_variables(), 3);
        assert_eq!(dual.num_constraints(), 2);
    }

    #[test]
    fn dual_matrix_is_the_transpose() {
        let dual = to_dual(&wyndor());
        assert_eq!(dual.constraints.rows(), 2);
        assert_eq!(dual.constraints.cols(), 3);
        assert_eq!(dual.constraints.row(0), &[1.0, 0.0, 3.0]);
        assert_eq!(dual.constraints.row(1), &[0.0, 2.0, 2.0]);
    }

    #[test]
    fn dual_flips_relations_and_direction() {
        let dual = to_dual(&wyndor());
        assert_eq!(
            dual.relations,
            vec![Relation::Ge, Relation::Ge, Relation::Ge]
        );
        assert_eq!(dual.direction, Direction::Minimize);
    }

    #[test]
    fn equality_rows_stay_equalities() {
        let m = Matrix::from_flat(vec![1.0, 1.0, 2.0, -1.0], 2, 2).unwrap();
        let lp = LinearProgram::new(
            vec![1.0, 4.0],
            m,
            vec![5.0, 3.0],
            vec![Relation::Eq, Relation::Ge],
            Direction::Minimize,
        )
        .unwrap();
        let dual = to_dual(&lp);
        assert_eq!(dual.relations, vec![Relation::Eq, Relation::Le]);
        assert_eq!(dual.direction, Direction::Maximize);
    }

    #[test]
    fn transposing_the_dual_matrix_restores_the_primal_matrix() {
        let lp = wyndor();
        let dual = to_dual(&lp);
        assert_eq!(&dual.constraints.transposed(), lp.constraints());
    }
}
