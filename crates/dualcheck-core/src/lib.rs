pub mod dual;
pub mod feasibility;
pub mod matrix;
pub mod numeric;
pub mod optimality;
pub mod pipeline;
pub mod problem;
pub mod solver;

pub use dual::{to_dual, DualProgram};
pub use feasibility::is_feasible;
pub use matrix::{Matrix, ShapeError};
pub use optimality::{check_optimality, OptimalityReport};
pub use pipeline::{run, Outcome};
pub use problem::{Direction, InvalidRelation, LinearProgram, ProblemError, Relation};
pub use solver::{DualSolver, SolveOutcome};
