use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::matrix::{Matrix, ShapeError};

/// A relation symbol outside `<=`, `=`, `>=`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid relation symbol: {0}")]
pub struct InvalidRelation(pub String);

/// The problem description does not fit together dimensionally, or a
/// relation symbol could not be parsed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("objective has {got} coefficients, expected {expected} (one per variable)")]
    ObjectiveLength { expected: usize, got: usize },
    #[error("rhs has {got} values, expected {expected} (one per constraint)")]
    RhsLength { expected: usize, got: usize },
    #[error("relations list has {got} entries, expected {expected} (one per constraint)")]
    RelationsLength { expected: usize, got: usize },
    #[error("candidate point has {got} entries, expected {expected} (one per variable)")]
    PointLength { expected: usize, got: usize },
    #[error(transparent)]
    InvalidRelation(#[from] InvalidRelation),
}

/// Comparison relation between a constraint row and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Relation {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

impl Relation {
    /// The relation taken on the dual side: <= and >= swap, = stays.
    /// Flipping twice returns the original relation.
    pub fn flipped(self) -> Relation {
        match self {
            Relation::Le => Relation::Ge,
            Relation::Ge => Relation::Le,
            Relation::Eq => Relation::Eq,
        }
    }
}

impl FromStr for Relation {
    type Err = InvalidRelation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<=" => Ok(Relation::Le),
            ">=" => Ok(Relation::Ge),
            "=" => Ok(Relation::Eq),
            other => Err(InvalidRelation(other.to_string())),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Le => write!(f, "<="),
            Relation::Ge => write!(f, ">="),
            Relation::Eq => write!(f, "="),
        }
    }
}

/// Optimization direction of a problem. The dual transform does not branch
/// on it; it is carried for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Maximize => Direction::Minimize,
            Direction::Minimize => Direction::Maximize,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" | "maximize" => Ok(Direction::Maximize),
            "min" | "minimize" => Ok(Direction::Minimize),
            other => Err(format!("invalid direction: {other} (expected max or min)")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Maximize => write!(f, "Maximize"),
            Direction::Minimize => write!(f, "Minimize"),
        }
    }
}

/// A linear program in primal form, validated at construction and immutable
/// afterwards: `direction` of `objective . x` subject to one relation per
/// constraint row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinearProgram {
    objective: Vec<f64>,
    constraints: Matrix,
    rhs: Vec<f64>,
    relations: Vec<Relation>,
    direction: Direction,
}

impl LinearProgram {
    /// Build a problem from its parts, checking every dimension invariant:
    /// the objective has one coefficient per matrix column, and rhs and
    /// relations have one entry per matrix row.
    pub fn new(
        objective: Vec<f64>,
        constraints: Matrix,
        rhs: Vec<f64>,
        relations: Vec<Relation>,
        direction: Direction,
    ) -> Result<Self, ProblemError> {
        if objective.len() != constraints.cols() {
            return Err(ProblemError::ObjectiveLength {
                expected: constraints.cols(),
                got: objective.len(),
            });
        }
        if rhs.len() != constraints.rows() {
            return Err(ProblemError::RhsLength {
                expected: constraints.rows(),
                got: rhs.len(),
            });
        }
        if relations.len() != constraints.rows() {
            return Err(ProblemError::RelationsLength {
                expected: constraints.rows(),
                got: relations.len(),
            });
        }
        Ok(Self {
            objective,
            constraints,
            rhs,
            relations,
            direction,
        })
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &Matrix {
        &self.constraints
    }

    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.rhs.len()
    }

    /// Check that a candidate point assigns one value to each variable.
    pub fn check_point(&self, point: &[f64]) -> Result<(), ProblemError> {
        if point.len() != self.num_variables() {
            return Err(ProblemError::PointLength {
                expected: self.num_variables(),
                got: point.len(),
            });
        }
        Ok(())
    }
}
