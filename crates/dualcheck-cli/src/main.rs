mod render;

use clap::Parser;
use serde::Serialize;

use dualcheck_core::{pipeline, Direction, LinearProgram, Matrix, Outcome, Relation};
use dualcheck_solver::MicrolpSolver;

#[derive(Parser)]
#[command(name = "dualcheck")]
#[command(about = "Verify a candidate LP solution against its dual", long_about = None)]
struct Cli {
    /// Objective function coefficients, one per variable
    #[arg(short = 'c', long, num_args = 1.., required = true, allow_negative_numbers = true)]
    objective: Vec<f64>,

    /// Constraint coefficients in row-major order
    #[arg(short = 'a', long, num_args = 1.., required = true, allow_negative_numbers = true)]
    constraints: Vec<f64>,

    /// Constraint right-hand side values, one per constraint
    #[arg(short = 'b', long, num_args = 1.., required = true, allow_negative_numbers = true)]
    rhs: Vec<f64>,

    /// Constraint relations (<=, = or >=), one per constraint
    #[arg(short = 'r', long, num_args = 1.., required = true)]
    relations: Vec<String>,

    /// Candidate solution to verify, one value per variable
    #[arg(short = 'x', long, num_args = 1.., required = true, allow_negative_numbers = true)]
    candidate: Vec<f64>,

    /// Optimization direction of the primal problem (max or min)
    #[arg(short = 'd', long, default_value = "max")]
    direction: String,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    format: String,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    primal: &'a LinearProgram,
    candidate: &'a [f64],
    outcome: &'a Outcome,
}

fn build_problem(cli: &Cli) -> Result<LinearProgram, String> {
    let num_vars = cli.objective.len();
    let num_constraints = cli.rhs.len();

    let direction: Direction = cli.direction.parse()?;
    let relations = cli
        .relations
        .iter()
        .map(|s| s.parse::<Relation>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    let matrix = Matrix::from_flat(cli.constraints.clone(), num_constraints, num_vars)
        .map_err(|e| e.to_string())?;

    LinearProgram::new(
        cli.objective.clone(),
        matrix,
        cli.rhs.clone(),
        relations,
        direction,
    )
    .map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let lp = match build_problem(&cli) {
        Ok(lp) => lp,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let solver = MicrolpSolver::new();
    let outcome = match pipeline::run(&lp, &cli.candidate, &solver) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.format == "json" {
        let output = JsonOutput {
            primal: &lp,
            candidate: &cli.candidate,
            outcome: &outcome,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        if !matches!(outcome, Outcome::Checked { .. }) {
            std::process::exit(1);
        }
        return;
    }

    print!("{}", render::render_primal(&lp));
    println!();

    match outcome {
        Outcome::Infeasible => {
            println!(
                "The candidate {} is not feasible for the primal problem.",
                render::render_point(&cli.candidate)
            );
            std::process::exit(1);
        }
        Outcome::SolveFailed { dual } => {
            println!(
                "The candidate {} is feasible for the primal problem.",
                render::render_point(&cli.candidate)
            );
            println!();
            print!("{}", render::render_dual(&dual));
            println!();
            println!("The dual problem could not be solved.");
            std::process::exit(1);
        }
        Outcome::Checked {
            dual,
            dual_solution,
            report,
        } => {
            println!(
                "The candidate {} is feasible for the primal problem.",
                render::render_point(&cli.candidate)
            );
            println!();
            print!("{}", render::render_dual(&dual));
            println!();
            println!("Dual solution: {}", render::render_point(&dual_solution));
            println!();
            if report.is_optimal {
                println!(
                    "The primal and dual solutions are optimal with an objective value of {}.",
                    report.primal_objective
                );
            } else {
                println!(
                    "The primal and dual solutions are not optimal. \
                     Primal objective value: {}, dual objective value: {}.",
                    report.primal_objective, report.dual_objective
                );
                std::process::exit(1);
            }
        }
    }
}
