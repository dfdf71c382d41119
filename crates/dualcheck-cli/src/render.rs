use dualcheck_core::{Direction, DualProgram, LinearProgram, Matrix, Relation};

fn render_terms(coeffs: &[f64], var: char) -> String {
    let terms: Vec<String> = coeffs
        .iter()
        .enumerate()
        .map(|(j, a)| format!("{a}{var}{}", j + 1))
        .collect();
    terms.join(" + ")
}

fn render_problem(
    title: &str,
    direction: Direction,
    objective: &[f64],
    constraints: &Matrix,
    rhs: &[f64],
    relation_for_row: impl Fn(usize) -> Relation,
    var: char,
) -> String {
    let mut out = format!("{title}:\n");
    for (i, row) in constraints.iter_rows().enumerate() {
        out.push_str(&format!(
            "  {} {} {}\n",
            render_terms(row, var),
            relation_for_row(i),
            rhs[i]
        ));
    }
    out.push_str(&format!(
        "Objective: {direction} {}\n",
        render_terms(objective, var)
    ));
    out
}

pub fn render_primal(lp: &LinearProgram) -> String {
    render_problem(
        "Primal Problem",
        lp.direction(),
        lp.objective(),
        lp.constraints(),
        lp.rhs(),
        |i| lp.relations()[i],
        'x',
    )
}

pub fn render_dual(dual: &DualProgram) -> String {
    // The dual relation list is indexed by dual variable; rows beyond it
    // take the canonical >= form posed to the solver.
    render_problem(
        "Dual Problem",
        dual.direction,
        &dual.objective,
        &dual.constraints,
        &dual.rhs,
        |i| dual.relations.get(i).copied().unwrap_or(Relation::Ge),
        'y',
    )
}

pub fn render_point(point: &[f64]) -> String {
    let entries: Vec<String> = point.iter().map(|v| format!("{v}")).collect();
    format!("[{}]", entries.join(", "))
}
