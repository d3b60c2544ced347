use anyhow::Result;
use serde::Serialize;

use crate::cli::ui;
use mathlab::{ solve_constants, verification_value, Problem, ProblemGenerator, SolutionConstants };

/// Problem plus, when revealed, its ground truth
#[derive(Serialize)]
struct ProblemReport {
    problem: Problem,
    recurrence: String,
    characteristic_equation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    constants: Option<SolutionConstants>,
    #[serde(skip_serializing_if = "Option::is_none")]
    a2: Option<i64>,
}

/// Print a freshly generated problem, optionally with its solution
pub fn execute<G: ProblemGenerator>(generator: &mut G, reveal: bool, output_format: &str) -> Result<()> {
    let problem = generator.generate();
    let report = ProblemReport {
        problem,
        recurrence: problem.recurrence(),
        characteristic_equation: problem.characteristic_equation(),
        constants: reveal.then(|| solve_constants(&problem)),
        a2: reveal.then(|| verification_value(&problem)),
    };

    if output_format.eq_ignore_ascii_case("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    ui::print_header("Recurrence Problem");
    ui::print_result("Solve", &report.recurrence);
    ui::print_result("Initial Conditions", &problem.initial_conditions());
    ui::print_result("Characteristic Equation", &report.characteristic_equation);

    if let (Some(constants), Some(a2)) = (report.constants, report.a2) {
        ui::print_header("Solution");
        ui::print_result("Roots", &format!("{}, {}", problem.r1(), problem.r2()));
        ui::print_result("A", &constants.a.to_string());
        ui::print_result("B", &constants.b.to_string());
        ui::print_result("General Solution", &constants.general_solution(&problem));
        ui::print_result("a_2", &a2.to_string());
    }
    Ok(())
}
