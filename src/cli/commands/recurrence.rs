use anyhow::Result;
use log::debug;

use crate::cli::ui;
use mathlab::{ parse_exact, Problem, ProblemGenerator, Session, Verdict, WizardStep };

/// What the learner asked for besides answering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    NewProblem,
    Quit,
}

/// Interactive recurrence exercise: roots, constants, then a final check of `a_2`
pub fn execute<G: ProblemGenerator>(session: &mut Session<G>) -> Result<()> {
    ui::print_header("Linear Recurrence Relations");
    ui::print_info("Type 'new' at any prompt for a new problem, or 'quit' to leave.");

    loop {
        show_problem(session.problem());
        match run_steps(session)? {
            Some(Flow::Quit) => break,
            Some(Flow::NewProblem) => {
                session.reset();
            }
            None => {
                if !ui::confirm_action("Generate a new problem?")? {
                    break;
                }
                session.reset();
            }
        }
    }
    Ok(())
}

/// Runs the remaining steps; `None` once the exercise is complete
fn run_steps<G: ProblemGenerator>(session: &mut Session<G>) -> Result<Option<Flow>> {
    loop {
        let flow = match session.step() {
            WizardStep::RootsPending => roots_step(session)?,
            WizardStep::ConstantsPending => constants_step(session)?,
            WizardStep::FinalPending => final_step(session)?,
            WizardStep::Complete => return Ok(None),
        };
        if flow.is_some() {
            return Ok(flow);
        }
    }
}

fn show_problem(problem: &Problem) {
    ui::print_header("Problem");
    ui::print_result("Solve", &problem.recurrence());
    ui::print_result("Initial Conditions", &problem.initial_conditions());
}

fn roots_step<G: ProblemGenerator>(session: &mut Session<G>) -> Result<Option<Flow>> {
    ui::print_header("Step 1: Characteristic Equation & Roots");
    ui::print_text(&format!("The characteristic equation is: {}", session.problem().characteristic_equation()));

    loop {
        let first = ui::prompt_text("Enter root r1")?;
        if let Some(flow) = flow_command(&first) {
            return Ok(Some(flow));
        }
        let second = ui::prompt_text("Enter root r2")?;
        if let Some(flow) = flow_command(&second) {
            return Ok(Some(flow));
        }

        let (r1, r2) = match (first.trim().parse::<i64>(), second.trim().parse::<i64>()) {
            (Ok(r1), Ok(r2)) => (r1, r2),
            _ => {
                ui::print_warning("Please enter whole numbers for both roots.");
                continue;
            }
        };

        if session.submit_roots(r1, r2)?.is_correct() {
            let (r1, r2) = session.problem().roots();
            ui::print_success(&format!("Correct! The roots are {} and {}.", r1, r2));
            return Ok(None);
        }
        ui::print_error("Incorrect roots. Factoring the quadratic: (r - r1)(r - r2) = 0.");
    }
}

fn constants_step<G: ProblemGenerator>(session: &mut Session<G>) -> Result<Option<Flow>> {
    let problem = *session.problem();
    ui::print_header("Step 2: Find Arbitrary Constants A and B");
    ui::print_text(
        &format!("General Solution: a_n = A({})^n + B({})^n", problem.r1(), problem.r2())
    );
    for equation in problem.constant_equations() {
        println!("  {}", equation);
    }
    ui::print_text("Enter values (you can use fractions like 20/3 or decimals like 6.66)");

    loop {
        let a = ui::prompt_text("Value of A")?;
        if let Some(flow) = flow_command(&a) {
            return Ok(Some(flow));
        }
        let b = ui::prompt_text("Value of B")?;
        if let Some(flow) = flow_command(&b) {
            return Ok(Some(flow));
        }

        match session.submit_constants(&a, &b)? {
            Verdict::Correct => {
                if let Some(constants) = session.revealed_constants() {
                    ui::print_success(
                        &format!("Correct! A = {} and B = {}", constants.a, constants.b)
                    );
                }
                return Ok(None);
            }
            Verdict::Incorrect => {
                ui::print_error("Try again. Hint: Set up your equations using the initial conditions.");
            }
            Verdict::ParseError(reason) => {
                debug!("Constants rejected: {}", reason);
                ui::print_warning("Please enter a valid number or fraction (e.g., 5, 6.66, or 20/3).");
            }
        }
    }
}

fn final_step<G: ProblemGenerator>(session: &mut Session<G>) -> Result<Option<Flow>> {
    let problem = *session.problem();
    ui::print_header("Step 3: Final Verification (n=2)");
    if let Some(a2) = session.revealed_verification_value() {
        ui::print_text(
            &format!(
                "Method 1 (Recurrence): a_2 = {}({}) + ({})({}) = {}",
                problem.s(),
                problem.a1(),
                problem.t(),
                problem.a0(),
                a2
            )
        );
    }

    loop {
        let answer = ui::prompt_text("Method 2: Calculate a_2 using your formula")?;
        if let Some(flow) = flow_command(&answer) {
            return Ok(Some(flow));
        }

        match session.submit_final_value(&answer)? {
            Verdict::Correct => {
                let a2 = session.revealed_verification_value().unwrap_or_default();
                ui::print_success(&format!("Verified! Both methods yield a_2 = {}.", a2));
                return Ok(None);
            }
            Verdict::Incorrect => {
                let a2 = session.revealed_verification_value().unwrap_or_default();
                ui::print_error(&mismatch_message(&answer, a2));
            }
            Verdict::ParseError(reason) => {
                debug!("Final value rejected: {}", reason);
                ui::print_error("Invalid entry. Please enter a numerical value.");
            }
        }
    }
}

/// The learner's value, reduced, next to the recurrence value
fn mismatch_message(answer: &str, a2: i64) -> String {
    let given = parse_exact(answer)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| answer.trim().to_string());
    format!("Mismatch! Formula gives {}, but Recurrence gives {}.", given, a2)
}

fn flow_command(input: &str) -> Option<Flow> {
    match input.trim().to_lowercase().as_str() {
        "new" => Some(Flow::NewProblem),
        "quit" | "exit" => Some(Flow::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{ flow_command, mismatch_message, Flow };

    #[test]
    fn test_mismatch_message_echoes_both_values() {
        assert_eq!(mismatch_message(" 18 ", 19), "Mismatch! Formula gives 18, but Recurrence gives 19.");
        assert_eq!(mismatch_message("40/6", 7), "Mismatch! Formula gives 20/3, but Recurrence gives 7.");
    }

    #[test]
    fn test_flow_commands() {
        assert_eq!(flow_command(" NEW "), Some(Flow::NewProblem));
        assert_eq!(flow_command("quit"), Some(Flow::Quit));
        assert_eq!(flow_command("19"), None);
    }
}
