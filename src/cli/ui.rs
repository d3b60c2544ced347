use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Input };
use textwrap::wrap;

use mathlab::models::summary::DescribeTable;

/// Widest bar drawn by `print_bar_chart`
const CHART_WIDTH: usize = 40;

/// Rows drawn by `print_line_chart`
const LINE_CHART_HEIGHT: usize = 8;

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = (Term::stdout().size().1 as usize).max(20);
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(4)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print the describe table, one statistic per row
pub fn print_describe_table(table: &DescribeTable) {
    for (label, value) in table.rows() {
        println!("  {:<6} {:>12.4}", label.bold(), value);
    }
}

/// Horizontal bar per value, scaled to the largest magnitude
pub fn print_bar_chart(values: &[f64]) {
    let largest = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    for (i, value) in values.iter().enumerate() {
        let len = if largest > 0.0 {
            ((value.abs() / largest) * (CHART_WIDTH as f64)).round() as usize
        } else {
            0
        };
        let bar = "#".repeat(len);
        let bar = if *value < 0.0 { bar.red() } else { bar.cyan() };
        println!("  {:>3} | {} {}", i, bar, value);
    }
}

/// Values in input order, one column each, scaled between the smallest and largest value
pub fn print_line_chart(values: &[f64]) {
    if values.is_empty() {
        return;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let levels = line_chart_levels(values, LINE_CHART_HEIGHT);
    let top = LINE_CHART_HEIGHT - 1;

    for row in (0..LINE_CHART_HEIGHT).rev() {
        let label = match row {
            r if r == top => format!("{:>10.2}", max),
            0 => format!("{:>10.2}", min),
            _ => String::new(),
        };
        let points: String = levels
            .iter()
            .map(|&level| if level == row { " *" } else { "  " })
            .collect();
        println!("  {:>10} |{}", label, points.cyan());
    }
    println!("  {:>10} +{}", "", "-".repeat(levels.len() * 2));
}

/// Row of each value in a chart `height` rows tall; flat series sit on row 0
fn line_chart_levels(values: &[f64], height: usize) -> Vec<usize> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let top = height.saturating_sub(1) as f64;
    values
        .iter()
        .map(|v| {
            if span > 0.0 && span.is_finite() {
                (((v - min) / span) * top).round() as usize
            } else {
                0
            }
        })
        .collect()
}

/// Ask for a line of text
pub fn prompt_text(prompt: &str) -> std::io::Result<String> {
    Input::<String>::with_theme(&get_theme())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Ask for a line of text, pre-filled with `default`
pub fn prompt_text_with_default(prompt: &str, default: &str) -> std::io::Result<String> {
    Input::<String>::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::line_chart_levels;

    #[test]
    fn test_line_chart_levels_span_the_height() {
        assert_eq!(line_chart_levels(&[175.0, 172.0, 165.0], 8), vec![7, 5, 0]);
        assert_eq!(line_chart_levels(&[-1.0, 0.0, 1.0], 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_line_chart_levels_flat_series() {
        assert_eq!(line_chart_levels(&[4.0, 4.0], 8), vec![0, 0]);
        assert_eq!(line_chart_levels(&[2.5], 8), vec![0]);
        assert!(line_chart_levels(&[], 8).is_empty());
    }
}
