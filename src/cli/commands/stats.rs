use anyhow::Result;
use log::info;

use crate::cli::ui;
use mathlab::models::summary::Summary;
use mathlab::{ round_to, summarize, LabError };

const DEFAULT_DATA: &str = "175, 172, 165";

/// Descriptive statistics command
pub fn execute(data: Option<&str>, output_format: &str) -> Result<()> {
    let summary = match data {
        Some(text) => summarize(text).map_err(|e| {
            ui::print_error("Please ensure you only enter numbers and commas.");
            e
        })?,
        None => prompt_until_valid()?,
    };
    info!("Summarized {} values", summary.count);

    if output_format.eq_ignore_ascii_case("json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&summary);
    Ok(())
}

fn prompt_until_valid() -> Result<Summary> {
    ui::print_header("Descriptive Statistics Lab");
    ui::print_text("Enter numbers separated by commas to see the math in action.");
    loop {
        let text = ui::prompt_text_with_default("Input Data (e.g., 175, 172, 165)", DEFAULT_DATA)?;
        match summarize(&text) {
            Ok(summary) => return Ok(summary),
            Err(LabError::Parse(reason)) => {
                ui::print_error("Please ensure you only enter numbers and commas.");
                ui::print_info(&reason);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn print_summary(summary: &Summary) {
    ui::print_header("Statistics");
    ui::print_result("Mean", &round_to(summary.mean, 2).to_string());
    ui::print_result("Median", &summary.median.to_string());
    ui::print_result("SD", &round_to(summary.std_dev, 2).to_string());

    ui::print_header("Raw Data Summary");
    ui::print_describe_table(&summary.table);

    ui::print_header("Visualizations");
    ui::print_bar_chart(&summary.values);
    println!();
    ui::print_line_chart(&summary.values);
}
