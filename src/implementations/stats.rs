//! Descriptive statistics for the statistics lab.
//!
//! Standard deviation uses the population convention (divide by N) both in
//! the headline value and in the describe table. Quartiles use linear
//! interpolation between closest ranks (R-7).

use log::{ debug, warn };

use crate::errors::{ LabError, LabResult };
use crate::models::summary::{ DescribeTable, NumberSeries, Summary };

/// Parse comma-separated numbers; every token must be a finite number
pub fn parse_series(text: &str) -> LabResult<NumberSeries> {
    if text.trim().is_empty() {
        return Err(LabError::Parse("no numbers entered".to_string()));
    }
    text.split(',')
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => {
                    warn!("Rejected token {} of stats input: {:?}", i + 1, token);
                    Err(LabError::Parse(format!("'{}' is not a number", token)))
                }
            }
        })
        .collect()
}

/// Summarize the numbers in `text`
pub fn summarize(text: &str) -> LabResult<Summary> {
    let values = parse_series(text)?;
    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = mean(&values);
    let std_dev = population_std_dev(&values, mean);
    if !(mean.is_finite() && std_dev.is_finite()) {
        warn!("Stats input too large to summarize: mean={} sd={}", mean, std_dev);
        return Err(LabError::Parse("numbers are too large to summarize".to_string()));
    }
    let median = quantile_sorted(&sorted, 0.5);
    debug!("Summarized {} values: mean={} median={} sd={}", count, mean, median, std_dev);

    let table = DescribeTable {
        count,
        mean,
        std: std_dev,
        min: sorted[0],
        q25: quantile_sorted(&sorted, 0.25),
        q50: median,
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted[count - 1],
    };

    Ok(Summary { values, count, mean, median, std_dev, table })
}

/// Round half away from zero to `places` decimals, for display
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Divides before summing so values near `f64::MAX` do not overflow
fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    values.iter().map(|x| x / n).sum()
}

fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    // scale by the largest deviation so squaring stays finite
    let scale = values.iter().fold(0.0_f64, |acc, x| acc.max((x - mean).abs()));
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    let sum_sq: f64 = values
        .iter()
        .map(|x| ((x - mean) / scale).powi(2))
        .sum();
    scale * (sum_sq / (values.len() as f64)).sqrt()
}

/// `p`-th quantile of non-empty sorted data: `h = (n-1)p`, interpolate between `x[h]` and `x[h+1]`.
/// The median is the `p = 0.5` case, which averages the two middle values for even `n`.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let h = ((n - 1) as f64) * p;
    let j = h.floor() as usize;
    let g = h - h.floor();
    if j + 1 >= n {
        sorted[n - 1]
    } else {
        (1.0 - g) * sorted[j] + g * sorted[j + 1]
    }
}
