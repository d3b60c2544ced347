use serde::Serialize;

/// Ordered numbers parsed from one input string
pub type NumberSeries = Vec<f64>;

/// Descriptive statistics of a number series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub values: Vec<f64>,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (divides by N)
    pub std_dev: f64,
    pub table: DescribeTable,
}

/// The count/mean/std/min/quartiles/max table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescribeTable {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl DescribeTable {
    /// Rows as label/value pairs, in display order
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max)
        ]
    }
}
