pub mod problem;
pub mod recurrence;
pub mod stats;
