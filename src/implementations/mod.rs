pub mod expression;
pub mod generator;
pub mod solver;
pub mod checker;
pub mod session;
pub mod stats;
