pub mod chudnovsky;
pub mod config;
pub mod errors;
pub mod numeric;
pub mod report;
pub mod runner;
pub mod utils;
