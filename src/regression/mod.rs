// common helpers
pub mod errors;
pub mod report;

// algorithms
pub mod polynomial;
