// common helpers
pub mod algorithms;
pub mod errors;
pub mod report;
pub mod config;

// rules
pub mod trapezoid;
pub mod midpoint;
pub mod simpson;
pub mod monte_carlo;
