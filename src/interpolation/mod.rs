// common helpers
pub mod algorithms;
pub mod errors;
pub mod report;
pub mod config;
pub(crate) mod table;

// algorithms
pub mod linear;
pub mod newton;
pub mod hermite;
