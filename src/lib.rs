//! # numera
//!
//! Numerical methods over in-memory `f64` data. Four independent topic
//! modules, each a set of pure single-call computations:
//!
//! - [`regression`]    : polynomial least-squares fitting with R²
//! - [`integration`]   : trapezoid, midpoint, Simpson, and Monte Carlo rules
//! - [`interpolation`] : piecewise-linear, Newton, and Hermite interpolation
//! - [`root_finding`]  : bisection, Newton-Raphson, and secant methods
//!
//! Plus [`metrics`] with absolute/relative error helpers.
//!
//! Every operation takes a builder-style configuration struct and returns
//! a report struct with the result and run metadata, or a typed error.
//! Nothing is persisted or shared across calls.

pub mod integration;
pub mod interpolation;
pub mod metrics;
pub mod regression;
pub mod root_finding;
