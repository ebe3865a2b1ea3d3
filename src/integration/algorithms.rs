//! Integration rule variants.
//!
//! Provides the [`Rule`] enum, which enumerates all supported rules.

/// Integration rule variants.
/// - [`Rule::Trapezoid`]  : composite trapezoid rule
/// - [`Rule::Midpoint`]   : composite midpoint (rectangle) rule
/// - [`Rule::Simpson`]    : composite Simpson 1/3 rule
/// - [`Rule::MonteCarlo`] : mean-value Monte Carlo estimate
#[derive(Debug, Copy, Clone)]
pub enum Rule {
    Trapezoid,
    Midpoint,
    Simpson,
    MonteCarlo,
}

impl Rule {
    pub const fn rule_name(self) -> &'static str {
        match self {
            Rule::Trapezoid  => "trapezoid",
            Rule::Midpoint   => "midpoint",
            Rule::Simpson    => "simpson",
            Rule::MonteCarlo => "monte_carlo",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule_name())
    }
}
