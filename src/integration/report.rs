//! Defines the [`IntegrationReport`] struct returned by all rules.

use crate::integration::algorithms::Rule;

/// Summary of an integration run.
///
/// - `rule_name`   : integration rule (e.g. `"simpson"`)
/// - `value`       : the estimated integral
/// - `n`           : subdivision count for the quadrature rules, sample
///   count for Monte Carlo
/// - `evaluations` : total function evaluations performed
#[derive(Debug, Clone, Copy)]
pub struct IntegrationReport {
    pub rule_name: &'static str,
    pub value: f64,
    pub n: usize,
    pub evaluations: usize,
}

impl IntegrationReport {
    pub(crate) fn new(rule: Rule, value: f64, n: usize, evaluations: usize) -> Self {
        Self {
            rule_name: rule.rule_name(),
            value,
            n,
            evaluations,
        }
    }
}
