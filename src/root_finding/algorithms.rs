//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported
//! methods, along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.

/// Practical safeguard against iteration counts that are mathematically
/// valid but computationally excessive. Applied when a bracket
/// algorithm's theoretical iteration bound would otherwise exceed it.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;

/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] : interval-shrinking methods
/// - [`Algorithm::Open`]    : iterate-stepping methods
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone)]
pub enum OpenFamily {
    Newton,
    Secant,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Values are heuristic and method-specific.
    /// - [`BracketFamily::Bisection`] returns `None`, meaning "compute
    ///   the theoretical bound instead", capped by
    ///   [`GLOBAL_MAX_ITER_FALLBACK`].
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => None,
            Algorithm::Open(OpenFamily::Secant)          => Some(100),
            Algorithm::Open(OpenFamily::Newton)          => Some(50),
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::Secant)          => "secant",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
