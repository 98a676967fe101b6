use std::error::Error;
use std::fmt;

use crate::csp::VarId;

/// Problems at `Problem`/`Variable`/`Assignment` construction time.
#[derive(Debug, PartialEq)]
pub enum CspError {
    NoVariables,
    EmptyDomain(String),
    DuplicateVariableName(String),
}

/// Invariant violations raised by `PheromoneMatrix`.
#[derive(Debug, PartialEq)]
pub enum PheromoneError {
    NonPositiveTauMax(f64),
    EmptyDomain(VarId),
    InvalidRho(f64),
    NonPositiveDelta(f64),
    InvalidClampBounds { tau_min: f64, tau_max: f64 },
    MissingTrail(VarId),
}

/// `ACOParameters` validation failures (see the bit-exact table in the engine docs).
#[derive(Debug, PartialEq)]
pub enum ParameterError {
    NegativeAlpha(f64),
    NegativeBeta(f64),
    InvalidRho(f64),
    NonPositiveTauMin(f64),
    TauMaxNotGreaterThanTauMin { tau_min: f64, tau_max: f64 },
    ZeroAntCount,
}

/// Weight-degeneracy error from the roulette-wheel value selector.
#[derive(Debug, PartialEq)]
pub enum SelectorError {
    AllWeightsZero,
}

/// Logic-bug-only errors raised by the colony loop.
#[derive(Debug, PartialEq)]
pub enum ColonyError {
    BestGapAnomaly { best_size: usize, found_size: usize },
}

/// Crate-wide error, composing every fatal error category.
///
/// Search failures (domain wipeout, no candidate) are never represented here:
/// the constructor absorbs them locally and returns a partial assignment instead.
#[derive(Debug, PartialEq)]
pub enum AcoError {
    Csp(CspError),
    Pheromone(PheromoneError),
    Parameter(ParameterError),
    Selector(SelectorError),
    Colony(ColonyError),
}

impl From<CspError> for AcoError {
    fn from(error: CspError) -> Self {
        AcoError::Csp(error)
    }
}

impl From<PheromoneError> for AcoError {
    fn from(error: PheromoneError) -> Self {
        AcoError::Pheromone(error)
    }
}

impl From<ParameterError> for AcoError {
    fn from(error: ParameterError) -> Self {
        AcoError::Parameter(error)
    }
}

impl From<SelectorError> for AcoError {
    fn from(error: SelectorError) -> Self {
        AcoError::Selector(error)
    }
}

impl From<ColonyError> for AcoError {
    fn from(error: ColonyError) -> Self {
        AcoError::Colony(error)
    }
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csp(CspError::NoVariables) => write!(f, "problem has no variables"),
            Self::Csp(CspError::EmptyDomain(name)) => {
                write!(f, "variable '{}' has an empty domain", name)
            }
            Self::Csp(CspError::DuplicateVariableName(name)) => {
                write!(f, "duplicate variable name '{}'", name)
            }
            Self::Pheromone(PheromoneError::NonPositiveTauMax(tau_max)) => {
                write!(f, "tau_max must be positive, got {}", tau_max)
            }
            Self::Pheromone(PheromoneError::EmptyDomain(var)) => {
                write!(f, "variable {:?} has an empty domain", var)
            }
            Self::Pheromone(PheromoneError::InvalidRho(rho)) => {
                write!(f, "rho must be in [0, 1], got {}", rho)
            }
            Self::Pheromone(PheromoneError::NonPositiveDelta(delta)) => {
                write!(f, "deposit delta must be positive, got {}", delta)
            }
            Self::Pheromone(PheromoneError::InvalidClampBounds { tau_min, tau_max }) => write!(
                f,
                "invalid clamp bounds: tau_min {} must be in [0, tau_max {}]",
                tau_min, tau_max
            ),
            Self::Pheromone(PheromoneError::MissingTrail(var)) => write!(
                f,
                "attempted to deposit on {:?}, which has no registered trail",
                var
            ),
            Self::Parameter(ParameterError::NegativeAlpha(alpha)) => {
                write!(f, "alpha must be >= 0, got {}", alpha)
            }
            Self::Parameter(ParameterError::NegativeBeta(beta)) => {
                write!(f, "beta must be >= 0, got {}", beta)
            }
            Self::Parameter(ParameterError::InvalidRho(rho)) => {
                write!(f, "rho must be in [0, 1], got {}", rho)
            }
            Self::Parameter(ParameterError::NonPositiveTauMin(tau_min)) => {
                write!(f, "tau_min must be positive, got {}", tau_min)
            }
            Self::Parameter(ParameterError::TauMaxNotGreaterThanTauMin { tau_min, tau_max }) => {
                write!(
                    f,
                    "tau_max {} must be greater than tau_min {}",
                    tau_max, tau_min
                )
            }
            Self::Parameter(ParameterError::ZeroAntCount) => {
                write!(f, "ant count must be at least 1")
            }
            Self::Selector(SelectorError::AllWeightsZero) => {
                write!(f, "roulette selection weights summed to zero")
            }
            Self::Colony(ColonyError::BestGapAnomaly {
                best_size,
                found_size,
            }) => write!(
                f,
                "assignment of size {} exceeds running best of size {}",
                found_size, best_size
            ),
        }
    }
}

impl Error for AcoError {}
