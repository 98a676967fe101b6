pub mod supervisor;

use std::io::{Stderr, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};

pub use supervisor::{CycleReport, Supervisor};

use crate::construct::AssignmentConstructor;
use crate::csp::{Assignment, CspValue, Problem};
use crate::error::{AcoError, ColonyError, ParameterError, SelectorError};
use crate::pheromone::PheromoneMatrix;
use crate::propagate::CspPropagator;
use crate::select::{ValueSelector, VariableSelector};

/// A validated, immutable ACO parameter record. Constructed only through `new`/`defaults`,
/// which reject invalid fields rather than letting a caller build an inconsistent colony.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ACOParameters {
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub tau_min: f64,
    pub tau_max: f64,
    pub ant_count: usize,
}

impl ACOParameters {
    pub fn new(
        alpha: f64,
        beta: f64,
        rho: f64,
        tau_min: f64,
        tau_max: f64,
        ant_count: usize,
    ) -> Result<Self, ParameterError> {
        if alpha < 0.0 {
            return Err(ParameterError::NegativeAlpha(alpha));
        }
        if beta < 0.0 {
            return Err(ParameterError::NegativeBeta(beta));
        }
        if !(0.0..=1.0).contains(&rho) {
            return Err(ParameterError::InvalidRho(rho));
        }
        if tau_min <= 0.0 {
            return Err(ParameterError::NonPositiveTauMin(tau_min));
        }
        if tau_max <= tau_min {
            return Err(ParameterError::TauMaxNotGreaterThanTauMin { tau_min, tau_max });
        }
        if ant_count == 0 {
            return Err(ParameterError::ZeroAntCount);
        }

        Ok(Self {
            alpha,
            beta,
            rho,
            tau_min,
            tau_max,
            ant_count,
        })
    }

    /// Recommended defaults for pure-pheromone CSP mode (alpha=2.0, beta=0.0, rho=0.01,
    /// tau_min=0.01, tau_max=10.0, 30 ants). An inherent constructor rather than a `Default`
    /// impl, since `Default::default()` would otherwise have to silently imply `ant_count: 0`,
    /// which this type must never allow to construct.
    pub fn defaults() -> Self {
        Self::new(2.0, 0.0, 0.01, 0.01, 10.0, 30).expect("recommended defaults are always valid")
    }
}

/// Drives the outer loop: a cycle of `ant_count` construction walks followed by the MMAS
/// pheromone update, repeated until a solution is found or `max_cycles` is exhausted.
///
/// `W` is the `Write` target the supervisor serializes `CycleReport`s to; `Colony::create`
/// defaults it to stderr via `Supervisor`'s own `Default` impl.
pub struct Colony<V: CspValue, W: Write> {
    params: ACOParameters,
    pheromones: PheromoneMatrix<V>,
    best: Option<Assignment<V>>,
    complete_only: bool,
    pub supervisor: Supervisor<W>,
}

impl<V: CspValue> Colony<V, Stderr> {
    /// Builds the pheromone matrix at tau_max and reports cycle progress to stderr.
    pub fn create(problem: &Problem<V>, params: ACOParameters) -> Result<Self, AcoError> {
        Self::create_with_supervisor(problem, params, Supervisor::default())
    }
}

impl<V: CspValue, W: Write> Colony<V, W> {
    pub fn create_with_supervisor(
        problem: &Problem<V>,
        params: ACOParameters,
        supervisor: Supervisor<W>,
    ) -> Result<Self, AcoError> {
        let pheromones = PheromoneMatrix::initialize(problem, params.tau_max)?;
        Ok(Self {
            params,
            pheromones,
            best: None,
            complete_only: false,
            supervisor,
        })
    }

    /// When `true`, restricts best-of-cycle to complete assignments only. Defaults to `false`
    /// (all non-empty assignments are eligible).
    pub fn with_complete_only(mut self, complete_only: bool) -> Self {
        self.complete_only = complete_only;
        self
    }

    pub fn parameters(&self) -> &ACOParameters {
        &self.params
    }

    pub fn pheromones(&self) -> &PheromoneMatrix<V> {
        &self.pheromones
    }

    pub fn best_assignment(&self) -> Option<&Assignment<V>> {
        self.best.as_ref()
    }

    /// Runs cycles until a solution is found or `max_cycles` is exhausted, then returns the
    /// best assignment ever seen (possibly partial, possibly none if the very first cycle
    /// somehow produced nothing — `Assignment::new()` in that case).
    pub fn solve<VS, ZS, P>(
        &mut self,
        problem: &Problem<V>,
        constructor: &mut AssignmentConstructor<V, VS, ZS, P>,
        max_cycles: usize,
    ) -> Result<Assignment<V>, AcoError>
    where
        VS: VariableSelector<V>,
        ZS: ValueSelector<V>,
        P: CspPropagator<V>,
    {
        self.solve_with_stop(problem, constructor, max_cycles, None)
    }

    /// As `solve`, but checks `stop` at every cycle boundary (never mid-ant) and halts early
    /// if it is set, per the colony's "robust implementations SHOULD accept a stop signal"
    /// recommendation.
    pub fn solve_with_stop<VS, ZS, P>(
        &mut self,
        problem: &Problem<V>,
        constructor: &mut AssignmentConstructor<V, VS, ZS, P>,
        max_cycles: usize,
        stop: Option<&AtomicBool>,
    ) -> Result<Assignment<V>, AcoError>
    where
        VS: VariableSelector<V>,
        ZS: ValueSelector<V>,
        P: CspPropagator<V>,
    {
        for cycle in 0..max_cycles {
            if let Some(flag) = stop {
                if flag.load(Ordering::Relaxed) {
                    break;
                }
            }

            let report = self.run_cycle(cycle, problem, constructor)?;
            self.supervisor.record(report);

            if let Some(best) = &self.best {
                if problem.is_solution(best) {
                    return Ok(best.clone());
                }
            }
        }

        Ok(self.best.clone().unwrap_or_else(Assignment::new))
    }

    /// One cycle: `ant_count` construction walks, then `evaporate -> deposit -> clamp`. The
    /// order is mandatory (clamping before deposit would defeat best-of-cycle reinforcement;
    /// clamping after evaporate would be wasted work on values deposit is about to raise).
    ///
    /// A construction walk's weight-degeneracy error (`SelectorError::AllWeightsZero`) is not
    /// absorbed here like a search failure would be; it aborts the cycle and surfaces to the
    /// caller of `solve`/`solve_with_stop`.
    fn run_cycle<VS, ZS, P>(
        &mut self,
        cycle: usize,
        problem: &Problem<V>,
        constructor: &mut AssignmentConstructor<V, VS, ZS, P>,
    ) -> Result<CycleReport, AcoError>
    where
        VS: VariableSelector<V>,
        ZS: ValueSelector<V>,
        P: CspPropagator<V>,
    {
        let start = Instant::now();

        let assignments: Vec<Assignment<V>> = (0..self.params.ant_count)
            .map(|_| constructor.construct(problem, &self.pheromones, &self.params))
            .collect::<Result<Vec<_>, SelectorError>>()?;

        for assignment in &assignments {
            let size = assignment.size();
            if size == 0 {
                continue;
            }
            let improves_or_ties = match &self.best {
                None => true,
                Some(best) => size >= best.size(),
            };
            if improves_or_ties {
                self.best = Some(assignment.snapshot());
            }
        }

        self.pheromones.evaporate(self.params.rho)?;

        let eligible: Vec<&Assignment<V>> = assignments
            .iter()
            .filter(|a| a.size() > 0)
            .filter(|a| !self.complete_only || a.is_complete(problem.variables().len()))
            .collect();
        let best_of_cycle_size = eligible.iter().map(|a| a.size()).max().unwrap_or(0);

        if best_of_cycle_size > 0 {
            let best_size = self.best.as_ref().map(|b| b.size()).unwrap_or(best_of_cycle_size);
            let boc = eligible.into_iter().filter(|a| a.size() == best_of_cycle_size);
            for assignment in boc {
                if assignment.size() > best_size {
                    return Err(ColonyError::BestGapAnomaly {
                        best_size,
                        found_size: assignment.size(),
                    }
                    .into());
                }
                let delta = 1.0 / (1.0 + (best_size - assignment.size()) as f64);
                self.pheromones.deposit(assignment, delta)?;
            }
        }

        self.pheromones
            .clamp(self.params.tau_min, self.params.tau_max)?;

        Ok(CycleReport {
            cycle,
            ants_run: assignments.len(),
            best_of_cycle_size,
            running_best_size: self.best.as_ref().map(|b| b.size()).unwrap_or(0),
            elapsed: start.elapsed(),
        })
    }
}
