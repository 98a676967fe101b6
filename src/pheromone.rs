use std::collections::HashMap;

use crate::csp::{Assignment, CspValue, Problem, VarId};
use crate::error::PheromoneError;

/// Per-(variable, value) pheromone strengths, stored as a flat contiguous array with a
/// `(variable, value) -> index` map built once at `initialize`. The flat layout keeps
/// `evaporate`/`clamp` a single linear sweep rather than a walk over a keyed map, and gives
/// `get`/`deposit` an O(1) lookup.
pub struct PheromoneMatrix<V: CspValue> {
    trails: Vec<f64>,
    index: HashMap<(VarId, V), usize>,
}

impl<V: CspValue> PheromoneMatrix<V> {
    /// Builds one trail per `(variable, value)` pair in `problem`, each initialized to
    /// `tau_max`. Requires `tau_max > 0` and every variable to have a non-empty domain
    /// (the latter is already guaranteed by `Variable::new`, but is re-checked here since a
    /// matrix must never be built with a silently-missing trail).
    pub fn initialize(problem: &Problem<V>, tau_max: f64) -> Result<Self, PheromoneError> {
        if tau_max <= 0.0 {
            return Err(PheromoneError::NonPositiveTauMax(tau_max));
        }

        let mut index = HashMap::new();
        let mut trails = Vec::new();
        for var in problem.variable_ids() {
            let domain = problem.variable(var).domain();
            if domain.is_empty() {
                return Err(PheromoneError::EmptyDomain(var));
            }
            for value in domain {
                index.insert((var, value.clone()), trails.len());
                trails.push(tau_max);
            }
        }

        Ok(Self { trails, index })
    }

    /// Returns `0.0` for a pair that was never registered; otherwise the stored trail.
    pub fn get(&self, var: VarId, value: &V) -> f64 {
        self.index
            .get(&(var, value.clone()))
            .map(|&i| self.trails[i])
            .unwrap_or(0.0)
    }

    pub fn trail_count(&self) -> usize {
        self.trails.len()
    }

    /// Multiplies every trail by `1 - rho`. Requires `rho` in `[0, 1]`.
    pub fn evaporate(&mut self, rho: f64) -> Result<(), PheromoneError> {
        if !(0.0..=1.0).contains(&rho) {
            return Err(PheromoneError::InvalidRho(rho));
        }

        let retained = 1.0 - rho;
        for tau in self.trails.iter_mut() {
            *tau *= retained;
        }
        Ok(())
    }

    /// Adds `delta` to the trail of every assigned `(variable, value)` pair in `assignment`.
    /// Unassigned variables are skipped. Requires `delta > 0`. A `(variable, value)` pair
    /// that is not registered in the matrix is a programmer error (the value did not come
    /// from the variable's domain at `initialize` time), not something to silently ignore.
    pub fn deposit(&mut self, assignment: &Assignment<V>, delta: f64) -> Result<(), PheromoneError> {
        if delta <= 0.0 {
            return Err(PheromoneError::NonPositiveDelta(delta));
        }

        for (var, value) in assignment.iter() {
            let &i = self
                .index
                .get(&(var, value.clone()))
                .ok_or(PheromoneError::MissingTrail(var))?;
            self.trails[i] += delta;
        }
        Ok(())
    }

    /// Applies `deposit` for every assignment, using a per-assignment amount computed by
    /// `delta_of`. Contributions from different assignments on the same trail are additive.
    pub fn deposit_multiple(
        &mut self,
        assignments: &[Assignment<V>],
        delta_of: impl Fn(&Assignment<V>) -> f64,
    ) -> Result<(), PheromoneError> {
        for assignment in assignments {
            self.deposit(assignment, delta_of(assignment))?;
        }
        Ok(())
    }

    /// Replaces every trail with `min(tau_max, max(tau_min, trail))`. Requires
    /// `0 <= tau_min <= tau_max`.
    pub fn clamp(&mut self, tau_min: f64, tau_max: f64) -> Result<(), PheromoneError> {
        if tau_min < 0.0 || tau_min > tau_max {
            return Err(PheromoneError::InvalidClampBounds { tau_min, tau_max });
        }

        for tau in self.trails.iter_mut() {
            *tau = tau_max.min(tau_min.max(*tau));
        }
        Ok(())
    }
}
