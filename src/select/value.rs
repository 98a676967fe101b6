use oorandom::Rand64;

use super::{Heuristic, ValueSelector};
use crate::colony::ACOParameters;
use crate::csp::{CspValue, VarId};
use crate::error::SelectorError;
use crate::pheromone::PheromoneMatrix;

/// Roulette-wheel value selector: draws a candidate from `domain` with probability
/// proportional to `tau(var, x)^alpha * eta(x)^beta`.
pub struct RouletteSelector<V: CspValue> {
    rng: Rand64,
    heuristic: Heuristic<V>,
}

impl<V: CspValue> RouletteSelector<V> {
    pub fn new(rng: Rand64, heuristic: Heuristic<V>) -> Self {
        Self { rng, heuristic }
    }
}

impl<V: CspValue> ValueSelector<V> for RouletteSelector<V> {
    fn select(
        &mut self,
        var: VarId,
        domain: &[V],
        pheromones: &PheromoneMatrix<V>,
        params: &ACOParameters,
    ) -> Result<Option<V>, SelectorError> {
        match domain.len() {
            0 => return Ok(None),
            1 => return Ok(Some(domain[0].clone())),
            _ => {}
        }

        let weights: Vec<f64> = domain
            .iter()
            .map(|value| {
                let tau = pheromones.get(var, value).powf(params.alpha);
                let eta = (self.heuristic)(value).powf(params.beta);
                tau * eta
            })
            .collect();

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(SelectorError::AllWeightsZero);
        }

        let threshold = self.rng.rand_float() as f64 * total;
        let mut cumulative = 0.0;
        for (value, weight) in domain.iter().zip(weights.iter()) {
            cumulative += weight;
            if cumulative >= threshold {
                return Ok(Some(value.clone()));
            }
        }

        // Floating-point rounding can leave `cumulative` a hair short of `threshold`.
        Ok(domain.last().cloned())
    }
}
