use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The numeric knobs of the transition model, fixed at construction.
///
/// Tree-shaped configuration sources are an external concern: flatten
/// them into this struct before building the model.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Scale of the route-deviation term; must be positive.
    pub beta: f64,

    /// Hard ceiling (meters) on any single route search.
    pub breakage_distance: f64,

    /// Multiplier on the great-circle distance forming the
    /// per-transition distance budget.
    pub max_route_distance_factor: f64,

    /// Multiplier on the elapsed clock time forming the
    /// per-transition time budget.
    pub max_route_time_factor: f64,

    /// Amplitude of the turn-angle penalty; must be non-negative.
    pub turn_penalty_factor: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            beta: 3.0,
            breakage_distance: 2_000.0,
            max_route_distance_factor: 5.0,
            max_route_time_factor: 5.0,
            turn_penalty_factor: 0.0,
        }
    }
}

impl TransitionConfig {
    /// Negated comparisons so that NaN fails validation too.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.beta > 0.0) {
            return Err(ConfigError::NonPositiveBeta(self.beta));
        }

        if !(self.turn_penalty_factor >= 0.0) {
            return Err(ConfigError::NegativeTurnPenalty(self.turn_penalty_factor));
        }

        Ok(())
    }
}

/// Construction-time configuration faults.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("beta must be positive, got {0}")]
    NonPositiveBeta(f64),

    #[error("turn penalty factor must be non-negative, got {0}")]
    NegativeTurnPenalty(f64),
}
