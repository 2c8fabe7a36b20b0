//! Database configuration.

use serde::{Deserialize, Serialize};
use socigraph_adapters::plugins::algorithms::Heuristic;
use socigraph_common::utils::error::Result;
use socigraph_core::WeightConfig;

/// Configuration for a [`SocialGraphDB`](crate::SocialGraphDB).
///
/// ```
/// use socigraph_core::WeightConfig;
/// use socigraph_engine::Config;
///
/// let config = Config::default()
///     .with_weights(WeightConfig::new(2.0, 0.5, 1.0).unwrap())
///     .with_auto_recompute(false);
/// assert!(!config.auto_recompute);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Coefficients used for computed edge weights.
    pub weights: WeightConfig,
    /// Recompute every edge weight after a node update that touches a
    /// weighted attribute.
    pub auto_recompute: bool,
    /// A* estimate used when a caller does not name one.
    pub heuristic: Heuristic,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: WeightConfig::default(),
            auto_recompute: true,
            heuristic: Heuristic::Zero,
        }
    }
}

impl Config {
    /// Sets the weight coefficients.
    #[must_use]
    pub fn with_weights(mut self, weights: WeightConfig) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables recomputation after node updates.
    #[must_use]
    pub fn with_auto_recompute(mut self, enabled: bool) -> Self {
        self.auto_recompute = enabled;
        self
    }

    /// Sets the default A* heuristic.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Rejects negative or non-finite coefficients and scale factors.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.heuristic.validate()
    }
}
