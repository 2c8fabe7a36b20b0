//! Edge weighting.
//!
//! An edge's weight is a similarity score between its endpoints:
//!
//! ```text
//! w(a, b) = 1 / (1 + ca·(Δactivity)² + ci·(Δinteraction)² + cc·(Δconnections)²)
//! ```
//!
//! With non-negative coefficients the result is always in `(0, 1]` (it is
//! floored at `f64::MIN_POSITIVE` rather than reaching `0`), and two
//! identical endpoints get exactly `1`. Shortest-path algorithms use the weight
//! directly as the edge cost and rely on it being non-negative.
//!
//! The coefficients live in a [`WeightConfig`] value that callers own and
//! pass around explicitly. Two graphs can use different weightings at the
//! same time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use socigraph_common::utils::error::{Error, Result};

use crate::graph::social::Node;

/// Anything that can weigh an edge from its two endpoint records.
pub trait WeightFunction {
    /// Computes the weight of an edge between `a` and `b`.
    fn weight(&self, a: &Node, b: &Node) -> f64;
}

impl<F> WeightFunction for F
where
    F: Fn(&Node, &Node) -> f64,
{
    fn weight(&self, a: &Node, b: &Node) -> f64 {
        self(a, b)
    }
}

/// Coefficients of the similarity weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Coefficient of the squared activity difference.
    pub activity: f64,
    /// Coefficient of the squared interaction difference.
    pub interaction: f64,
    /// Coefficient of the squared connection-count difference.
    pub connections: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            activity: 1.0,
            interaction: 1.0,
            connections: 1.0,
        }
    }
}

impl WeightConfig {
    /// Creates a validated configuration.
    pub fn new(activity: f64, interaction: f64, connections: f64) -> Result<Self> {
        let config = Self {
            activity,
            interaction,
            connections,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the activity coefficient.
    #[must_use]
    pub fn with_activity(mut self, coefficient: f64) -> Self {
        self.activity = coefficient;
        self
    }

    /// Sets the interaction coefficient.
    #[must_use]
    pub fn with_interaction(mut self, coefficient: f64) -> Self {
        self.interaction = coefficient;
        self
    }

    /// Sets the connection-count coefficient.
    #[must_use]
    pub fn with_connections(mut self, coefficient: f64) -> Self {
        self.connections = coefficient;
        self
    }

    /// Checks every coefficient is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("activity", self.activity),
            ("interaction", self.interaction),
            ("connections", self.connections),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{name} coefficient must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Computes the similarity weight between two nodes.
    ///
    /// A difference too large to square in `f64` would drive the weight to
    /// `0`; the result is floored at `f64::MIN_POSITIVE` instead so it stays
    /// in `(0, 1]`.
    #[must_use]
    pub fn compute(&self, a: &Node, b: &Node) -> f64 {
        let da = a.activity - b.activity;
        let di = a.interaction - b.interaction;
        let dc = f64::from(a.connection_count) - f64::from(b.connection_count);
        let penalty = term(self.activity, da) + term(self.interaction, di) + term(self.connections, dc);
        (1.0 / (1.0 + penalty)).max(f64::MIN_POSITIVE)
    }
}

// A zero coefficient drops the term even when the squared gap overflows.
fn term(coefficient: f64, delta: f64) -> f64 {
    if coefficient == 0.0 {
        0.0
    } else {
        coefficient * delta * delta
    }
}

impl WeightFunction for WeightConfig {
    fn weight(&self, a: &Node, b: &Node) -> f64 {
        self.compute(a, b)
    }
}

impl fmt::Display for WeightConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.activity, self.interaction, self.connections)
    }
}

/// Parses `"activity,interaction,connections"`.
impl FromStr for WeightConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(Error::InvalidParameter(format!(
                "expected three comma-separated coefficients, got '{s}'"
            )));
        }
        let parse = |name: &str, raw: &str| {
            raw.parse::<f64>().map_err(|_| {
                Error::InvalidParameter(format!("{name} coefficient '{raw}' is not a number"))
            })
        };
        Self::new(
            parse("activity", parts[0])?,
            parse("interaction", parts[1])?,
            parse("connections", parts[2])?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u64, activity: f64, interaction: f64, connections: u32) -> Node {
        Node::new(id, "")
            .with_activity(activity)
            .with_interaction(interaction)
            .with_connection_count(connections)
    }

    #[test]
    fn test_identical_endpoints_weigh_one() {
        let config = WeightConfig::default();
        let a = node(1, 0.8, 12.0, 3);
        let b = node(2, 0.8, 12.0, 3);
        assert_eq!(config.compute(&a, &b), 1.0);
    }

    #[test]
    fn test_default_formula() {
        let config = WeightConfig::default();
        let a = node(1, 1.0, 2.0, 3);
        let b = node(2, 0.0, 0.0, 1);
        // 1 / (1 + 1 + 4 + 4)
        assert!((config.compute(&a, &b) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_coefficients_scale_terms() {
        let a = node(1, 1.0, 2.0, 3);
        let b = node(2, 0.0, 0.0, 1);
        let only_activity = WeightConfig::new(1.0, 0.0, 0.0).unwrap();
        assert!((only_activity.compute(&a, &b) - 0.5).abs() < 1e-12);

        let ignore_all = WeightConfig::new(0.0, 0.0, 0.0).unwrap();
        assert_eq!(ignore_all.compute(&a, &b), 1.0);
    }

    #[test]
    fn test_weight_in_unit_interval() {
        let config = WeightConfig::new(3.0, 0.5, 2.0).unwrap();
        let a = node(1, 100.0, -40.0, 0);
        let b = node(2, -3.0, 77.0, 1000);
        let w = config.compute(&a, &b);
        assert!(w > 0.0 && w <= 1.0);
    }

    #[test]
    fn test_huge_gaps_stay_positive() {
        let a = node(1, 1e200, 0.0, 0);
        let b = node(2, -1e200, 0.0, 0);
        assert_eq!(WeightConfig::default().compute(&a, &b), f64::MIN_POSITIVE);

        let ignore_activity = WeightConfig::new(0.0, 1.0, 1.0).unwrap();
        let far = node(3, f64::MAX, 0.0, 0);
        let near = node(4, -f64::MAX, 0.0, 0);
        assert_eq!(ignore_activity.compute(&far, &near), 1.0);
    }

    #[test]
    fn test_symmetric() {
        let config = WeightConfig::default();
        let a = node(1, 0.8, 12.0, 3);
        let b = node(2, 0.4, 5.0, 2);
        assert_eq!(config.compute(&a, &b), config.compute(&b, &a));
    }

    #[test]
    fn test_rejects_bad_coefficients() {
        assert!(matches!(
            WeightConfig::new(-1.0, 1.0, 1.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(WeightConfig::new(1.0, f64::NAN, 1.0).is_err());
        assert!(WeightConfig::new(1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse() {
        let config: WeightConfig = "2, 0.5,1".parse().unwrap();
        assert_eq!(config, WeightConfig::new(2.0, 0.5, 1.0).unwrap());
        assert!("1,2".parse::<WeightConfig>().is_err());
        assert!("1,x,2".parse::<WeightConfig>().is_err());
        assert_eq!(config.to_string().parse::<WeightConfig>().unwrap(), config);
    }

    #[test]
    fn test_closure_as_weight_function() {
        let constant = |_: &Node, _: &Node| 0.25;
        let a = node(1, 0.0, 0.0, 0);
        assert_eq!(constant.weight(&a, &a), 0.25);
    }
}
