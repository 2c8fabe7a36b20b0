//! Node records.

use serde::{Deserialize, Serialize};
use socigraph_common::types::NodeId;
use socigraph_common::utils::error::{Error, Result};

/// A 2-D position, used as a heuristic input and a rendering hint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A vertex of the social graph.
///
/// Nodes are values: changing one means building a replacement with
/// [`Node::with_changes`] and handing it back to the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique id within the graph.
    pub id: NodeId,
    /// Display name.
    pub name: String,
    /// Activity score.
    pub activity: f64,
    /// Interaction score.
    pub interaction: f64,
    /// Number of connections the node reports.
    pub connection_count: u32,
    /// Position, defaults to the origin.
    #[serde(default)]
    pub position: Position,
}

impl Node {
    /// Creates a node with zeroed attributes at the origin.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            activity: 0.0,
            interaction: 0.0,
            connection_count: 0,
            position: Position::default(),
        }
    }

    /// Sets the activity score.
    #[must_use]
    pub fn with_activity(mut self, activity: f64) -> Self {
        self.activity = activity;
        self
    }

    /// Sets the interaction score.
    #[must_use]
    pub fn with_interaction(mut self, interaction: f64) -> Self {
        self.interaction = interaction;
        self
    }

    /// Sets the connection count.
    #[must_use]
    pub fn with_connection_count(mut self, count: u32) -> Self {
        self.connection_count = count;
        self
    }

    /// Sets the position.
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Checks that every numeric attribute is finite.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("activity", self.activity),
            ("interaction", self.interaction),
            ("position.x", self.position.x),
            ("position.y", self.position.y),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "node {}: {field} must be finite, got {value}",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Returns a copy of this node with the fields named in `update` replaced.
    ///
    /// The id is never changed.
    #[must_use]
    pub fn with_changes(&self, update: &NodeUpdate) -> Self {
        Self {
            id: self.id,
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            activity: update.activity.unwrap_or(self.activity),
            interaction: update.interaction.unwrap_or(self.interaction),
            connection_count: update.connection_count.unwrap_or(self.connection_count),
            position: update.position.unwrap_or(self.position),
        }
    }
}

/// A set of field replacements for [`Node::with_changes`].
///
/// Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New activity score.
    pub activity: Option<f64>,
    /// New interaction score.
    pub interaction: Option<f64>,
    /// New connection count.
    pub connection_count: Option<u32>,
    /// New position.
    pub position: Option<Position>,
}

impl NodeUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the activity score.
    #[must_use]
    pub fn activity(mut self, activity: f64) -> Self {
        self.activity = Some(activity);
        self
    }

    /// Replaces the interaction score.
    #[must_use]
    pub fn interaction(mut self, interaction: f64) -> Self {
        self.interaction = Some(interaction);
        self
    }

    /// Replaces the connection count.
    #[must_use]
    pub fn connection_count(mut self, count: u32) -> Self {
        self.connection_count = Some(count);
        self
    }

    /// Replaces the position.
    #[must_use]
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.activity.is_none()
            && self.interaction.is_none()
            && self.connection_count.is_none()
            && self.position.is_none()
    }

    /// Returns true if the update touches an attribute the weight function reads.
    #[must_use]
    pub fn affects_weights(&self) -> bool {
        self.activity.is_some() || self.interaction.is_some() || self.connection_count.is_some()
    }
}
