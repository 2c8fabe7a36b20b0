//! Graph construction from command-line specs.

use std::str::FromStr;

use clap::Args;
use socigraph_common::types::NodeId;
use socigraph_common::utils::error::{Error, Result};
use socigraph_core::{Node, WeightConfig};
use socigraph_engine::{Config, SocialGraphDB};

/// Flags that describe the graph every command runs against.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Seed the three-node demo graph (A-B-C)
    #[arg(long, global = true)]
    pub demo: bool,

    /// Add a node: ID:NAME:ACTIVITY:INTERACTION:CONNECTIONS[:X:Y]
    #[arg(long = "node", value_name = "SPEC", global = true)]
    pub nodes: Vec<NodeSpec>,

    /// Add an edge: U-V, or U-V=WEIGHT for a fixed weight
    #[arg(long = "edge", value_name = "U-V[=WEIGHT]", global = true)]
    pub edges: Vec<EdgeSpec>,

    /// Weight coefficients for activity, interaction, and connections
    #[arg(long, value_name = "A,I,C", global = true)]
    pub weights: Option<WeightConfig>,

    /// Set each node's connection count to its degree, then recompute all weights
    #[arg(long, global = true)]
    pub sync_connections: bool,
}

impl GraphArgs {
    /// Builds a database holding the described graph.
    ///
    /// Demo nodes are added first, then `--node` specs, then edges in the
    /// order given.
    pub fn load(&self) -> Result<SocialGraphDB> {
        let mut config = Config::default();
        if let Some(weights) = self.weights {
            config = config.with_weights(weights);
        }
        let db = SocialGraphDB::with_config(config)?;

        if self.demo {
            for node in demo_nodes() {
                db.add_node(node)?;
            }
            for (u, v) in DEMO_EDGES {
                db.add_edge(NodeId::new(u), NodeId::new(v))?;
            }
        }
        for spec in &self.nodes {
            db.add_node(spec.0.clone())?;
        }
        for spec in &self.edges {
            match spec.weight {
                Some(weight) => db.add_edge_with_weight(spec.u, spec.v, weight)?,
                None => db.add_edge(spec.u, spec.v)?,
            };
        }
        if self.sync_connections {
            db.sync_connection_counts();
            db.recompute_weights()?;
        }

        tracing::debug!(
            nodes = db.node_count(),
            edges = db.edge_count(),
            "graph ready"
        );
        Ok(db)
    }
}

const DEMO_EDGES: [(u64, u64); 2] = [(1, 2), (2, 3)];

fn demo_nodes() -> [Node; 3] {
    [
        Node::new(1, "A")
            .with_activity(0.8)
            .with_interaction(12.0)
            .with_connection_count(3)
            .with_position(-120.0, -40.0),
        Node::new(2, "B")
            .with_activity(0.4)
            .with_interaction(5.0)
            .with_connection_count(2)
            .with_position(60.0, -50.0),
        Node::new(3, "C")
            .with_activity(0.6)
            .with_interaction(9.0)
            .with_connection_count(4)
            .with_position(0.0, 90.0),
    ]
}

/// A node parsed from `ID:NAME:ACTIVITY:INTERACTION:CONNECTIONS[:X:Y]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec(pub Node);

impl FromStr for NodeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(':').map(str::trim).collect();
        if fields.len() != 5 && fields.len() != 7 {
            return Err(Error::InvalidParameter(format!(
                "node spec '{s}' needs ID:NAME:ACTIVITY:INTERACTION:CONNECTIONS[:X:Y]"
            )));
        }

        let id: NodeId = fields[0].parse()?;
        let mut node = Node::new(id, fields[1])
            .with_activity(finite(fields[2], "activity")?)
            .with_interaction(finite(fields[3], "interaction")?)
            .with_connection_count(number(fields[4], "connection count")?);
        if fields.len() == 7 {
            node = node.with_position(finite(fields[5], "x")?, finite(fields[6], "y")?);
        }
        Ok(Self(node))
    }
}

/// An edge parsed from `U-V` or `U-V=WEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    /// First endpoint.
    pub u: NodeId,
    /// Second endpoint.
    pub v: NodeId,
    /// Fixed weight; computed from the endpoints when absent.
    pub weight: Option<f64>,
}

impl FromStr for EdgeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (pair, weight) = match s.split_once('=') {
            Some((pair, raw)) => (pair, Some(finite(raw.trim(), "weight")?)),
            None => (s, None),
        };
        let (u, v) = pair.split_once('-').ok_or_else(|| {
            Error::InvalidParameter(format!("edge spec '{s}' needs U-V or U-V=WEIGHT"))
        })?;
        Ok(Self {
            u: u.trim().parse()?,
            v: v.trim().parse()?,
            weight,
        })
    }
}

fn number<T: FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::InvalidParameter(format!("{what} '{raw}' is not a valid number")))
}

// `f64::from_str` takes `NaN` and `inf`, which no attribute may hold.
fn finite(raw: &str, what: &str) -> Result<f64> {
    let value: f64 = number(raw, what)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidParameter(format!("{what} '{raw}' must be a finite number")))
    }
}
