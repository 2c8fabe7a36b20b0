//! Plugin and algorithm traits, typed parameters, and the result envelope.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use socigraph_common::types::NodeId;
use socigraph_common::utils::error::{Error, Result};

use super::algorithms::{
    CentralityResult, ColoringResult, ComponentsResult, GraphView, LayersResult,
    ShortestPathResult, TraversalResult,
};

/// A named, parameterized graph algorithm.
pub trait Algorithm: Send + Sync {
    /// Registry name, e.g. `"dijkstra"`.
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Accepted parameters.
    fn parameters(&self) -> &[ParameterDef];

    /// Runs the algorithm.
    fn execute(&self, graph: &dyn GraphView, params: &Parameters) -> Result<AlgorithmResult>;
}

/// A bundle of algorithms registered together.
pub trait Plugin: Send + Sync {
    /// Plugin name.
    fn name(&self) -> &str;

    /// The algorithms this plugin contributes.
    fn algorithms(&self) -> Vec<Arc<dyn Algorithm>>;
}

/// The value type a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    /// A node id.
    Node,
    /// A non-negative integer.
    Integer,
    /// A floating-point number.
    Float,
    /// Free text.
    String,
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterType::Node => "node",
            ParameterType::Integer => "integer",
            ParameterType::Float => "float",
            ParameterType::String => "string",
        };
        f.write_str(name)
    }
}

/// Declaration of one algorithm parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterDef {
    /// Parameter name.
    pub name: &'static str,
    /// What it means.
    pub description: &'static str,
    /// Accepted value type.
    pub param_type: ParameterType,
    /// Whether it must be supplied.
    pub required: bool,
}

impl ParameterDef {
    /// A required parameter.
    #[must_use]
    pub const fn required(
        name: &'static str,
        param_type: ParameterType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            param_type,
            required: true,
        }
    }

    /// An optional parameter.
    #[must_use]
    pub const fn optional(
        name: &'static str,
        param_type: ParameterType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            param_type,
            required: false,
        }
    }
}

/// Algorithm arguments as an ordered name → text map.
///
/// Values are stored as given and parsed on access, so command-line input and
/// programmatic input go through the same checks. Anything that does not
/// parse is reported as [`Error::InvalidParameter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: IndexMap<String, String>,
}

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any earlier value.
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    /// Parses `KEY=VALUE` assignments.
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::new();
        for raw in assignments {
            let raw = raw.as_ref();
            let (name, value) = raw.split_once('=').ok_or_else(|| {
                Error::InvalidParameter(format!("expected KEY=VALUE, got '{raw}'"))
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::InvalidParameter(format!("empty parameter name in '{raw}'")));
            }
            params.set(name, value.trim());
        }
        Ok(params)
    }

    /// Raw text of a parameter.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns true if the parameter was supplied.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Parses a parameter if present.
    pub fn get_parsed<T>(&self, name: &str, expected: ParameterType) -> Result<Option<T>>
    where
        T: FromStr,
    {
        self.get_str(name)
            .map(|raw| {
                raw.parse::<T>().map_err(|_| {
                    Error::InvalidParameter(format!("parameter '{name}': '{raw}' is not a valid {expected}"))
                })
            })
            .transpose()
    }

    /// A required node id.
    pub fn get_node(&self, name: &str) -> Result<NodeId> {
        self.get_optional_node(name)?
            .ok_or_else(|| Error::InvalidParameter(format!("missing required parameter '{name}'")))
    }

    /// An optional node id.
    pub fn get_optional_node(&self, name: &str) -> Result<Option<NodeId>> {
        self.get_parsed(name, ParameterType::Node)
    }

    /// A float, or `default` when absent.
    pub fn get_float_or(&self, name: &str, default: f64) -> Result<f64> {
        Ok(self.get_parsed(name, ParameterType::Float)?.unwrap_or(default))
    }

    /// A non-negative integer, or `default` when absent.
    pub fn get_usize_or(&self, name: &str, default: usize) -> Result<usize> {
        Ok(self.get_parsed(name, ParameterType::Integer)?.unwrap_or(default))
    }

    /// Checks the set against a declaration list.
    ///
    /// Unknown names and missing required names are rejected. Supplied values
    /// must parse as their declared type.
    pub fn validate(&self, defs: &[ParameterDef]) -> Result<()> {
        for name in self.values.keys() {
            if !defs.iter().any(|d| d.name == name.as_str()) {
                return Err(Error::InvalidParameter(format!("unknown parameter '{name}'")));
            }
        }
        for def in defs {
            if !self.contains(def.name) {
                if def.required {
                    return Err(Error::InvalidParameter(format!(
                        "missing required parameter '{}'",
                        def.name
                    )));
                }
                continue;
            }
            match def.param_type {
                ParameterType::Node => {
                    self.get_parsed::<NodeId>(def.name, def.param_type)?;
                }
                ParameterType::Integer => {
                    self.get_parsed::<usize>(def.name, def.param_type)?;
                }
                ParameterType::Float => {
                    self.get_parsed::<f64>(def.name, def.param_type)?;
                }
                ParameterType::String => {}
            }
        }
        Ok(())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The output of any registered algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmResult {
    /// BFS or DFS visitation.
    Traversal(TraversalResult),
    /// BFS hop layers.
    Layers(LayersResult),
    /// Dijkstra or A*.
    ShortestPath(ShortestPathResult),
    /// Connected components.
    Components(ComponentsResult),
    /// Degree and closeness centrality.
    Centrality(CentralityResult),
    /// Welsh–Powell coloring.
    Coloring(ColoringResult),
}

impl AlgorithmResult {
    /// Short name of the result kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            AlgorithmResult::Traversal(_) => "traversal",
            AlgorithmResult::Layers(_) => "layers",
            AlgorithmResult::ShortestPath(_) => "shortest_path",
            AlgorithmResult::Components(_) => "components",
            AlgorithmResult::Centrality(_) => "centrality",
            AlgorithmResult::Coloring(_) => "coloring",
        }
    }
}
