//! Algorithm registry.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use socigraph_common::utils::error::{Error, Result};

use super::algorithms::{
    AstarAlgorithm, BfsAlgorithm, BfsLayersAlgorithm, CentralityAlgorithm,
    ConnectedComponentsAlgorithm, DegreeCentralityAlgorithm, DfsAlgorithm, DijkstraAlgorithm,
    GraphView, Heuristic, WelshPowellAlgorithm,
};
use super::traits::{Algorithm, AlgorithmResult, Parameters, Plugin};

/// The algorithms that ship with Socigraph.
#[derive(Debug, Default)]
pub struct BuiltinPlugin {
    astar_heuristic: Heuristic,
}

impl BuiltinPlugin {
    /// Built-ins with `heuristic` as A*'s default estimate.
    #[must_use]
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self {
            astar_heuristic: heuristic,
        }
    }
}

impl Plugin for BuiltinPlugin {
    fn name(&self) -> &str {
        "builtin"
    }

    fn algorithms(&self) -> Vec<Arc<dyn Algorithm>> {
        vec![
            Arc::new(BfsAlgorithm),
            Arc::new(DfsAlgorithm),
            Arc::new(BfsLayersAlgorithm),
            Arc::new(DijkstraAlgorithm),
            Arc::new(AstarAlgorithm::new(self.astar_heuristic)),
            Arc::new(ConnectedComponentsAlgorithm),
            Arc::new(CentralityAlgorithm),
            Arc::new(DegreeCentralityAlgorithm),
            Arc::new(WelshPowellAlgorithm),
        ]
    }
}

/// Name → algorithm lookup, in registration order.
pub struct PluginRegistry {
    algorithms: IndexMap<String, Arc<dyn Algorithm>>,
    plugins: Vec<String>,
}

impl PluginRegistry {
    /// A registry holding the built-in plugin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_builtins(BuiltinPlugin::default())
    }

    /// A registry holding the given built-in configuration.
    #[must_use]
    pub fn with_builtins(builtins: BuiltinPlugin) -> Self {
        let mut registry = Self::empty();
        for algorithm in builtins.algorithms() {
            registry.algorithms.insert(algorithm.name().to_string(), algorithm);
        }
        registry.plugins.push(builtins.name().to_string());
        registry
    }

    /// A registry with nothing registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            algorithms: IndexMap::new(),
            plugins: Vec::new(),
        }
    }

    /// Registers every algorithm of `plugin`.
    ///
    /// Nothing is registered if any name is already taken.
    pub fn register_plugin(&mut self, plugin: &dyn Plugin) -> Result<()> {
        let algorithms = plugin.algorithms();
        for algorithm in &algorithms {
            if self.algorithms.contains_key(algorithm.name()) {
                return Err(Error::InvalidParameter(format!(
                    "algorithm '{}' from plugin '{}' is already registered",
                    algorithm.name(),
                    plugin.name()
                )));
            }
        }
        for algorithm in algorithms {
            tracing::debug!(plugin = plugin.name(), algorithm = algorithm.name(), "registered algorithm");
            self.algorithms.insert(algorithm.name().to_string(), algorithm);
        }
        self.plugins.push(plugin.name().to_string());
        Ok(())
    }

    /// Looks up an algorithm by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Algorithm>> {
        self.algorithms.get(name)
    }

    /// Returns true if an algorithm is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    /// All registered algorithms, in registration order.
    pub fn algorithms(&self) -> impl Iterator<Item = &Arc<dyn Algorithm>> {
        self.algorithms.values()
    }

    /// Names of the registered plugins.
    #[must_use]
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Number of registered algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Validates `params` against the algorithm's declaration and runs it.
    pub fn execute(
        &self,
        name: &str,
        graph: &dyn GraphView,
        params: &Parameters,
    ) -> Result<AlgorithmResult> {
        let algorithm = self
            .get(name)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown algorithm '{name}'")))?;
        params.validate(algorithm.parameters())?;

        tracing::debug!(algorithm = name, params = params.len(), "executing algorithm");
        let result = algorithm.execute(graph, params);
        if let Err(ref e) = result {
            tracing::debug!(algorithm = name, error = %e, "algorithm failed");
        }
        result
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("algorithms", &self.algorithms.keys().collect::<Vec<_>>())
            .field("plugins", &self.plugins)
            .finish()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
