//! Driver state for iterative relaxation.
//!
//! [`Simulation`] owns the graph, the current layout and the randomness used
//! to seed it. A frame loop calls [`Simulation::advance`] once per frame and
//! reads [`Simulation::layout`] to draw; a batch caller uses
//! [`Simulation::run`].

use std::sync::Arc;

use log::{debug, info};

use sprung_core::graph::Graph;

use crate::{
    config::AppConfig,
    error::SprungError,
    force::ForceModel,
    layout::Layout,
    placement::Placement,
    search::StepSearch,
};

/// Owner of a graph, its current layout and the relaxation loop state.
///
/// # Examples
///
/// ```
/// # use sprung::{Simulation, config::AppConfig, graph::Graph};
/// let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
/// let config = AppConfig::default().with_seed(1).with_max_steps(10);
///
/// let mut simulation = Simulation::new(graph, &config).unwrap();
/// let steps = simulation.run();
///
/// assert_eq!(steps, 10);
/// assert!(simulation.is_finished());
/// assert!(!simulation.advance());
/// ```
#[derive(Debug)]
pub struct Simulation {
    layout: Layout,
    model: ForceModel,
    search: StepSearch,
    placement: Placement,
    steps: usize,
    unverified_steps: usize,
    max_steps: usize,
}

impl Simulation {
    /// Creates a simulation over `graph` seeded with a randomized circle placement.
    ///
    /// # Errors
    ///
    /// Returns [`SprungError::Config`] if any configuration value is invalid.
    pub fn new(graph: Graph, config: &AppConfig) -> Result<Self, SprungError> {
        let model = ForceModel::from_config(config.force())?;
        let search = StepSearch::from_config(config.search())?;
        let mut placement = Placement::new(config.placement(), config.simulation().seed())?;
        let layout = placement.seed_layout(Arc::new(graph), model);

        info!(
            node_count = layout.node_count(),
            edge_count = layout.graph().edge_count(),
            max_steps = config.simulation().max_steps();
            "Simulation created"
        );

        Ok(Self {
            layout,
            model,
            search,
            placement,
            steps: 0,
            unverified_steps: 0,
            max_steps: config.simulation().max_steps(),
        })
    }

    /// Replaces the graph and starts over from a fresh randomized placement.
    pub fn reseed(&mut self, graph: Graph) {
        self.layout = self.placement.seed_layout(Arc::new(graph), self.model);
        self.reset_counters();
        info!(node_count = self.layout.node_count(); "Simulation reseeded");
    }

    /// Re-jitters the current positions and restarts the step budget.
    pub fn randomize(&mut self) {
        self.layout = self.placement.jitter_layout(&self.layout);
        self.reset_counters();
        debug!(tension = self.layout.tension(); "Current layout randomized");
    }

    /// Performs one relaxation step.
    ///
    /// Returns `false` without touching the layout once the step budget is
    /// spent.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        let result = self.search.search(&self.layout);
        if !result.is_verified() {
            self.unverified_steps += 1;
        }
        self.steps += 1;
        self.layout = result.into_layout();
        true
    }

    /// Advances until the step budget is spent and returns the number of
    /// steps taken by this call.
    pub fn run(&mut self) -> usize {
        let mut taken = 0;
        while self.advance() {
            taken += 1;
        }
        info!(
            steps = self.steps,
            unverified_steps = self.unverified_steps,
            tension = self.layout.tension();
            "Relaxation finished"
        );
        taken
    }

    /// Returns the current layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the graph being laid out.
    pub fn graph(&self) -> &Arc<Graph> {
        self.layout.graph()
    }

    /// Returns the number of steps taken since the last (re)seed.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns how many of those steps returned an unverified fallback layout.
    pub fn unverified_steps(&self) -> usize {
        self.unverified_steps
    }

    /// Returns the step budget.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns true once the step budget is spent.
    pub fn is_finished(&self) -> bool {
        self.steps >= self.max_steps
    }

    fn reset_counters(&mut self) {
        self.steps = 0;
        self.unverified_steps = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap()
    }

    fn config() -> AppConfig {
        AppConfig::default().with_seed(5).with_max_steps(20)
    }

    #[test]
    fn test_new_seeds_layout() {
        let simulation = Simulation::new(triangle(), &config()).unwrap();
        assert_eq!(simulation.layout().node_count(), 3);
        assert_eq!(simulation.steps(), 0);
        assert!(!simulation.is_finished());
    }

    #[test]
    fn test_invalid_config() {
        let config: AppConfig = toml::from_str("[force]\nedge_length = -1.0").unwrap();
        assert!(Simulation::new(triangle(), &config).is_err());
    }

    #[test]
    fn test_advance_respects_budget() {
        let mut simulation = Simulation::new(triangle(), &config().with_max_steps(2)).unwrap();
        assert!(simulation.advance());
        assert!(simulation.advance());
        assert!(!simulation.advance());
        assert_eq!(simulation.steps(), 2);
    }

    #[test]
    fn test_finished_simulation_keeps_layout() {
        let mut simulation = Simulation::new(triangle(), &config().with_max_steps(0)).unwrap();
        let before = simulation.layout().positions().to_vec();
        assert_eq!(simulation.run(), 0);
        assert_eq!(simulation.layout().positions(), before.as_slice());
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut first = Simulation::new(triangle(), &config()).unwrap();
        let mut second = Simulation::new(triangle(), &config()).unwrap();
        first.run();
        second.run();
        assert_eq!(first.layout().positions(), second.layout().positions());
    }

    #[test]
    fn test_reseed_replaces_graph() {
        let mut simulation = Simulation::new(triangle(), &config()).unwrap();
        simulation.run();

        simulation.reseed(Graph::new(5));
        assert_eq!(simulation.graph().node_count(), 5);
        assert_eq!(simulation.steps(), 0);
        assert_eq!(simulation.unverified_steps(), 0);
        assert!(simulation.advance());
    }

    #[test]
    fn test_randomize_restarts_budget() {
        let mut simulation = Simulation::new(triangle(), &config()).unwrap();
        simulation.run();
        assert!(simulation.is_finished());

        let graph = Arc::clone(simulation.graph());
        simulation.randomize();
        assert!(Arc::ptr_eq(simulation.graph(), &graph));
        assert_eq!(simulation.steps(), 0);
        assert!(!simulation.is_finished());
    }
}
