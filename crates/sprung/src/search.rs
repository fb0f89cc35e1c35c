//! Step-size search: one relaxation step.
//!
//! Given a layout, the search moves every node along its force vector by a
//! common scale `t` and picks `t` so the tension drops. It runs in two
//! phases against the *input* layout's delta field:
//!
//! 1. **Bracket**: starting from `initial_scale`, keep doubling `t` while the
//!    tension keeps improving, for at most `bracket_steps` rounds.
//! 2. **Bisection**: for exactly `bisection_steps` rounds, probe the midpoint
//!    between the best accepted scale and the current upper bound, accepting
//!    it if it is no worse than the best layout found so far.
//!
//! Each step evaluates at most `bracket_steps + bisection_steps` candidate
//! layouts, so its cost does not depend on how far from equilibrium the
//! input is.
//!
//! If neither phase accepts any move, the result is the last bisection probe
//! even though it is worse than the input. [`StepResult::is_verified`]
//! reports this case.
//!
//! A candidate whose tension is NaN is never accepted: it ends the bracket
//! phase, counts as an upper bound during bisection, and is not returned as
//! the fallback.

use std::borrow::Cow;

use log::{debug, trace};

use crate::{config::SearchConfig, error::SprungError, layout::Layout};

/// Parameters of the two-phase step-size search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSearch {
    initial_scale: f64,
    bracket_steps: usize,
    bisection_steps: usize,
}

impl Default for StepSearch {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            bracket_steps: 4,
            bisection_steps: 4,
        }
    }
}

/// Outcome of a single relaxation step.
#[derive(Debug, Clone)]
pub struct StepResult {
    layout: Layout,
    scale: f64,
    verified: bool,
    evaluations: usize,
}

impl StepResult {
    /// Returns the layout produced by the step.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Consumes the result and returns the produced layout.
    pub fn into_layout(self) -> Layout {
        self.layout
    }

    /// Returns the displacement scale applied to the input's delta field.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns true if the result is known to be no worse than the input.
    ///
    /// False only when no candidate improved on the input and the last
    /// bisection probe was returned instead.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Returns how many candidate layouts the search built.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl StepSearch {
    /// Creates a search from its configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`SprungError::Config`] unless `initial_scale` is finite and
    /// strictly positive.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SprungError> {
        let initial_scale = config.initial_scale();
        if !(initial_scale.is_finite() && initial_scale > 0.0) {
            return Err(SprungError::Config(format!(
                "initial search scale must be a positive finite number, got {initial_scale}"
            )));
        }
        Ok(Self {
            initial_scale,
            bracket_steps: config.bracket_steps(),
            bisection_steps: config.bisection_steps(),
        })
    }

    /// Returns the upper bound on candidate layouts evaluated per step.
    pub fn max_evaluations(&self) -> usize {
        self.bracket_steps + self.bisection_steps
    }

    /// Runs one relaxation step on `layout`.
    pub fn search(&self, layout: &Layout) -> StepResult {
        let mut best = Cow::Borrowed(layout);
        let mut scale = 0.0;
        let mut upper = self.initial_scale;
        let mut evaluations = 0;

        for round in 0..self.bracket_steps {
            let candidate = layout.moved(upper);
            evaluations += 1;
            trace!(
                round,
                scale = upper,
                tension = candidate.tension();
                "Bracket candidate"
            );
            if candidate.tension().is_nan() || best.tension() <= candidate.tension() {
                break;
            }
            scale = upper;
            best = Cow::Owned(candidate);
            upper *= 2.0;
        }

        let mut last_rejected = None;
        for round in 0..self.bisection_steps {
            let mid = (scale + upper) / 2.0;
            let candidate = layout.moved(mid);
            evaluations += 1;
            trace!(
                round,
                scale = mid,
                tension = candidate.tension();
                "Bisection candidate"
            );
            if candidate.tension() <= best.tension() {
                scale = mid;
                best = Cow::Owned(candidate);
            } else {
                upper = mid;
                last_rejected = Some((mid, candidate));
            }
        }

        if scale == 0.0 {
            let last_rejected = last_rejected.filter(|(_, probe)| !probe.tension().is_nan());
            if let Some((probe_scale, probe)) = last_rejected {
                debug!(
                    scale = probe_scale,
                    tension_before = layout.tension(),
                    tension_after = probe.tension();
                    "No improving step found, returning unverified probe"
                );
                return StepResult {
                    layout: probe,
                    scale: probe_scale,
                    verified: false,
                    evaluations,
                };
            }
        }

        let layout = best.into_owned();
        debug!(
            scale,
            evaluations,
            tension = layout.tension();
            "Relaxation step accepted"
        );
        StepResult {
            layout,
            scale,
            verified: true,
            evaluations,
        }
    }
}

/// Runs one relaxation step with the default search parameters.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use sprung::{Layout, improve_all, geometry::Point, graph::Graph};
/// let graph = Arc::new(Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap());
/// let layout = Layout::new(
///     graph,
///     vec![Point::new(0.0, 0.0), Point::new(30.0, 1.0), Point::new(2.0, 25.0)],
/// )
/// .unwrap();
///
/// let improved = improve_all(&layout);
/// assert!(improved.tension() <= layout.tension());
/// ```
pub fn improve_all(layout: &Layout) -> Layout {
    StepSearch::default().search(layout).into_layout()
}
