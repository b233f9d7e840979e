//! Route planner configuration.

/// Optional bounds on the exhaustive path searches.
///
/// Both searches enumerate every simple path before choosing one, so their
/// cost grows exponentially with branching. `None` keeps a search fully
/// exhaustive; a bound skips any candidate path with more vertices than the
/// limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum stations on a single-line leg, endpoints included.
    pub max_stops: Option<usize>,

    /// Maximum lines in a transfer chain, first and last included.
    pub max_lines: Option<usize>,
}

impl PlannerConfig {
    /// Create a new configuration with the given bounds.
    pub fn new(max_stops: Option<usize>, max_lines: Option<usize>) -> Self {
        Self {
            max_stops,
            max_lines,
        }
    }

    /// Returns the maximum number of line transfers a route may make.
    pub fn max_transfers(&self) -> Option<usize> {
        self.max_lines.map(|lines| lines.saturating_sub(1))
    }

    /// Returns true if neither search is bounded.
    pub fn is_exhaustive(&self) -> bool {
        self.max_stops.is_none() && self.max_lines.is_none()
    }
}
