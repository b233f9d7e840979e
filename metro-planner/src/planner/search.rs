//! Two-level route search.
//!
//! Stations that share a line are routed directly on that line's subgraph.
//! Otherwise the supergraph gives the shortest chain of lines, and each
//! consecutive pair of lines is bridged at the shared station nearest to
//! wherever the traveller currently is.

use tracing::{debug, trace};

use crate::graph::fewest_vertices;
use crate::network::{LineId, Network, StationId};

use super::config::PlannerConfig;
use super::instruction::{Route, RouteStep, describe_leg, transfer_marker};

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Station id not present in the network
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// Start and goal are the same station
    #[error("already at {0}")]
    SameStation(String),

    /// No sequence of lines and stops joins the two stations
    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },
}

/// Route planner over a fixed network.
///
/// Holds only shared references, so any number of planners can read the
/// same network concurrently.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// Fewest-stop path between two stations on one line.
    ///
    /// Empty if the line is unknown or does not join the stations.
    pub fn route_within_line(
        &self,
        line: LineId,
        start: StationId,
        goal: StationId,
    ) -> Vec<StationId> {
        match self.network.subgraph(line) {
            Some(graph) => {
                graph.start_search_with(&start, &goal, self.config.max_stops, fewest_vertices)
            }
            None => Vec::new(),
        }
    }

    /// Path on `line` from `start` to whichever of `goals` takes the fewest
    /// stops.
    ///
    /// If `start` is itself one of the goals the result is just `[start]`.
    /// Unreachable goals are ignored; the result is empty if none is
    /// reachable.
    pub fn route_to_closest(
        &self,
        line: LineId,
        start: StationId,
        goals: &[StationId],
    ) -> Vec<StationId> {
        if goals.contains(&start) {
            return vec![start];
        }
        goals
            .iter()
            .map(|goal| self.route_within_line(line, start, *goal))
            .filter(|path| !path.is_empty())
            .min_by_key(Vec::len)
            .unwrap_or_default()
    }

    /// Fewest-transfer chain of lines from `from` to `to`.
    pub fn route_between_lines(&self, from: LineId, to: LineId) -> Vec<LineId> {
        self.network
            .supergraph()
            .start_search_with(&from, &to, self.config.max_lines, fewest_vertices)
    }

    /// Plan a route between two stations.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either station is unknown, if both are the same
    /// station, or if no route joins them.
    pub fn plan_route(&self, start: StationId, goal: StationId) -> Result<Route, PlanError> {
        if self.network.station(start).is_none() {
            return Err(PlanError::UnknownStation(start));
        }
        if self.network.station(goal).is_none() {
            return Err(PlanError::UnknownStation(goal));
        }
        if start == goal {
            return Err(PlanError::SameStation(self.station_name(start)));
        }

        let start_lines = self.network.lines_serving(start);
        let goal_lines = self.network.lines_serving(goal);

        let shared: Vec<LineId> = start_lines.intersection(goal_lines).copied().collect();
        if !shared.is_empty() {
            let (line, path) = shared
                .iter()
                .map(|line| (*line, self.route_within_line(*line, start, goal)))
                .filter(|(_, path)| !path.is_empty())
                .min_by_key(|(_, path)| path.len())
                .ok_or_else(|| self.no_route(start, goal))?;

            debug!(
                start = %start,
                goal = %goal,
                line = %line,
                stops = path.len(),
                "direct route"
            );
            return Ok(Route::Direct(describe_leg(self.network, line, &path)));
        }

        let chain = start_lines
            .iter()
            .flat_map(|from| goal_lines.iter().map(move |to| (*from, *to)))
            .map(|(from, to)| {
                let chain = self.route_between_lines(from, to);
                trace!(from = %from, to = %to, lines = chain.len(), "line chain candidate");
                chain
            })
            .filter(|chain| !chain.is_empty())
            .min_by_key(Vec::len)
            .ok_or_else(|| self.no_route(start, goal))?;

        debug!(
            start = %start,
            goal = %goal,
            lines = chain.len(),
            "planning across lines"
        );

        let mut steps = Vec::new();
        let mut position = start;

        for pair in chain.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            let candidates: Vec<StationId> =
                self.network.shared_stations(current, next).into_iter().collect();

            let leg = self.route_to_closest(current, position, &candidates);
            let Some(&transfer_at) = leg.last() else {
                return Err(self.no_route(start, goal));
            };
            trace!(
                line = %current,
                from = %position,
                transfer_at = %transfer_at,
                candidates = candidates.len(),
                "transfer chosen"
            );

            if leg.len() > 1 {
                steps.push(RouteStep::Leg(describe_leg(self.network, current, &leg)));
            }
            steps.push(RouteStep::Transfer(transfer_marker(
                self.network,
                current,
                next,
            )));
            position = transfer_at;
        }

        let Some(&last_line) = chain.last() else {
            return Err(self.no_route(start, goal));
        };
        if position != goal {
            let leg = self.route_within_line(last_line, position, goal);
            if leg.is_empty() {
                return Err(self.no_route(start, goal));
            }
            steps.push(RouteStep::Leg(describe_leg(self.network, last_line, &leg)));
        }

        Ok(Route::Transfers(steps))
    }

    fn station_name(&self, station: StationId) -> String {
        self.network
            .station(station)
            .map_or_else(|| station.to_string(), |s| s.name().to_string())
    }

    fn no_route(&self, start: StationId, goal: StationId) -> PlanError {
        PlanError::NoRoute {
            from: self.station_name(start),
            to: self.station_name(goal),
        }
    }
}
