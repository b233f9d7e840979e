//! Route planner over the two-level rail network.
//!
//! Answers: "how do I get from this station to that one?" with an ordered
//! list of rides and line changes. Same-line journeys are a single search on
//! the line's subgraph; everything else first finds the shortest chain of
//! lines on the supergraph, then bridges each pair of lines at the nearest
//! shared station.

mod config;
mod instruction;
mod search;

pub use config::PlannerConfig;
pub use instruction::{Instruction, Route, RouteStep, describe_leg, transfer_marker};
pub use search::{PlanError, Planner};
