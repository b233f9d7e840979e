//! Metro route planner.
//!
//! Answers "how do I get from this station to that one?" on a multi-line
//! rail network, given only which stations each line joins. Built in three
//! layers: a generic directed [`graph`], the rail [`network`] model (one
//! graph per line plus a graph of lines), and the route [`planner`] that
//! searches both. The [`dataset`] module loads the network from CSV tables.

pub mod dataset;
pub mod graph;
pub mod network;
pub mod planner;
