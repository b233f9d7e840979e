//! Travel instructions produced by the planner.

use std::fmt;

use serde::Serialize;

use crate::network::{LineId, Network, StationId};

/// One ride on one line: where to board, what to sit through, where to
/// get off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// The line ridden.
    pub line: LineId,
    /// Every station visited, boarding and alighting included.
    pub stations: Vec<StationId>,
    /// Human-readable directions.
    pub text: String,
}

impl Instruction {
    /// Returns the boarding station.
    pub fn embark(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    /// Returns the alighting station.
    pub fn disembark(&self) -> Option<StationId> {
        self.stations.last().copied()
    }

    /// Stations passed through without getting off.
    pub fn wait_through(&self) -> &[StationId] {
        match self.stations.len() {
            0..=2 => &[],
            n => &self.stations[1..n - 1],
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An element of a multi-line route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStep {
    /// Ride a line
    Leg(Instruction),
    /// Change lines, e.g. `"Line transfer Central -> Victoria"`
    Transfer(String),
}

impl fmt::Display for RouteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteStep::Leg(instruction) => fmt::Display::fmt(instruction, f),
            RouteStep::Transfer(marker) => f.write_str(marker),
        }
    }
}

/// A planned route.
///
/// Stations sharing a line produce a single [`Route::Direct`] instruction;
/// everything else is an ordered mix of legs and transfer markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Direct(Instruction),
    Transfers(Vec<RouteStep>),
}

impl Route {
    pub fn is_direct(&self) -> bool {
        matches!(self, Route::Direct(_))
    }

    /// Every ride in order.
    pub fn legs(&self) -> Vec<&Instruction> {
        match self {
            Route::Direct(instruction) => vec![instruction],
            Route::Transfers(steps) => steps
                .iter()
                .filter_map(|step| match step {
                    RouteStep::Leg(instruction) => Some(instruction),
                    RouteStep::Transfer(_) => None,
                })
                .collect(),
        }
    }

    /// Number of line changes.
    pub fn transfer_count(&self) -> usize {
        match self {
            Route::Direct(_) => 0,
            Route::Transfers(steps) => steps
                .iter()
                .filter(|step| matches!(step, RouteStep::Transfer(_)))
                .count(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Direct(instruction) => fmt::Display::fmt(instruction, f),
            Route::Transfers(steps) => {
                for (i, step) in steps.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n\n")?;
                    }
                    fmt::Display::fmt(step, f)?;
                }
                Ok(())
            }
        }
    }
}

fn line_name(network: &Network, line: LineId) -> String {
    network
        .line(line)
        .map_or_else(|| line.to_string(), |l| l.name().to_string())
}

fn station_name(network: &Network, station: StationId) -> String {
    network
        .station(station)
        .map_or_else(|| station.to_string(), |s| s.name().to_string())
}

/// Build the instruction for riding `line` through `stations`.
///
/// ```text
/// Use the Victoria Line:
///     Embark at: Brixton
///
///     Wait through:
///         - Stockwell
///
///     Disembark at: Vauxhall
/// ```
///
/// The wait-through block is left out when there are no intermediate stops.
pub fn describe_leg(network: &Network, line: LineId, stations: &[StationId]) -> Instruction {
    let names: Vec<String> = stations
        .iter()
        .map(|st| station_name(network, *st))
        .collect();
    let first = names.first().map(String::as_str).unwrap_or_default();
    let last = names.last().map(String::as_str).unwrap_or_default();

    let mut text = format!("Use the {}:\n\tEmbark at: {first}", line_name(network, line));
    if names.len() > 2 {
        text.push_str("\n\n\tWait through:\n");
        let mid: Vec<String> = names[1..names.len() - 1]
            .iter()
            .map(|name| format!("\t\t- {name}"))
            .collect();
        text.push_str(&mid.join("\n"));
    }
    text.push_str("\n\n\tDisembark at: ");
    text.push_str(last);

    Instruction {
        line,
        stations: stations.to_vec(),
        text,
    }
}

/// Marker text for changing from one line to another.
pub fn transfer_marker(network: &Network, from: LineId, to: LineId) -> String {
    format!(
        "Line transfer {} -> {}",
        line_name(network, from),
        line_name(network, to)
    )
}
