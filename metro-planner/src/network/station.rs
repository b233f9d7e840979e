//! Station records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a station in the source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station on the network.
///
/// Coordinates are stored as `(longitude, latitude)` so they read as `(x, y)`.
/// Stations are immutable once built; graphs refer to them by [`StationId`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    id: StationId,
    coords: (f64, f64),
    name: String,
    display_name: String,
    zone: String,
    total_lines: u32,
    rail: u32,
}

impl Station {
    /// Create a station. The display name defaults to `name`.
    pub fn new(id: StationId, name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        let name = name.into();
        Self {
            id,
            coords: (longitude, latitude),
            display_name: name.clone(),
            name,
            zone: String::new(),
            total_lines: 0,
            rail: 0,
        }
    }

    /// Set the label used on maps (may contain newlines).
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Set the fare zone.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = zone.into();
        self
    }

    /// Set the number of lines the source dataset claims for this station.
    pub fn with_total_lines(mut self, total_lines: u32) -> Self {
        self.total_lines = total_lines;
        self
    }

    /// Set the source dataset's national-rail flag.
    pub fn with_rail(mut self, rail: u32) -> Self {
        self.rail = rail;
        self
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    /// `(longitude, latitude)`.
    pub fn coords(&self) -> (f64, f64) {
        self.coords
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn rail(&self) -> u32 {
        self.rail
    }

    /// Straight-line distance in coordinate space.
    pub fn distance_to(&self, other: &Station) -> f64 {
        let (x1, y1) = self.coords;
        let (x2, y2) = other.coords;
        (x2 - x1).hypot(y2 - y1)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
