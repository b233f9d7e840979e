//! Row types for the source tables.

use serde::Deserialize;

use crate::network::{Connection, LineId, RailLine, Station, StationId};

/// Marker the source uses for an absent value.
const NULL: &str = "NULL";

/// A row of the line table.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct LineRecord {
    line: u32,
    name: String,
    colour: String,
    stripe: String,
}

impl LineRecord {
    pub(super) fn into_line(self) -> RailLine {
        RailLine::new(LineId(self.line), self.name, self.colour, self.stripe)
    }
}

/// A row of the station table.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct StationRecord {
    id: u32,
    latitude: f64,
    longitude: f64,
    name: String,
    display_name: String,
    zone: String,
    total_lines: u32,
    rail: u32,
}

impl StationRecord {
    pub(super) fn into_station(self) -> Station {
        let display_name = display_name(&self.display_name);
        let station = Station::new(StationId(self.id), self.name, self.longitude, self.latitude)
            .with_zone(self.zone)
            .with_total_lines(self.total_lines)
            .with_rail(self.rail);
        match display_name {
            Some(label) => station.with_display_name(label),
            None => station,
        }
    }
}

/// Map label from the source: `NULL` means "use the name", and `<br />`
/// marks a line break.
fn display_name(raw: &str) -> Option<String> {
    if raw == NULL {
        return None;
    }
    Some(raw.replace("<br />", "\n"))
}

/// A row of the route table.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(super) struct RouteRecord {
    station1: u32,
    station2: u32,
    line: u32,
}

impl RouteRecord {
    pub(super) fn into_connection(self) -> Connection {
        Connection::new(
            StationId(self.station1),
            StationId(self.station2),
            LineId(self.line),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_display_name_uses_name() {
        assert_eq!(display_name("NULL"), None);
        assert_eq!(display_name("Bank"), Some("Bank".to_string()));
    }

    #[test]
    fn br_tags_become_newlines() {
        assert_eq!(
            display_name("King's Cross<br />St. Pancras"),
            Some("King's Cross\nSt. Pancras".to_string())
        );
    }

    #[test]
    fn station_record_swaps_coordinates() {
        let record = StationRecord {
            id: 1,
            latitude: 51.5028,
            longitude: -0.2801,
            name: "Acton Town".to_string(),
            display_name: "Acton<br />Town".to_string(),
            zone: "3".to_string(),
            total_lines: 2,
            rail: 0,
        };
        let station = record.into_station();
        assert_eq!(station.id(), StationId(1));
        assert_eq!(station.coords(), (-0.2801, 51.5028));
        assert_eq!(station.name(), "Acton Town");
        assert_eq!(station.display_name(), "Acton\nTown");
        assert_eq!(station.zone(), "3");
        assert_eq!(station.total_lines(), 2);
    }
}
