//! Rail network model.
//!
//! Turns line, station and adjacency records into two layers of graphs:
//! one subgraph per line (stations as vertices, geographic distance as
//! weight) and a supergraph with lines as vertices, where each edge carries
//! every station the two lines share.
//!
//! The network is built once and read-only afterwards, so a `&Network` can be
//! shared freely between planners.

mod error;
mod line;
mod station;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::graph::Graph;

pub use error::NetworkError;
pub use line::{LineId, RailLine};
pub use station::{Station, StationId};

/// Per-line graph: stations joined by their straight-line distance.
pub type LineGraph = Graph<StationId, f64>;

/// Line graph: lines joined by the stations they share.
pub type Supergraph = Graph<LineId, Vec<StationId>>;

/// Two stations adjacent on a line, in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub a: StationId,
    pub b: StationId,
    pub line: LineId,
}

impl Connection {
    pub fn new(a: StationId, b: StationId, line: LineId) -> Self {
        Self { a, b, line }
    }
}

/// Bounding box of every station's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

/// The rail network and its derived graphs.
#[derive(Debug, Clone)]
pub struct Network {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, RailLine>,
    subgraphs: BTreeMap<LineId, LineGraph>,
    supergraph: Supergraph,
    station_lines: BTreeMap<StationId, BTreeSet<LineId>>,
    line_stations: BTreeMap<LineId, BTreeSet<StationId>>,
    interchanges: BTreeSet<StationId>,
}

impl Network {
    /// Build every subgraph, the interchange set and the supergraph.
    ///
    /// Every line gets a subgraph, even one with no connections. Every
    /// connection becomes a pair of directed edges.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a connection refers to a line or station with no
    /// record.
    pub fn build(
        lines: BTreeMap<LineId, RailLine>,
        stations: BTreeMap<StationId, Station>,
        connections: impl IntoIterator<Item = Connection>,
    ) -> Result<Self, NetworkError> {
        let mut subgraphs: BTreeMap<LineId, LineGraph> =
            lines.keys().map(|id| (*id, Graph::new())).collect();
        let mut station_lines: BTreeMap<StationId, BTreeSet<LineId>> =
            stations.keys().map(|id| (*id, BTreeSet::new())).collect();
        let mut line_stations: BTreeMap<LineId, BTreeSet<StationId>> =
            lines.keys().map(|id| (*id, BTreeSet::new())).collect();

        for conn in connections {
            let graph = subgraphs
                .get_mut(&conn.line)
                .ok_or(NetworkError::UnknownLine(conn.line))?;
            let unknown = |station| NetworkError::UnknownStation {
                station,
                line: conn.line,
            };
            let a = stations.get(&conn.a).ok_or_else(|| unknown(conn.a))?;
            let b = stations.get(&conn.b).ok_or_else(|| unknown(conn.b))?;

            let dist = a.distance_to(b);
            graph.set_edge(conn.a, conn.b, dist);
            graph.set_edge(conn.b, conn.a, dist);

            for station in [conn.a, conn.b] {
                station_lines.entry(station).or_default().insert(conn.line);
                line_stations.entry(conn.line).or_default().insert(station);
            }
        }

        let interchanges: BTreeSet<StationId> = station_lines
            .iter()
            .filter(|(_, served_by)| served_by.len() > 1)
            .map(|(station, _)| *station)
            .collect();

        let mut supergraph = Supergraph::new();
        for station in &interchanges {
            let served_by: Vec<LineId> = station_lines[station].iter().copied().collect();
            for (i, first) in served_by.iter().enumerate() {
                for second in &served_by[i + 1..] {
                    for (src, dst) in [(*first, *second), (*second, *first)] {
                        supergraph
                            .insert_vertex(src)
                            .entry(dst)
                            .or_default()
                            .push(*station);
                    }
                }
            }
            trace!(station = %station, lines = served_by.len(), "interchange");
        }

        for (line, graph) in &subgraphs {
            trace!(line = %line, stations = graph.vertex_count(), "line subgraph built");
        }
        debug!(
            lines = lines.len(),
            stations = stations.len(),
            interchanges = interchanges.len(),
            line_links = supergraph.iter_edges().count() / 2,
            "network built"
        );

        Ok(Self {
            stations,
            lines,
            subgraphs,
            supergraph,
            station_lines,
            line_stations,
            interchanges,
        })
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn line(&self, id: LineId) -> Option<&RailLine> {
        self.lines.get(&id)
    }

    pub fn stations(&self) -> &BTreeMap<StationId, Station> {
        &self.stations
    }

    pub fn lines(&self) -> &BTreeMap<LineId, RailLine> {
        &self.lines
    }

    /// The subgraph of `line`, if the line exists.
    pub fn subgraph(&self, line: LineId) -> Option<&LineGraph> {
        self.subgraphs.get(&line)
    }

    pub fn subgraphs(&self) -> &BTreeMap<LineId, LineGraph> {
        &self.subgraphs
    }

    pub fn supergraph(&self) -> &Supergraph {
        &self.supergraph
    }

    /// Stations served by more than one line.
    pub fn interchanges(&self) -> &BTreeSet<StationId> {
        &self.interchanges
    }

    pub fn is_interchange(&self, station: StationId) -> bool {
        self.interchanges.contains(&station)
    }

    /// Lines that call at `station`. Empty for unknown stations.
    pub fn lines_serving(&self, station: StationId) -> &BTreeSet<LineId> {
        static NONE: BTreeSet<LineId> = BTreeSet::new();
        self.station_lines.get(&station).unwrap_or(&NONE)
    }

    /// Stations that `line` calls at. Empty for unknown lines.
    pub fn stations_on(&self, line: LineId) -> &BTreeSet<StationId> {
        static NONE: BTreeSet<StationId> = BTreeSet::new();
        self.line_stations.get(&line).unwrap_or(&NONE)
    }

    /// Stations shared by two lines.
    pub fn shared_stations(&self, first: LineId, second: LineId) -> BTreeSet<StationId> {
        self.stations_on(first)
            .intersection(self.stations_on(second))
            .copied()
            .collect()
    }

    /// Find a station by numeric id or by case-insensitive name.
    pub fn find_station(&self, query: &str) -> Option<&Station> {
        let query = query.trim();
        if let Ok(id) = query.parse::<u32>() {
            if let Some(station) = self.station(StationId(id)) {
                return Some(station);
            }
        }
        self.stations
            .values()
            .find(|st| st.name().eq_ignore_ascii_case(query))
    }

    /// Coordinate bounds over every station, or `None` for an empty network.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut coords = self.stations.values().map(Station::coords);
        let (lon, lat) = coords.next()?;
        let init = Bounds {
            min_lon: lon,
            min_lat: lat,
            max_lon: lon,
            max_lat: lat,
        };
        Some(coords.fold(init, |b, (lon, lat)| Bounds {
            min_lon: b.min_lon.min(lon),
            min_lat: b.min_lat.min(lat),
            max_lon: b.max_lon.max(lon),
            max_lat: b.max_lat.max(lat),
        }))
    }
}

/// Small hand-built networks shared by tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub const RED: LineId = LineId(1);
    pub const BLUE: LineId = LineId(2);
    pub const GREEN: LineId = LineId(3);
    pub const YELLOW: LineId = LineId(4);

    pub const A: StationId = StationId(1);
    pub const B: StationId = StationId(2);
    pub const C: StationId = StationId(3);
    pub const D: StationId = StationId(4);
    pub const E: StationId = StationId(5);
    pub const F: StationId = StationId(6);
    pub const G: StationId = StationId(7);
    pub const H: StationId = StationId(8);
    pub const I: StationId = StationId(9);
    pub const J: StationId = StationId(10);
    pub const K: StationId = StationId(11);

    /// Red:    A - B - C - D
    /// Blue:           C - E - F
    /// Green:                  F - G - H
    /// Yellow: I - J (isolated)
    /// K is served by no line.
    pub fn three_lines() -> Network {
        let lines = [
            RailLine::new(RED, "Red Line", "FF0000", "NULL"),
            RailLine::new(BLUE, "Blue Line", "0000FF", "NULL"),
            RailLine::new(GREEN, "Green Line", "00FF00", "NULL"),
            RailLine::new(YELLOW, "Yellow Line", "FFFF00", "000000"),
        ]
        .into_iter()
        .map(|l| (l.id(), l))
        .collect();

        let stations = [
            (A, "Alpha", 0.0, 0.0),
            (B, "Bravo", 1.0, 0.0),
            (C, "Charlie", 2.0, 0.0),
            (D, "Delta", 3.0, 0.0),
            (E, "Echo", 2.0, 1.0),
            (F, "Foxtrot", 2.0, 2.0),
            (G, "Golf", 3.0, 2.0),
            (H, "Hotel", 4.0, 2.0),
            (I, "India", 10.0, 10.0),
            (J, "Juliett", 11.0, 10.0),
            (K, "Kilo", 20.0, 20.0),
        ]
        .into_iter()
        .map(|(id, name, x, y)| (id, Station::new(id, name, x, y)))
        .collect();

        let connections = [
            Connection::new(A, B, RED),
            Connection::new(B, C, RED),
            Connection::new(C, D, RED),
            Connection::new(C, E, BLUE),
            Connection::new(E, F, BLUE),
            Connection::new(F, G, GREEN),
            Connection::new(G, H, GREEN),
            Connection::new(I, J, YELLOW),
        ];

        Network::build(lines, stations, connections).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn set<T: Ord, const N: usize>(items: [T; N]) -> BTreeSet<T> {
        items.into()
    }

    #[test]
    fn subgraph_per_line_with_symmetric_distances() {
        let net = three_lines();
        assert_eq!(net.subgraphs().len(), 4);

        let red = net.subgraph(RED).unwrap();
        assert_eq!(red.vertices(), set([A, B, C, D]));
        assert_eq!(red.weight(&A, &B), Some(&1.0));
        assert_eq!(red.weight(&B, &A), Some(&1.0));
        assert!(!red.contains_edge(&A, &C));
        assert!(red.is_connected());

        let blue = net.subgraph(BLUE).unwrap();
        assert_eq!(blue.path_length(&[C, E, F]), Some(2.0));
        assert!(!blue.contains_vertex(&A));
    }

    #[test]
    fn lines_serving_and_stations_on() {
        let net = three_lines();
        assert_eq!(net.lines_serving(C), &set([RED, BLUE]));
        assert_eq!(net.lines_serving(A), &set([RED]));
        assert!(net.lines_serving(K).is_empty());
        assert!(net.lines_serving(StationId(404)).is_empty());
        assert_eq!(net.stations_on(GREEN), &set([F, G, H]));
        assert_eq!(net.shared_stations(RED, BLUE), set([C]));
        assert!(net.shared_stations(RED, GREEN).is_empty());
    }

    #[test]
    fn interchanges_are_multi_line_stations() {
        let net = three_lines();
        assert_eq!(net.interchanges(), &set([C, F]));
        assert!(net.is_interchange(C));
        assert!(!net.is_interchange(A));
    }

    #[test]
    fn supergraph_links_lines_by_shared_stations() {
        let net = three_lines();
        let sg = net.supergraph();

        assert_eq!(sg.vertices(), set([RED, BLUE, GREEN]));
        assert_eq!(sg.weight(&RED, &BLUE), Some(&vec![C]));
        assert_eq!(sg.weight(&BLUE, &RED), Some(&vec![C]));
        assert_eq!(sg.weight(&BLUE, &GREEN), Some(&vec![F]));
        assert!(!sg.contains_edge(&RED, &GREEN));
        assert!(!sg.contains_vertex(&YELLOW));
        assert_eq!(sg.start_search(&RED, &GREEN), vec![RED, BLUE, GREEN]);
    }

    #[test]
    fn supergraph_keeps_every_shared_station() {
        let lines = [
            RailLine::new(LineId(1), "Loop", "111111", "NULL"),
            RailLine::new(LineId(2), "Spur", "222222", "NULL"),
        ]
        .into_iter()
        .map(|l| (l.id(), l))
        .collect();
        let stations = (1..=4)
            .map(|n| {
                let id = StationId(n);
                (id, Station::new(id, format!("S{n}"), f64::from(n), 0.0))
            })
            .collect();
        let connections = [
            Connection::new(StationId(1), StationId(2), LineId(1)),
            Connection::new(StationId(2), StationId(3), LineId(1)),
            Connection::new(StationId(1), StationId(4), LineId(2)),
            Connection::new(StationId(4), StationId(3), LineId(2)),
        ];

        let net = Network::build(lines, stations, connections).unwrap();
        assert_eq!(
            net.supergraph().weight(&LineId(1), &LineId(2)),
            Some(&vec![StationId(1), StationId(3)])
        );
    }

    #[test]
    fn unknown_references_are_rejected() {
        let lines: BTreeMap<_, _> = [(RED, RailLine::new(RED, "Red", "FF0000", "NULL"))].into();
        let stations: BTreeMap<_, _> = [(A, Station::new(A, "Alpha", 0.0, 0.0))].into();

        let err = Network::build(
            lines.clone(),
            stations.clone(),
            [Connection::new(A, B, RED)],
        )
        .unwrap_err();
        assert_eq!(err, NetworkError::UnknownStation { station: B, line: RED });

        let err = Network::build(lines, stations, [Connection::new(A, A, BLUE)]).unwrap_err();
        assert_eq!(err, NetworkError::UnknownLine(BLUE));
    }

    #[test]
    fn find_station_by_id_or_name() {
        let net = three_lines();
        assert_eq!(net.find_station("3").map(Station::id), Some(C));
        assert_eq!(net.find_station("charlie").map(Station::id), Some(C));
        assert_eq!(net.find_station("  Golf ").map(Station::id), Some(G));
        assert!(net.find_station("Zulu").is_none());
        assert!(net.find_station("404").is_none());
    }

    #[test]
    fn bounds_cover_every_station() {
        let net = three_lines();
        assert_eq!(
            net.bounds(),
            Some(Bounds {
                min_lon: 0.0,
                min_lat: 0.0,
                max_lon: 20.0,
                max_lat: 20.0,
            })
        );

        let empty = Network::build(BTreeMap::new(), BTreeMap::new(), []).unwrap();
        assert!(empty.bounds().is_none());
        assert!(empty.supergraph().is_empty());
    }
}
