//! Network construction errors.

use super::{LineId, StationId};

/// Inconsistencies in the records handed to [`super::Network::build`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection names a station that has no record
    #[error("connection on line {line} references unknown station {station}")]
    UnknownStation { station: StationId, line: LineId },

    /// A connection names a line that has no record
    #[error("connection references unknown line {0}")]
    UnknownLine(LineId),
}
