//! Dataset loading errors.

use std::path::PathBuf;

use crate::network::NetworkError;

/// Errors that can occur while reading the source tables.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A table file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table has a malformed header or row
    #[error("malformed {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    /// The tables are inconsistent with each other
    #[error("inconsistent dataset: {0}")]
    Network(#[from] NetworkError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::LineId;

    #[test]
    fn error_display() {
        let err = DatasetError::Io {
            path: PathBuf::from("datasets/lines.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to open datasets/lines.csv: not found"
        );

        let err = DatasetError::from(NetworkError::UnknownLine(LineId(4)));
        assert_eq!(
            err.to_string(),
            "inconsistent dataset: connection references unknown line 4"
        );
    }
}
