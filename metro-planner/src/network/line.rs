//! Rail line records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a rail line in the source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u32);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rail line: a named, coloured set of station adjacencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RailLine {
    id: LineId,
    name: String,
    color: String,
    stripe: String,
}

impl RailLine {
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        stripe: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            stripe: stripe.into(),
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hex colour as given by the source, e.g. `"AE6017"`.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Secondary stripe colour, `"NULL"` in the source when there is none.
    pub fn stripe(&self) -> &str {
        &self.stripe
    }
}

impl fmt::Display for RailLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_display() {
        let line = RailLine::new(LineId(1), "Bakerloo Line", "AE6017", "NULL");
        assert_eq!(line.id(), LineId(1));
        assert_eq!(line.name(), "Bakerloo Line");
        assert_eq!(line.color(), "AE6017");
        assert_eq!(line.stripe(), "NULL");
        assert_eq!(line.to_string(), "Bakerloo Line");
    }
}
