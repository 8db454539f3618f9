use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Weight axis a query optimizes for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightDimension {
    Distance,
    Time,
    Cost,
}

impl WeightDimension {
    pub const ALL: [WeightDimension; 3] = [Self::Distance, Self::Time, Self::Cost];

    pub fn name(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
            Self::Cost => "cost",
        }
    }
}

impl FromStr for WeightDimension {
    type Err = Error;

    /// Case-insensitive, surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| Error::InvalidWeightDimension(s.to_string()))
    }
}

impl fmt::Display for WeightDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
