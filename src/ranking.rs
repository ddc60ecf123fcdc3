use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use crate::model::{round1, AdjustedTeamRecord};

const BASELINE: &str = "BASELINE";

/// Gap to the leader. Rendered as `BASELINE` for the leader, otherwise as the
/// score difference (one decimal) with a `%` suffix, e.g. `-1.3%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advantage {
    Baseline,
    Behind(f64),
}

impl fmt::Display for Advantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advantage::Baseline => f.write_str(BASELINE),
            Advantage::Behind(gap) => write!(f, "{gap:.1}%"),
        }
    }
}

impl FromStr for Advantage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == BASELINE {
            return Ok(Advantage::Baseline);
        }
        s.strip_suffix('%')
            .and_then(|n| n.parse::<f64>().ok())
            .map(Advantage::Behind)
            .ok_or_else(|| format!("bad advantage: {s:?}"))
    }
}

impl Serialize for Advantage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Advantage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Orders records best first and fills in each advantage.
///
/// The sort is stable, so equal scores keep the order they came in (catalog
/// order when fed straight from the adjustment engine). Only the first record
/// is `BASELINE`; a team tied with it reads `0.0%`.
pub fn rank(mut records: Vec<AdjustedTeamRecord>) -> Vec<AdjustedTeamRecord> {
    records.sort_by(|a, b| b.final_performance.total_cmp(&a.final_performance));

    let Some(top) = records.first().map(|r| r.final_performance) else {
        return records;
    };
    for (i, r) in records.iter_mut().enumerate() {
        r.advantage = Some(if i == 0 {
            Advantage::Baseline
        } else {
            Advantage::Behind(round1(r.final_performance - top))
        });
    }
    records
}
