use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::{Ideology, LeaderRecord};
use crate::selection::resolve_ideologies;
use crate::types::{RawText, Year};

/// Count of matching rows in one year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Year the count belongs to.
    pub year: Year,
    /// Number of matching rows in that year.
    pub count: usize,
}

/// Count-by-year series for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Category the series counts.
    pub ideology: Ideology,
    /// Per-year counts, ascending by year. Empty when no row matched.
    pub points: Vec<TrendPoint>,
}

/// Derived trend artifact: zero, one, or multiple series.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendArtifact {
    /// One series per resolved category, in canonical category order.
    pub series: Vec<TrendSeries>,
}

impl TrendArtifact {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Aggregate an already region/regime-filtered record set into per-year
/// counts, split by category when several categories are selected.
///
/// Independent of the disclosure stage: the trend always reflects the current
/// selections directly. Rows without a year are excluded from the grouping.
/// Categories that resolve but match no rows keep an empty series so callers
/// can still tell which categories are active.
pub fn aggregate_trend(records: &[LeaderRecord], raw_selection: &[RawText]) -> TrendArtifact {
    let resolved = resolve_ideologies(raw_selection);
    if resolved.is_empty() {
        return TrendArtifact::default();
    }

    let mut counts: HashMap<(Ideology, Year), usize> = HashMap::new();
    for record in records {
        let (Some(ideology), Some(year)) = (record.ideology, record.period) else {
            continue;
        };
        if resolved.contains(&ideology) {
            *counts.entry((ideology, year)).or_insert(0) += 1;
        }
    }

    let series = Ideology::ALL
        .into_iter()
        .filter(|ideology| resolved.contains(ideology))
        .map(|ideology| {
            let mut points: Vec<TrendPoint> = counts
                .iter()
                .filter(|((i, _), _)| *i == ideology)
                .map(|((_, year), count)| TrendPoint {
                    year: *year,
                    count: *count,
                })
                .collect();
            points.sort_by_key(|point| point.year);
            TrendSeries { ideology, points }
        })
        .collect();

    TrendArtifact { series }
}
