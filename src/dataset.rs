use indexmap::IndexMap;
use tracing::debug;

use crate::constants::dataset::OUT_OF_SET_CATEGORY_MSG;
use crate::record::{LeaderRecord, RawLeaderRow};
use crate::types::{EntityName, RegionName, Year};

/// Load-once, read-only dataset handle.
///
/// Both views are derived a single time from the raw rows and never mutated;
/// every filter operation downstream returns a new collection. The *full*
/// view keeps one record per input row with any category value. The
/// *entity-period* view is restricted to the closed category set and
/// deduplicated to at most one row per (entity, period), keeping the
/// last-seen row.
#[derive(Clone, Debug)]
pub struct Dataset {
    full: Vec<LeaderRecord>,
    entity_period: Vec<LeaderRecord>,
    years: Vec<Year>,
    regions: Vec<RegionName>,
    year_marks: IndexMap<Year, String>,
}

impl Dataset {
    /// Build both views from raw rows supplied by the hosting layer.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawLeaderRow>,
    {
        let full: Vec<LeaderRecord> = rows.into_iter().map(LeaderRecord::from_raw).collect();

        let mut deduped: IndexMap<(EntityName, Option<Year>), LeaderRecord> = IndexMap::new();
        let mut out_of_set = 0usize;
        for record in &full {
            if record.ideology.is_none() {
                out_of_set += 1;
                continue;
            }
            deduped.insert((record.entity.clone(), record.period), record.clone());
        }
        if out_of_set > 0 {
            debug!(rows = out_of_set, "{OUT_OF_SET_CATEGORY_MSG}");
        }
        let entity_period: Vec<LeaderRecord> = deduped.into_values().collect();

        let mut years: Vec<Year> = entity_period.iter().filter_map(|r| r.period).collect();
        years.sort_unstable();
        years.dedup();

        let mut regions: Vec<RegionName> = full.iter().map(|r| r.region.clone()).collect();
        regions.sort();
        regions.dedup();

        let year_marks = build_year_marks(&years);
        debug!(
            full = full.len(),
            entity_period = entity_period.len(),
            years = years.len(),
            "dataset views built"
        );

        Self {
            full,
            entity_period,
            years,
            regions,
            year_marks,
        }
    }

    /// Full view: one record per usable input row, all periods, any category.
    pub fn full(&self) -> &[LeaderRecord] {
        &self.full
    }

    /// Entity-period view: closed-set categories, one row per (entity, period).
    pub fn entity_period(&self) -> &[LeaderRecord] {
        &self.entity_period
    }

    /// Sorted unique years present in the entity-period view.
    pub fn available_years(&self) -> &[Year] {
        &self.years
    }

    /// Earliest available year, if any row carried one.
    pub fn min_year(&self) -> Option<Year> {
        self.years.first().copied()
    }

    /// Latest available year, if any row carried one.
    pub fn max_year(&self) -> Option<Year> {
        self.years.last().copied()
    }

    /// Slider mark labels: first year, last year, and every decade year.
    pub fn year_marks(&self) -> &IndexMap<Year, String> {
        &self.year_marks
    }

    /// Sorted unique region names across the full view.
    pub fn regions(&self) -> &[RegionName] {
        &self.regions
    }
}

/// Build slider marks from sorted available years: the endpoints plus every
/// year divisible by ten.
pub fn build_year_marks(years: &[Year]) -> IndexMap<Year, String> {
    let mut marks = IndexMap::new();
    let (Some(&first), Some(&last)) = (years.first(), years.last()) else {
        return marks;
    };
    for &year in years {
        if year == first || year == last || year % 10 == 0 {
            marks.insert(year, year.to_string());
        }
    }
    marks
}
