use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::stage::TERMINAL_STAGE;
use crate::dataset::Dataset;
use crate::filter::{apply_multi_filter, FilterValue};
use crate::record::{Ideology, LeaderRecord, RegimeFlag};
use crate::selection::Selection;
use crate::stage::{compute_stage, stage_label, StageSignals};
use crate::types::{EntityName, RegionName, Stage, StageLabel};

/// One entity's categorical assignment in a full map result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoroplethRow {
    /// Entity to color.
    pub entity: EntityName,
    /// Category driving the color.
    pub ideology: Ideology,
}

/// Derived map artifact handed back to the rendering layer.
///
/// `fit_to_selection` is true iff a region subset is active; only the region
/// filter affects framing of the rendered view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapArtifact {
    /// Full categorical per-entity assignment restricted to one year.
    /// May be empty: "no matching entities" is a valid terminal state.
    Choropleth {
        /// Entities with their category assignments.
        rows: Vec<ChoroplethRow>,
        /// Fit the view to the matching entities instead of the full extent.
        fit_to_selection: bool,
    },
    /// Undifferentiated single-color progress set, tagged with the stage that
    /// produced it.
    Highlight {
        /// Disclosure stage the highlight reflects.
        stage: Stage,
        /// Render label, e.g. `stage_2`.
        label: StageLabel,
        /// Entities qualifying so far, one entry per entity.
        entities: Vec<EntityName>,
        /// Fit the view to the matching entities instead of the full extent.
        fit_to_selection: bool,
    },
    /// Nothing to draw.
    Blank,
}

/// Resolve the partial highlight for a stage below the terminal one.
///
/// Each stage increment narrows which entities qualify so far, independent of
/// period: region restriction always, the regime filter from stage 2, the
/// category filter from stage 3. The result carries one row per entity
/// (first occurrence; only entity identity is consumed downstream).
pub fn prepare_stage_highlight(
    records: &[LeaderRecord],
    stage: Stage,
    regions: &FilterValue<RegionName>,
    regimes: &FilterValue<RegimeFlag>,
    ideologies: &[Ideology],
    has_region_selection: bool,
) -> Vec<LeaderRecord> {
    if stage == 0 || !has_region_selection {
        return Vec::new();
    }

    let mut subset = apply_multi_filter(records.to_vec(), regions, |r| Some(&r.region));
    if stage >= 2 {
        subset = apply_multi_filter(subset, regimes, |r| Some(&r.regime));
    }
    if stage >= 3 {
        let ideology_filter = FilterValue::from_subset(ideologies.to_vec());
        subset = apply_multi_filter(subset, &ideology_filter, |r| r.ideology.as_ref());
    }

    let mut seen = HashSet::new();
    subset.retain(|record| seen.insert(record.entity.clone()));
    subset
}

/// Decide what the map should show for the current selection.
///
/// At the terminal stage the fully filtered entity-period view is restricted
/// to the confirmed year and returned as a categorical result, even when
/// empty. Below it, the stage highlight is returned; an empty highlight
/// renders as a blank map, not an error.
pub fn resolve_map(dataset: &Dataset, selection: &Selection) -> MapArtifact {
    let regions = selection.region_filter();
    let regimes = selection.regime_filter();
    let ideologies = selection.resolved_ideologies();
    let stage = compute_stage(&StageSignals::from_selection(selection));
    let fit_to_selection = !regions.is_unset();
    debug!(stage, fit_to_selection, "resolving map artifact");

    if stage == TERMINAL_STAGE {
        let mut filtered = apply_multi_filter(dataset.entity_period().to_vec(), &regions, |r| {
            Some(&r.region)
        });
        filtered = apply_multi_filter(filtered, &regimes, |r| Some(&r.regime));
        let ideology_filter = FilterValue::from_subset(ideologies);
        filtered = apply_multi_filter(filtered, &ideology_filter, |r| r.ideology.as_ref());
        if let Some(year) = selection.year {
            filtered.retain(|record| record.period == Some(year));
        }
        let rows = filtered
            .into_iter()
            .filter_map(|record| {
                record.ideology.map(|ideology| ChoroplethRow {
                    entity: record.entity,
                    ideology,
                })
            })
            .collect();
        return MapArtifact::Choropleth {
            rows,
            fit_to_selection,
        };
    }

    let highlight = prepare_stage_highlight(
        dataset.entity_period(),
        stage,
        &regions,
        &regimes,
        &ideologies,
        selection.has_region_selection(),
    );
    if highlight.is_empty() {
        MapArtifact::Blank
    } else {
        MapArtifact::Highlight {
            stage,
            label: stage_label(stage),
            entities: highlight.into_iter().map(|record| record.entity).collect(),
            fit_to_selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LeaderDetails;

    fn record(entity: &str, region: &str, regime: RegimeFlag, ideology: Ideology) -> LeaderRecord {
        LeaderRecord {
            entity: entity.to_string(),
            period: Some(1990),
            region: region.to_string(),
            regime,
            regime_raw: None,
            ideology: Some(ideology),
            details: LeaderDetails::default(),
        }
    }

    #[test]
    fn highlight_is_empty_at_stage_zero_or_without_region_selection() {
        let records = vec![record("France", "Europe", RegimeFlag::Yes, Ideology::Leftist)];
        let regions = FilterValue::<String>::Unset;
        let regimes = FilterValue::<RegimeFlag>::Unset;
        assert!(prepare_stage_highlight(&records, 0, &regions, &regimes, &[], true).is_empty());
        assert!(prepare_stage_highlight(&records, 2, &regions, &regimes, &[], false).is_empty());
    }

    #[test]
    fn highlight_applies_filters_progressively() {
        let records = vec![
            record("France", "Europe", RegimeFlag::Yes, Ideology::Leftist),
            record("Belarus", "Europe", RegimeFlag::No, Ideology::Leftist),
            record("Japan", "Asia", RegimeFlag::Yes, Ideology::Centrist),
        ];
        let regions = FilterValue::Subset(vec!["Europe".to_string()]);
        let regimes = FilterValue::Subset(vec![RegimeFlag::Yes]);

        // Stage 1: region restriction only; the regime filter is not yet live.
        let stage_one = prepare_stage_highlight(&records, 1, &regions, &regimes, &[], true);
        assert_eq!(stage_one.len(), 2);

        let stage_two = prepare_stage_highlight(&records, 2, &regions, &regimes, &[], true);
        assert_eq!(stage_two.len(), 1);
        assert_eq!(stage_two[0].entity, "France");
    }

    #[test]
    fn highlight_keeps_one_row_per_entity() {
        let mut records = vec![
            record("France", "Europe", RegimeFlag::Yes, Ideology::Leftist),
            record("France", "Europe", RegimeFlag::Yes, Ideology::Rightist),
        ];
        records[1].period = Some(1991);
        let regions = FilterValue::Subset(vec!["Europe".to_string()]);
        let highlight =
            prepare_stage_highlight(&records, 1, &regions, &FilterValue::Unset, &[], true);
        assert_eq!(highlight.len(), 1);
        assert_eq!(highlight[0].ideology, Some(Ideology::Leftist));
    }
}
