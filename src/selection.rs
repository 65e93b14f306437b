use serde::{Deserialize, Serialize};

use crate::constants::selection::ALL_REGIONS_SENTINEL;
use crate::filter::FilterValue;
use crate::record::{Ideology, RegimeFlag};
use crate::types::{RawText, RegionName, Year};

/// Snapshot of the user's selections for one update cycle.
///
/// The hosting layer fills this from its controls on every interaction and
/// hands it to the resolvers; nothing here is retained between cycles.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Raw region selection; may contain the `all` sentinel.
    pub regions: Vec<RegionName>,
    /// Regime selection; `None` until the control has been touched at all.
    /// `Some(vec![])` means "touched, nothing selected" and is a distinct
    /// state for both gating and filtering.
    pub regimes: Option<Vec<RawText>>,
    /// Raw category selection, unvalidated.
    pub ideologies: Vec<RawText>,
    /// Year slider value.
    pub year: Option<Year>,
    /// True once the year control has been explicitly interacted with,
    /// as opposed to still holding its default value.
    pub year_confirmed: bool,
}

impl Selection {
    /// Whether any raw region value was selected (sentinel included).
    pub fn has_region_selection(&self) -> bool {
        !self.regions.is_empty()
    }

    /// Region constraint after sentinel resolution.
    pub fn region_filter(&self) -> FilterValue<RegionName> {
        resolve_regions(&self.regions)
    }

    /// Regime constraint with tri-state semantics preserved.
    pub fn regime_filter(&self) -> FilterValue<RegimeFlag> {
        resolve_regimes(self.regimes.as_deref())
    }

    /// Category selection reduced to the closed set.
    pub fn resolved_ideologies(&self) -> Vec<Ideology> {
        resolve_ideologies(&self.ideologies)
    }

    /// Category constraint built from the resolved selection.
    pub fn ideology_filter(&self) -> FilterValue<Ideology> {
        FilterValue::from_subset(self.resolved_ideologies())
    }
}

/// Resolve a raw region selection into a constraint.
///
/// An empty selection or one containing the `all` sentinel lifts the
/// constraint entirely; anything else is kept literally.
pub fn resolve_regions(selection: &[RegionName]) -> FilterValue<RegionName> {
    if selection.is_empty()
        || selection
            .iter()
            .any(|value| value.as_str() == ALL_REGIONS_SENTINEL)
    {
        FilterValue::Unset
    } else {
        FilterValue::Subset(selection.to_vec())
    }
}

/// Reduce a raw category selection to the closed set, dropping unrecognized
/// values silently and deduplicating while preserving selection order.
pub fn resolve_ideologies(selection: &[RawText]) -> Vec<Ideology> {
    let mut resolved = Vec::new();
    for value in selection {
        if let Some(ideology) = Ideology::parse(value) {
            if !resolved.contains(&ideology) {
                resolved.push(ideology);
            }
        }
    }
    resolved
}

/// Resolve a regime selection into a constraint, keeping the untouched/touched
/// distinction: `None` lifts the constraint, `Some` activates it even when no
/// recognized value remains.
pub fn resolve_regimes(selection: Option<&[RawText]>) -> FilterValue<RegimeFlag> {
    match selection {
        None => FilterValue::Unset,
        Some(values) => FilterValue::from_subset(
            values
                .iter()
                .filter_map(|value| RegimeFlag::from_selection_value(value))
                .collect(),
        ),
    }
}
