use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::categories::VALID_IDEOLOGIES;
use crate::constants::dataset::{UNKNOWN_REGION, UNPARSEABLE_YEAR_MSG};
use crate::constants::regimes::{REGIME_NO, REGIME_NO_DATA, REGIME_YES};

pub use crate::types::{EntityName, RawText, RegionName, Year};

/// Normalized democracy indicator for one observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegimeFlag {
    /// Democracy.
    #[serde(rename = "yes")]
    Yes,
    /// Non-democracy.
    #[serde(rename = "no")]
    No,
    /// No usable indicator in the source row.
    #[serde(rename = "no data")]
    NoData,
}

impl RegimeFlag {
    /// Normalize a raw indicator cell. Anything other than a case-insensitive
    /// `yes`/`no` maps to [`RegimeFlag::NoData`].
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_lowercase()).as_deref() {
            Some(REGIME_YES) => Self::Yes,
            Some(REGIME_NO) => Self::No,
            _ => Self::NoData,
        }
    }

    /// Parse a selection value into a flag, rejecting unrecognized input.
    ///
    /// Unlike [`RegimeFlag::normalize`], unknown values return `None` so a
    /// garbage selection cannot accidentally match `no data` rows.
    pub fn from_selection_value(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            REGIME_YES => Some(Self::Yes),
            REGIME_NO => Some(Self::No),
            REGIME_NO_DATA => Some(Self::NoData),
            _ => None,
        }
    }

    /// Canonical string form of the flag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => REGIME_YES,
            Self::No => REGIME_NO,
            Self::NoData => REGIME_NO_DATA,
        }
    }
}

/// Political ideology classification of a leader (closed three-value set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ideology {
    /// Leftist leadership.
    Leftist,
    /// Centrist leadership.
    Centrist,
    /// Rightist leadership.
    Rightist,
}

impl Ideology {
    /// Canonical ordering used for multi-category series and option lists.
    pub const ALL: [Ideology; 3] = [Ideology::Leftist, Ideology::Centrist, Ideology::Rightist];

    /// Parse an exact lowercase category value; unrecognized values are
    /// rejected rather than coerced.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            v if v == VALID_IDEOLOGIES[0] => Some(Self::Leftist),
            v if v == VALID_IDEOLOGIES[1] => Some(Self::Centrist),
            v if v == VALID_IDEOLOGIES[2] => Some(Self::Rightist),
            _ => None,
        }
    }

    /// Canonical lowercase string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Leftist => "leftist",
            Self::Centrist => "centrist",
            Self::Rightist => "rightist",
        }
    }

    /// Capitalized form used in summary displays.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Leftist => "Leftist",
            Self::Centrist => "Centrist",
            Self::Rightist => "Rightist",
        }
    }
}

/// Opaque detail fields carried through unmodified for summary display.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LeaderDetails {
    /// Head-of-government name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hog: Option<RawText>,
    /// Head-of-government party, original language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hog_party: Option<RawText>,
    /// Head-of-government party, English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hog_party_eng: Option<RawText>,
    /// Leader name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<RawText>,
    /// Leader party, original language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_party: Option<RawText>,
    /// Leader party, English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_party_eng: Option<RawText>,
    /// Left-leaning flag (1.0 when set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hog_left: Option<f64>,
    /// Center-leaning flag (1.0 when set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hog_center: Option<f64>,
    /// Right-leaning flag (1.0 when set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hog_right: Option<f64>,
}

/// One normalized observation of a leader in an entity and period.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeaderRecord {
    /// Entity (country) name; empty when the source row had none.
    pub entity: EntityName,
    /// Observation year; `None` when the source cell was missing or unparseable.
    pub period: Option<Year>,
    /// Region grouping, never empty (defaulted when missing).
    pub region: RegionName,
    /// Normalized democracy indicator.
    pub regime: RegimeFlag,
    /// Raw indicator text retained for display fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regime_raw: Option<RawText>,
    /// Category when the raw cell belongs to the closed set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideology: Option<Ideology>,
    /// Display-only detail fields.
    #[serde(default)]
    pub details: LeaderDetails,
}

/// Pre-normalization row shape supplied by the hosting layer.
///
/// All fields are optional; absent cells arrive as `None`. How the rows were
/// read (CSV, parquet, anything else) is the hosting layer's concern.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLeaderRow {
    /// Entity (country) name.
    pub country_name: Option<RawText>,
    /// Observation year cell, possibly non-numeric.
    pub year: Option<RawText>,
    /// Region grouping.
    pub region: Option<RawText>,
    /// Raw democracy indicator.
    pub democracy: Option<RawText>,
    /// Raw ideology cell.
    pub hog_ideology: Option<RawText>,
    /// Head-of-government name.
    pub hog: Option<RawText>,
    /// Head-of-government party, original language.
    pub hog_party: Option<RawText>,
    /// Head-of-government party, English.
    pub hog_party_eng: Option<RawText>,
    /// Leader name.
    pub leader: Option<RawText>,
    /// Leader party, original language.
    pub leader_party: Option<RawText>,
    /// Leader party, English.
    pub leader_party_eng: Option<RawText>,
    /// Left-leaning flag.
    pub hog_left: Option<f64>,
    /// Center-leaning flag.
    pub hog_center: Option<f64>,
    /// Right-leaning flag.
    pub hog_right: Option<f64>,
}

impl LeaderRecord {
    /// Normalize one raw row: lowercase and validate the category, coerce the
    /// year, default the region, and fold the regime indicator into its
    /// closed set while keeping the raw text for display fallback.
    pub fn from_raw(row: RawLeaderRow) -> Self {
        let ideology = row
            .hog_ideology
            .as_deref()
            .and_then(|cell| Ideology::parse(&cell.trim().to_lowercase()));
        let period = row.year.as_deref().and_then(parse_year);
        let region = match row.region {
            Some(ref value) if !value.trim().is_empty() => value.clone(),
            _ => UNKNOWN_REGION.to_string(),
        };
        Self {
            entity: row.country_name.unwrap_or_default(),
            period,
            region,
            regime: RegimeFlag::normalize(row.democracy.as_deref()),
            regime_raw: row.democracy,
            ideology,
            details: LeaderDetails {
                hog: row.hog,
                hog_party: row.hog_party,
                hog_party_eng: row.hog_party_eng,
                leader: row.leader,
                leader_party: row.leader_party,
                leader_party_eng: row.leader_party_eng,
                hog_left: row.hog_left,
                hog_center: row.hog_center,
                hog_right: row.hog_right,
            },
        }
    }
}

/// Coerce a raw year cell to an integer year.
///
/// Accepts integral text (`"1990"`) and integral floats (`"1990.0"`); anything
/// else is treated as absent.
pub fn parse_year(raw: &str) -> Option<Year> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(year) = trimmed.parse::<Year>() {
        return Some(year);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 => {
            Some(value as Year)
        }
        _ => {
            debug!(cell = trimmed, "{UNPARSEABLE_YEAR_MSG}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_normalize_folds_unknown_values_to_no_data() {
        assert_eq!(RegimeFlag::normalize(Some(" Yes ")), RegimeFlag::Yes);
        assert_eq!(RegimeFlag::normalize(Some("NO")), RegimeFlag::No);
        assert_eq!(RegimeFlag::normalize(Some("democracy")), RegimeFlag::NoData);
        assert_eq!(RegimeFlag::normalize(Some("")), RegimeFlag::NoData);
        assert_eq!(RegimeFlag::normalize(None), RegimeFlag::NoData);
    }

    #[test]
    fn regime_selection_values_reject_garbage() {
        assert_eq!(
            RegimeFlag::from_selection_value("yes"),
            Some(RegimeFlag::Yes)
        );
        assert_eq!(
            RegimeFlag::from_selection_value("No Data"),
            Some(RegimeFlag::NoData)
        );
        assert_eq!(RegimeFlag::from_selection_value("anything"), None);
    }

    #[test]
    fn ideology_parse_is_exact() {
        assert_eq!(Ideology::parse("leftist"), Some(Ideology::Leftist));
        assert_eq!(Ideology::parse("Leftist"), None);
        assert_eq!(Ideology::parse("anarchist"), None);
    }

    #[test]
    fn parse_year_accepts_integral_floats() {
        assert_eq!(parse_year("1990"), Some(1990));
        assert_eq!(parse_year(" 1990.0 "), Some(1990));
        assert_eq!(parse_year("1990.5"), None);
        assert_eq!(parse_year("n/a"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn from_raw_defaults_region_and_keeps_raw_regime() {
        let record = LeaderRecord::from_raw(RawLeaderRow {
            country_name: Some("France".into()),
            year: Some("1990".into()),
            democracy: Some(" YES ".into()),
            hog_ideology: Some("Rightist".into()),
            ..RawLeaderRow::default()
        });
        assert_eq!(record.entity, "France");
        assert_eq!(record.period, Some(1990));
        assert_eq!(record.region, "Unknown");
        assert_eq!(record.regime, RegimeFlag::Yes);
        assert_eq!(record.regime_raw.as_deref(), Some(" YES "));
        assert_eq!(record.ideology, Some(Ideology::Rightist));
    }
}
