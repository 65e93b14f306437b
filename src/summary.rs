use serde::{Deserialize, Serialize};

use crate::constants::dataset::UNKNOWN_TEXT;
use crate::constants::regimes::{DISPLAY_DEMOCRACY, DISPLAY_NON_DEMOCRACY};
use crate::record::{LeaderRecord, RegimeFlag};
use crate::types::{DisplayText, Year};

/// One labelled display value in a summary card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryField {
    /// Display label, e.g. `Head of Government`.
    pub label: String,
    /// Normalized display value, never empty.
    pub value: DisplayText,
}

/// Structured summary detail for one entity and year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryCard {
    /// Snapshot for a matched row.
    Snapshot {
        /// Labelled fields in display order.
        fields: Vec<SummaryField>,
    },
    /// Nothing matched; the requested entity and year are echoed back so the
    /// hosting layer can render an explicit empty state.
    NotFound {
        /// Requested entity, display-normalized.
        entity: DisplayText,
        /// Requested year, when one was supplied.
        year: Option<Year>,
    },
}

/// Look up a single record by entity and year for detail display.
///
/// Matching is case-insensitive on the entity name (the needle is also
/// trimmed) and exact on the year. A missing entity or year short-circuits to
/// no match; so does an entity that is only whitespace.
pub fn extract_summary_row<'a>(
    records: &'a [LeaderRecord],
    entity: Option<&str>,
    year: Option<Year>,
) -> Option<&'a LeaderRecord> {
    let needle = entity
        .map(str::trim)
        .filter(|value| !value.is_empty())?
        .to_lowercase();
    let year = year?;
    records
        .iter()
        .find(|record| record.period == Some(year) && record.entity.to_lowercase() == needle)
}

/// Build the structured summary card for a lookup result.
pub fn build_summary_card(
    entity: Option<&str>,
    year: Option<Year>,
    row: Option<&LeaderRecord>,
) -> SummaryCard {
    let Some(row) = row else {
        return SummaryCard::NotFound {
            entity: safe_text(entity),
            year,
        };
    };

    let details = &row.details;
    let fields = vec![
        field("Country", safe_text(entity)),
        field("Year", year_text(year)),
        field("Democracy", regime_display(row)),
        field("Political leaning", political_leaning(row)),
        field("Head of Government", safe_text(details.hog.as_deref())),
        field(
            "HoG Party",
            pref_value(details.hog_party_eng.as_deref(), details.hog_party.as_deref()),
        ),
        field("Leader", safe_text(details.leader.as_deref())),
        field(
            "Leader Party",
            pref_value(
                details.leader_party_eng.as_deref(),
                details.leader_party.as_deref(),
            ),
        ),
        field("Region", safe_text(Some(&row.region))),
    ];
    SummaryCard::Snapshot { fields }
}

/// Trimmed display text with an `Unknown` fallback for missing/blank values.
pub fn safe_text(value: Option<&str>) -> DisplayText {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => UNKNOWN_TEXT.to_string(),
    }
}

/// Prefer the primary value (typically the English variant) and fall back to
/// the secondary before giving up to `Unknown`.
pub fn pref_value(primary: Option<&str>, fallback: Option<&str>) -> DisplayText {
    match primary.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => safe_text(fallback),
    }
}

/// Whether a numeric leaning flag is set.
pub fn is_one(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v == 1.0)
}

/// Human regime description. `NoData` rows fall back to interpreting the raw
/// indicator text before giving `Unknown`.
pub fn regime_display(record: &LeaderRecord) -> DisplayText {
    match record.regime {
        RegimeFlag::Yes => DISPLAY_DEMOCRACY.to_string(),
        RegimeFlag::No => DISPLAY_NON_DEMOCRACY.to_string(),
        RegimeFlag::NoData => {
            let raw = record
                .regime_raw
                .as_deref()
                .map(|value| value.trim().to_lowercase());
            match raw.as_deref() {
                Some("1") | Some("yes") | Some("democracy") | Some("true") => {
                    DISPLAY_DEMOCRACY.to_string()
                }
                Some("0") | Some("no") | Some("non-democracy") | Some("false") => {
                    DISPLAY_NON_DEMOCRACY.to_string()
                }
                _ => UNKNOWN_TEXT.to_string(),
            }
        }
    }
}

/// Human leaning description: the explicit flags win (left, center, right
/// order), then the category, then `Unknown`.
pub fn political_leaning(record: &LeaderRecord) -> DisplayText {
    let details = &record.details;
    if is_one(details.hog_left) {
        return "Left".to_string();
    }
    if is_one(details.hog_center) {
        return "Center".to_string();
    }
    if is_one(details.hog_right) {
        return "Right".to_string();
    }
    match record.ideology {
        Some(ideology) => ideology.display_name().to_string(),
        None => UNKNOWN_TEXT.to_string(),
    }
}

fn field(label: &str, value: DisplayText) -> SummaryField {
    SummaryField {
        label: label.to_string(),
        value,
    }
}

fn year_text(year: Option<Year>) -> DisplayText {
    match year {
        Some(value) => value.to_string(),
        None => UNKNOWN_TEXT.to_string(),
    }
}
