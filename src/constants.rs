/// Constants for the closed ideology category set.
pub mod categories {
    /// Canonical lowercase category values accepted by normalization, in
    /// canonical ordering (also the series order for multi-category trends).
    pub const VALID_IDEOLOGIES: [&str; 3] = ["leftist", "centrist", "rightist"];
}

/// Constants for regime-indicator normalization and display.
pub mod regimes {
    /// Canonical value for democracies.
    pub const REGIME_YES: &str = "yes";
    /// Canonical value for non-democracies.
    pub const REGIME_NO: &str = "no";
    /// Canonical value for rows without a usable regime indicator.
    pub const REGIME_NO_DATA: &str = "no data";
    /// Display text for democracies.
    pub const DISPLAY_DEMOCRACY: &str = "Democracy";
    /// Display text for non-democracies.
    pub const DISPLAY_NON_DEMOCRACY: &str = "Non-democracy";
}

/// Constants for selection sentinels.
pub mod selection {
    /// Region-selection sentinel that lifts the region constraint entirely.
    pub const ALL_REGIONS_SENTINEL: &str = "all";
}

/// Constants for disclosure-stage labeling.
pub mod stage {
    use crate::types::Stage;

    /// Prefix used when labeling partial-progress highlight artifacts.
    pub const STAGE_LABEL_PREFIX: &str = "stage_";
    /// Terminal stage at which the full categorical map is rendered.
    pub const TERMINAL_STAGE: Stage = 4;
}

/// Constants for dataset normalization fallbacks and log messages.
pub mod dataset {
    /// Region substituted for rows whose region cell is missing or blank.
    pub const UNKNOWN_REGION: &str = "Unknown";
    /// Display fallback for missing or blank detail values.
    pub const UNKNOWN_TEXT: &str = "Unknown";
    /// Log message used when a year cell cannot be parsed.
    pub const UNPARSEABLE_YEAR_MSG: &str = "treating unparseable year as absent";
    /// Log message used when a row is excluded from the entity-period view.
    pub const OUT_OF_SET_CATEGORY_MSG: &str =
        "excluding row with out-of-set category from entity-period view";
}
