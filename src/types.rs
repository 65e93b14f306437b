/// Country or territory name identifying an observation subject.
/// Example: `France`
pub type EntityName = String;
/// Geographic region grouping used by the region filter.
/// Examples: `Western Europe`, `Latin America and the Caribbean`
pub type RegionName = String;
/// Calendar year of an observation.
/// Example: `1990`
pub type Year = i32;
/// Disclosure stage threaded through map resolution (0 = nothing chosen,
/// 4 = fully confirmed).
pub type Stage = u8;
/// Label attached to partial-progress map artifacts.
/// Examples: `stage_1`, `stage_3`
pub type StageLabel = String;
/// Raw cell text as supplied by the hosting layer, prior to normalization.
/// Examples: ` Yes `, `democracy`, `1990.0`
pub type RawText = String;
/// Normalized text ready for display, never empty.
/// Examples: `Non-democracy`, `Unknown`
pub type DisplayText = String;
