#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Year-confirmation persistence seam.
pub mod confirm;
/// Centralized constants for categories, regimes, staging, and normalization.
pub mod constants;
/// Load-once, read-only dataset views.
pub mod dataset;
/// Orchestration handle tying the dataset to the resolvers.
pub mod explorer;
/// Tri-state filter values and the multi-filter pipeline.
pub mod filter;
/// Map artifacts and stage-aware map resolution.
pub mod map;
/// Record model and raw-row normalization.
pub mod record;
/// Selection snapshots and normalizers.
pub mod selection;
/// Disclosure-stage calculation.
pub mod stage;
/// Summary row lookup and card building.
pub mod summary;
/// Count-by-year trend aggregation.
pub mod trend;
/// Shared type aliases.
pub mod types;

mod errors;

pub use confirm::{ConfirmationStore, InMemoryConfirmationStore};
pub use dataset::{build_year_marks, Dataset};
pub use errors::ExplorerError;
pub use explorer::Explorer;
pub use filter::{apply_multi_filter, FilterValue};
pub use map::{prepare_stage_highlight, resolve_map, ChoroplethRow, MapArtifact};
pub use record::{Ideology, LeaderDetails, LeaderRecord, RawLeaderRow, RegimeFlag};
pub use selection::{resolve_ideologies, resolve_regimes, resolve_regions, Selection};
pub use stage::{compute_stage, stage_label, StageSignals};
pub use summary::{build_summary_card, extract_summary_row, SummaryCard, SummaryField};
pub use trend::{aggregate_trend, TrendArtifact, TrendPoint, TrendSeries};
pub use types::{
    DisplayText, EntityName, RawText, RegionName, Stage, StageLabel, Year,
};
