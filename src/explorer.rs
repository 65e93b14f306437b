use std::sync::Arc;

use tracing::debug;

use crate::confirm::{ConfirmationStore, InMemoryConfirmationStore};
use crate::constants::categories::VALID_IDEOLOGIES;
use crate::dataset::Dataset;
use crate::errors::ExplorerError;
use crate::filter::apply_multi_filter;
use crate::map::{self, MapArtifact};
use crate::selection::Selection;
use crate::summary::{build_summary_card, extract_summary_row, SummaryCard};
use crate::trend::{aggregate_trend, TrendArtifact};
use crate::types::{RawText, RegionName, Year};

/// Orchestration handle tying the load-once dataset to the resolvers.
///
/// The hosting layer decides *when* to call these methods; each call is an
/// independent pure computation over the shared read-only views plus the one
/// externally persisted confirmation flag.
pub struct Explorer {
    dataset: Arc<Dataset>,
    confirmation: Box<dyn ConfirmationStore>,
}

impl Explorer {
    /// Create an explorer with a process-local confirmation store.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_store(dataset, Box::new(InMemoryConfirmationStore::new()))
    }

    /// Create an explorer with a host-provided confirmation store.
    pub fn with_store(dataset: Arc<Dataset>, confirmation: Box<dyn ConfirmationStore>) -> Self {
        Self {
            dataset,
            confirmation,
        }
    }

    /// The shared dataset handle.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Current confirmation flag.
    pub fn year_confirmed(&self) -> Result<bool, ExplorerError> {
        self.confirmation.load()
    }

    /// Record that the year control was explicitly interacted with.
    ///
    /// Read-modify-write of the persisted flag; idempotent after the first
    /// interaction. Returns the (always confirmed) new value.
    pub fn observe_year_interaction(&self) -> Result<bool, ExplorerError> {
        if !self.confirmation.load()? {
            self.confirmation.store(true)?;
            debug!("year selection confirmed");
        }
        Ok(true)
    }

    /// Clear the confirmation flag, e.g. when a session restarts.
    pub fn reset_confirmation(&self) -> Result<(), ExplorerError> {
        self.confirmation.store(false)
    }

    /// Assemble a selection snapshot, filling the confirmation flag from the
    /// store so callers do not have to thread it themselves.
    pub fn snapshot(
        &self,
        regions: Vec<RegionName>,
        regimes: Option<Vec<RawText>>,
        ideologies: Vec<RawText>,
        year: Option<Year>,
    ) -> Result<Selection, ExplorerError> {
        Ok(Selection {
            regions,
            regimes,
            ideologies,
            year,
            year_confirmed: self.confirmation.load()?,
        })
    }

    /// Resolve the map artifact for the current selection.
    pub fn resolve_map(&self, selection: &Selection) -> MapArtifact {
        map::resolve_map(&self.dataset, selection)
    }

    /// Resolve the trend artifact for the current selection.
    ///
    /// The full view is narrowed by region and regime before aggregation; the
    /// category selection splits the series and never gates on stage.
    pub fn resolve_trend(&self, selection: &Selection) -> TrendArtifact {
        let filtered = apply_multi_filter(
            self.dataset.full().to_vec(),
            &selection.region_filter(),
            |r| Some(&r.region),
        );
        let filtered = apply_multi_filter(filtered, &selection.regime_filter(), |r| {
            Some(&r.regime)
        });
        aggregate_trend(&filtered, &selection.ideologies)
    }

    /// Build the summary card for a map click.
    pub fn summarize(&self, entity: Option<&str>, year: Option<Year>) -> SummaryCard {
        let row = extract_summary_row(self.dataset.entity_period(), entity, year);
        build_summary_card(entity, year, row)
    }

    /// Initial map shown before any interaction: a blank stage-zero artifact.
    pub fn default_map(&self) -> MapArtifact {
        map::resolve_map(&self.dataset, &Selection::default())
    }

    /// Initial trend shown before any interaction: the unfiltered full view
    /// split across every category.
    pub fn default_trend(&self) -> TrendArtifact {
        let all: Vec<RawText> = VALID_IDEOLOGIES.iter().map(|v| v.to_string()).collect();
        aggregate_trend(self.dataset.full(), &all)
    }
}
