use serde::{Deserialize, Serialize};

use crate::constants::stage::STAGE_LABEL_PREFIX;
use crate::selection::Selection;
use crate::types::{Stage, StageLabel};

/// The four readiness gates evaluated in fixed priority order: region chosen,
/// regime chosen, category chosen, year confirmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSignals {
    /// A raw region value was selected (the `all` sentinel counts).
    pub region_ready: bool,
    /// The regime control was touched; an explicitly-empty selection still
    /// counts as chosen ("chosen but matching nothing" is a filtering concern,
    /// not a gating one).
    pub regime_ready: bool,
    /// At least one category survived normalization; an all-invalid selection
    /// does not count as chosen.
    pub ideology_ready: bool,
    /// The year control was explicitly interacted with.
    pub year_confirmed: bool,
}

impl StageSignals {
    /// Derive the gate states from a selection snapshot.
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            region_ready: selection.has_region_selection(),
            regime_ready: selection.regimes.is_some(),
            ideology_ready: !selection.resolved_ideologies().is_empty(),
            year_confirmed: selection.year_confirmed,
        }
    }
}

/// Compute the disclosure stage from the readiness gates.
///
/// Gates are consumed in order and evaluation stops at the first unready one,
/// so stage `n + 1` is unreachable unless gate `n` also holds. Total and
/// deterministic over all sixteen input combinations.
pub fn compute_stage(signals: &StageSignals) -> Stage {
    let gates = [
        signals.region_ready,
        signals.regime_ready,
        signals.ideology_ready,
        signals.year_confirmed,
    ];
    let mut stage: Stage = 0;
    for (index, ready) in gates.into_iter().enumerate() {
        if !ready {
            return stage;
        }
        stage = index as Stage + 1;
    }
    stage
}

/// Label used to tag partial-progress highlight artifacts, e.g. `stage_2`.
pub fn stage_label(stage: Stage) -> StageLabel {
    format!("{STAGE_LABEL_PREFIX}{stage}")
}
