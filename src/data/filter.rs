use std::collections::BTreeSet;

use super::model::{Marker, SubstationDataset, VoltageTier};

// ---------------------------------------------------------------------------
// Filter predicate: which voltage tiers are selected
// ---------------------------------------------------------------------------

/// The set of tiers currently checked in the UI. Empty means nothing is shown;
/// there is no implicit "show all".
pub type TierSelection = BTreeSet<VoltageTier>;

/// The subset of records matching the current selection, plus summary stats.
/// Ephemeral: recomputed from scratch on every selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    /// Indices into the dataset, in document order.
    pub indices: Vec<usize>,
    pub matched: usize,
    pub total: usize,
    /// Percentage of records matched, rounded to one decimal place.
    pub percentage: f64,
}

impl FilteredView {
    /// The stats readout, e.g. `"1 / 2 (50.0%)"`.
    pub fn stats_label(&self) -> String {
        format!("{} / {} ({:.1}%)", self.matched, self.total, self.percentage)
    }

    /// Marker payloads for the visible records.
    pub fn markers(&self, dataset: &SubstationDataset) -> Vec<Marker> {
        self.indices
            .iter()
            .map(|&i| dataset.records[i].marker())
            .collect()
    }
}

/// Compute the view for a selection: a record is included iff any selected
/// tier's flag is set (logical OR). Pure and stateless.
pub fn apply_filter(dataset: &SubstationDataset, selection: &TierSelection) -> FilteredView {
    let indices: Vec<usize> = if selection.is_empty() {
        Vec::new()
    } else {
        dataset
            .records
            .iter()
            .enumerate()
            .filter(|(_, rec)| rec.tier_flags.any_of(selection.iter().copied()))
            .map(|(i, _)| i)
            .collect()
    };

    let matched = indices.len();
    let total = dataset.len();
    // An empty dataset reports 0% rather than dividing by zero.
    let percentage = if total == 0 {
        0.0
    } else {
        (1000.0 * matched as f64 / total as f64).round() / 10.0
    };

    FilteredView {
        indices,
        matched,
        total,
        percentage,
    }
}
