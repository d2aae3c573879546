use crate::data::filter::{apply_filter, FilteredView, TierSelection};
use crate::data::model::{SubstationDataset, VoltageTier};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset is read-only after
/// load; every interaction only rewrites `selection` and the cached view.
pub struct AppState {
    /// Loaded dataset.
    pub dataset: SubstationDataset,

    /// Tiers currently checked in the filter panel.
    pub selection: TierSelection,

    /// Cached result of filtering `dataset` by `selection`.
    pub view: FilteredView,

    /// Error message shown in the top bar after a failed File → Open.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start with nothing selected, so the map opens empty like the source UI.
    pub fn new(dataset: SubstationDataset) -> Self {
        let selection = TierSelection::new();
        let view = apply_filter(&dataset, &selection);
        Self {
            dataset,
            selection,
            view,
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset, keeping the current tier selection.
    pub fn replace_dataset(&mut self, dataset: SubstationDataset) {
        self.dataset = dataset;
        self.status_message = None;
        self.refilter();
    }

    /// Check or uncheck one tier.
    pub fn toggle_tier(&mut self, tier: VoltageTier) {
        if !self.selection.remove(&tier) {
            self.selection.insert(tier);
        }
        self.refilter();
    }

    /// Recompute the cached view after a selection or dataset change.
    pub fn refilter(&mut self) {
        self.view = apply_filter(&self.dataset, &self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_document;

    fn sample_state() -> AppState {
        let dataset = parse_document(
            r#"<net>
                 <sst desc="a" geo="n" name="Alpha" lat="54.0" lon="18.0"
                      path="p/a" vls="750,110"/>
                 <sst desc="b" geo="s" name="Beta" lat="50.0" lon="20.0"
                      path="p/b" vls="220"/>
               </net>"#,
        )
        .unwrap();
        AppState::new(dataset)
    }

    #[test]
    fn starts_with_empty_selection_and_view() {
        let state = sample_state();
        assert!(state.selection.is_empty());
        assert!(state.view.indices.is_empty());
        assert_eq!(state.view.total, 2);
    }

    #[test]
    fn toggling_a_tier_refilters() {
        let mut state = sample_state();
        state.toggle_tier(VoltageTier::Kv750);
        assert_eq!(state.view.indices, vec![0]);

        state.toggle_tier(VoltageTier::Kv750);
        assert!(state.view.indices.is_empty());
    }

    #[test]
    fn replacing_the_dataset_keeps_the_selection() {
        let mut state = sample_state();
        state.toggle_tier(VoltageTier::Kv220);
        state.status_message = Some("Error: stale".to_string());

        state.replace_dataset(parse_document(
            r#"<net><sst desc="c" geo="w" name="Gamma" lat="51.0" lon="17.0"
                    path="p/c" vls="220,110"/></net>"#,
        )
        .unwrap());

        assert!(state.selection.contains(&VoltageTier::Kv220));
        assert_eq!(state.view.indices, vec![0]);
        assert_eq!(state.status_message, None);
    }
}
