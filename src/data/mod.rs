/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///      .xml
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse sst elements → SubstationDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐
///   │ SubstationDataset │  Vec<SubstationRecord>, read-only after load
///   └───────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  OR over selected tiers → FilteredView + stats
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
