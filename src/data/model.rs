use std::fmt;

// ---------------------------------------------------------------------------
// VoltageTier – the fixed filter categories
// ---------------------------------------------------------------------------

/// A fixed voltage threshold (kV) used as a filter category.
///
/// Declared highest first so `Ord` sorts selections from 750 kV down,
/// matching the checklist order in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VoltageTier {
    Kv750,
    Kv400,
    Kv220,
    Kv110,
    Kv20,
    Kv15,
    Kv10,
}

impl VoltageTier {
    /// Every tier tracked per record.
    pub const ALL: [VoltageTier; 7] = [
        VoltageTier::Kv750,
        VoltageTier::Kv400,
        VoltageTier::Kv220,
        VoltageTier::Kv110,
        VoltageTier::Kv20,
        VoltageTier::Kv15,
        VoltageTier::Kv10,
    ];

    /// Tiers exposed as filter checkboxes. The three low tiers (20/15/10 kV)
    /// are tracked in the data model but have no UI control.
    pub const SELECTABLE: [VoltageTier; 4] = [
        VoltageTier::Kv750,
        VoltageTier::Kv400,
        VoltageTier::Kv220,
        VoltageTier::Kv110,
    ];

    /// The exact numeric threshold this tier matches against.
    pub fn kilovolts(self) -> f64 {
        match self {
            VoltageTier::Kv750 => 750.0,
            VoltageTier::Kv400 => 400.0,
            VoltageTier::Kv220 => 220.0,
            VoltageTier::Kv110 => 110.0,
            VoltageTier::Kv20 => 20.0,
            VoltageTier::Kv15 => 15.0,
            VoltageTier::Kv10 => 10.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VoltageTier::Kv750 => "750 kV",
            VoltageTier::Kv400 => "400 kV",
            VoltageTier::Kv220 => "220 kV",
            VoltageTier::Kv110 => "110 kV",
            VoltageTier::Kv20 => "20 kV",
            VoltageTier::Kv15 => "15 kV",
            VoltageTier::Kv10 => "10 kV",
        }
    }
}

impl fmt::Display for VoltageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TierFlags – per-record boolean vector, one flag per tier
// ---------------------------------------------------------------------------

/// Which tiers a record's voltage levels contain, derived once at load time.
///
/// Membership is an exact float-equality test against [`VoltageTier::kilovolts`],
/// not a range test: a 380 kV line does not light the 400 kV flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierFlags([bool; VoltageTier::ALL.len()]);

impl TierFlags {
    pub fn from_levels(levels: &[f64]) -> Self {
        let mut flags = [false; VoltageTier::ALL.len()];
        for (slot, tier) in flags.iter_mut().zip(VoltageTier::ALL) {
            *slot = levels.iter().any(|&v| v == tier.kilovolts());
        }
        TierFlags(flags)
    }

    pub fn contains(&self, tier: VoltageTier) -> bool {
        self.0[tier as usize]
    }

    /// True when any of the given tiers is flagged. An empty iterator yields
    /// false, so an empty selection matches no records.
    pub fn any_of<I: IntoIterator<Item = VoltageTier>>(&self, tiers: I) -> bool {
        tiers.into_iter().any(|t| self.contains(t))
    }

    /// The highest flagged tier, if any. Used for marker colouring.
    pub fn highest(&self) -> Option<VoltageTier> {
        VoltageTier::ALL.into_iter().find(|&t| self.contains(t))
    }
}

// ---------------------------------------------------------------------------
// SubstationRecord – one row of the source file
// ---------------------------------------------------------------------------

/// A single parsed substation/line entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstationRecord {
    /// Human-readable label.
    pub description: String,
    /// Free-text region identifier.
    pub geography: String,
    /// Site name.
    pub name: String,
    /// Decimal degrees, validated at parse time.
    pub latitude: f64,
    pub longitude: f64,
    /// Auxiliary rendering/routing hint, opaque to the data layer.
    pub path: String,
    /// Parsed voltage levels, sorted descending, duplicates kept.
    pub voltage_levels: Vec<f64>,
    /// `voltage_levels` rendered for display, e.g. `"750, 400, 400, 110"`.
    pub voltage_display: String,
    /// Exact-membership flag per fixed tier.
    pub tier_flags: TierFlags,
}

impl SubstationRecord {
    /// Plain marker payload for the map renderer.
    pub fn marker(&self) -> Marker {
        Marker {
            name: self.name.clone(),
            lat: self.latitude,
            lon: self.longitude,
            desc: self.description.clone(),
            vls: self.voltage_display.clone(),
        }
    }
}

/// What the map renderer consumes per visible record. Tooltip markup is
/// composed in the UI layer from `desc` and `vls`.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub desc: String,
    pub vls: String,
}

/// Format a sorted voltage list for display: whole numbers without a decimal
/// point, fractional values as-is, joined with `", "`.
pub fn format_voltage_levels(levels: &[f64]) -> String {
    let parts: Vec<String> = levels
        .iter()
        .map(|&v| {
            if v.trunc() == v {
                format!("{}", v as i64)
            } else {
                format!("{v}")
            }
        })
        .collect();
    parts.join(", ")
}

// ---------------------------------------------------------------------------
// SubstationDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All records from one load, in source document order. Immutable after
/// construction: filtering produces index views, never mutations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstationDataset {
    pub records: Vec<SubstationRecord>,
}

impl SubstationDataset {
    pub fn from_records(records: Vec<SubstationRecord>) -> Self {
        SubstationDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
