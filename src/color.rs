use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{SubstationRecord, VoltageTier};

// ---------------------------------------------------------------------------
// Tier colours: highest voltage red, lowest blue
// ---------------------------------------------------------------------------

/// Colour for one tier, spread over the red → blue hue range by tier rank.
pub fn tier_color(tier: VoltageTier) -> Color32 {
    let rank = tier as usize;
    let span = (VoltageTier::ALL.len() - 1) as f32;
    let hue = 240.0 * rank as f32 / span;
    let hsl = Hsl::new(hue, 0.8, 0.45);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Marker colour for a record: the colour of its highest flagged tier, grey
/// when no level matches any tier.
pub fn marker_color(record: &SubstationRecord) -> Color32 {
    record
        .tier_flags
        .highest()
        .map(tier_color)
        .unwrap_or(Color32::GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_colors_are_distinct() {
        let colors: Vec<Color32> = VoltageTier::ALL.into_iter().map(tier_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn extreme_tiers_span_red_to_blue() {
        let high = tier_color(VoltageTier::Kv750);
        let low = tier_color(VoltageTier::Kv10);
        assert!(high.r() > high.b());
        assert!(low.b() > low.r());
    }
}
