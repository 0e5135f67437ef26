use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::aggregate::FrequencyTable;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` soft, visually distinct colours using evenly spaced hues.
pub fn pastel_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.60, 0.75);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Assigns each category of a chart a fixed colour.
///
/// Built from the unfiltered dataset so a category keeps its colour while
/// the filters change which categories are visible.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut mapping: BTreeMap<String, Color32> = categories
            .into_iter()
            .map(|c| (c.to_string(), Color32::GRAY))
            .collect();
        let palette = pastel_palette(mapping.len());
        for (slot, color) in mapping.values_mut().zip(palette) {
            *slot = color;
        }
        ColorMap { mapping }
    }

    pub fn from_table(table: &FrequencyTable) -> Self {
        Self::new(table.iter().map(|e| e.category.as_str()))
    }

    /// Look up the colour for a category; unknown categories are grey.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping.get(category).copied().unwrap_or(Color32::GRAY)
    }
}
