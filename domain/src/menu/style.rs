//! Menu variant styles

use serde::Serialize;

/// A presentation lens applied to every course of one menu variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantStyle {
    /// Stable variant id (1-5)
    pub id: u8,
    pub label: &'static str,
    pub description: &'static str,
}

/// The five fixed styles, in presentation order
pub static VARIANT_STYLES: [VariantStyle; 5] = [
    VariantStyle {
        id: 1,
        label: "Classic",
        description: "Timeless technique and familiar flavors, executed with precision.",
    },
    VariantStyle {
        id: 2,
        label: "Deconstructed",
        description: "Each dish broken into its components and reassembled on the plate.",
    },
    VariantStyle {
        id: 3,
        label: "Modernist",
        description: "Contemporary technique, unexpected textures and exacting plating.",
    },
    VariantStyle {
        id: 4,
        label: "Global Slant",
        description: "The same dishes reinterpreted through spices and traditions from abroad.",
    },
    VariantStyle {
        id: 5,
        label: "Elevated",
        description: "Luxurious ingredients and refined finishing touches on every course.",
    },
];

impl VariantStyle {
    /// All styles in presentation order
    pub fn all() -> &'static [VariantStyle] {
        &VARIANT_STYLES
    }

    /// Look up a style by its stable id
    pub fn by_id(id: u8) -> Option<&'static VariantStyle> {
        VARIANT_STYLES.iter().find(|s| s.id == id)
    }

    /// Descriptor appended to a host's dish name, e.g. `"global slant variation"`
    pub fn variation_label(&self) -> String {
        format!("{} variation", self.label.to_lowercase())
    }
}
