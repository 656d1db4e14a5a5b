//! Colour palette domain entity
//!
//! Named six-colour palettes the word cloud cycles through.

use serde::Serialize;

pub const PALETTE_SIZE: usize = 6;

pub const DEFAULT_PALETTE: &str = "default";

/// A named set of six hex colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [&'static str; PALETTE_SIZE],
}

const PALETTES: &[Palette] = &[
    Palette {
        name: DEFAULT_PALETTE,
        colors: ["#000000", "#333333", "#666666", "#999999", "#CCCCCC", "#FFFFFF"],
    },
    Palette {
        name: "material",
        colors: ["#F44336", "#2196F3", "#4CAF50", "#FFC107", "#9C27B0", "#FF9800"],
    },
    Palette {
        name: "pastel",
        colors: ["#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF", "#E2BAFF"],
    },
    Palette {
        name: "vibrant",
        colors: ["#FF1744", "#00E676", "#2979FF", "#FFEA00", "#D500F9", "#FF9100"],
    },
    Palette {
        name: "earthy",
        colors: ["#795548", "#8D6E63", "#A1887F", "#BCAAA4", "#D7CCC8", "#EFEBE9"],
    },
    Palette {
        name: "ocean",
        colors: ["#01579B", "#0288D1", "#29B6F6", "#81D4FA", "#B3E5FC", "#E1F5FE"],
    },
    Palette {
        name: "sunset",
        colors: ["#FF6F00", "#FF9800", "#FFC107", "#FFEB3B", "#FFF176", "#FFF9C4"],
    },
];

impl Palette {
    /// All built-in palettes, `default` first
    pub fn all() -> &'static [Palette] {
        PALETTES
    }

    /// Look up a palette by name (case-insensitive)
    pub fn find(name: &str) -> Option<Palette> {
        let name = name.trim();
        PALETTES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// Look up a palette, falling back to `default` for unknown names
    pub fn get_or_default(name: Option<&str>) -> Palette {
        name.and_then(Self::find).unwrap_or_default()
    }

    /// Colour at `index`, wrapping around the palette
    pub fn color(&self, index: usize) -> &'static str {
        self.colors[index % PALETTE_SIZE]
    }
}

impl Default for Palette {
    fn default() -> Self {
        PALETTES[0]
    }
}
