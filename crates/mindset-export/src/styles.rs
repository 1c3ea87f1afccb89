use serde::{Deserialize, Serialize};

/// Glyphs and sizing for terminal charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Cells a full-mark bar occupies.
    pub width: usize,

    /// Glyph for the filled part of a bar.
    pub filled: char,

    /// Glyph for the remainder up to the full mark.
    pub empty: char,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 40,
            filled: '█',
            empty: '░',
        }
    }
}

impl ChartStyle {
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}
