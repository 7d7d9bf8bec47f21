use crate::types::Result;

#[cfg(feature = "serde")]
use crate::types::AssembleError;

/// A4 page dimensions in portrait
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Accepted bounds for the uniform page margin
pub const MARGIN_RANGE_MM: std::ops::RangeInclusive<f32> = 0.0..=30.0;
/// Accepted bounds for the JPEG encode quality
pub const QUALITY_RANGE: std::ops::RangeInclusive<u8> = 50..=100;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Render settings shared by the whole collection. Pages are always
/// A4-sized and measured in millimeters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSettings {
    pub orientation: Orientation,
    /// Uniform page margin in millimeters, bounded by [`MARGIN_RANGE_MM`]
    pub margin_mm: f32,
    /// JPEG encode quality in percent, bounded by [`QUALITY_RANGE`]
    pub quality: u8,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            margin_mm: 10.0,
            quality: 80,
        }
    }
}

impl PageSettings {
    /// Page dimensions with orientation applied
    pub fn page_size_mm(&self) -> (f32, f32) {
        match self.orientation {
            Orientation::Portrait => (A4_WIDTH_MM, A4_HEIGHT_MM),
            Orientation::Landscape => (A4_HEIGHT_MM, A4_WIDTH_MM),
        }
    }

    /// Copy with margin and quality forced into their bounds
    pub fn clamped(&self) -> Self {
        Self {
            orientation: self.orientation,
            margin_mm: self
                .margin_mm
                .clamp(*MARGIN_RANGE_MM.start(), *MARGIN_RANGE_MM.end()),
            quality: self
                .quality
                .clamp(*QUALITY_RANGE.start(), *QUALITY_RANGE.end()),
        }
    }

    /// Load settings from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let settings = serde_json::from_slice(&bytes)
            .map_err(|e| AssembleError::Config(format!("Failed to parse settings: {}", e)))?;
        Ok(settings)
    }

    /// Save settings to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AssembleError::Config(format!("Failed to serialize settings: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
