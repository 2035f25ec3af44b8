//! Severity levels for AQI scores, with the colors used to display them.

use core::fmt;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(rgb: u32) -> Self {
        Color {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }
}

/// Formats as `#rrggbb`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// EPA severity levels, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SeverityLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Display attributes for one severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LevelAttributes {
    pub level: SeverityLevel,
    /// Scores strictly above this belong to this level
    /// (unless a higher level also claims them).
    pub threshold: i32,
    pub label: &'static str,
    /// Background gradient start.
    pub start_color: Color,
    /// Background gradient end.
    pub end_color: Color,
    pub text_color: Color,
}

/// The severity table, ascending by threshold.
pub const LEVELS: [LevelAttributes; 6] = [
    LevelAttributes {
        level: SeverityLevel::Good,
        threshold: -20,
        label: "Good",
        start_color: Color::from_hex(0xffffff), // white
        end_color: Color::from_hex(0xffffff),
        text_color: Color::from_hex(0x718096), // gray 600
    },
    LevelAttributes {
        level: SeverityLevel::Moderate,
        threshold: 50,
        label: "Moderate",
        start_color: Color::from_hex(0xedf2f7), // faint gray
        end_color: Color::from_hex(0xf7fafc),
        text_color: Color::from_hex(0x000000),
    },
    LevelAttributes {
        level: SeverityLevel::UnhealthyForSensitiveGroups,
        threshold: 100,
        label: "Unhealthy (S.G.)",
        start_color: Color::from_hex(0xcbd5e0), // gray
        end_color: Color::from_hex(0xe2e8f0),
        text_color: Color::from_hex(0x000000),
    },
    LevelAttributes {
        level: SeverityLevel::Unhealthy,
        threshold: 150,
        label: "Unhealthy",
        start_color: Color::from_hex(0x718096), // medium gray
        end_color: Color::from_hex(0xa0aec0),
        text_color: Color::from_hex(0x000000),
    },
    LevelAttributes {
        level: SeverityLevel::VeryUnhealthy,
        threshold: 200,
        label: "Very Unhealthy",
        start_color: Color::from_hex(0x1a202c), // dark gray
        end_color: Color::from_hex(0x2d3748),
        text_color: Color::from_hex(0xffffff),
    },
    LevelAttributes {
        level: SeverityLevel::Hazardous,
        threshold: 300,
        label: "Hazardous",
        start_color: Color::from_hex(0x000000),
        end_color: Color::from_hex(0x000000),
        text_color: Color::from_hex(0xffffff),
    },
];

/// A score together with the attributes of its severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Classification {
    /// The score that was classified.
    pub aqi: i32,
    pub attributes: LevelAttributes,
}

/// Find the severity level for an AQI score:
/// the level with the highest threshold strictly below `aqi`.
///
/// Scores at or below the lowest threshold (which real scores never reach)
/// are reported as Good.
pub fn classify(aqi: i32) -> Classification {
    let attributes = LEVELS
        .iter()
        .rev()
        .find(|l| aqi > l.threshold)
        .unwrap_or(&LEVELS[0]);
    Classification {
        aqi,
        attributes: *attributes,
    }
}
