//! PM2.5 concentration to US EPA Air Quality Index.

use core::fmt;

use crate::severity::{classify, Classification};

/// An Air Quality Index score, or the lack of one.
///
/// A negative concentration has no index. That is kept distinct from a score
/// of 0 so callers have to decide what to show for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Aqi {
    Index(i32),
    Unavailable,
}

impl Aqi {
    /// The numeric score, if there is one.
    pub fn value(self) -> Option<i32> {
        match self {
            Aqi::Index(v) => Some(v),
            Aqi::Unavailable => None,
        }
    }

    /// Classify this score, treating Unavailable as 0.
    pub fn classify(self) -> Classification {
        classify(self.value().unwrap_or(0))
    }
}

/// Shows the score, or "-" when unavailable.
impl fmt::Display for Aqi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aqi::Index(v) => write!(f, "{v}"),
            Aqi::Unavailable => f.write_str("-"),
        }
    }
}

/// One row of the breakpoint table: concentrations from `bp_low` up to
/// `bp_high` map linearly onto indices `index_low` to `index_high`.
struct Band {
    index_high: f64,
    index_low: f64,
    bp_high: f64,
    bp_low: f64,
}

impl Band {
    const fn new(index_high: f64, index_low: f64, bp_high: f64, bp_low: f64) -> Self {
        Band {
            index_high,
            index_low,
            bp_high,
            bp_low,
        }
    }

    fn interpolate(&self, pm: f64) -> i32 {
        let a = self.index_high - self.index_low;
        let b = self.bp_high - self.bp_low;
        let c = pm - self.bp_low;
        round_index((a / b) * c + self.index_low)
    }
}

/// Breakpoints, highest concentration first.
/// A concentration belongs to the first band whose `bp_low` it exceeds;
/// the last band also takes exactly 0.
const BANDS: [Band; 7] = [
    Band::new(500.0, 401.0, 500.0, 350.5),
    Band::new(400.0, 301.0, 350.4, 250.5),
    Band::new(300.0, 201.0, 250.4, 150.5),
    Band::new(200.0, 151.0, 150.4, 55.5),
    Band::new(150.0, 101.0, 55.4, 35.5),
    Band::new(100.0, 51.0, 35.4, 12.1),
    Band::new(50.0, 0.0, 12.0, 0.0),
];

/// Round to the nearest integer, halves away from zero.
/// Scores are never negative, so this is "round half up".
fn round_index(v: f64) -> i32 {
    v.round() as i32
}

/// Convert a corrected PM2.5 concentration (µg/m³) to an AQI score.
///
/// The top band is not clamped: concentrations past 500 µg/m³ keep its slope
/// and produce scores above 500. Negative (or NaN) input is
/// [`Aqi::Unavailable`].
pub fn aqi_from_concentration(pm: f64) -> Aqi {
    if pm.is_nan() || pm < 0.0 {
        return Aqi::Unavailable;
    }
    let band = BANDS
        .iter()
        .find(|band| pm > band.bp_low)
        .unwrap_or(&BANDS[BANDS.len() - 1]);
    Aqi::Index(band.interpolate(pm))
}
