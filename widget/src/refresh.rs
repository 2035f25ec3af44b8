//! One fetch-and-compute pass: from a sensor ID to something to display.

use std::fmt::Display;

use aqi::{aqi_from_concentration, correct_concentration, trend, Aqi, Classification, Trend};
use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::{Error, SensorReading, SensorSource};

/// Everything the presentation surface shows for a successful refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    pub aqi: Aqi,
    /// Severity level and colors for `aqi` (Unavailable classified as 0).
    pub classification: Classification,
    pub trend: Trend,
    /// Corrected PM2.5 concentration, µg/m³.
    pub concentration: f64,
    pub location: String,
    /// "HH:MM" in the display time zone.
    pub updated: String,
    pub url: String,
}

impl Widget {
    /// "AQI", plus the trend if it isn't stable.
    pub fn header(&self) -> String {
        format!("AQI{}", self.trend.suffix())
    }

    /// The score, or "-".
    pub fn aqi_text(&self) -> String {
        self.aqi.to_string()
    }

    pub fn label(&self) -> &'static str {
        self.classification.attributes.label
    }

    pub fn updated_text(&self) -> String {
        format!("Updated {}", self.updated)
    }
}

/// Result of a refresh. Failures are carried as display text, never raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ready(Widget),
    Failed(String),
}

/// Link to the PurpleAir map, centered on the sensor.
pub fn map_url(sensor_id: &str, lat: f64, lon: f64) -> String {
    format!("https://www.purpleair.com/map?opt=1/i/mAQI/a10/cC0&select={sensor_id}#14/{lat}/{lon}")
}

/// Compute the widget contents from a decoded reading.
pub fn compute<Tz>(reading: &SensorReading, sensor_id: &str, tz: &Tz) -> Result<Widget, Error>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let trend = trend(reading.short_term, reading.long_term);
    tracing::debug!(
        "stats: short-term {} long-term {}: {:?}",
        reading.short_term,
        reading.long_term,
        trend
    );

    let concentration = correct_concentration(reading.adj1, reading.adj2, reading.humidity);
    tracing::debug!("corrected PM2.5: {concentration:.2}");

    let aqi = aqi_from_concentration(concentration);
    let classification = aqi.classify();
    tracing::info!("AQI {} ({})", aqi, classification.attributes.label);

    let updated = DateTime::from_timestamp(reading.last_seen, 0)
        .ok_or_else(|| Error::Malformed(format!("LastSeen {} is out of range", reading.last_seen)))?
        .with_timezone(tz)
        .format("%H:%M")
        .to_string();

    Ok(Widget {
        aqi,
        classification,
        trend,
        concentration,
        location: reading.label.clone(),
        updated,
        url: map_url(sensor_id, reading.lat, reading.lon),
    })
}

/// Fetch the sensor's current data and compute the widget contents.
///
/// Any failure along the way becomes [`Outcome::Failed`] with a description.
pub fn refresh<S, Tz>(source: &mut S, sensor_id: &str, tz: &Tz) -> Outcome
where
    S: SensorSource + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tracing::info!("using sensor ID: {sensor_id}");
    let result = source
        .fetch(sensor_id)
        .and_then(|doc| SensorReading::from_json(&doc))
        .and_then(|reading| compute(&reading, sensor_id, tz));
    match result {
        Ok(widget) => Outcome::Ready(widget),
        Err(e) => {
            tracing::error!("refresh failed: {e}");
            Outcome::Failed(e.to_string())
        }
    }
}
