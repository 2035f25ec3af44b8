//! Air quality index computation for PurpleAir-style PM2.5 sensors.
//!
//! The pipeline is a handful of pure functions:
//! two raw particulate channels are averaged and corrected for wood smoke
//! ([`correct_concentration`]), the corrected PM2.5 concentration is mapped
//! onto the US EPA index ([`aqi_from_concentration`]), and the index is
//! classified into a severity level with display colors ([`classify`]).
//! [`trend`] compares the sensor's short- and long-window averages.
//!
//! Nothing here does I/O; fetching and drawing live in the widget crate.

mod concentration;
mod index;
mod severity;
mod trend;

pub use concentration::{correct_concentration, parse_int, parse_int_or_zero};
pub use index::{aqi_from_concentration, Aqi};
pub use severity::{classify, Classification, Color, LevelAttributes, SeverityLevel, LEVELS};
pub use trend::{trend, Trend};

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn serializes_colors_as_hex() {
        let c = classify(120);
        let v = serde_json::to_value(c).expect("classification should serialize");
        assert_eq!(v["aqi"], 120);
        assert_eq!(v["attributes"]["label"], "Unhealthy (S.G.)");
        assert_eq!(v["attributes"]["start_color"], "#cbd5e0");
        assert_eq!(v["attributes"]["level"], "UnhealthyForSensitiveGroups");
    }

    #[test]
    fn serializes_unavailable() {
        let v = serde_json::to_value(aqi_from_concentration(-1.0)).expect("should serialize");
        assert_eq!(v, "unavailable");
        let v = serde_json::to_value(aqi_from_concentration(6.0)).expect("should serialize");
        assert_eq!(v["index"], 25);
    }
}
