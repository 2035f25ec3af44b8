//! Decoding a PurpleAir sensor document into a [`SensorReading`].
//!
//! The document looks like
//!
//! ```json
//! {"results": [
//!     {"Label": "Backyard", "Lat": 37.1, "Lon": -122.1, "LastSeen": 1600000000,
//!      "humidity": "35", "pm2_5_cf_1": "12.34", "Stats": "{\"v1\": 8.2, \"v2\": 20.1}"},
//!     {"pm2_5_cf_1": "11.01", ...}
//! ]}
//! ```
//!
//! where the two results are the sensor's A and B channels.
//! Numeric fields show up as numbers or as strings depending on the sensor;
//! either is accepted, and anything that isn't a number reads as 0.

use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// The raw values used from one fetch of a sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// PM2.5 (CF=1) concentration on channel A.
    pub adj1: i64,
    /// PM2.5 (CF=1) concentration on channel B.
    pub adj2: i64,
    /// Relative humidity, percent.
    pub humidity: i64,
    /// When the sensor last reported, in seconds since the Unix epoch.
    pub last_seen: i64,
    pub label: String,
    pub lat: f64,
    pub lon: f64,
    /// Channel A's recent average.
    pub short_term: i64,
    /// Channel A's longer-window average.
    pub long_term: i64,
}

#[derive(Deserialize)]
struct Document {
    results: Option<Vec<Channel>>,
}

#[derive(Deserialize)]
struct Channel {
    #[serde(rename = "Stats")]
    stats: Option<Value>,
    pm2_5_cf_1: Option<Value>,
    #[serde(rename = "LastSeen")]
    last_seen: Option<Value>,
    humidity: Option<Value>,
    #[serde(rename = "Label")]
    label: Option<Value>,
    #[serde(rename = "Lat")]
    lat: Option<Value>,
    #[serde(rename = "Lon")]
    lon: Option<Value>,
}

#[derive(Deserialize)]
struct Stats {
    v1: Option<Value>,
    v2: Option<Value>,
}

impl SensorReading {
    /// Decode a sensor document.
    ///
    /// Fails if the text is not JSON, if there are fewer than two results,
    /// or if the first result has no usable `Stats`.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let doc: Document = serde_json::from_str(text)?;
        let results = doc
            .results
            .ok_or_else(|| Error::Malformed("no results".to_owned()))?;
        let (a, b) = match results.as_slice() {
            [a, b, ..] => (a, b),
            _ => {
                return Err(Error::Malformed(format!(
                    "expected two results, got {}",
                    results.len()
                )))
            }
        };

        let stats = match &a.stats {
            Some(Value::String(s)) => serde_json::from_str::<Stats>(s)?,
            Some(v @ Value::Object(_)) => Stats::deserialize(v)?,
            Some(_) => return Err(Error::Malformed("Stats is not an object".to_owned())),
            None => return Err(Error::Malformed("results[0] has no Stats".to_owned())),
        };

        Ok(SensorReading {
            adj1: lenient_int("results[0].pm2_5_cf_1", a.pm2_5_cf_1.as_ref()),
            adj2: lenient_int("results[1].pm2_5_cf_1", b.pm2_5_cf_1.as_ref()),
            humidity: lenient_int("humidity", a.humidity.as_ref()),
            last_seen: lenient_int("LastSeen", a.last_seen.as_ref()),
            label: match &a.label {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            },
            lat: lenient_float("Lat", a.lat.as_ref()),
            lon: lenient_float("Lon", a.lon.as_ref()),
            short_term: lenient_int("Stats.v1", stats.v1.as_ref()),
            long_term: lenient_int("Stats.v2", stats.v2.as_ref()),
        })
    }
}

/// Read an integer out of a number or numeric string, truncating fractions.
/// Anything else is 0.
fn lenient_int(field: &'static str, value: Option<&Value>) -> i64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => aqi::parse_int(s),
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        tracing::warn!("{field} is not numeric ({value:?}); using 0");
        0
    })
}

fn lenient_float(field: &'static str, value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        tracing::warn!("{field} is not numeric ({value:?}); using 0");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const DOC: &str = r#"{"results": [
        {"ID": 49237, "Label": "Backyard", "Lat": 37.75, "Lon": -122.44,
         "LastSeen": 1600000000, "humidity": "50", "pm2_5_cf_1": "40.52",
         "Stats": "{\"v\":40.5,\"v1\":8.4,\"v2\":20.9,\"v3\":22.0}"},
        {"ID": 49238, "pm2_5_cf_1": 42.97, "Stats": "{\"v1\":1}"}
    ]}"#;

    #[test]
    fn decodes_both_channels() {
        let r = SensorReading::from_json(DOC).expect("document should decode");
        assert_eq!(
            r,
            SensorReading {
                adj1: 40,
                adj2: 42,
                humidity: 50,
                last_seen: 1_600_000_000,
                label: "Backyard".to_owned(),
                lat: 37.75,
                lon: -122.44,
                short_term: 8,
                long_term: 20,
            }
        );
    }

    #[test]
    fn accepts_decoded_stats_object() {
        let doc = r#"{"results": [
            {"Stats": {"v1": "3", "v2": 9}, "pm2_5_cf_1": 1},
            {"pm2_5_cf_1": 2}
        ]}"#;
        let r = SensorReading::from_json(doc).expect("document should decode");
        assert_eq!((r.short_term, r.long_term), (3, 9));
        assert_eq!((r.adj1, r.adj2), (1, 2));
    }

    #[test]
    fn non_numeric_fields_read_as_zero() {
        // Sharp edge: corrupt values become plausible-looking zeros.
        let doc = r#"{"results": [
            {"Stats": "{}", "pm2_5_cf_1": "offline", "humidity": null, "Lat": "north"},
            {"pm2_5_cf_1": [1, 2]}
        ]}"#;
        let r = SensorReading::from_json(doc).expect("document should decode");
        assert_eq!((r.adj1, r.adj2, r.humidity), (0, 0, 0));
        assert_eq!((r.short_term, r.long_term), (0, 0));
        assert_eq!(r.lat, 0.0);
        assert_eq!(r.label, "");
    }

    #[test]
    fn one_result_is_malformed() {
        let doc = r#"{"results": [{"Stats": "{}", "pm2_5_cf_1": "1"}]}"#;
        let err = SensorReading::from_json(doc).expect_err("one channel is not enough");
        assert_eq!(err.kind(), ErrorKind::Malformed);
        assert!(err.to_string().contains("two results"));
    }

    #[test]
    fn missing_results_is_malformed() {
        let err = SensorReading::from_json("{}").expect_err("no results");
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn missing_stats_is_malformed() {
        let doc = r#"{"results": [{"pm2_5_cf_1": "1"}, {"pm2_5_cf_1": "1"}]}"#;
        let err = SensorReading::from_json(doc).expect_err("Stats is required");
        assert_eq!(err.kind(), ErrorKind::Malformed);

        let doc = r#"{"results": [{"Stats": "not json"}, {}]}"#;
        let err = SensorReading::from_json(doc).expect_err("Stats must parse");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn garbage_is_malformed() {
        let err = SensorReading::from_json("<html>busy</html>").expect_err("not JSON");
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }
}
