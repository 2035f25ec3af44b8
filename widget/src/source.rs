//! Places to get a sensor document from.

use std::{path::PathBuf, time::Duration};

use crate::Error;

/// Default endpoint; the sensor ID is appended.
pub const DEFAULT_API_URL: &str = "https://www.purpleair.com/json?show=";

/// A type that can fetch the current document for a sensor.
///
/// Implementations make a single attempt per call; retrying is up to
/// whoever schedules the next refresh.
pub trait SensorSource {
    /// Fetch the raw JSON document for `sensor_id`.
    fn fetch(&mut self, sensor_id: &str) -> Result<String, Error>;
}

/// Fetches sensor documents from the PurpleAir JSON API.
pub struct PurpleAir {
    client: reqwest::blocking::Client,
    api_url: String,
}

impl PurpleAir {
    /// Create a client for the API at `api_url`, giving up on a request
    /// after `timeout`.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("aqi-widget/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(PurpleAir {
            client,
            api_url: api_url.into(),
        })
    }

    fn url(&self, sensor_id: &str) -> String {
        format!("{}{}", self.api_url, sensor_id)
    }
}

impl SensorSource for PurpleAir {
    fn fetch(&mut self, sensor_id: &str) -> Result<String, Error> {
        let url = self.url(sensor_id);
        tracing::debug!("GET {url}");
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

/// Reads a saved sensor document from disk, whatever the sensor ID.
pub struct FileSource {
    pub path: PathBuf,
}

impl SensorSource for FileSource {
    fn fetch(&mut self, _sensor_id: &str) -> Result<String, Error> {
        tracing::debug!("reading {}", self.path.display());
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// Fake source: repeatedly provides the indicated document, or fails.
pub struct FakeSource {
    pub document: Result<String, String>,
}

impl FakeSource {
    pub fn new(document: impl Into<String>) -> Self {
        FakeSource {
            document: Ok(document.into()),
        }
    }

    /// A source that always fails as if the network were down.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        FakeSource {
            document: Err(reason.into()),
        }
    }
}

impl SensorSource for FakeSource {
    fn fetch(&mut self, _sensor_id: &str) -> Result<String, Error> {
        match &self.document {
            Ok(doc) => Ok(doc.clone()),
            Err(reason) => Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                reason.clone(),
            ))),
        }
    }
}
