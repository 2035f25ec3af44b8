//! An air quality widget.
//!
//! Fetches a PurpleAir sensor's readings, corrects them for wood smoke,
//! converts them to the US EPA Air Quality Index, and shows the result:
//! as text, as JSON, or as a small color-coded image.
//!
//! The computation itself lives in the [`aqi`] crate. This crate provides
//! the [`SensorSource`] the data comes from, the [`refresh`] pass that turns
//! it into an [`Outcome`], and the [`RenderSink`]s that show it.
use std::time::Duration;

pub mod config;
pub mod drawing;
mod error;
pub mod face;
mod reading;
mod refresh;
pub mod shutdown;
pub mod sink;
pub mod source;

#[cfg(feature = "screenshot")]
pub mod simulator;

use chrono::Local;

pub use error::{Error, ErrorKind};
pub use reading::SensorReading;
pub use refresh::{compute, map_url, refresh, Outcome, Widget};
pub use shutdown::Shutdown;
pub use sink::RenderSink;
pub use source::SensorSource;

/// Refresh and render until done.
///
/// With no `interval`, refreshes once. Otherwise refreshes every `interval`
/// until `shutdown` is stopped; each refresh starts from scratch.
///
/// Returns the result of the last render.
pub fn run(
    sensor_id: &str,
    source: &mut dyn SensorSource,
    sink: &mut dyn RenderSink,
    interval: Option<Duration>,
    shutdown: &Shutdown,
) -> Result<(), String> {
    loop {
        let outcome = refresh(source, sensor_id, &Local);
        let rendered = sink.render(&outcome);
        if let Err(e) = &rendered {
            tracing::error!("could not render: {e}");
        }

        let Some(interval) = interval else {
            return rendered;
        };
        if shutdown.is_stopped() || shutdown.sleep(interval) {
            return rendered;
        }
    }
}
