//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::source::DEFAULT_API_URL;

/// Sensor shown when none is given.
pub const DEFAULT_SENSOR_ID: &str = "49237";

/// Show the air quality index from a PurpleAir sensor.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// PurpleAir sensor ID. Find one near you via https://fire.airnow.gov/:
    /// the ID is the number at the end of a sensor's link.
    #[arg(default_value = DEFAULT_SENSOR_ID)]
    pub sensor_id: String,

    /// Endpoint the sensor ID is appended to.
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds to wait for the data source before giving up.
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Read the sensor document from a file instead of the network.
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Where to show the widget.
    #[arg(long, value_enum, default_value_t = Output::Terminal)]
    pub output: Output,

    /// File written by `--output png`.
    #[arg(long, value_name = "PATH", default_value = "aqi.png")]
    pub png: PathBuf,

    /// Pixel scale for `--output png` and `--output window`.
    #[arg(long, default_value_t = 2)]
    pub scale: u32,

    /// Refresh every SECS seconds until interrupted, instead of once.
    #[arg(long, value_name = "SECS")]
    pub watch: Option<u64>,

    /// Don't color terminal output.
    #[arg(long)]
    pub no_color: bool,

    /// Log more (repeat for more still).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log only errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    /// Lines of text on stdout.
    Terminal,
    /// One JSON object per refresh on stdout.
    Json,
    /// A PNG image of the widget.
    #[cfg(feature = "screenshot")]
    Png,
    /// A desktop window.
    #[cfg(feature = "simulator")]
    Window,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Time between refreshes, if refreshing repeatedly.
    /// Intervals below one second are raised to one second.
    ///
    /// A window stays up, refreshing every ten minutes, unless told otherwise.
    pub fn refresh_interval(&self) -> Option<Duration> {
        #[cfg(feature = "simulator")]
        if self.output == Output::Window && self.watch.is_none() {
            return Some(Duration::from_secs(600));
        }
        self.watch.map(|s| Duration::from_secs(s.max(1)))
    }

    pub fn log_level(&self) -> tracing::Level {
        match (self.quiet, self.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::INFO,
            (false, 1) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        }
    }
}
