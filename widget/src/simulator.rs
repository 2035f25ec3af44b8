//! Widget output through the embedded-graphics simulator:
//! PNG screenshots, and (with the `simulator` feature) a desktop window.

use std::path::PathBuf;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay};

use crate::{face::draw_outcome, face::WIDGET_SIZE, sink::RenderSink, Outcome};

fn settings(scale: u32) -> OutputSettings {
    OutputSettingsBuilder::new().scale(scale).build()
}

/// Draws the widget off-screen and saves each frame to a PNG file,
/// overwriting the previous one.
pub struct ScreenshotSink {
    display: SimulatorDisplay<Rgb888>,
    path: PathBuf,
    scale: u32,
}

impl ScreenshotSink {
    pub fn new(path: impl Into<PathBuf>, scale: u32) -> Self {
        ScreenshotSink {
            display: SimulatorDisplay::new(WIDGET_SIZE),
            path: path.into(),
            scale: scale.max(1),
        }
    }
}

impl RenderSink for ScreenshotSink {
    fn render(&mut self, outcome: &Outcome) -> Result<(), String> {
        draw_outcome(outcome, &mut self.display).expect("infallible");
        self.display
            .to_rgb_output_image(&settings(self.scale))
            .save_png(&self.path)
            .map_err(|e| e.to_string())?;
        tracing::info!("wrote {}", self.path.display());
        Ok(())
    }
}

#[cfg(feature = "simulator")]
pub use window::WindowSink;

#[cfg(feature = "simulator")]
mod window {
    use embedded_graphics::pixelcolor::Rgb888;
    use embedded_graphics_simulator::{SimulatorDisplay, Window};

    use super::settings;
    use crate::{face::draw_outcome, face::WIDGET_SIZE, sink::RenderSink, Outcome};

    /// Shows the widget in a desktop window.
    pub struct WindowSink {
        display: SimulatorDisplay<Rgb888>,
        window: Window,
    }

    impl WindowSink {
        pub fn new(scale: u32) -> Self {
            WindowSink {
                display: SimulatorDisplay::new(WIDGET_SIZE),
                window: Window::new("AQI", &settings(scale.max(1))),
            }
        }
    }

    impl RenderSink for WindowSink {
        fn render(&mut self, outcome: &Outcome) -> Result<(), String> {
            draw_outcome(outcome, &mut self.display).expect("infallible");
            self.window.update(&self.display);
            Ok(())
        }
    }
}
