//! Presentation surfaces for a refresh [`Outcome`].

use std::io::Write;

use aqi::Color;

use crate::{Outcome, Widget};

/// Somewhere to show the outcome of a refresh.
pub trait RenderSink {
    /// Present the outcome, replacing whatever was shown before.
    fn render(&mut self, outcome: &Outcome) -> Result<(), String>;
}

/// Writes the widget as lines of text, optionally in the widget's colors
/// (24-bit ANSI escapes).
pub struct TerminalSink<W> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        TerminalSink { out, color }
    }

    /// The underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn lines(widget: &Widget) -> [String; 6] {
        [
            widget.header(),
            widget.aqi_text(),
            widget.label().to_owned(),
            widget.location.clone(),
            widget.updated_text(),
            widget.url.clone(),
        ]
    }

    fn write_widget(&mut self, widget: &Widget) -> std::io::Result<()> {
        let attrs = &widget.classification.attributes;
        let lines = Self::lines(widget);
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = lines.len();
        for (i, line) in lines.iter().enumerate() {
            if self.color {
                // Step through the gradient one row at a time.
                let t = i as f32 / (rows - 1) as f32;
                let bg = mix(attrs.start_color, attrs.end_color, t);
                let fg = attrs.text_color;
                writeln!(
                    self.out,
                    "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {line:width$} \x1b[0m",
                    bg.r, bg.g, bg.b, fg.r, fg.g, fg.b,
                )?;
            } else {
                writeln!(self.out, "{line}")?;
            }
        }
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.color {
            writeln!(self.out, "\x1b[31m{message}\x1b[0m")
        } else {
            writeln!(self.out, "{message}")
        }
    }
}

fn mix(from: Color, to: Color, t: f32) -> Color {
    let m = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color {
        r: m(from.r, to.r),
        g: m(from.g, to.g),
        b: m(from.b, to.b),
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render(&mut self, outcome: &Outcome) -> Result<(), String> {
        let written = match outcome {
            Outcome::Ready(widget) => self.write_widget(widget),
            Outcome::Failed(message) => self.write_error(message),
        };
        written
            .and_then(|_| self.out.flush())
            .map_err(|e| e.to_string())
    }
}

/// Writes each outcome as one line of JSON.
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        JsonSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for JsonSink<W> {
    fn render(&mut self, outcome: &Outcome) -> Result<(), String> {
        serde_json::to_writer(&mut self.out, outcome).map_err(|e| e.to_string())?;
        writeln!(self.out).map_err(|e| e.to_string())?;
        self.out.flush().map_err(|e| e.to_string())
    }
}
