//! Utilities for drawing.

use std::borrow::Cow;

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::{DrawTarget, Point, Size},
    primitives::Rectangle,
};

/// Convert a severity color for drawing.
pub fn to_rgb(c: aqi::Color) -> Rgb888 {
    Rgb888::new(c.r, c.g, c.b)
}

/// Mix `from` and `to`; `t` is clamped to 0.0..=1.0.
pub fn lerp(from: Rgb888, to: Rgb888, t: f32) -> Rgb888 {
    use embedded_graphics::pixelcolor::RgbColor;
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgb888::new(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}

/// Fill `area` with a vertical gradient: `top` on the first row,
/// `bottom` on the last.
pub fn fill_gradient<D>(
    target: &mut D,
    area: &Rectangle,
    top: Rgb888,
    bottom: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let rows = area.size.height;
    for row in 0..rows {
        let t = if rows > 1 {
            row as f32 / (rows - 1) as f32
        } else {
            0.0
        };
        let line = Rectangle::new(
            area.top_left + Point::new(0, row as i32),
            Size::new(area.size.width, 1),
        );
        target.fill_solid(&line, lerp(top, bottom, t))?;
    }
    Ok(())
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with "..".
pub fn fit(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let keep = max_chars.saturating_sub(2);
    let mut s: String = text.chars().take(keep).collect();
    s.extend(std::iter::repeat('.').take(max_chars.min(2)));
    Cow::Owned(s)
}

/// Greedily wrap `text` on whitespace into lines of at most `max_chars`
/// characters; words longer than a line are cut with [`fit`].
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let word = fit(word, max_chars);
        let len = line.chars().count();
        if len > 0 && len + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
