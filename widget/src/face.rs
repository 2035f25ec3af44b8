//! Drawing routines for the face of the widget.

use embedded_graphics::{
    geometry::{Point, Size},
    mono_font::{
        ascii::{FONT_10X20, FONT_5X8, FONT_6X10, FONT_7X13, FONT_9X15_BOLD},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::{Rgb888, RgbColor},
    prelude::DrawTarget,
    text::{Baseline, Text},
    Drawable,
};

use crate::{
    drawing::{fill_gradient, fit, to_rgb, wrap},
    Outcome, Widget,
};

/// Size of the widget face, in pixels.
pub const WIDGET_SIZE: Size = Size::new(170, 170);

const PAD_TOP: i32 = 20;
const PAD_LEFT: i32 = 15;
const PAD_RIGHT: i32 = 10;

/// Color of error text.
pub const ERROR_COLOR: Rgb888 = Rgb888::new(0xff, 0x3b, 0x30);

/// Draw the outcome of a refresh over the whole of `target`.
pub fn draw_outcome<D>(outcome: &Outcome, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    match outcome {
        Outcome::Ready(widget) => draw_widget(widget, target),
        Outcome::Failed(message) => draw_error(message, target),
    }
}

/// Writes successive lines of text down the face.
struct Lines<'a, D> {
    target: &'a mut D,
    cursor: Point,
    width: u32,
    color: Rgb888,
}

impl<D> Lines<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn line(&mut self, text: &str, font: &MonoFont) -> Result<(), D::Error> {
        let max_chars = (self.width / font.character_size.width) as usize;
        let style = MonoTextStyle::new(font, self.color);
        Text::with_baseline(&fit(text, max_chars), self.cursor, style, Baseline::Top)
            .draw(self.target)?;
        self.space(font.character_size.height);
        Ok(())
    }

    fn space(&mut self, px: u32) {
        self.cursor.y += px as i32;
    }
}

fn text_width<D: DrawTarget>(target: &D) -> u32 {
    target
        .bounding_box()
        .size
        .width
        .saturating_sub((PAD_LEFT + PAD_RIGHT) as u32)
}

fn draw_widget<D>(widget: &Widget, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let attrs = &widget.classification.attributes;
    let area = target.bounding_box();
    fill_gradient(
        target,
        &area,
        to_rgb(attrs.start_color),
        to_rgb(attrs.end_color),
    )?;

    let width = text_width(target);
    let mut lines = Lines {
        target,
        cursor: area.top_left + Point::new(PAD_LEFT, PAD_TOP),
        width,
        color: to_rgb(attrs.text_color),
    };
    lines.line(&widget.header(), &FONT_7X13)?;
    lines.line(&widget.aqi_text(), &FONT_10X20)?;
    lines.line(widget.label(), &FONT_9X15_BOLD)?;
    lines.space(10);
    lines.line(&widget.location, &FONT_6X10)?;
    lines.line(&widget.updated_text(), &FONT_5X8)?;
    Ok(())
}

fn draw_error<D>(message: &str, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let area = target.bounding_box();
    target.fill_solid(&area, Rgb888::WHITE)?;

    let width = text_width(target);
    let font = &FONT_6X10;
    let mut lines = Lines {
        target,
        cursor: area.top_left + Point::new(PAD_LEFT, PAD_TOP),
        width,
        color: ERROR_COLOR,
    };
    let max_chars = (width / font.character_size.width) as usize;
    let bottom = area.top_left.y + area.size.height as i32;
    for text in wrap(message, max_chars) {
        if lines.cursor.y + font.character_size.height as i32 > bottom {
            break;
        }
        lines.line(&text, font)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi::{aqi_from_concentration, Trend};
    use embedded_graphics::{geometry::OriginDimensions, Pixel};
    use std::convert::Infallible;

    /// In-memory draw target.
    struct Frame {
        size: Size,
        pixels: Vec<Rgb888>,
    }

    impl Frame {
        fn new(size: Size) -> Self {
            Frame {
                size,
                pixels: vec![Rgb888::new(1, 2, 3); (size.width * size.height) as usize],
            }
        }

        fn at(&self, x: u32, y: u32) -> Rgb888 {
            self.pixels[(y * self.size.width + x) as usize]
        }

        fn count(&self, color: Rgb888) -> usize {
            self.pixels.iter().filter(|&&c| c == color).count()
        }
    }

    impl OriginDimensions for Frame {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for Frame {
        type Color = Rgb888;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, c) in pixels {
                if p.x >= 0
                    && p.y >= 0
                    && (p.x as u32) < self.size.width
                    && (p.y as u32) < self.size.height
                {
                    self.pixels[(p.y as u32 * self.size.width + p.x as u32) as usize] = c;
                }
            }
            Ok(())
        }
    }

    fn widget(pm: f64) -> Widget {
        let aqi = aqi_from_concentration(pm);
        Widget {
            aqi,
            classification: aqi.classify(),
            trend: Trend::Worsening,
            concentration: pm,
            location: "A very long sensor location label".to_owned(),
            updated: "12:26".to_owned(),
            url: String::new(),
        }
    }

    #[test]
    fn widget_has_gradient_and_text() {
        // 200 µg/m³ is Very Unhealthy: dark gray gradient, white text.
        let w = widget(200.0);
        let attrs = w.classification.attributes;
        let mut frame = Frame::new(WIDGET_SIZE);
        draw_outcome(&Outcome::Ready(w), &mut frame).expect("infallible");

        assert_eq!(frame.at(0, 0), to_rgb(attrs.start_color));
        assert_eq!(frame.at(0, WIDGET_SIZE.height - 1), to_rgb(attrs.end_color));
        assert_eq!(frame.count(Rgb888::new(1, 2, 3)), 0);
        assert!(frame.count(Rgb888::WHITE) > 100);
    }

    #[test]
    fn text_stays_inside_padding() {
        let mut frame = Frame::new(WIDGET_SIZE);
        draw_outcome(&Outcome::Ready(widget(400.0)), &mut frame).expect("infallible");
        // Hazardous is a flat black background with white text.
        for y in 0..WIDGET_SIZE.height {
            for x in (WIDGET_SIZE.width - PAD_RIGHT as u32)..WIDGET_SIZE.width {
                assert_eq!(frame.at(x, y), Rgb888::BLACK, "text at ({x}, {y})");
            }
        }
    }

    #[test]
    fn error_is_red_on_white() {
        let mut frame = Frame::new(WIDGET_SIZE);
        let outcome = Outcome::Failed("could not reach data source: timed out".to_owned());
        draw_outcome(&outcome, &mut frame).expect("infallible");
        assert_eq!(frame.at(0, 0), Rgb888::WHITE);
        assert!(frame.count(ERROR_COLOR) > 0);
    }

    #[test]
    fn long_errors_are_cut_at_the_bottom() {
        let mut frame = Frame::new(Size::new(60, 40));
        let outcome = Outcome::Failed("word ".repeat(200));
        draw_outcome(&outcome, &mut frame).expect("infallible");
        assert!(frame.count(ERROR_COLOR) > 0);
    }
}
