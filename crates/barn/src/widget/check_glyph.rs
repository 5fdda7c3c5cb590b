//! Canvas-drawn completion glyphs for task rows.
//!
//! The upcoming-tasks page renders read-only rows, so instead of an
//! interactive checkbox it draws a rounded-square glyph (filled with a
//! checkmark when the task is done) or, for plain preview strings with
//! no completion state, a neutral dot marker.

use crate::appearance::palette;
use iced::border::Radius;
use iced::widget::canvas::{self, Cache, Canvas, Geometry, Path, Stroke};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse};

/// Side length of the square check glyph
const GLYPH_SIZE: f32 = 18.0;

/// Diameter of the neutral dot marker
const DOT_SIZE: f32 = 8.0;

/// Rounded-square checkbox glyph, filled with a checkmark when complete.
pub struct CheckGlyph {
    completed: bool,
    cache: Cache,
}

impl CheckGlyph {
    pub fn new(completed: bool) -> Self {
        Self {
            completed,
            cache: Cache::new(),
        }
    }
}

impl<Message> canvas::Program<Message> for CheckGlyph {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let p = palette();
            let side = bounds.width.min(bounds.height);
            let inset = 1.5;
            let square = Path::rounded_rectangle(
                Point::new(inset, inset),
                Size::new(side - inset * 2.0, side - inset * 2.0),
                Radius::from(4.0),
            );

            if self.completed {
                frame.fill(&square, p.accent);

                let center = frame.center();
                let offset = side * 0.22;
                let check = Path::new(|builder| {
                    builder.move_to(Point::new(center.x - offset, center.y));
                    builder.line_to(Point::new(
                        center.x - offset * 0.3,
                        center.y + offset * 0.7,
                    ));
                    builder.line_to(Point::new(center.x + offset, center.y - offset * 0.5));
                });
                frame.stroke(
                    &check,
                    Stroke::default()
                        .with_color(iced::Color::WHITE)
                        .with_width(2.0),
                );
            } else {
                frame.stroke(&square, Stroke::default().with_color(p.border).with_width(2.0));
            }
        });

        vec![geometry]
    }
}

/// Neutral dot for preview rows without completion state.
pub struct DotMarker {
    cache: Cache,
}

impl DotMarker {
    pub fn new() -> Self {
        Self {
            cache: Cache::new(),
        }
    }
}

impl Default for DotMarker {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> canvas::Program<Message> for DotMarker {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let radius = bounds.width.min(bounds.height) / 2.0;
            let dot = Path::circle(frame.center(), radius);
            frame.fill(&dot, palette().text_muted);
        });

        vec![geometry]
    }
}

/// Helper to create a check glyph element
pub fn check_glyph<'a, Message: 'a>(completed: bool) -> Element<'a, Message> {
    Canvas::new(CheckGlyph::new(completed))
        .width(Length::Fixed(GLYPH_SIZE))
        .height(Length::Fixed(GLYPH_SIZE))
        .into()
}

/// Helper to create a dot marker element
pub fn dot_marker<'a, Message: 'a>() -> Element<'a, Message> {
    Canvas::new(DotMarker::new())
        .width(Length::Fixed(DOT_SIZE))
        .height(Length::Fixed(DOT_SIZE))
        .into()
}
