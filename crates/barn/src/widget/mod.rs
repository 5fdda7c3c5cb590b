//! Reusable widget builders for Barn
//!
//! Generic, reusable widget functions that accept a palette for theming
//! consistency.

pub mod check_glyph;
pub mod icon;
pub mod sidebar;
pub mod task_list;

pub use check_glyph::{check_glyph, dot_marker};
pub use icon::icon;
pub use task_list::{TaskListData, sorted_tasks, task_list};

use crate::appearance::{CORNER_RADIUS, CORNER_RADIUS_LARGE, PADDING_LARGE, Palette, with_alpha};
use iced::border::Radius;
use iced::widget::{Column, Space, button, container};
use iced::{Background, Border, Color, Element, Length, Padding, Shadow, Vector};

/// Number of placeholder rows in a loading skeleton
pub const SKELETON_ROWS: usize = 3;

/// Pulse alpha sequence for skeleton rows; rows index into this with a
/// stagger so the shimmer travels downward.
const PULSE: &[f32] = &[0.45, 0.55, 0.65, 0.75, 0.85, 0.95, 0.85, 0.75, 0.65, 0.55];

/// Alpha for the given animation frame and row index.
pub fn pulse_alpha(frame: usize, index: usize) -> f32 {
    PULSE[(frame + index * 2) % PULSE.len()]
}

/// Fixed three-row loading placeholder, pulsing with the skeleton frame.
///
/// Rendered whenever a loading flag is set, regardless of whatever data
/// is concurrently available.
pub fn skeleton<'a, Message: 'a>(frame: usize, palette: &Palette) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = (0..SKELETON_ROWS)
        .map(|index| {
            let bg = with_alpha(palette.skeleton, pulse_alpha(frame, index));
            container(Space::new(Length::Fill, 48))
                .style(move |_| container::Style {
                    background: Some(Background::Color(bg)),
                    border: Border {
                        radius: Radius::from(CORNER_RADIUS),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .into()
        })
        .collect();

    Column::from_vec(rows)
        .spacing(12)
        .width(Length::Fill)
        .into()
}

/// Card container with border and soft shadow
///
/// Used for the main content cards (task list, today/upcoming sections,
/// advice, market prices).
pub fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    palette: &Palette,
) -> Element<'a, Message> {
    let bg = palette.surface;
    let border_color = palette.border;

    container(content)
        .padding(PADDING_LARGE)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Radius::from(CORNER_RADIUS_LARGE),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}

/// Icon button (small, icon-only)
///
/// Transparent background that highlights on hover; used for toolbar
/// actions such as refresh.
pub fn icon_button<Message: Clone + 'static>(
    lucide_icon: lucide_icons::Icon,
    msg: Message,
    palette: &Palette,
) -> Element<'static, Message> {
    let text_color = palette.text_secondary;
    let hover_bg = palette.card_hover;

    button(container(icon(lucide_icon).size(14).color(text_color)).padding(Padding::from([6, 10])))
        .on_press(msg)
        .style(move |_, status| {
            let bg = match status {
                button::Status::Hovered => hover_bg,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                border: Border {
                    radius: Radius::from(CORNER_RADIUS),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_alpha_staggers_rows() {
        // Adjacent rows at the same frame sit at different points of the pulse
        assert_ne!(pulse_alpha(0, 0), pulse_alpha(0, 1));
        // The sequence wraps
        assert_eq!(pulse_alpha(0, 0), pulse_alpha(PULSE.len(), 0));
    }
}
