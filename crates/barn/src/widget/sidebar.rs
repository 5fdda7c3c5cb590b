//! Sidebar navigation widget for Barn
//!
//! Nav buttons for the main screens plus the language picker.

use crate::appearance::{CORNER_RADIUS_SMALL, Palette};
use crate::i18n::Translations;
use crate::message::Message;
use crate::screen::Screen;
use crate::widget::icon;
use farmhand_types::Language;
use iced::border::Radius;
use iced::widget::{Column, button, container, pick_list, text, vertical_space};
use iced::{Background, Border, Color, Element, Length, Padding};
use lucide_icons::Icon;

/// Sidebar navigation item
struct NavItem {
    icon: lucide_icons::Icon,
    screen: Screen,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        icon: Icon::Sprout,
        screen: Screen::Dashboard,
    },
    NavItem {
        icon: Icon::CalendarDays,
        screen: Screen::Upcoming,
    },
];

/// Sidebar width in pixels
const SIDEBAR_WIDTH: f32 = 170.0;

/// Renders the sidebar navigation
pub fn view<'a>(
    current_screen: Screen,
    language: Language,
    translations: &'static Translations,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let bg = palette.surface;

    let mut items: Vec<Element<'a, Message>> = NAV_ITEMS
        .iter()
        .map(|item| nav_button(item, current_screen, translations, palette))
        .collect();

    items.push(vertical_space().into());
    items.push(
        pick_list(Language::ALL, Some(language), Message::LanguageSelected)
            .text_size(13)
            .padding(Padding::from([8, 10]))
            .width(Length::Fill)
            .into(),
    );

    container(Column::from_vec(items).spacing(6).padding(12))
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            ..Default::default()
        })
        .into()
}

fn label(screen: Screen, translations: &'static Translations) -> &'static str {
    match screen {
        Screen::Dashboard => translations.nav.dashboard,
        Screen::Upcoming => translations.nav.upcoming,
    }
}

fn nav_button<'a>(
    item: &NavItem,
    current: Screen,
    translations: &'static Translations,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let is_active = item.screen == current;

    let text_color = if is_active {
        palette.accent_dark
    } else {
        palette.text_secondary
    };

    let icon_color = if is_active {
        palette.accent_dark
    } else {
        palette.text_muted
    };

    let hover_bg = palette.card_hover;
    let active_bg = palette.card;
    let accent = palette.accent;

    let icon_widget = icon(item.icon).color(icon_color);
    let nav_label = text(label(item.screen, translations))
        .size(13)
        .color(text_color);

    let content = iced::widget::row![icon_widget, nav_label]
        .spacing(10)
        .align_y(iced::Alignment::Center);

    button(content)
        .on_press(Message::Navigate(item.screen))
        .padding(Padding::from([10, 16]))
        .width(Length::Fill)
        .style(move |_, status| {
            let bg = match status {
                button::Status::Hovered => hover_bg,
                _ if is_active => active_bg,
                _ => Color::TRANSPARENT,
            };

            let border = if is_active {
                Border {
                    color: accent,
                    width: 1.0,
                    radius: Radius::from(CORNER_RADIUS_SMALL),
                }
            } else {
                Border {
                    radius: Radius::from(CORNER_RADIUS_SMALL),
                    ..Default::default()
                }
            };

            button::Style {
                background: Some(Background::Color(bg)),
                border,
                ..Default::default()
            }
        })
        .into()
}
