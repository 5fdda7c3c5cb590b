//! Dashboard screen - greeting, today's task list, advice, market prices.

use crate::appearance::{Palette, SPACING_LARGE};
use crate::i18n::Translations;
use crate::message::Message;
use crate::widget::{self, TaskListData, icon, task_list};
use farmhand_types::{DashboardAdvice, MarketPrice, PriceTrend, Profile, Task};
use iced::widget::{Column, Space, column, container, horizontal_space, row, scrollable, text};
use iced::{Color, Element, Font, Length};
use lucide_icons::Icon;

/// State for the dashboard screen
pub struct DashboardState<'a> {
    pub profile: &'a Profile,
    pub tasks: &'a [Task],
    pub tasks_loading: bool,
    pub advice: Option<&'a DashboardAdvice>,
    pub market_prices: &'a [MarketPrice],
    pub status_message: Option<&'a String>,
    pub skeleton_frame: usize,
    pub text: &'static Translations,
}

/// Main view function for the dashboard screen
pub fn view<'a>(state: DashboardState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = view_header(&state, palette);

    let tasks_card = task_list(
        TaskListData {
            tasks: state.tasks,
            loading: state.tasks_loading,
            skeleton_frame: state.skeleton_frame,
            text: &state.text.tasks,
        },
        palette,
    );

    let mut side_column = Column::new().spacing(SPACING_LARGE);
    if let Some(advice) = state.advice {
        side_column = side_column.push(view_advice_card(advice, state.text, palette));
    }
    side_column = side_column.push(view_market_card(&state, palette));

    let content = row![
        container(tasks_card).width(Length::FillPortion(1)),
        side_column.width(Length::FillPortion(1)),
    ]
    .spacing(SPACING_LARGE);

    scrollable(
        column![header, content]
            .spacing(SPACING_LARGE)
            .padding(24)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn view_header<'a>(state: &DashboardState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let t = &state.text.dashboard;
    let profile = state.profile;

    let greeting = text(format!("{}, {}", t.greeting, profile.name))
        .size(24)
        .color(palette.text)
        .font(Font::MONOSPACE);

    let farm_line = text(format!("{} · {}", profile.district, profile.crop))
        .size(13)
        .color(palette.text_muted);

    let date_line = text(chrono::Local::now().format("%A, %b %d").to_string())
        .size(12)
        .color(palette.text_secondary);

    let status: Element<'a, Message> = match state.status_message {
        Some(message) => text(message).size(12).color(palette.danger).into(),
        None => Space::new(0, 0).into(),
    };

    let refresh_btn = widget::icon_button(Icon::RefreshCw, Message::Refresh, palette);

    row![
        column![greeting, farm_line].spacing(2),
        horizontal_space(),
        status,
        Space::with_width(8),
        date_line,
        Space::with_width(8),
        refresh_btn,
    ]
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_advice_card<'a>(
    advice: &'a DashboardAdvice,
    translations: &'static Translations,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let header = column![
        text(translations.dashboard.advice_header)
            .size(12)
            .color(palette.text_muted),
        text(&advice.title).size(18).color(palette.text),
    ]
    .spacing(2);

    let lines: Vec<Element<'a, Message>> = advice
        .advice
        .iter()
        .map(|line| {
            row![
                widget::dot_marker(),
                text(line).size(13).color(palette.text_secondary),
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center)
            .into()
        })
        .collect();

    widget::card(
        column![
            header,
            Space::with_height(10),
            Column::from_vec(lines).spacing(8),
        ],
        palette,
    )
}

fn view_market_card<'a>(
    state: &DashboardState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = state
        .market_prices
        .iter()
        .map(|price| view_price_row(price, palette))
        .collect();

    widget::card(
        column![
            text(state.text.dashboard.market_header)
                .size(18)
                .color(palette.text),
            Space::with_height(10),
            Column::from_vec(rows).spacing(8),
        ],
        palette,
    )
}

fn view_price_row<'a>(price: &'a MarketPrice, palette: &'a Palette) -> Element<'a, Message> {
    let (trend_icon, trend_color) = trend_visual(price.trend_enum(), palette);

    row![
        icon(trend_icon).size(14).color(trend_color),
        column![
            text(&price.crop_name).size(13).color(palette.text),
            text(&price.market).size(11).color(palette.text_muted),
        ]
        .spacing(1),
        horizontal_space(),
        text(format!("₹{} {}", price.price, price.unit))
            .size(13)
            .color(palette.text_secondary),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center)
    .into()
}

fn trend_visual(trend: PriceTrend, palette: &Palette) -> (Icon, Color) {
    match trend {
        PriceTrend::Up => (Icon::TrendingUp, palette.trend_up),
        PriceTrend::Down => (Icon::TrendingDown, palette.trend_down),
        PriceTrend::Stable => (Icon::Minus, palette.text_muted),
    }
}
