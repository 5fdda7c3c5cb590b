//! Upcoming tasks screen - today's checklist plus the week-ahead preview.
//!
//! Two stacked cards: today's tasks with completion glyphs, and the
//! weekly preview grouped by day in the order the host supplied. Days
//! are labeled by ordinal position plus [`DAY_OFFSET`]; preview rows are
//! plain strings with a neutral dot marker and no completion state.

use crate::appearance::{Palette, SPACING_LARGE};
use crate::i18n::{Translations, UpcomingText};
use crate::message::Message;
use crate::widget::{check_glyph, dot_marker, icon, skeleton};
use farmhand_types::{DayPlan, Task, WeeklyTasks};
use iced::widget::{Column, Space, column, container, horizontal_rule, row, scrollable, text};
use iced::{Element, Font, Length};
use lucide_icons::Icon;

/// Day-label offset: the first listed day is labeled as two days out.
// TODO: confirm with product whether the preview should start the day
// after tomorrow or tomorrow; the web app shipped with this offset.
pub const DAY_OFFSET: usize = 2;

/// State for the upcoming tasks screen
pub struct UpcomingScreenState<'a> {
    pub todays_tasks: &'a [Task],
    pub todays_loading: bool,
    pub weekly: Option<&'a WeeklyTasks>,
    pub weekly_loading: bool,
    pub skeleton_frame: usize,
    pub text: &'static Translations,
}

/// Localized headers for each day section, in stored order.
pub fn day_labels(weekly: &WeeklyTasks, text: &UpcomingText) -> Vec<String> {
    weekly
        .iter()
        .enumerate()
        .map(|(index, _)| text.day(index + DAY_OFFSET))
        .collect()
}

/// Main view function for the upcoming tasks screen
pub fn view<'a>(state: UpcomingScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = view_header(&state, palette);
    let today = view_today_card(&state, palette);
    let upcoming = view_upcoming_card(&state, palette);

    scrollable(
        column![header, today, upcoming]
            .spacing(SPACING_LARGE)
            .padding(24)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn view_header<'a>(
    state: &UpcomingScreenState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let t = &state.text.upcoming;

    row![
        icon(Icon::Calendar).size(28).color(palette.accent_dark),
        column![
            text(t.title)
                .size(24)
                .color(palette.text)
                .font(Font::MONOSPACE),
            text(t.subtitle).size(13).color(palette.text_muted),
        ]
        .spacing(2),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_today_card<'a>(
    state: &UpcomingScreenState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = if state.todays_loading {
        skeleton(state.skeleton_frame, palette)
    } else if !state.todays_tasks.is_empty() {
        let rows: Vec<Element<'a, Message>> = state
            .todays_tasks
            .iter()
            .map(|task| task_row(&task.text, Some(task.completed), palette))
            .collect();
        Column::from_vec(rows).spacing(8).width(Length::Fill).into()
    } else {
        container(
            text(state.text.tasks.no_tasks)
                .size(14)
                .color(palette.text_muted),
        )
        .padding(16)
        .center_x(Length::Fill)
        .into()
    };

    crate::widget::card(
        column![
            text(state.text.upcoming.todays_tasks)
                .size(20)
                .color(palette.text),
            Space::with_height(12),
            body,
        ],
        palette,
    )
}

fn view_upcoming_card<'a>(
    state: &UpcomingScreenState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = if state.weekly_loading {
        skeleton(state.skeleton_frame, palette)
    } else {
        match state.weekly {
            Some(weekly) => {
                // An empty mapping renders zero day sections, no message;
                // only an absent mapping gets the distinct fallback below.
                let labels = day_labels(weekly, &state.text.upcoming);
                let sections: Vec<Element<'a, Message>> = weekly
                    .iter()
                    .zip(labels)
                    .map(|(plan, label)| view_day_section(plan, label, state.text, palette))
                    .collect();
                Column::from_vec(sections)
                    .spacing(20)
                    .width(Length::Fill)
                    .into()
            }
            None => container(
                text(state.text.upcoming.no_upcoming_tasks)
                    .size(14)
                    .color(palette.text_muted),
            )
            .padding(24)
            .center_x(Length::Fill)
            .into(),
        }
    };

    crate::widget::card(
        column![
            text(state.text.upcoming.upcoming_header)
                .size(20)
                .color(palette.text),
            Space::with_height(12),
            body,
        ],
        palette,
    )
}

fn view_day_section<'a>(
    plan: &'a DayPlan,
    label: String,
    translations: &'static Translations,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let heading = column![
        text(label).size(15).color(palette.accent_dark),
        horizontal_rule(1),
    ]
    .spacing(6);

    let rows: Element<'a, Message> = if plan.tasks.is_empty() {
        container(
            text(translations.tasks.no_tasks)
                .size(12)
                .color(palette.text_muted),
        )
        .padding(iced::Padding::from([4, 16]))
        .into()
    } else {
        let items: Vec<Element<'a, Message>> = plan
            .tasks
            .iter()
            .map(|task| task_row(task, None, palette))
            .collect();
        Column::from_vec(items).spacing(6).width(Length::Fill).into()
    };

    column![heading, Space::with_height(6), rows]
        .width(Length::Fill)
        .into()
}

/// One task row: a check glyph when completion state is known, a neutral
/// dot marker for plain preview strings (never struck through).
fn task_row<'a>(
    task_text: &'a str,
    completed: Option<bool>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let marker: Element<'a, Message> = match completed {
        Some(done) => check_glyph(done),
        None => dot_marker(),
    };

    let label_color = match completed {
        Some(true) => palette.text_muted,
        _ => palette.text,
    };

    let bg = palette.card;
    container(
        row![
            marker,
            text(task_text)
                .size(14)
                .color(label_color)
                .width(Length::Fill),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(move |_| container::Style {
        background: Some(iced::Background::Color(bg)),
        border: iced::Border {
            radius: iced::border::Radius::from(crate::appearance::CORNER_RADIUS),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations;
    use farmhand_types::Language;

    #[test]
    fn test_day_labels_start_at_offset() {
        let mut weekly = WeeklyTasks::new();
        weekly.push("day1", vec!["Weed paddy".into()]);
        weekly.push("day2", vec![]);
        weekly.push("day3", vec!["Harvest plantain".into()]);

        let t = &translations(Language::En).upcoming;
        assert_eq!(day_labels(&weekly, t), ["Day 2", "Day 3", "Day 4"]);
    }

    #[test]
    fn test_day_labels_follow_stored_order() {
        // Keys out of lexical order still label by position, not name
        let mut weekly = WeeklyTasks::new();
        weekly.push("day5", vec![]);
        weekly.push("day1", vec![]);

        let t = &translations(Language::En).upcoming;
        assert_eq!(day_labels(&weekly, t), ["Day 2", "Day 3"]);
    }

    #[test]
    fn test_empty_weekly_has_no_labels() {
        let t = &translations(Language::En).upcoming;
        assert!(day_labels(&WeeklyTasks::new(), t).is_empty());
    }
}
