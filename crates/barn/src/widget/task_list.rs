//! Task list widget - the interactive to-do card.
//!
//! Incomplete tasks are shown first and completed tasks sink to the
//! bottom; within each group, rows follow the order the host supplied.
//! Each row carries a checkbox bound to the task's completion state, the
//! task text, and a localized priority badge.

use crate::appearance::{CORNER_RADIUS, Palette, with_alpha};
use crate::i18n::TaskListText;
use crate::message::Message;
use crate::widget::{self, skeleton};
use farmhand_types::{Task, TaskPriority};
use iced::border::Radius;
use iced::widget::{Column, Space, checkbox, column, container, horizontal_space, row, text};
use iced::{Background, Border, Element, Font, Length, Padding};

/// Data required to render the task list card.
pub struct TaskListData<'a> {
    pub tasks: &'a [Task],
    pub loading: bool,
    pub skeleton_frame: usize,
    pub text: &'static TaskListText,
}

/// Stable two-bucket partition: incomplete tasks first, completed tasks
/// last, input order preserved within each bucket.
pub fn sorted_tasks(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
    ordered.extend(tasks.iter().filter(|t| t.completed));
    ordered
}

/// Render the task list card.
pub fn task_list<'a>(data: TaskListData<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = row![
        text(data.text.title).size(18).color(palette.text),
        horizontal_space(),
        text(data.text.view_all).size(12).color(palette.accent_dark),
    ]
    .align_y(iced::Alignment::Center);

    let body: Element<'a, Message> = if data.loading {
        skeleton(data.skeleton_frame, palette)
    } else if !data.tasks.is_empty() {
        let rows: Vec<Element<'a, Message>> = sorted_tasks(data.tasks)
            .into_iter()
            .map(|task| task_row(task, data.text, palette))
            .collect();
        Column::from_vec(rows).spacing(8).width(Length::Fill).into()
    } else {
        container(text(data.text.no_tasks).size(14).color(palette.text_muted))
            .padding(16)
            .center_x(Length::Fill)
            .into()
    };

    widget::card(column![header, Space::with_height(12), body], palette)
}

fn task_row<'a>(
    task: &'a Task,
    text_bundle: &'static TaskListText,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let id = task.id.clone();
    let toggle = checkbox("", task.completed)
        .on_toggle(move |_| Message::ToggleTask(id.clone()))
        .size(18);

    let label_color = if task.completed {
        palette.text_muted
    } else {
        palette.text
    };
    let label = text(&task.text)
        .size(14)
        .color(label_color)
        .width(Length::Fill);

    let badge = priority_badge(task.priority_enum(), text_bundle, palette);

    // Completed rows fade slightly, mirroring their muted label
    let bg = if task.completed {
        with_alpha(palette.card, 0.6)
    } else {
        palette.card
    };

    container(
        row![toggle, label, badge]
            .spacing(12)
            .align_y(iced::Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(move |_| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: Radius::from(CORNER_RADIUS),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

fn priority_badge<'a>(
    priority: TaskPriority,
    text_bundle: &'static TaskListText,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let color = match priority {
        TaskPriority::High => palette.priority_high,
        TaskPriority::Medium => palette.priority_medium,
        TaskPriority::Low => palette.priority_low,
    };
    let bg = with_alpha(color, 0.15);

    container(
        text(text_bundle.priority(priority))
            .size(10)
            .color(color)
            .font(Font::MONOSPACE),
    )
    .padding(Padding::from([3, 8]))
    .style(move |_| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: Radius::from(999.0),
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

    fn task(id: &str, completed: bool, priority: Option<&str>) -> Task {
        Task {
            id: id.into(),
            text: format!("task {}", id),
            completed,
            priority: priority.map(Into::into),
        }
    }

    #[test]
    fn test_sorted_tasks_is_a_permutation() {
        let tasks = vec![
            task("a", true, None),
            task("b", false, None),
            task("c", true, None),
            task("d", false, None),
        ];
        let ordered = sorted_tasks(&tasks);
        assert_eq!(ordered.len(), tasks.len());
        for original in &tasks {
            assert_eq!(
                ordered.iter().filter(|t| t.id == original.id).count(),
                1,
                "task {} must appear exactly once",
                original.id
            );
        }
    }

    #[test]
    fn test_incomplete_precede_completed() {
        let tasks = vec![
            task("a", true, None),
            task("b", false, None),
            task("c", true, None),
            task("d", false, None),
        ];
        let ordered = sorted_tasks(&tasks);
        let first_completed = ordered.iter().position(|t| t.completed).unwrap();
        assert!(ordered[first_completed..].iter().all(|t| t.completed));
    }

    #[test]
    fn test_relative_order_preserved_within_groups() {
        let tasks = vec![
            task("a", true, None),
            task("b", false, None),
            task("c", true, None),
            task("d", false, None),
            task("e", false, None),
        ];
        let ids: Vec<&str> = sorted_tasks(&tasks).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "d", "e", "a", "c"]);
    }

    #[test]
    fn test_empty_and_uniform_inputs() {
        assert!(sorted_tasks(&[]).is_empty());

        let all_done = vec![task("a", true, None), task("b", true, None)];
        let ids: Vec<&str> = sorted_tasks(&all_done).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_example_scenario() {
        // Water field (high, open), Order seed (low, done), Check soil (no priority)
        let tasks = vec![
            Task {
                id: "1".into(),
                text: "Water field".into(),
                completed: false,
                priority: Some("high".into()),
            },
            Task {
                id: "2".into(),
                text: "Order seed".into(),
                completed: true,
                priority: Some("low".into()),
            },
            Task {
                id: "3".into(),
                text: "Check soil".into(),
                completed: false,
                priority: None,
            },
        ];
        let ids: Vec<&str> = sorted_tasks(&tasks).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "2"]);

        // Task 3 carries the localized "medium" label
        let bundle = &translations(Language::En).tasks;
        assert_eq!(bundle.priority(tasks[2].priority_enum()), "Medium");
    }
}
