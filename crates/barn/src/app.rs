use iced::widget::{container, row};
use iced::{Background, Element, Length, Subscription, Task};

use crate::appearance;
use crate::config::BarnConfig;
use crate::data;
use crate::i18n;
use crate::message::Message;
use crate::screen::{self, Screen, ScreenContext};
use crate::widget;
use farmhand_types::{DashboardAdvice, Language, MarketPrice, Profile, Task as FarmTask, WeeklyTasks};

/// Application state for the Barn interface.
///
/// Barn owns the authoritative copies of the data it renders; the view
/// layer only borrows them and signals changes back through [`Message`].
#[derive(Debug)]
pub struct Barn {
    screen: Screen,
    language: Language,
    profile: Profile,

    tasks: Vec<FarmTask>,
    tasks_loading: bool,

    /// None until loaded, and still None when the host has no schedule
    weekly_tasks: Option<WeeklyTasks>,
    weekly_loading: bool,

    advice: Option<DashboardAdvice>,
    market_prices: Vec<MarketPrice>,

    status_message: Option<String>,

    /// Current skeleton pulse frame
    skeleton_frame: usize,
}

impl Barn {
    pub fn new() -> (Self, Task<Message>) {
        let config = BarnConfig::load();

        let barn = Self {
            screen: Screen::Dashboard,
            language: config.language,
            profile: data::profile(),
            tasks: Vec::new(),
            tasks_loading: true,
            weekly_tasks: None,
            weekly_loading: true,
            advice: Some(data::advice()),
            market_prices: data::market_prices(),
            status_message: None,
            skeleton_frame: 0,
        };

        // Load both task feeds on startup
        let startup_task = Task::batch([
            Task::perform(data::load_tasks(), Message::TasksLoaded),
            Task::perform(data::load_weekly_tasks(), Message::WeeklyTasksLoaded),
        ]);

        (barn, startup_task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                self.screen = screen;
                Task::none()
            }

            Message::LanguageSelected(language) => {
                self.language = language;
                let config = BarnConfig { language };
                if let Err(e) = config.save() {
                    tracing::warn!("failed to persist language preference: {}", e);
                }
                Task::none()
            }

            Message::ToggleTask(id) => {
                // The widgets only signal; the authoritative list lives here
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.completed = !task.completed;
                }
                Task::none()
            }

            Message::TasksLoaded(result) => {
                self.tasks_loading = false;
                match result {
                    Ok(tasks) => self.tasks = tasks,
                    Err(e) => {
                        tracing::warn!("task load failed: {}", e);
                        self.status_message = Some(e);
                    }
                }
                Task::none()
            }

            Message::WeeklyTasksLoaded(result) => {
                self.weekly_loading = false;
                match result {
                    Ok(weekly) => self.weekly_tasks = weekly,
                    Err(e) => {
                        tracing::warn!("weekly task load failed: {}", e);
                        self.status_message = Some(e);
                    }
                }
                Task::none()
            }

            Message::Refresh => {
                self.status_message = None;
                self.tasks_loading = true;
                self.weekly_loading = true;
                Task::batch([
                    Task::perform(data::load_tasks(), Message::TasksLoaded),
                    Task::perform(data::load_weekly_tasks(), Message::WeeklyTasksLoaded),
                ])
            }

            Message::SkeletonTick => {
                self.skeleton_frame = self.skeleton_frame.wrapping_add(1);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let palette = appearance::palette();
        let text = i18n::translations(self.language);

        let sidebar = widget::sidebar::view(self.screen, self.language, text, palette);

        let ctx = ScreenContext {
            profile: &self.profile,
            tasks: &self.tasks,
            tasks_loading: self.tasks_loading,
            weekly_tasks: self.weekly_tasks.as_ref(),
            weekly_loading: self.weekly_loading,
            advice: self.advice.as_ref(),
            market_prices: &self.market_prices,
            status_message: self.status_message.as_ref(),
            skeleton_frame: self.skeleton_frame,
            text,
        };
        let content = screen::dispatch_view(self.screen, &ctx, palette);

        let layout = row![sidebar, content].width(Length::Fill).height(Length::Fill);

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(appearance::palette().background)),
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Skeleton pulse only runs while something is loading
        if self.tasks_loading || self.weekly_loading {
            iced::time::every(std::time::Duration::from_millis(120)).map(|_| Message::SkeletonTick)
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, completed: bool) -> FarmTask {
        FarmTask {
            id: id.into(),
            text: format!("task {}", id),
            completed,
            priority: None,
        }
    }

    fn loaded_barn(tasks: Vec<FarmTask>) -> Barn {
        let (mut barn, _) = Barn::new();
        let _ = barn.update(Message::TasksLoaded(Ok(tasks)));
        barn
    }

    #[test]
    fn test_toggle_flips_only_the_named_task() {
        let mut barn = loaded_barn(vec![task("1", false), task("2", true)]);

        let _ = barn.update(Message::ToggleTask("1".into()));

        assert!(barn.tasks[0].completed);
        assert!(barn.tasks[1].completed);

        let _ = barn.update(Message::ToggleTask("1".into()));
        assert!(!barn.tasks[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_noop() {
        let mut barn = loaded_barn(vec![task("1", false)]);
        let _ = barn.update(Message::ToggleTask("missing".into()));
        assert!(!barn.tasks[0].completed);
        assert_eq!(barn.tasks.len(), 1);
    }

    #[test]
    fn test_absent_weekly_mapping_stays_none() {
        let (mut barn, _) = Barn::new();
        let _ = barn.update(Message::WeeklyTasksLoaded(Ok(None)));
        assert!(!barn.weekly_loading);
        assert!(barn.weekly_tasks.is_none());
    }

    #[test]
    fn test_empty_weekly_mapping_is_present_but_empty() {
        let (mut barn, _) = Barn::new();
        let _ = barn.update(Message::WeeklyTasksLoaded(Ok(Some(WeeklyTasks::new()))));
        let weekly = barn.weekly_tasks.as_ref().unwrap();
        assert!(weekly.is_empty());
    }

    #[test]
    fn test_load_error_sets_status_and_clears_loading() {
        let (mut barn, _) = Barn::new();
        let _ = barn.update(Message::TasksLoaded(Err("backend unreachable".into())));
        assert!(!barn.tasks_loading);
        assert_eq!(barn.status_message.as_deref(), Some("backend unreachable"));
        assert!(barn.tasks.is_empty());
    }

    #[test]
    fn test_language_selection_updates_state() {
        let (mut barn, _) = Barn::new();
        let _ = barn.update(Message::LanguageSelected(Language::Ta));
        assert_eq!(barn.language, Language::Ta);
    }
}
