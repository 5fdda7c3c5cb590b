//! Screen modules for the Barn application.
//!
//! Each screen is a separate module with its own view function taking a
//! borrowed state struct. The Screen enum provides routing between them.

pub mod dashboard;
pub mod upcoming;

use crate::appearance::Palette;
use crate::i18n::Translations;
use crate::message::Message;
use farmhand_types::{DashboardAdvice, MarketPrice, Profile, Task, WeeklyTasks};
use iced::Element;

/// Application screens for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Greeting, today's task list, advice, market prices
    Dashboard,
    /// Today's checklist plus the week-ahead preview
    Upcoming,
}

/// State context passed to screen renderers.
///
/// Contains all the data needed to render any screen, borrowed from the
/// main application state.
pub struct ScreenContext<'a> {
    pub profile: &'a Profile,
    pub tasks: &'a [Task],
    pub tasks_loading: bool,
    pub weekly_tasks: Option<&'a WeeklyTasks>,
    pub weekly_loading: bool,
    pub advice: Option<&'a DashboardAdvice>,
    pub market_prices: &'a [MarketPrice],
    pub status_message: Option<&'a String>,
    pub skeleton_frame: usize,
    pub text: &'static Translations,
}

/// Dispatches view rendering to the appropriate screen module.
pub fn dispatch_view<'a>(
    screen: Screen,
    ctx: &ScreenContext<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    match screen {
        Screen::Dashboard => {
            let state = dashboard::DashboardState {
                profile: ctx.profile,
                tasks: ctx.tasks,
                tasks_loading: ctx.tasks_loading,
                advice: ctx.advice,
                market_prices: ctx.market_prices,
                status_message: ctx.status_message,
                skeleton_frame: ctx.skeleton_frame,
                text: ctx.text,
            };
            dashboard::view(state, palette)
        }

        Screen::Upcoming => {
            let state = upcoming::UpcomingScreenState {
                todays_tasks: ctx.tasks,
                todays_loading: ctx.tasks_loading,
                weekly: ctx.weekly_tasks,
                weekly_loading: ctx.weekly_loading,
                skeleton_frame: ctx.skeleton_frame,
                text: ctx.text,
            };
            upcoming::view(state, palette)
        }
    }
}
