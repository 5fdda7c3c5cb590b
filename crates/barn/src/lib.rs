pub mod app;
pub mod appearance;
pub mod config;
pub mod data;
pub mod i18n;
pub mod message;
pub mod screen;
pub mod widget;

pub use app::Barn;
pub use message::Message;

pub fn run() -> iced::Result {
    iced::application("Farmhand", Barn::update, Barn::view)
        .subscription(Barn::subscription)
        .theme(|_| iced::Theme::Light)
        .antialiasing(true)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .run_with(Barn::new)
}
