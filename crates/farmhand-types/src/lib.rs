//! Shared domain types for the Farmhand assistant.
//!
//! These types describe the data the host application hands to the UI:
//! farmer profiles, advisory chat messages, soil analyses, crop
//! recommendations, market prices, and the task structures rendered by
//! the barn interface. They carry no behavior beyond shape and a few
//! parsing accessors; lifecycle and persistence stay with the host.

pub mod chat;
pub mod dashboard;
pub mod language;
pub mod market;
pub mod profile;
pub mod soil;
pub mod task;
pub mod weekly;

pub use chat::*;
pub use dashboard::*;
pub use language::*;
pub use market::*;
pub use profile::*;
pub use soil::*;
pub use task::*;
pub use weekly::*;
