//! Terminal presentation layer for the dessert clicker.

pub mod app;
pub mod art;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod sales;
pub mod terminal_guard;
pub mod theme;

pub use runtime::{finish_session, run};
