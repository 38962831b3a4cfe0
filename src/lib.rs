//! A terminal dessert clicker.
//!
//! Each tap sells one unit of the displayed dessert. As cumulative sales
//! cross catalog thresholds, a pricier dessert takes its place.

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod session;
pub mod share;
pub mod shutdown;
pub mod snapshot;
pub mod ui;
