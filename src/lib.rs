//! DevKit library
//!
//! Text and data tools live in [`tools`] and have no UI dependencies; [`ui`]
//! and [`app`] bind them to egui.

pub mod app;
pub mod config;
pub mod constant;
pub mod messages;
pub mod status;
pub mod style;
pub mod tools;
pub mod ui;
pub mod worker;
