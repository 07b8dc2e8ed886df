//! Core library modules for the clocksheet application.
//!
//! ## Features
//!
//! - **Core Pipeline**: Duration parsing, entry transformation, merge, sort
//! - **Workbook Generation**: Excel layout with subtotals and delivery checks
//! - **Infrastructure**: Configuration, credential storage, messaging
//! - **Presentation**: Terminal preview of formatted billing rows

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod entry;
pub mod error;
pub mod messages;
pub mod secret;
pub mod view;
pub mod week;
pub mod workbook;
