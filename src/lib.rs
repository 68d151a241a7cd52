//! linemarks: line bookmarks for code editors.
//!
//! Mark lines in files, keep the marks across sessions (in the project or in
//! the editor's state) and jump between them. The host editor supplies file
//! paths, line numbers and line previews; this crate owns the bookkeeping.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
pub mod utils;
