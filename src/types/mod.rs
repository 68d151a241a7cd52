// linemarks shared type definitions
// Plain data: bookmarks, navigation results, events, settings and errors.

pub mod bookmark;
pub mod errors;
pub mod events;
pub mod navigation;
pub mod settings;
