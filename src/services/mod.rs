// linemarks services
// Collaborators around the collection: events, storage, persistence, settings.

pub mod event_bus;
pub mod file_probe;
pub mod persistence;
pub mod settings_engine;
pub mod state_storage;
