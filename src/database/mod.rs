//! linemarks state database.
//!
//! Backs the editor's key/value state (where bookmarks live when they are
//! not stored in the project) with SQLite.
//!
//! # Usage
//!
//! ```no_run
//! use linemarks::database::Database;
//!
//! let db = Database::open("state.db").expect("failed to open database");
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
