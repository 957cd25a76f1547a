//! SQLite persistence for generated notes and their sub-artifacts.

pub mod schema;
pub mod sqlite;
pub mod types;

pub use sqlite::NoteStore;
pub use types::*;
