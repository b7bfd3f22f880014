// szkolyjogi.pl - Directory API Core
//
// This crate provides the backend for the yoga school directory: the listing
// query/hydration layer over normalized storage, the listing view state
// machine, the JSON seed importer, and the HTTP read API.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;

/// Embedded migrations, shared by the server binary and the test harness.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
