//! Infrastructure layer - database connection and schema migrations.

mod db;
pub mod migrations;

pub use db::{ping, Database};
pub use migrations::Migrator;
