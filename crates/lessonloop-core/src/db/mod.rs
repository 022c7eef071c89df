//! Database operations and SQLite management for closures and preferences.
//!
//! This module provides low-level database operations for the LessonLoop
//! scheduling core. It handles SQLite connections, schema management, and
//! the query interfaces for closure dates, organisation settings and stored
//! preferences.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod closure_queries;
pub mod preference_queries;
pub mod schema;
pub mod settings_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
