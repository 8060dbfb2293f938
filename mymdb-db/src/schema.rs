//! SQLite schema creation.

use mymdb_catalog::Role;
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Schema version mismatch: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent, safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    if get_schema_version(conn)? == 0 {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION],
        )?;
    }
    Ok(())
}

/// Open or create a catalog database at the given path.
///
/// A database written by a newer schema is refused rather than modified.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }
    create_schema(&conn)?;

    log::debug!("Opened catalog database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
pub fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

// ── Role Relations ──────────────────────────────────────────────────────────

/// Table holding the people of one role.
pub(crate) fn person_table(role: Role) -> &'static str {
    match role {
        Role::Actor => "actors",
        Role::Director => "directors",
        Role::Writer => "writers",
    }
}

/// Junction table linking movies to the people of one role.
pub(crate) fn link_table(role: Role) -> &'static str {
    match role {
        Role::Actor => "acting",
        Role::Director => "directing",
        Role::Writer => "writing",
    }
}

/// Person column of the junction table for `role`.
pub(crate) fn link_column(role: Role) -> &'static str {
    match role {
        Role::Actor => "actor_id",
        Role::Director => "director_id",
        Role::Writer => "writer_id",
    }
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Movies and serial works
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    year TEXT NOT NULL,
    runtime INTEGER NOT NULL,
    mpaa TEXT NOT NULL CHECK (mpaa IN ('G', 'PG', 'PG-13', 'R', 'NC-17', 'X', 'NR')),
    rating REAL,
    watched BOOLEAN NOT NULL DEFAULT 0,
    owned BOOLEAN NOT NULL DEFAULT 0
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_movies_natural ON movies(title, year);
CREATE INDEX IF NOT EXISTS idx_movies_watched ON movies(watched);

-- People, one table per role
CREATE TABLE IF NOT EXISTS actors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS directors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS writers (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

-- Role links
CREATE TABLE IF NOT EXISTS acting (
    movie_id INTEGER NOT NULL REFERENCES movies(id),
    actor_id INTEGER NOT NULL REFERENCES actors(id),
    PRIMARY KEY (movie_id, actor_id)
);
CREATE INDEX IF NOT EXISTS idx_acting_person ON acting(actor_id);

CREATE TABLE IF NOT EXISTS directing (
    movie_id INTEGER NOT NULL REFERENCES movies(id),
    director_id INTEGER NOT NULL REFERENCES directors(id),
    PRIMARY KEY (movie_id, director_id)
);
CREATE INDEX IF NOT EXISTS idx_directing_person ON directing(director_id);

CREATE TABLE IF NOT EXISTS writing (
    movie_id INTEGER NOT NULL REFERENCES movies(id),
    writer_id INTEGER NOT NULL REFERENCES writers(id),
    PRIMARY KEY (movie_id, writer_id)
);
CREATE INDEX IF NOT EXISTS idx_writing_person ON writing(writer_id);
"#;
