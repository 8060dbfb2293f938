//! Natural-key to surrogate-id resolution.
//!
//! Keys match exactly: no trimming, no case folding. A miss is `None` (or
//! `false`), never an error.

use mymdb_catalog::Role;
use rusqlite::{params, Connection};

use crate::operations::OperationError;
use crate::schema::person_table;

/// Find a movie's id by `(title, year)`.
pub fn resolve_movie_id(
    conn: &Connection,
    title: &str,
    year: &str,
) -> Result<Option<i64>, OperationError> {
    let mut stmt = conn.prepare_cached("SELECT id FROM movies WHERE title = ?1 AND year = ?2")?;
    let result = stmt.query_row(params![title, year], |row| row.get::<_, i64>(0));
    match result {
        Ok(id) => Ok(Some(id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Find a person's id by `(name, role)`.
pub fn resolve_person_id(
    conn: &Connection,
    name: &str,
    role: Role,
) -> Result<Option<i64>, OperationError> {
    let sql = format!("SELECT id FROM {} WHERE name = ?1", person_table(role));
    let mut stmt = conn.prepare_cached(&sql)?;
    let result = stmt.query_row(params![name], |row| row.get::<_, i64>(0));
    match result {
        Ok(id) => Ok(Some(id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn movie_exists(conn: &Connection, title: &str, year: &str) -> Result<bool, OperationError> {
    Ok(resolve_movie_id(conn, title, year)?.is_some())
}

pub fn person_exists(conn: &Connection, name: &str, role: Role) -> Result<bool, OperationError> {
    Ok(resolve_person_id(conn, name, role)?.is_some())
}
