//! Mutations: adding movies, people, and role links, and updating a movie's
//! personal flags.
//!
//! Each operation runs its existence check and its write inside one
//! transaction, so the check still holds when the write lands.
//! Calling one while the connection already has an open transaction fails
//! with [`OperationError::Sqlite`].

use mymdb_catalog::{is_valid_rating, is_valid_runtime, is_valid_year, Movie, Person};
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::resolver::{resolve_movie_id, resolve_person_id};
use crate::schema::{link_column, link_table, person_table};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },
    #[error("Invalid {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },
}

impl OperationError {
    fn movie_not_found(movie: &Movie) -> Self {
        Self::NotFound {
            entity: "movie",
            key: format!("{} ({})", movie.title, movie.year),
        }
    }
}

// ── Movie Operations ────────────────────────────────────────────────────────

/// Insert a new movie.
///
/// Returns `false` without writing anything if a movie with the same title
/// and year already exists. Credits on `movie` are ignored; use [`add_role`].
pub fn add_movie(conn: &Connection, movie: &Movie) -> Result<bool, OperationError> {
    validate_movie(movie)?;

    let tx = conn.unchecked_transaction()?;
    if resolve_movie_id(&tx, &movie.title, &movie.year)?.is_some() {
        log::debug!("Movie '{}' ({}) already exists", movie.title, movie.year);
        return Ok(false);
    }

    tx.execute(
        "INSERT INTO movies (title, year, runtime, mpaa, rating, watched, owned)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            movie.title,
            movie.year,
            movie.runtime,
            movie.mpaa.as_str(),
            movie.rating,
            movie.watched,
            movie.owned,
        ],
    )?;
    tx.commit()?;

    log::debug!("Added movie '{}' ({})", movie.title, movie.year);
    Ok(true)
}

fn validate_movie(movie: &Movie) -> Result<(), OperationError> {
    if !is_valid_year(&movie.year) {
        return Err(OperationError::InvalidField {
            field: "year",
            value: movie.year.clone(),
        });
    }
    if !is_valid_runtime(movie.runtime) {
        return Err(OperationError::InvalidField {
            field: "runtime",
            value: movie.runtime.to_string(),
        });
    }
    validate_rating(movie.rating)
}

fn validate_rating(rating: Option<f64>) -> Result<(), OperationError> {
    match rating {
        Some(r) if !is_valid_rating(r) => Err(OperationError::InvalidField {
            field: "rating",
            value: r.to_string(),
        }),
        _ => Ok(()),
    }
}

// ── Person Operations ───────────────────────────────────────────────────────

/// Insert a new person into the table for their role.
///
/// Returns `false` if someone with that name already holds that role.
pub fn add_person(conn: &Connection, person: &Person) -> Result<bool, OperationError> {
    let tx = conn.unchecked_transaction()?;
    if resolve_person_id(&tx, &person.name, person.role)?.is_some() {
        log::debug!("{} '{}' already exists", person.role, person.name);
        return Ok(false);
    }

    let sql = format!("INSERT INTO {} (name) VALUES (?1)", person_table(person.role));
    tx.execute(&sql, params![person.name])?;
    tx.commit()?;

    log::debug!("Added {} '{}'", person.role, person.name);
    Ok(true)
}

// ── Role Operations ─────────────────────────────────────────────────────────

/// Link a person to a movie in the person's role.
///
/// Returns `false` if either the movie or the person does not exist. Linking
/// a pair that is already linked succeeds and leaves the single existing row
/// in place.
pub fn add_role(conn: &Connection, movie: &Movie, person: &Person) -> Result<bool, OperationError> {
    let tx = conn.unchecked_transaction()?;

    let Some(movie_id) = resolve_movie_id(&tx, &movie.title, &movie.year)? else {
        log::debug!(
            "Cannot link {} '{}': movie '{}' ({}) not found",
            person.role,
            person.name,
            movie.title,
            movie.year
        );
        return Ok(false);
    };
    let Some(person_id) = resolve_person_id(&tx, &person.name, person.role)? else {
        log::debug!(
            "Cannot link '{}' ({}): {} '{}' not found",
            movie.title,
            movie.year,
            person.role,
            person.name
        );
        return Ok(false);
    };

    let sql = format!(
        "INSERT OR IGNORE INTO {} (movie_id, {}) VALUES (?1, ?2)",
        link_table(person.role),
        link_column(person.role),
    );
    let inserted = tx.execute(&sql, params![movie_id, person_id])?;
    tx.commit()?;

    if inserted == 0 {
        log::debug!(
            "{} '{}' already linked to '{}' ({})",
            person.role,
            person.name,
            movie.title,
            movie.year
        );
    }
    Ok(true)
}

// ── Flag Operations ─────────────────────────────────────────────────────────

/// Mark a movie as watched or unwatched.
pub fn set_watched(conn: &Connection, movie: &Movie, watched: bool) -> Result<(), OperationError> {
    update_movie_column(conn, movie, "watched", &watched)
}

/// Mark a movie as owned or not owned.
pub fn set_owned(conn: &Connection, movie: &Movie, owned: bool) -> Result<(), OperationError> {
    update_movie_column(conn, movie, "owned", &owned)
}

/// Set or clear a movie's personal rating.
pub fn set_rating(
    conn: &Connection,
    movie: &Movie,
    rating: Option<f64>,
) -> Result<(), OperationError> {
    validate_rating(rating)?;
    update_movie_column(conn, movie, "rating", &rating)
}

/// Resolve `movie` and update one column of its row.
///
/// `column` is always a literal from this module, never caller input.
fn update_movie_column(
    conn: &Connection,
    movie: &Movie,
    column: &'static str,
    value: &dyn rusqlite::ToSql,
) -> Result<(), OperationError> {
    let tx = conn.unchecked_transaction()?;
    let Some(id) = resolve_movie_id(&tx, &movie.title, &movie.year)? else {
        log::warn!(
            "Cannot update {}: movie '{}' ({}) not found",
            column,
            movie.title,
            movie.year
        );
        return Err(OperationError::movie_not_found(movie));
    };

    let sql = format!("UPDATE movies SET {column} = ?1 WHERE id = ?2");
    tx.execute(&sql, params![value, id])?;
    tx.commit()?;
    Ok(())
}
