//! Read queries for the catalog database.
//!
//! Provides title lookup with credits, flag-filtered listings, filmographies,
//! and summary statistics.

use mymdb_catalog::{Credits, Movie, Mpaa, Person, Role};
use rusqlite::{params, Connection, Row};

use crate::operations::OperationError;
use crate::resolver::resolve_person_id;
use crate::schema::{link_column, link_table, person_table};

const MOVIE_COLUMNS: &str = "m.id, m.title, m.year, m.runtime, m.mpaa, m.rating, m.watched, m.owned";

// ── Movie Lookups ───────────────────────────────────────────────────────────

/// Find movies by exact title, with directors, writers, and cast attached.
///
/// Every year matches, so remakes sharing a title all come back. Returns an
/// empty list when nothing matches.
pub fn find_movies_by_title(conn: &Connection, title: &str) -> Result<Vec<Movie>, OperationError> {
    let sql = format!("SELECT {MOVIE_COLUMNS} FROM movies m WHERE m.title = ?1 ORDER BY m.year");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![title], row_to_movie)?;
    let found = rows.collect::<Result<Vec<_>, _>>()?;

    found
        .into_iter()
        .map(|(id, mut movie)| -> Result<Movie, OperationError> {
            movie.credits = Some(credits_for_movie(conn, id)?);
            Ok(movie)
        })
        .collect()
}

/// Names of everyone linked to a movie, grouped by role and sorted.
fn credits_for_movie(conn: &Connection, movie_id: i64) -> Result<Credits, OperationError> {
    let mut credits = Credits::default();
    for role in Role::ALL {
        let sql = format!(
            "SELECT p.name FROM {link} l
             JOIN {people} p ON p.id = l.{column}
             WHERE l.movie_id = ?1
             ORDER BY p.name",
            link = link_table(role),
            people = person_table(role),
            column = link_column(role),
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let names = stmt.query_map(params![movie_id], |row| row.get::<_, String>(0))?;
        let names = names.collect::<Result<Vec<_>, _>>()?;
        match role {
            Role::Actor => credits.cast = names,
            Role::Director => credits.directors = names,
            Role::Writer => credits.writers = names,
        }
    }
    Ok(credits)
}

// ── Listings ────────────────────────────────────────────────────────────────

/// Which movies a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieFilter {
    #[default]
    All,
    Watched,
    Unwatched,
    Owned,
    Unowned,
}

impl MovieFilter {
    fn where_clause(&self) -> &'static str {
        match self {
            Self::All => "",
            Self::Watched => "WHERE m.watched = 1",
            Self::Unwatched => "WHERE m.watched = 0",
            Self::Owned => "WHERE m.owned = 1",
            Self::Unowned => "WHERE m.owned = 0",
        }
    }
}

/// List movies matching a flag filter, ordered by title then year.
///
/// Credits are not loaded.
pub fn list_movies(conn: &Connection, filter: MovieFilter) -> Result<Vec<Movie>, OperationError> {
    let sql = format!(
        "SELECT {MOVIE_COLUMNS} FROM movies m {} ORDER BY m.title, m.year",
        filter.where_clause()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| row_to_movie(row).map(|(_, movie)| movie))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// All movies not yet marked watched. Credits are not loaded.
pub fn unwatched_movies(conn: &Connection) -> Result<Vec<Movie>, OperationError> {
    list_movies(conn, MovieFilter::Unwatched)
}

// ── Filmography ─────────────────────────────────────────────────────────────

/// Every movie a person is linked to in their role, ordered by year.
///
/// Returns `None` if the person does not exist, and `Some(vec![])` if they
/// exist but have no credits yet. Credits on the returned movies are not
/// loaded.
pub fn filmography(conn: &Connection, person: &Person) -> Result<Option<Vec<Movie>>, OperationError> {
    let Some(person_id) = resolve_person_id(conn, &person.name, person.role)? else {
        return Ok(None);
    };

    let sql = format!(
        "SELECT {MOVIE_COLUMNS} FROM movies m
         JOIN {link} l ON l.movie_id = m.id
         WHERE l.{column} = ?1
         ORDER BY m.year, m.title",
        link = link_table(person.role),
        column = link_column(person.role),
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![person_id], |row| row_to_movie(row).map(|(_, movie)| movie))?;
    let movies = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(Some(movies))
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall catalog statistics.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let movies: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
    let watched: i64 =
        conn.query_row("SELECT COUNT(*) FROM movies WHERE watched = 1", [], |r| r.get(0))?;
    let owned: i64 =
        conn.query_row("SELECT COUNT(*) FROM movies WHERE owned = 1", [], |r| r.get(0))?;
    let actors: i64 = conn.query_row("SELECT COUNT(*) FROM actors", [], |r| r.get(0))?;
    let directors: i64 = conn.query_row("SELECT COUNT(*) FROM directors", [], |r| r.get(0))?;
    let writers: i64 = conn.query_row("SELECT COUNT(*) FROM writers", [], |r| r.get(0))?;

    Ok(CatalogStats {
        movies,
        watched,
        owned,
        actors,
        directors,
        writers,
    })
}

/// Summary statistics for the catalog.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub movies: i64,
    pub watched: i64,
    pub owned: i64,
    pub actors: i64,
    pub directors: i64,
    pub writers: i64,
}

// ── Row Mappers ─────────────────────────────────────────────────────────────

/// Map a `MOVIE_COLUMNS` row to its surrogate id and a credit-less movie.
fn row_to_movie(row: &Row) -> rusqlite::Result<(i64, Movie)> {
    let mpaa: String = row.get(4)?;
    let mpaa = mpaa.parse::<Mpaa>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok((
        row.get(0)?,
        Movie {
            title: row.get(1)?,
            year: row.get(2)?,
            runtime: row.get(3)?,
            mpaa,
            rating: row.get(5)?,
            watched: row.get(6)?,
            owned: row.get(7)?,
            credits: None,
        },
    ))
}
