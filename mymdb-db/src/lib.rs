//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation, identity resolution, mutations, and query APIs
//! backed by SQLite (via rusqlite with bundled feature). Every function takes
//! the caller's connection; nothing here holds one.

pub mod operations;
pub mod queries;
pub mod resolver;
pub mod schema;

pub use operations::{
    add_movie, add_person, add_role, set_owned, set_rating, set_watched, OperationError,
};
pub use queries::{
    catalog_stats, filmography, find_movies_by_title, list_movies, unwatched_movies,
    CatalogStats, MovieFilter,
};
pub use resolver::{movie_exists, person_exists, resolve_movie_id, resolve_person_id};
pub use schema::{open_database, open_memory, SchemaError};
