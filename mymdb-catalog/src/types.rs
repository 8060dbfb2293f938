//! Data model types for the movie catalog.
//!
//! These are transfer objects only: the database crate reads and writes them,
//! front ends construct and display them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Movie ───────────────────────────────────────────────────────────────────

/// A movie or serial work. Identified by `(title, year)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// `"1999"` for a film, `"2008-2013"` for a series run.
    pub year: String,
    /// Runtime in minutes.
    pub runtime: i32,
    pub mpaa: Mpaa,
    /// Personal 1 to 10 rating, `None` if unrated.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub owned: bool,
    /// People attached to the movie. `None` when the query that produced this
    /// value did not load them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
}

impl Movie {
    /// An unrated movie that is neither watched nor owned.
    pub fn new(title: impl Into<String>, year: impl Into<String>, runtime: i32, mpaa: Mpaa) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            runtime,
            mpaa,
            rating: None,
            watched: false,
            owned: false,
            credits: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn watched(mut self, watched: bool) -> Self {
        self.watched = watched;
        self
    }

    pub fn owned(mut self, owned: bool) -> Self {
        self.owned = owned;
        self
    }

    /// Directors, or an empty slice if credits were not loaded.
    pub fn directors(&self) -> &[String] {
        self.credits.as_ref().map(|c| c.directors.as_slice()).unwrap_or_default()
    }

    pub fn writers(&self) -> &[String] {
        self.credits.as_ref().map(|c| c.writers.as_slice()).unwrap_or_default()
    }

    pub fn cast(&self) -> &[String] {
        self.credits.as_ref().map(|c| c.cast.as_slice()).unwrap_or_default()
    }
}

/// Names of the people linked to a movie, grouped by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub cast: Vec<String>,
}

impl Credits {
    /// The names credited in one role.
    pub fn for_role(&self, role: Role) -> &[String] {
        match role {
            Role::Actor => &self.cast,
            Role::Director => &self.directors,
            Role::Writer => &self.writers,
        }
    }
}

// ── MPAA ────────────────────────────────────────────────────────────────────

/// MPAA classification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mpaa {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
    #[serde(rename = "X")]
    X,
    /// Not rated.
    #[serde(rename = "NR")]
    NotRated,
}

impl Mpaa {
    pub const ALL: [Mpaa; 7] = [
        Self::G,
        Self::Pg,
        Self::Pg13,
        Self::R,
        Self::Nc17,
        Self::X,
        Self::NotRated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::G => "G",
            Self::Pg => "PG",
            Self::Pg13 => "PG-13",
            Self::R => "R",
            Self::Nc17 => "NC-17",
            Self::X => "X",
            Self::NotRated => "NR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown MPAA rating '{0}'")]
pub struct ParseMpaaError(pub String);

impl FromStr for Mpaa {
    type Err = ParseMpaaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseMpaaError(s.to_string()))
    }
}

impl fmt::Display for Mpaa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Person ──────────────────────────────────────────────────────────────────

/// A person in one role. Identified by `(name, role)`.
///
/// Someone who both acts and directs is two separate `Person` records with
/// nothing linking them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub role: Role,
}

impl Person {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn actor(name: impl Into<String>) -> Self {
        Self::new(name, Role::Actor)
    }

    pub fn director(name: impl Into<String>) -> Self {
        Self::new(name, Role::Director)
    }

    pub fn writer(name: impl Into<String>) -> Self {
        Self::new(name, Role::Writer)
    }
}

/// The part a person played in a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Actor,
    Director,
    Writer,
}

impl Role {
    pub const ALL: [Role; 3] = [Self::Actor, Self::Director, Self::Writer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Director => "director",
            Self::Writer => "writer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}' (expected actor, director, or writer)")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actor" => Ok(Self::Actor),
            "director" => Ok(Self::Director),
            "writer" => Ok(Self::Writer),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
