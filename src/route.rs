//! Paths of the three screens.

use crate::note::NoteId;
use std::{fmt, str::FromStr};

/// A screen the host application can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, the dashboard listing every note.
    List,
    /// `/add`, the form for a new note.
    Add,
    /// `/edit/:id`, the form for an existing note. The id is percent-encoded in the path.
    Edit(NoteId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),
    #[error("Missing note id in route: {0}")]
    InvalidId(String),
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        match trimmed {
            "" => Ok(Route::List),
            "/add" => Ok(Route::Add),
            _ => {
                let id = trimmed
                    .strip_prefix("/edit/")
                    .or_else(|| (trimmed == "/edit").then_some(""))
                    .ok_or_else(|| RouteError::Unknown(path.to_string()))?;
                if id.contains('/') {
                    return Err(RouteError::Unknown(path.to_string()));
                }
                urlencoding::decode(id)
                    .ok()
                    .and_then(|id| id.parse().ok())
                    .map(Route::Edit)
                    .ok_or_else(|| RouteError::InvalidId(path.to_string()))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => f.write_str("/"),
            Route::Add => f.write_str("/add"),
            Route::Edit(id) => write!(f, "/edit/{}", urlencoding::encode(id.as_str())),
        }
    }
}
