//! Wire types shared with the boards backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A board as returned by `GET /api/boards`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Board {
    pub id: i64,
    pub name: String,
}

impl Board {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
