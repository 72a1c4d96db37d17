use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

pub mod messages;
pub mod portfolios;
pub mod projects;
pub mod skills;
pub mod users;

/// JSON-backed string array column (project technologies, skill items).
/// Stored as a JSON column so the same entity works on Postgres and SQLite.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}
