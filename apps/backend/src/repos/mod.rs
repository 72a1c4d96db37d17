//! Persistence queries, generic over `ConnectionTrait` so they run against
//! pooled connections and transactions alike.

pub mod messages;
pub mod portfolios;
pub mod projects;
pub mod skills;
pub mod users;

fn now() -> time::OffsetDateTime {
    time::OffsetDateTime::now_utc()
}
