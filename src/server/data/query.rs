//! Query helpers shared by the repositories.

use sea_orm::QuerySelect;

use crate::server::model::pagination::Pagination;

/// Applies `offset`/`limit` for the requested page, or nothing when unpaginated.
pub fn paginate<Q: QuerySelect>(query: Q, pagination: Pagination) -> Q {
    match pagination.window() {
        Some((offset, limit)) => query.offset(offset).limit(limit),
        None => query,
    }
}
