//! Route definitions for the `/birthday` resource.
//!
//! Mounted at the root (not under a versioned prefix) so existing clients
//! keep working. List and create answer with and without the trailing slash.

use axum::routing::get;
use axum::Router;

use crate::handlers::birthday;
use crate::state::AppState;

/// Birthday routes.
///
/// ```text
/// GET    /birthday/        -> list
/// POST   /birthday         -> create
/// GET    /birthday/{id}    -> get_by_id
/// PUT    /birthday/{id}    -> update
/// DELETE /birthday/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/birthday", get(birthday::list).post(birthday::create))
        .route("/birthday/", get(birthday::list).post(birthday::create))
        .route(
            "/birthday/{id}",
            get(birthday::get_by_id)
                .put(birthday::update)
                .delete(birthday::delete),
        )
}
