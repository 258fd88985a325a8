/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and injected into every handler. Cloning only bumps
/// the pool's internal reference count.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing the birthday record store.
    pub pool: birthday_db::DbPool,
}
