use crate::storage::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and the store share their inner data).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tailbook_db::DbPool,
    /// Upload directory for registration photos.
    pub uploads: UploadStore,
}
