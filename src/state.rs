// src/state.rs

use axum::extract::FromRef;
use sqlx::AnyPool;

use crate::db::Backend;

/// Shared by every handler; the pool is the only process-wide resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    /// Engine behind `pool`, for the few queries that differ per backend.
    pub backend: Backend,
}

impl FromRef<AppState> for AnyPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Backend {
    fn from_ref(state: &AppState) -> Self {
        state.backend
    }
}
