use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds configuration only. Each generation request builds its own grid and
/// random source, so nothing here needs a lock.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}
