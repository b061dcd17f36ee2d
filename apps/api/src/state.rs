use crate::config::Config;
use crate::resume::ResumeService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resume: ResumeService,
    pub config: Config,
}
