//! Work journal backend: dated entries typed as work, learning or
//! interesting-thing, served to readers grouped into Monday-keyed ISO week
//! buckets. Mutations require the owner session.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod journal;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod startup;
pub mod store;

use std::sync::Arc;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use handlers::MetricsState;
pub use journal::EntryService;

#[derive(Clone)]
pub struct AppState {
    pub service: EntryService,
    pub config: AppConfig,
    pub metrics: Arc<MetricsState>,
}
