pub mod auth_handler;
pub mod entries_handler;
pub mod health;
pub mod metrics;

pub use health::health_check;
pub use metrics::{setup_metrics_recorder, MetricsState};
