//! Application state and service initialization
//!
//! Everything a worker needs is built once here from [`Config`] and shared
//! read-only across workers.

use std::sync::Arc;

use crate::model::Config;
use crate::service::QuizService;

/// Application state containing all services
pub struct AppState {
    /// Scoring and presentation over the configured model
    pub quiz_service: Arc<QuizService>,
}

impl AppState {
    /// Validate configuration and build the service graph
    pub fn new(config: Config) -> Result<Self, AppError> {
        if config.offer.price_label.trim().is_empty() {
            return Err(AppError::InvalidConfig("offer.price_label must not be empty"));
        }

        let quiz_service = Arc::new(QuizService::new(config.scoring.model, config.offer));
        tracing::info!(model = ?quiz_service.model(), "Scoring model selected");

        Ok(Self { quiz_service })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
