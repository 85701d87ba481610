use axum::Json;
use contracts::shared::settings::TrackerSettings;

use crate::shared::config;

/// GET /api/settings
pub async fn get_settings() -> Json<TrackerSettings> {
    Json(config::get().tracker.to_settings())
}
