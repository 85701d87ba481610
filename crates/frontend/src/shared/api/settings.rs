use crate::shared::api_utils::api_url;
use contracts::shared::settings::TrackerSettings;
use gloo_net::http::Request;

/// Fetch tracker defaults (daily goal, brand) from the backend
pub async fn fetch_settings() -> Result<TrackerSettings, String> {
    let response = Request::get(&api_url("/api/settings"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    serde_json::from_str::<TrackerSettings>(&text)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
