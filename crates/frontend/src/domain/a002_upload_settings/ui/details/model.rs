//! Upload Settings - Model (API functions)

use contracts::domain::a002_upload_settings::aggregate::UploadSettings;
use contracts::domain::a002_upload_settings::dto::{
    GetUploadSettingsResponse, SaveUploadSettingsResponse, UploadSettingsPatch,
};
use gloo_net::http::Request;

/// Current settings of the signed-in user
pub async fn fetch_settings(url: &str) -> Result<UploadSettingsPatch, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let data: GetUploadSettingsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if !data.success {
        return Err(data
            .message
            .unwrap_or_else(|| "Server reported an error".to_string()));
    }
    Ok(data.settings.unwrap_or_default())
}

pub const SAVED_FALLBACK: &str = "Settings saved successfully";

/// Persist settings; the server's message is returned either way.
pub async fn save_settings(url: &str, settings: &UploadSettings) -> Result<String, String> {
    let response = Request::post(url)
        .json(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    let body = response.json::<SaveUploadSettingsResponse>().await.ok();
    save_outcome(status, body)
}

/// Judge a save response. Error responses (400/401/500) still carry
/// `{success, message}`, so the body decides before the status does.
pub fn save_outcome(
    status: u16,
    body: Option<SaveUploadSettingsResponse>,
) -> Result<String, String> {
    match body {
        Some(data) if data.success => Ok(if data.message.is_empty() {
            SAVED_FALLBACK.to_string()
        } else {
            data.message
        }),
        Some(data) if !data.message.is_empty() => Err(data.message),
        _ => Err(format!("HTTP {}", status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(success: bool, message: &str) -> Option<SaveUploadSettingsResponse> {
        Some(SaveUploadSettingsResponse {
            success,
            message: message.to_string(),
        })
    }

    #[test]
    fn test_success_keeps_server_message_or_falls_back() {
        assert_eq!(save_outcome(200, body(true, "Saved.")), Ok("Saved.".to_string()));
        assert_eq!(save_outcome(200, body(true, "")), Ok(SAVED_FALLBACK.to_string()));
    }

    #[test]
    fn test_failure_prefers_server_message() {
        assert_eq!(
            save_outcome(400, body(false, "Chunk size must be between 100 and 5000.")),
            Err("Chunk size must be between 100 and 5000.".to_string())
        );
        assert_eq!(
            save_outcome(401, body(false, "Login required")),
            Err("Login required".to_string())
        );
    }

    #[test]
    fn test_failure_without_message_reports_status() {
        assert_eq!(save_outcome(500, body(false, "")), Err("HTTP 500".to_string()));
        assert_eq!(save_outcome(502, None), Err("HTTP 502".to_string()));
        // a 200 with an unreadable body is still a failure
        assert_eq!(save_outcome(200, None), Err("HTTP 200".to_string()));
    }
}
