use contracts::domain::a001_llm_model::aggregate::LlmModel;
use contracts::domain::a001_llm_model::dto::GetCurrentLlmResponse;
use gloo_net::http::Request;

/// Model the signed-in user has selected, if any
pub async fn fetch_current_llm(url: &str) -> Result<Option<LlmModel>, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    let data: GetCurrentLlmResponse = response
        .json()
        .await
        .map_err(|_| format!("HTTP {}", status))?;

    data.into_current()
}
