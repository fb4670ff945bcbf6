use super::core::{ChatRequest, completion};

/// Runs a single chat completion call and extracts the reply text.
///
/// This is the boundary where failures stop being `Result`s: a
/// malformed request, a transport error, or an unexpected response
/// shape all come back as a reply string carrying an `Error:` marker
/// so callers can print or inspect it without handling a separate
/// failure type.
pub async fn make_api_call(request: &ChatRequest, api_hostname: &str, api_key: &str) -> String {
    let resp = match completion(request, api_hostname, api_key).await {
        Ok(resp) => resp,
        Err(err) => {
            tracing::debug!("Completion failed: {}", &err);
            return format!("Error: {}", err);
        }
    };

    // Take the first choice's content verbatim
    match resp["choices"][0]["message"]["content"].as_str() {
        Some(content) => content.to_string(),
        None => format!("Error: no message content in response: {}", resp),
    }
}
