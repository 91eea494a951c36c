//! HTTP client for the external analysis service.
//!
//! Browser `fetch` through web-sys, awaited via `JsFuture`. Helpers return
//! typed results; transport failures surface as [`ApiError`] values, never
//! panics. Requests carry no timeout or retry — a resubmission aborts the
//! previous in-flight request via the caller-supplied [`AbortSignal`].

use bias_report::types::{AnalysisRequest, AnalysisResponse, ExtractedText};
use leptos::logging;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, File, FormData, Headers, Request, RequestInit, Response};

/// Development default; override at build time with `BIAS_API_BASE`.
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the analysis service, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("BIAS_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

/// Client-side error taxonomy for the analyze/extract calls.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// Service answered with a non-2xx status.
    #[error("service answered with status {0}")]
    Http(u16),
    /// Request never completed (network failure or abort).
    #[error("request failed: {0}")]
    Network(String),
    /// Body was not the JSON shape the client expects.
    #[error("could not decode service reply: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the request was cut short by an `AbortController`, i.e.
    /// superseded by a newer submission rather than genuinely failed.
    pub fn is_abort(&self) -> bool {
        matches!(self, ApiError::Network(reason) if reason.contains("AbortError"))
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// POST the analysis request; abortable via `signal`.
pub async fn analyze(
    request: &AnalysisRequest,
    signal: Option<&AbortSignal>,
) -> Result<AnalysisResponse, ApiError> {
    let body = serde_json::to_string(request).map_err(|err| ApiError::Decode(err.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    init.set_signal(signal);

    let headers = Headers::new().map_err(ApiError::from)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(ApiError::from)?;
    init.set_headers(headers.as_ref());

    let url = format!("{}/api/analyze", api_base());
    let request = Request::new_with_str_and_init(&url, &init).map_err(ApiError::from)?;
    let body = fetch_text(request)
        .await
        .inspect_err(|err| logging::error!("analyze request failed: {err}"))?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// POST a file to the extraction endpoint and return its text.
pub async fn extract_file(file: &File) -> Result<ExtractedText, ApiError> {
    let form = FormData::new().map_err(ApiError::from)?;
    form.append_with_blob("file", file).map_err(ApiError::from)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());

    let url = format!("{}/api/analyze-file", api_base());
    let request = Request::new_with_str_and_init(&url, &init).map_err(ApiError::from)?;
    let body = fetch_text(request)
        .await
        .inspect_err(|err| logging::error!("file extraction failed: {err}"))?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

async fn fetch_text(request: Request) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not yield a Response".into()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(ApiError::from)?).await?;
    body.as_string()
        .ok_or_else(|| ApiError::Decode("response body was not text".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }

    #[test]
    fn abort_is_distinguished_from_real_failures() {
        let aborted = ApiError::Network("JsValue(AbortError: The user aborted a request.)".into());
        assert!(aborted.is_abort());
        assert!(!ApiError::Http(500).is_abort());
        assert!(!ApiError::Network("connection refused".into()).is_abort());
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(ApiError::Http(502).to_string(), "service answered with status 502");
        assert_eq!(
            ApiError::Decode("missing field".into()).to_string(),
            "could not decode service reply: missing field"
        );
    }
}
