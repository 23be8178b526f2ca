//! REST API helpers for communicating with the summarizer backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics. An `Err`
//! means the network layer itself failed (the request never completed or
//! the body was not JSON); backend-reported failures come back as `Ok`
//! bodies with `success: false` and are the caller's business.

#![allow(clippy::unused_async)]

use super::types::{HealthResponse, SummarizeRequest, SummarizeResponse};

/// Submit a URL to `POST /api/summarize` and parse the JSON reply.
///
/// The HTTP status is deliberately not inspected: the backend answers
/// 4xx/5xx with the same `{success: false, error}` JSON shape, which the
/// caller renders as a backend error rather than a network one.
///
/// # Errors
///
/// Returns the underlying failure description if the request could not be
/// sent or the body could not be decoded.
pub async fn post_summarize(request: &SummarizeRequest) -> Result<SummarizeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/summarize")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<SummarizeResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Probe `GET /api/health` for backend readiness.
///
/// # Errors
///
/// Returns the failure description if the probe could not complete; the
/// caller treats this as non-fatal and only logs it.
pub async fn fetch_health() -> Result<HealthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/health")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<HealthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
