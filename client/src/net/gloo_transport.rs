//! [`Transport`] over the browser `fetch` API via `gloo-net`.
//!
//! Client-side (hydrate): real HTTP calls.
//! Server-side / native: every call fails with a transport error, which the
//! core maps to "no response".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gloo_transport_test.rs"]
mod gloo_transport_test;

use async_trait::async_trait;
use friendlink::net::pipeline::{ApiRequest, ApiResponse};
use friendlink::{Transport, TransportError};

#[cfg(any(test, not(feature = "hydrate")))]
const NO_BROWSER_MESSAGE: &str = "HTTP is only available in the browser";

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
fn gloo_method(method: friendlink::net::pipeline::Method) -> gloo_net::http::Method {
    use friendlink::net::pipeline::Method;
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::RequestBuilder::new(url).method(gloo_method(request.method));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let sent = match &request.body {
                Some(body) => builder.json(body).map_err(|e| TransportError::new(e.to_string()))?.send().await,
                None => builder.send().await,
            };
            let response = sent.map_err(|e| TransportError::new(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::warn!(%url, status, error = %e, "failed to read response body");
                String::new()
            });
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            Err(TransportError::new(NO_BROWSER_MESSAGE))
        }
    }
}
