//! reqwest-backed transport implementation
//!
//! One shared `reqwest::Client` per transport instance so connection pooling
//! works across the token endpoint and the catalog endpoints. Timeouts are
//! applied per request from the caller-supplied duration rather than on the
//! client, because the token manager and the executor may be configured with
//! different deadlines.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::debug;

use crate::{Error, Response, Result, Transport};

/// Production transport over reqwest.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Body(e.to_string()))?;

        debug!(status, bytes = body.len(), "received response");
        Ok(Response { status, body })
    }
}

impl Transport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a [(String, String)],
        headers: &'a [(String, String)],
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<Response>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = self.client.get(url).query(query).timeout(timeout);
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            self.send(builder).await
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        form: &'a [(String, String)],
        headers: &'a [(String, String)],
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<Response>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = self.client.post(url).form(form).timeout(timeout);
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            self.send(builder).await
        })
    }
}
