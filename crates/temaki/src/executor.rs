//! Authenticated request execution
//!
//! One GET against the upstream host: ensure a valid access token, attach
//! the Bearer header, enforce exact 200-status checking, decode the JSON
//! body, and stamp it with request provenance. Anything other than 200 is a
//! hard `Error::Status` — upstream rate limits and transient failures are
//! the caller's concern, and the body is never parsed on failure.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value, json};
use temaki_auth::AccessTokenManager;
use tracing::info;

use crate::error::{Error, Result};

/// One parameterized GET, immutable once issued.
///
/// Query parameters keep their insertion order on the wire. Extra headers
/// are caller-owned data; the executor copies them and never writes the
/// authorization header back into the request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    endpoint: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn extra_headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Issues authenticated GETs against the upstream host.
pub(crate) struct Executor {
    transport: Arc<dyn transport::Transport>,
    auth: AccessTokenManager,
    domain: String,
    timeout: Duration,
}

impl Executor {
    pub(crate) fn new(
        transport: Arc<dyn transport::Transport>,
        auth: AccessTokenManager,
        domain: String,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            auth,
            domain,
            timeout,
        }
    }

    /// Execute the request and return the stamped JSON body.
    pub(crate) async fn execute(&self, request: &ApiRequest) -> Result<Value> {
        let token = self.auth.ensure_valid_now().await?;
        let url = format!("https://{}/{}", self.domain, request.endpoint());
        info!(%url, "downloading catalog data");

        let mut headers = request.extra_headers().to_vec();
        headers.push(("authorization".to_string(), format!("Bearer {token}")));

        let response = self
            .transport
            .get(&url, request.query_params(), &headers, self.timeout)
            .await?;

        if response.status != 200 {
            return Err(Error::Status(response.status));
        }

        let mut value: Value = serde_json::from_str(&response.body)
            .map_err(|e| Error::Decode(format!("response body is not valid JSON: {e}")))?;
        stamp(&mut value, &url, request);
        Ok(value)
    }
}

/// Insert the provenance stamp: the request parameters, the caller-supplied
/// headers (authorization is never among them), and the full URL. Responses
/// are recorded as fixtures with the stamp in place, so the generated models
/// type it strictly per endpoint.
fn stamp(value: &mut Value, url: &str, request: &ApiRequest) {
    let Value::Object(map) = value else {
        // Non-object bodies can't carry a stamp; validation will reject them.
        return;
    };

    let params: Map<String, Value> = request
        .query_params()
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    let headers: Map<String, Value> = request
        .extra_headers()
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();

    map.insert(
        "temaki".to_string(),
        json!({
            "params": params,
            "headers": headers,
            "url": url,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex as StdMutex;
    use temaki_auth::DeviceIdentity;
    use transport::{Response, Transport};

    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Serves the bundle, one grant, and a scripted API response.
    struct ApiTransport {
        api_status: u16,
        api_body: String,
        last_get: StdMutex<Option<(String, Vec<(String, String)>, Vec<(String, String)>)>>,
    }

    impl ApiTransport {
        fn new(api_status: u16, api_body: &str) -> Self {
            Self {
                api_status,
                api_body: api_body.to_string(),
                last_get: StdMutex::new(None),
            }
        }
    }

    impl Transport for ApiTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
            query: &'a [(String, String)],
            headers: &'a [(String, String)],
            _timeout: Duration,
        ) -> Pin<Box<dyn Future<Output = transport::Result<Response>> + Send + 'a>> {
            Box::pin(async move {
                if url.contains("bundle.js") {
                    return Ok(Response {
                        status: 200,
                        body: r#"prod="pub-id:pub-secret""#.into(),
                    });
                }
                *self.last_get.lock().unwrap() =
                    Some((url.to_string(), query.to_vec(), headers.to_vec()));
                Ok(Response {
                    status: self.api_status,
                    body: self.api_body.clone(),
                })
            })
        }

        fn post_form<'a>(
            &'a self,
            _url: &'a str,
            _form: &'a [(String, String)],
            _headers: &'a [(String, String)],
            _timeout: Duration,
        ) -> Pin<Box<dyn Future<Output = transport::Result<Response>> + Send + 'a>> {
            Box::pin(async move {
                Ok(Response {
                    status: 200,
                    body: r#"{"access_token":"at_x","expires_in":300}"#.into(),
                })
            })
        }
    }

    fn executor(transport: Arc<ApiTransport>) -> Executor {
        let auth = AccessTokenManager::new(
            transport.clone(),
            DeviceIdentity {
                device_id: "device-1".into(),
                device_type: "test".into(),
            },
            None,
            "api.example.com".into(),
            TIMEOUT,
        );
        Executor::new(transport, auth, "api.example.com".into(), TIMEOUT)
    }

    #[tokio::test]
    async fn attaches_bearer_and_preserves_caller_headers() {
        let transport = Arc::new(ApiTransport::new(200, r#"{"total":0}"#));
        let executor = executor(transport.clone());

        let request = ApiRequest::new("content/v2/discover/browse")
            .query("n", "36")
            .header("referer", "https://example.com/videos/new");
        executor.execute(&request).await.unwrap();

        let (url, query, headers) = transport.last_get.lock().unwrap().clone().unwrap();
        assert_eq!(url, "https://api.example.com/content/v2/discover/browse");
        assert_eq!(query, vec![("n".to_string(), "36".to_string())]);
        assert_eq!(
            headers,
            vec![
                (
                    "referer".to_string(),
                    "https://example.com/videos/new".to_string()
                ),
                ("authorization".to_string(), "Bearer at_x".to_string()),
            ]
        );
        // The caller's request was not mutated by execution
        assert_eq!(request.extra_headers().len(), 1);
    }

    #[tokio::test]
    async fn non_200_is_a_status_error_without_parsing() {
        // Body is not JSON; a decode attempt would surface as Error::Decode
        let transport = Arc::new(ApiTransport::new(404, "not json at all"));
        let executor = executor(transport);

        let err = executor
            .execute(&ApiRequest::new("content/v2/cms/series/XYZ"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Status(404)));
    }

    #[tokio::test]
    async fn success_body_is_stamped_with_provenance() {
        let transport = Arc::new(ApiTransport::new(200, r#"{"total":0,"data":[]}"#));
        let executor = executor(transport);

        let request = ApiRequest::new("content/v2/discover/browse")
            .query("n", "36")
            .query("locale", "en-US")
            .header("referer", "https://example.com/videos/new");
        let value = executor.execute(&request).await.unwrap();

        let stamp = &value["temaki"];
        assert_eq!(stamp["params"]["n"], "36");
        assert_eq!(stamp["params"]["locale"], "en-US");
        assert_eq!(
            stamp["headers"]["referer"],
            "https://example.com/videos/new"
        );
        assert_eq!(
            stamp["url"],
            "https://api.example.com/content/v2/discover/browse"
        );
        // The injected bearer token never reaches the stamp
        assert!(stamp["headers"].get("authorization").is_none());
    }

    #[tokio::test]
    async fn invalid_json_on_200_is_a_decode_error() {
        let transport = Arc::new(ApiTransport::new(200, "<html>maintenance</html>"));
        let executor = executor(transport);

        let err = executor
            .execute(&ApiRequest::new("content/v2/discover/browse"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
