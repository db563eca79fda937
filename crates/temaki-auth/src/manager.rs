//! Access token acquisition and refresh
//!
//! `AccessTokenManager` owns the credential state and the single-flight
//! guarantee: the store sits behind one async mutex that is held across the
//! whole check-refresh-write sequence, so concurrent callers hitting an
//! expired token serialize, the first performs the grant, and the rest
//! return on the hot path with the fresh token.
//!
//! Grant selection, in priority order:
//! 1. **refresh_token** — whenever a refresh token is stored, regardless of
//!    whether the session started anonymous or authenticated
//! 2. **client_id** — anonymous sessions with no refresh token yet
//! 3. **password** — username/password supplied and no refresh token yet.
//!    The password travels under the `device_name` form key; that is what
//!    the upstream token endpoint actually reads.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::constants::{DEFAULT_DEVICE_TYPE, TOKEN_PATH};
use crate::error::{Error, Result};
use crate::resolver;
use crate::secret::Secret;
use crate::store::TokenStore;

/// Current wall-clock time as unix milliseconds.
pub fn unix_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Device identifiers reported with every grant.
#[derive(Debug, Clone)]
pub struct DeviceIdentity {
    pub device_id: String,
    pub device_type: String,
}

impl DeviceIdentity {
    /// Fresh identity with a random device id, matching the values the
    /// Windows web client reports.
    pub fn generate() -> Self {
        Self {
            device_id: uuid::Uuid::new_v4().simple().to_string(),
            device_type: DEFAULT_DEVICE_TYPE.to_string(),
        }
    }
}

/// Account credentials for the password grant.
#[derive(Debug)]
pub struct Login {
    pub username: String,
    pub password: Secret<String>,
}

/// Fields consumed from a grant response. The endpoint returns more
/// (token_type, scope, country); only these three are part of the contract,
/// so unknown fields are tolerated here — strictness applies to catalog
/// responses, not the auth plumbing.
#[derive(Debug, Deserialize)]
struct GrantResponse {
    access_token: String,
    /// Seconds until expiry, relative to the grant completing.
    expires_in: u64,
    /// Present only for non-anonymous grants.
    refresh_token: Option<String>,
}

enum Grant {
    Refresh(String),
    ClientId,
    Password,
}

impl Grant {
    fn label(&self) -> &'static str {
        match self {
            Grant::Refresh(_) => "refresh_token",
            Grant::ClientId => "client_id",
            Grant::Password => "password",
        }
    }
}

/// Obtains and refreshes the short-lived Bearer token.
pub struct AccessTokenManager {
    transport: Arc<dyn transport::Transport>,
    store: Mutex<TokenStore>,
    identity: DeviceIdentity,
    login: Option<Login>,
    domain: String,
    timeout: Duration,
}

impl AccessTokenManager {
    pub fn new(
        transport: Arc<dyn transport::Transport>,
        identity: DeviceIdentity,
        login: Option<Login>,
        domain: String,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            store: Mutex::new(TokenStore::new()),
            identity,
            login,
            domain,
            timeout,
        }
    }

    /// Return a valid access token, refreshing if needed.
    ///
    /// `now_ms` is the caller's clock, used both for the validity check and
    /// as the base for the new expiry; taking it as a parameter keeps expiry
    /// behavior fully deterministic under test. The pre-request sample makes
    /// the stored expiry at most a request-latency early, never late.
    pub async fn ensure_valid(&self, now_ms: u64) -> Result<Arc<str>> {
        let mut store = self.store.lock().await;

        if store.is_access_token_valid(now_ms) {
            if let Some(token) = store.access_token() {
                return Ok(token);
            }
        }

        let public_token = match store.public_token() {
            Some(token) => token.to_owned(),
            None => {
                let token = resolver::resolve(self.transport.as_ref(), self.timeout).await?;
                store.set_public_token(token.clone());
                token
            }
        };

        let grant = self.select_grant(&store);
        let form = self.grant_form(&grant);
        let url = format!("https://{}/{}", self.domain, TOKEN_PATH);
        info!(%url, grant = grant.label(), "requesting access token");

        let headers = [(
            "Authorization".to_string(),
            format!("Basic {public_token}"),
        )];
        let response = self
            .transport
            .post_form(&url, &form, &headers, self.timeout)
            .await?;

        if !(200..300).contains(&response.status) {
            return Err(Error::Grant(format!(
                "token endpoint returned {}: {}",
                response.status, response.body
            )));
        }

        let parsed: GrantResponse = serde_json::from_str(&response.body)
            .map_err(|e| Error::Grant(format!("invalid grant response: {e}")))?;

        let token: Arc<str> = Arc::from(parsed.access_token.into_boxed_str());
        store.set_access_token(token.clone(), now_ms + parsed.expires_in * 1000);
        if let Some(refresh) = parsed.refresh_token {
            debug!("grant returned a refresh token, storing it");
            store.set_refresh_token(refresh);
        }

        Ok(token)
    }

    /// `ensure_valid` against the wall clock.
    pub async fn ensure_valid_now(&self) -> Result<Arc<str>> {
        self.ensure_valid(unix_now_ms()).await
    }

    fn select_grant(&self, store: &TokenStore) -> Grant {
        if let Some(refresh) = store.refresh_token() {
            Grant::Refresh(refresh.to_owned())
        } else if self.login.is_none() {
            Grant::ClientId
        } else {
            Grant::Password
        }
    }

    fn grant_form(&self, grant: &Grant) -> Vec<(String, String)> {
        let mut form = vec![
            ("device_id".to_string(), self.identity.device_id.clone()),
            ("device_type".to_string(), self.identity.device_type.clone()),
        ];

        match grant {
            Grant::Refresh(token) => {
                form.push(("grant_type".to_string(), "refresh_token".to_string()));
                form.push(("refresh_token".to_string(), token.clone()));
            }
            Grant::ClientId => {
                form.push(("grant_type".to_string(), "client_id".to_string()));
            }
            Grant::Password => {
                form.push(("grant_type".to_string(), "password".to_string()));
                form.push(("scope".to_string(), "offline_access".to_string()));
                if let Some(login) = &self.login {
                    form.push(("username".to_string(), login.username.clone()));
                    // Upstream quirk: the password field is read from the
                    // `device_name` key.
                    form.push(("device_name".to_string(), login.password.expose().clone()));
                }
            }
        }

        form
    }
}
