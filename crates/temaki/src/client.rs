//! Client construction and wiring
//!
//! `Client` composes the three capability layers: the transport, the access
//! token manager (which owns the credential state), and the contract
//! validator (which owns the fixture set and the model generator). Endpoint
//! methods live in `crate::endpoints`, one module per upstream resource.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use temaki_auth::{
    AccessTokenManager, DEFAULT_DOMAIN, DEFAULT_TIMEOUT, DeviceIdentity, Login, Secret,
};
use temaki_contract::{CommandGenerator, FixtureStore, ModelGenerator, Validator};
use transport::ReqwestTransport;

use crate::executor::Executor;

/// Program invoked to regenerate models when a response drifts.
const DEFAULT_GENERATOR_PROGRAM: &str = "temaki-modelgen";

/// Interface for downloading and validating catalog data.
///
/// One logical flow per instance is the expected usage, but the client is
/// safe to share: token refresh is single-flight and fixture-set mutation is
/// serialized per endpoint.
pub struct Client {
    pub(crate) executor: Executor,
    pub(crate) validator: Validator,
}

impl Client {
    /// Anonymous client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Client`].
///
/// Sessions are anonymous unless both `username` and `password` are given.
/// The device identity defaults to a random id with the device type the
/// Windows web client reports; override it to pin a stable identity.
pub struct ClientBuilder {
    username: Option<String>,
    password: Option<String>,
    device_id: Option<String>,
    device_type: Option<String>,
    domain: String,
    timeout: Duration,
    fixture_root: PathBuf,
    generator: Option<Arc<dyn ModelGenerator>>,
    transport: Option<Arc<dyn transport::Transport>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            device_id: None,
            device_type: None,
            domain: DEFAULT_DOMAIN.to_string(),
            timeout: DEFAULT_TIMEOUT,
            fixture_root: PathBuf::from("fixtures"),
            generator: None,
            transport: None,
        }
    }
}

impl ClientBuilder {
    /// Authenticate with an account instead of an anonymous session.
    pub fn login(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Directory holding per-endpoint fixture sets.
    pub fn fixture_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.fixture_root = root.into();
        self
    }

    /// Replace the model-regeneration collaborator.
    pub fn generator(mut self, generator: Arc<dyn ModelGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Replace the HTTP transport (tests, instrumented stacks).
    pub fn transport(mut self, transport: Arc<dyn transport::Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Client {
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()));

        let mut identity = DeviceIdentity::generate();
        if let Some(device_id) = self.device_id {
            identity.device_id = device_id;
        }
        if let Some(device_type) = self.device_type {
            identity.device_type = device_type;
        }

        let login = match (self.username, self.password) {
            (Some(username), Some(password)) => Some(Login {
                username,
                password: Secret::new(password),
            }),
            _ => None,
        };

        let auth = AccessTokenManager::new(
            transport.clone(),
            identity,
            login,
            self.domain.clone(),
            self.timeout,
        );
        let executor = Executor::new(transport, auth, self.domain, self.timeout);

        let generator = self.generator.unwrap_or_else(|| {
            Arc::new(CommandGenerator::new(
                DEFAULT_GENERATOR_PROGRAM,
                self.fixture_root.clone(),
            ))
        });
        let validator = Validator::new(FixtureStore::new(self.fixture_root), generator);

        Client {
            executor,
            validator,
        }
    }
}
