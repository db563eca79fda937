//! Upstream endpoint constants
//!
//! These identify the public client application, not secrets. The bundle URL
//! and token path are fixed upstream surfaces; if either moves, public token
//! extraction fails with `Error::Extraction` and the constants need updating.

use std::time::Duration;

/// Script bundle that embeds the public Basic-auth credential.
pub const BUNDLE_URL: &str = "https://static.crunchyroll.com/vilos-v2/web/vilos/js/bundle.js";

/// API host for token grants and catalog requests.
pub const DEFAULT_DOMAIN: &str = "beta-api.crunchyroll.com";

/// Token endpoint path, relative to the domain.
pub const TOKEN_PATH: &str = "auth/v1/token";

/// Device type reported with every grant. Matches the value the Windows
/// web client sends.
pub const DEFAULT_DEVICE_TYPE: &str = "Microsoft Edge on Windows";

/// Default deadline for a single outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
