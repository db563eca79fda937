//! Public token resolution
//!
//! The upstream embeds a `client_id:client_secret` pair in a public script
//! bundle as `prod="<ident>:<ident>"`. The resolver downloads the bundle,
//! extracts the pair, and base64-encodes its Latin-1 bytes — the exact bytes
//! the token endpoint expects in a `Basic` authorization header.
//!
//! The resolver performs no caching; `AccessTokenManager` stores the result
//! for the lifetime of the process. One network call per invocation.

use std::sync::LazyLock;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use tracing::info;

use crate::constants::BUNDLE_URL;
use crate::error::{Error, Result};

/// Identifier characters are word characters and hyphens.
static PROD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"prod="([\w-]+:[\w-]+)""#).expect("static pattern compiles"));

/// Download the script bundle and derive the public token from it.
///
/// Fails with `Error::Extraction` when the bundle no longer matches the
/// pattern — the upstream format changed and a code update is required.
pub async fn resolve(transport: &dyn transport::Transport, timeout: Duration) -> Result<String> {
    info!(url = BUNDLE_URL, "downloading public token bundle");
    let response = transport.get(BUNDLE_URL, &[], &[], timeout).await?;

    if response.status != 200 {
        return Err(Error::Extraction(format!(
            "bundle request returned status {}",
            response.status
        )));
    }

    let Some(captures) = PROD_PATTERN.captures(&response.body) else {
        return Err(Error::Extraction(
            "no prod credential found in bundle".into(),
        ));
    };

    let raw = &captures[1];
    let bytes = latin1_bytes(raw).ok_or_else(|| {
        Error::Extraction(format!(
            "credential contains characters outside Latin-1: {raw}"
        ))
    })?;

    Ok(STANDARD.encode(bytes))
}

/// Encode a string as single-byte Latin-1, one byte per code point.
/// Returns `None` for code points above U+00FF.
fn latin1_bytes(s: &str) -> Option<Vec<u8>> {
    s.chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use transport::{Response, Transport};

    struct BundleTransport {
        status: u16,
        body: String,
    }

    impl Transport for BundleTransport {
        fn get<'a>(
            &'a self,
            _url: &'a str,
            _query: &'a [(String, String)],
            _headers: &'a [(String, String)],
            _timeout: Duration,
        ) -> Pin<Box<dyn Future<Output = transport::Result<Response>> + Send + 'a>> {
            Box::pin(async move {
                Ok(Response {
                    status: self.status,
                    body: self.body.clone(),
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
            Box::pin(async move { Err(transport::Error::Request("unexpected POST".into())) })
        }
    }

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn extracts_and_encodes_the_credential() {
        let transport = BundleTransport {
            status: 200,
            body: r#"var cfg={};prod="abc-123:def-456";var rest=1;"#.into(),
        };
        let token = resolve(&transport, TIMEOUT).await.unwrap();
        // base64 of the literal bytes `abc-123:def-456`
        assert_eq!(token, STANDARD.encode("abc-123:def-456"));
        assert_eq!(token, "YWJjLTEyMzpkZWYtNDU2");
    }

    #[tokio::test]
    async fn missing_pattern_is_an_extraction_error() {
        let transport = BundleTransport {
            status: 200,
            body: "var cfg = {};".into(),
        };
        let err = resolve(&transport, TIMEOUT).await.unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[tokio::test]
    async fn non_200_bundle_is_an_extraction_error() {
        let transport = BundleTransport {
            status: 503,
            body: "service unavailable".into(),
        };
        let err = resolve(&transport, TIMEOUT).await.unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn latin1_covers_the_single_byte_range() {
        assert_eq!(latin1_bytes("abc"), Some(vec![b'a', b'b', b'c']));
        // U+00FF is the top of the Latin-1 range
        assert_eq!(latin1_bytes("\u{ff}"), Some(vec![0xff]));
        // Anything above it cannot be a single byte
        assert_eq!(latin1_bytes("\u{100}"), None);
        assert_eq!(latin1_bytes("日本"), None);
    }
}
