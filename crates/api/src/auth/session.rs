//! Opaque admin-session tokens and the session cookie.
//!
//! Session tokens are random UUIDs handed to the browser in an `HttpOnly`
//! cookie. Only the SHA-256 digest of a token is stored server-side so a
//! database leak does not compromise active sessions.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Name of the session cookie set on successful login.
pub const SESSION_COOKIE: &str = "holocron_session";

/// Default session lifetime in hours (7 days).
const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 168;

/// Admin session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session lifetime in hours (default: 168).
    pub expiry_hours: i64,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    pub fn from_env() -> Self {
        let expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_HOURS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        Self { expiry_hours }
    }
}

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client; only the hash should be persisted server-side.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming cookie token against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Build the `Set-Cookie` value that establishes the session.
///
/// The cookie is `HttpOnly` (no script access) and `SameSite=Lax` so the
/// admin forms still work across top-level navigations.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Build the `Set-Cookie` value that clears the session on logout.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extract the session token from a `Cookie` request header value.
///
/// Returns `None` when the header carries no session cookie.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
}
