use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::models::error::AppError;

/// An authenticated session: the bearer token plus its absolute expiry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Builds a session expiring `expires_in` seconds after `now`.
    pub fn new(access_token: String, expires_in: i64, now: DateTime<Utc>) -> Self {
        Self {
            access_token,
            expires_at: now + Duration::seconds(expires_in),
        }
    }

    /// Whether the token is still usable at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Whether the token is still usable right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

/// Verifier/challenge pair for one authorization attempt (RFC 7636, S256).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkcePair {
    pub verifier: String,
    pub challenge: String,
}

impl PkcePair {
    /// Derives the S256 challenge for an existing verifier.
    pub fn from_verifier(verifier: impl Into<String>) -> Self {
        let verifier = verifier.into();
        let digest = Sha256::digest(verifier.as_bytes());
        let challenge = URL_SAFE_NO_PAD.encode(digest);
        Self {
            verifier,
            challenge,
        }
    }

    /// Generates a fresh random verifier and its challenge.
    pub fn generate() -> Result<Self, AppError> {
        Ok(Self::from_verifier(random_token()?))
    }
}

/// Random URL-safe token from the browser CSPRNG; used for PKCE verifiers
/// and the CSRF `state` parameter.
pub fn random_token() -> Result<String, AppError> {
    let crypto = web_sys::window()
        .ok_or_else(|| AppError::ConfigError("No window object".to_string()))?
        .crypto()
        .map_err(|_| AppError::ConfigError("Web Crypto unavailable".to_string()))?;

    let mut bytes = [0u8; 32];
    crypto
        .get_random_values_with_u8_array(&mut bytes)
        .map_err(|_| AppError::AuthError("Failed to draw random bytes".to_string()))?;

    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

// PROVIDER RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Client for the hosted identity provider. Builds the redirect URLs and
/// performs the code-for-token exchange; everything else about the login
/// flow belongs to the provider.
pub struct AuthClient {
    http: reqwest::Client,
    domain: String,
    client_id: String,
    audience: String,
}

impl AuthClient {
    /// Creates a client for the configured tenant.
    pub fn new() -> Result<Self, AppError> {
        Self::with_tenant(
            Config::AUTH_DOMAIN,
            Config::AUTH_CLIENT_ID,
            Config::AUTH_AUDIENCE,
        )
    }

    /// Creates a client for a specific tenant (primarily for testing).
    pub fn with_tenant(
        domain: impl Into<String>,
        client_id: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            domain: domain.into(),
            client_id: client_id.into(),
            audience: audience.into(),
        })
    }

    /// Constructs the login redirect URL for one authorization attempt.
    pub fn authorize_url(&self, redirect_uri: &str, state: &str, challenge: &str) -> String {
        format!(
            "https://{}/authorize\
             ?response_type=code\
             &client_id={}\
             &redirect_uri={}\
             &audience={}\
             &scope={}\
             &state={}\
             &code_challenge={}\
             &code_challenge_method=S256",
            self.domain,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(redirect_uri),
            urlencoding::encode(&self.audience),
            urlencoding::encode("openid profile email"),
            urlencoding::encode(state),
            urlencoding::encode(challenge),
        )
    }

    /// Constructs the logout redirect URL.
    pub fn logout_url(&self, return_to: &str) -> String {
        format!(
            "https://{}/v2/logout?client_id={}&returnTo={}",
            self.domain,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(return_to),
        )
    }

    /// Exchanges an authorization code for a session.
    pub async fn exchange_code(
        &self,
        code: &str,
        verifier: &str,
        redirect_uri: &str,
    ) -> Result<Session, AppError> {
        let url = format!("https://{}/oauth/token", self.domain);
        let form = [
            ("grant_type", "authorization_code"),
            ("client_id", self.client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ];

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::AuthError(format!("Token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AuthError(format!(
                "Token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::AuthError(format!("Failed to parse token response: {e}")))?;

        Ok(Session::new(token.access_token, token.expires_in, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pkce_challenge_rfc7636_vector() {
        let pair = PkcePair::from_verifier("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
        assert_eq!(pair.challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
    }

    #[test]
    fn test_authorize_url_parameters() {
        let client = AuthClient::with_tenant(
            "tenant.example.auth0.com",
            "client-id-123",
            "https://sin-dashboard/api",
        )
        .unwrap();

        let url = client.authorize_url("http://localhost:8080", "st4te", "ch4llenge");

        assert!(url.starts_with("https://tenant.example.auth0.com/authorize?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=client-id-123"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080"));
        assert!(url.contains("audience=https%3A%2F%2Fsin-dashboard%2Fapi"));
        assert!(url.contains("state=st4te"));
        assert!(url.contains("code_challenge=ch4llenge"));
        assert!(url.contains("code_challenge_method=S256"));
    }

    #[test]
    fn test_logout_url_parameters() {
        let client = AuthClient::with_tenant("tenant.example.auth0.com", "client-id-123", "aud")
            .unwrap();

        let url = client.logout_url("http://localhost:8080");

        assert_eq!(
            url,
            "https://tenant.example.auth0.com/v2/logout\
             ?client_id=client-id-123&returnTo=http%3A%2F%2Flocalhost%3A8080"
        );
    }

    #[test]
    fn test_session_expiry() {
        let issued = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let session = Session::new("tok".to_string(), 7200, issued);

        assert!(session.is_valid_at(issued));
        assert!(session.is_valid_at(issued + Duration::seconds(7199)));
        assert!(!session.is_valid_at(issued + Duration::seconds(7200)));
    }

    #[test]
    fn test_session_round_trip() {
        let issued = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let session = Session::new("tok".to_string(), 3600, issued);

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
