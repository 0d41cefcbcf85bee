// SPDX-License-Identifier: MIT

//! Firebase ID token verification.
//!
//! Clients sign in with Firebase Auth (Google OAuth or phone OTP) and send
//! the resulting ID token as a bearer token. The server never mints tokens;
//! it only verifies them against Google's securetoken signing keys.
//!
//! The verifier is constructed once at startup and shared through
//! `AppState`, so there is no lazily-initialized global to guard.

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

const JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);
const CLOCK_SKEW_SECS: u64 = 60;

/// Verified caller identity extracted from a valid ID token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Firebase uid (stable per account)
    pub uid: String,
    /// Email, if the sign-in method shared one
    pub email: Option<String>,
    /// Phone number, for OTP sign-ins
    pub phone_number: Option<String>,
    /// Display name, if set
    pub name: Option<String>,
}

/// Identity verification error categories.
#[derive(Debug, Clone)]
pub enum IdentityError {
    /// The token is missing/invalid or claims do not match expectations.
    Invalid(String),
    /// A transient infrastructure failure occurred (JWKS unreachable).
    Transient(String),
}

#[derive(Clone)]
enum VerifierMode {
    /// Verify RS256 signatures against Google's securetoken JWKS.
    Firebase,
    /// Verify HS256 signatures with a fixed secret (tests only).
    StaticSecret(Arc<Vec<u8>>),
}

#[derive(Clone)]
struct JwksCacheEntry {
    keys_by_kid: HashMap<String, Arc<DecodingKey>>,
    expires_at: Instant,
}

/// Verifier for Firebase-issued ID tokens.
pub struct IdentityVerifier {
    http_client: reqwest::Client,
    issuer: String,
    project_id: String,
    mode: VerifierMode,
    jwks_cache: RwLock<Option<JwksCacheEntry>>,
    refresh_lock: Mutex<()>,
}

impl IdentityVerifier {
    /// Create a production verifier that fetches and caches the
    /// securetoken JWKS keys.
    pub fn new(project_id: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .context("failed building identity HTTP client")?;

        tracing::info!(project = project_id, "Initialized Firebase ID token verifier");

        Ok(Self {
            http_client,
            issuer: format!("https://securetoken.google.com/{project_id}"),
            project_id: project_id.to_string(),
            mode: VerifierMode::Firebase,
            jwks_cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Create a verifier with a static HS256 secret.
    ///
    /// This is intended for deterministic local/integration tests; issuer
    /// and audience claims are still checked.
    pub fn new_with_static_secret(
        project_id: &str,
        secret: impl Into<Vec<u8>>,
    ) -> anyhow::Result<Self> {
        use anyhow::Context;

        let secret = secret.into();
        if secret.is_empty() {
            anyhow::bail!("static verifier secret must not be empty");
        }

        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .context("failed building identity HTTP client")?;

        Ok(Self {
            http_client,
            issuer: format!("https://securetoken.google.com/{project_id}"),
            project_id: project_id.to_string(),
            mode: VerifierMode::StaticSecret(Arc::new(secret)),
            jwks_cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Verify a bearer ID token and extract the caller identity.
    pub async fn verify(&self, token: &str) -> Result<AuthUser, IdentityError> {
        let header = decode_header(token)
            .map_err(|e| IdentityError::Invalid(format!("invalid JWT header: {e}")))?;

        let (algorithm, decoding_key) = match &self.mode {
            VerifierMode::StaticSecret(secret) => {
                if header.alg != Algorithm::HS256 {
                    return Err(IdentityError::Invalid(format!(
                        "unexpected JWT alg: {:?}",
                        header.alg
                    )));
                }
                (
                    Algorithm::HS256,
                    Arc::new(DecodingKey::from_secret(secret)),
                )
            }
            VerifierMode::Firebase => {
                if header.alg != Algorithm::RS256 {
                    return Err(IdentityError::Invalid(format!(
                        "unexpected JWT alg: {:?}",
                        header.alg
                    )));
                }
                let kid = header
                    .kid
                    .ok_or_else(|| IdentityError::Invalid("missing JWT kid".to_string()))?;
                (Algorithm::RS256, self.decoding_key_for_kid(&kid).await?)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.project_id.as_str()]);
        validation.leeway = CLOCK_SKEW_SECS;

        let token_data = decode::<IdTokenClaims>(token, decoding_key.as_ref(), &validation)
            .map_err(|e| IdentityError::Invalid(format!("JWT validation failed: {e}")))?;

        let claims = token_data.claims;

        if claims.sub.trim().is_empty() {
            return Err(IdentityError::Invalid("empty sub claim".to_string()));
        }

        tracing::debug!(
            uid = %claims.sub,
            email = claims.email.as_deref().unwrap_or("<missing>"),
            "Verified ID token"
        );

        Ok(AuthUser {
            uid: claims.sub,
            email: claims.email,
            phone_number: claims.phone_number,
            name: claims.name,
        })
    }

    async fn decoding_key_for_kid(&self, kid: &str) -> Result<Arc<DecodingKey>, IdentityError> {
        if let Some(key) = self.lookup_cached_key(kid).await {
            return Ok(key);
        }

        // A miss may just mean Google rotated keys; refresh at most twice.
        for force_refresh in [false, true] {
            self.refresh_jwks(force_refresh).await?;
            if let Some(key) = self.lookup_cached_key(kid).await {
                return Ok(key);
            }
        }

        Err(IdentityError::Invalid(format!(
            "JWT kid not found in JWKS after refresh: {kid}"
        )))
    }

    async fn lookup_cached_key(&self, kid: &str) -> Option<Arc<DecodingKey>> {
        let cache = self.jwks_cache.read().await;
        let now = Instant::now();
        cache
            .as_ref()
            .filter(|entry| entry.expires_at > now)
            .and_then(|entry| entry.keys_by_kid.get(kid))
            .cloned()
    }

    async fn refresh_jwks(&self, force_refresh: bool) -> Result<(), IdentityError> {
        let _guard = self.refresh_lock.lock().await;

        if !force_refresh {
            let cache = self.jwks_cache.read().await;
            if cache
                .as_ref()
                .is_some_and(|entry| entry.expires_at > Instant::now())
            {
                return Ok(());
            }
        }

        tracing::debug!(jwks_uri = JWKS_URL, "Refreshing securetoken JWKS cache");

        let response = self
            .http_client
            .get(JWKS_URL)
            .send()
            .await
            .map_err(|e| IdentityError::Transient(format!("JWKS request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(IdentityError::Transient(format!(
                "JWKS request returned status {}",
                response.status()
            )));
        }

        let ttl = cache_ttl_from_headers(response.headers(), DEFAULT_CACHE_TTL);

        let jwks: Jwks = response
            .json()
            .await
            .map_err(|e| IdentityError::Transient(format!("invalid JWKS JSON: {e}")))?;

        let mut keys_by_kid: HashMap<String, Arc<DecodingKey>> = HashMap::new();

        for jwk in jwks.keys {
            if jwk.kty != "RSA" || jwk.kid.trim().is_empty() {
                continue;
            }

            if let Some(alg) = &jwk.alg {
                if alg != "RS256" {
                    continue;
                }
            }

            match DecodingKey::from_rsa_components(&jwk.n, &jwk.e) {
                Ok(key) => {
                    keys_by_kid.insert(jwk.kid, Arc::new(key));
                }
                Err(e) => {
                    tracing::warn!(error = %e, kid = %jwk.kid, "Skipping invalid RSA JWKS key");
                }
            }
        }

        if keys_by_kid.is_empty() {
            return Err(IdentityError::Transient(
                "JWKS response did not include any usable RSA keys".to_string(),
            ));
        }

        let entry = JwksCacheEntry {
            keys_by_kid,
            expires_at: Instant::now() + ttl,
        };

        *self.jwks_cache.write().await = Some(entry);

        tracing::debug!(ttl_secs = ttl.as_secs(), "Securetoken JWKS cache refreshed");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct Jwks {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    kty: String,
    alg: Option<String>,
    n: String,
    e: String,
}

/// Claims carried in a Firebase ID token.
#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    email: Option<String>,
    phone_number: Option<String>,
    name: Option<String>,
}

fn cache_ttl_from_headers(headers: &reqwest::header::HeaderMap, fallback: Duration) -> Duration {
    let Some(max_age) = headers
        .get(CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_cache_control_max_age)
    else {
        return fallback;
    };

    Duration::from_secs(max_age)
}

fn parse_cache_control_max_age(value: &str) -> Option<u64> {
    for directive in value.split(',') {
        let directive = directive.trim();

        if let Some(raw) = directive.strip_prefix("max-age=") {
            let raw = raw.trim_matches('"');
            if let Ok(seconds) = raw.parse::<u64>() {
                return Some(seconds);
            }
        }
    }

    None
}
