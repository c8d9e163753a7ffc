/*
[INPUT]:  API key/secret pair (direct or from environment)
[OUTPUT]: Immutable credentials for authenticated requests
[POS]:    Auth layer - credential storage
[UPDATE]: When credential sources change
*/

use secrecy::{ExposeSecret, SecretString};

use crate::auth::HmacSigner;
use crate::http::{KryptonoError, Result};

pub const API_KEY_ENV: &str = "KRYPTONO_API_KEY";
pub const API_SECRET_ENV: &str = "KRYPTONO_API_SECRET";

/// API credentials for private endpoints
///
/// The key is sent verbatim in the `Authorization` header. The secret never
/// leaves the process; it only keys the body signature.
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Read `KRYPTONO_API_KEY` and `KRYPTONO_API_SECRET` from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| KryptonoError::Config(format!("{API_KEY_ENV} is not set")))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| KryptonoError::Config(format!("{API_SECRET_ENV} is not set")))?;
        Ok(Self::new(api_key, api_secret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Signer keyed by the API secret
    pub fn signer(&self) -> HmacSigner {
        HmacSigner::new(self.api_secret.expose_secret().as_bytes())
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
