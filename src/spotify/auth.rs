use std::fmt;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;

use crate::error::AuthError;

/// A short-lived access token sent as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Yields a bearer token on demand.
///
/// Implementations do not cache: every command asks once and throws the token
/// away when it finishes.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn token(&self) -> Result<BearerToken, AuthError>;
}

/// Client ID and secret exchanged for a token through the OAuth
/// client-credentials grant.
#[derive(Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    token_url: String,
    http: Client,
}

impl ClientCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: token_url.into(),
            http: Client::new(),
        }
    }

    /// Value of the `Authorization` header: `Basic base64(id:secret)`.
    pub fn basic_auth_header(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));
        format!("Basic {}", encoded)
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CredentialProvider for ClientCredentials {
    async fn token(&self) -> Result<BearerToken, AuthError> {
        let res = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, self.basic_auth_header())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let body = res.text().await?;
        let json: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        match json.get("access_token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => Ok(BearerToken::new(token)),
            _ => Err(AuthError::MissingToken { payload: body }),
        }
    }
}

/// A token obtained elsewhere, handed out unchanged.
#[derive(Debug, Clone)]
pub struct StaticToken(pub BearerToken);

#[async_trait]
impl CredentialProvider for StaticToken {
    async fn token(&self) -> Result<BearerToken, AuthError> {
        Ok(self.0.clone())
    }
}
