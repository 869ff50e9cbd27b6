use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::{AuthError, FetchError},
    spotify::auth::{BearerToken, CredentialProvider},
};

/// An authorised handle on the Spotify Web API.
///
/// Holds the token of a single command run; requests are issued one at a
/// time and never retried.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: BearerToken,
}

impl SpotifyClient {
    /// Asks `provider` for a token and binds it to the API at `api_url`.
    pub async fn authorize<P>(provider: &P, api_url: impl Into<String>) -> Result<Self, AuthError>
    where
        P: CredentialProvider + ?Sized,
    {
        let token = provider.token().await?;
        Ok(Self::with_token(token, api_url))
    }

    pub fn with_token(token: BearerToken, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub(crate) async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.api_url, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.token.as_str())
            .query(query)
            .send()
            .await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|_| FetchError::Decode(body))
    }

    /// GETs `path` and deserialises the value under `field`.
    pub(crate) async fn get_field<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        field: &'static str,
    ) -> Result<T, FetchError> {
        let json = self.get_json(path, query).await?;
        take_field(json, field)
    }

    /// GETs `path` and deserialises the whole body, provided it carries
    /// `field`; error payloads never do.
    pub(crate) async fn get_object<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        field: &'static str,
    ) -> Result<T, FetchError> {
        let json = self.get_json(path, query).await?;
        if json.get(field).is_none_or(Value::is_null) {
            return Err(FetchError::MissingField {
                field,
                payload: json.to_string(),
            });
        }
        serde_json::from_value(json).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

pub(crate) fn take_field<T: DeserializeOwned>(
    mut json: Value,
    field: &'static str,
) -> Result<T, FetchError> {
    if json.get(field).is_none_or(Value::is_null) {
        return Err(FetchError::MissingField {
            field,
            payload: json.to_string(),
        });
    }
    serde_json::from_value(json[field].take()).map_err(|e| FetchError::Decode(e.to_string()))
}
