// src/auth/google.rs
//
// Exchange of a Google OAuth credential against the backend API. The filter
// core never touches this module; failures surface as user-readable
// messages, never as raw transport errors.

use crate::errors::ServerError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const NETWORK_MESSAGE: &str = "Não foi possível conectar. Verifique sua internet e tente novamente.";
const FALLBACK_MESSAGE: &str = "Não foi possível entrar com o Google. Tente novamente.";

/// Credential handed over by the browser SDK. Serializes to exactly
/// `{"accessToken": "..."}` or `{"code": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoogleCredential {
    AccessToken(String),
    Code(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
    pub sub: Option<String>,
}

/// Present when the backend has no account for this Google identity yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub picture: Option<String>,
    pub sub: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<ApiUser>,
    pub new_account: Option<NewAccount>,
}

/// Shape of a backend error body; only `message` is surfaced.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

pub struct GoogleAuthClient {
    base_url: String,
}

impl GoogleAuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// POST /auth/signInGoogle. No retry: a failed attempt requires a new
    /// user-initiated one.
    pub fn sign_in(&self, credential: &GoogleCredential) -> Result<SignInResponse, ServerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|_| ServerError::Auth(NETWORK_MESSAGE.to_string()))?;

        let response = client
            .post(format!("{}/auth/signInGoogle", self.base_url))
            .json(credential)
            .send()
            .map_err(|_| ServerError::Auth(NETWORK_MESSAGE.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|_| ServerError::Auth(NETWORK_MESSAGE.to_string()))?;

        classify_response(status, &body)
    }
}

/// Maps a backend response to a result: 2xx bodies parse into
/// [`SignInResponse`]; a non-2xx body carrying a `message` field surfaces
/// that message verbatim; anything else degrades to a generic message.
pub fn classify_response(status: u16, body: &str) -> Result<SignInResponse, ServerError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body)
            .map_err(|_| ServerError::Auth(FALLBACK_MESSAGE.to_string()));
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

    Err(ServerError::Auth(message))
}
