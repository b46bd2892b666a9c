//! Fleep HTTP API client.
//!
//! Thin blocking client over the handful of endpoints the cleaner needs:
//! login, export sync, file download, and attachment delete. Calls are
//! request/response with no retry; any non-success status is fatal and
//! carries the response body as the diagnostic.

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, AttachmentRecord, ExportRef, Result, Session};

/// Name of the session cookie set by the login endpoint.
const TOKEN_COOKIE: &str = "token_id";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    ticket: String,
}

#[derive(Debug, Serialize)]
struct SyncRequest<'a> {
    ticket: &'a str,
}

#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    ticket: &'a str,
    message_nr: u64,
    attachment_id: &'a str,
}

/// Blocking client for the Fleep API.
pub struct FleepClient {
    http: Client,
    base_url: String,
}

impl FleepClient {
    /// Creates a client against the given API base URL.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| AppError::http("Failed to build HTTP client", e))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Resolves a download URL that may be relative to the API base.
    fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            self.endpoint(url)
        }
    }

    /// Exchanges credentials for a session ticket and token.
    ///
    /// # Errors
    /// Returns [`AppError::Auth`] on a non-success response or when the
    /// response does not set the session cookie.
    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        let resp = self
            .http
            .post(self.endpoint("/api/account/login"))
            .json(&LoginRequest { email, password })
            .send()
            .map_err(|e| AppError::http("Login request failed", e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::auth(format!("HTTP {status}: {body}")));
        }

        let token = extract_cookie_value(resp.headers(), TOKEN_COOKIE)
            .ok_or_else(|| AppError::auth("login response did not set a token_id cookie"))?;

        let body: LoginResponse = resp
            .json()
            .map_err(|e| AppError::http("Decoding login response failed", e))?;

        tracing::info!("Authenticated with Fleep");

        Ok(Session {
            ticket: body.ticket,
            token,
        })
    }

    /// Fetches the reference to the account's latest export.
    ///
    /// # Errors
    /// Returns [`AppError::Api`] on a non-success response.
    pub fn fetch_export_ref(&self, session: &Session) -> Result<ExportRef> {
        let resp = self
            .http
            .post(self.endpoint("/api/account/sync"))
            .header(header::COOKIE, session.cookie())
            .json(&SyncRequest {
                ticket: &session.ticket,
            })
            .send()
            .map_err(|e| AppError::http("Export sync request failed", e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::api("Export sync", status.as_u16(), body));
        }

        resp.json()
            .map_err(|e| AppError::http("Decoding export sync response failed", e))
    }

    /// Downloads a file with the session cookie attached.
    ///
    /// # Errors
    /// Returns [`AppError::Api`] on a non-success response.
    pub fn download(&self, session: &Session, url: &str) -> Result<Vec<u8>> {
        let resp = self
            .http
            .get(self.resolve_url(url))
            .header(header::COOKIE, session.cookie())
            .send()
            .map_err(|e| AppError::http("Download request failed", e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::api("Download", status.as_u16(), body));
        }

        let bytes = resp
            .bytes()
            .map_err(|e| AppError::http("Reading download body failed", e))?;

        Ok(bytes.to_vec())
    }

    /// Deletes a single attachment from its message.
    ///
    /// # Errors
    /// Returns [`AppError::Api`] on a non-success response.
    pub fn delete_attachment(&self, session: &Session, record: &AttachmentRecord) -> Result<()> {
        let endpoint = self.endpoint(&format!(
            "/api/message/delete/{}",
            record.conversation_id
        ));

        let resp = self
            .http
            .post(endpoint)
            .header(header::COOKIE, session.cookie())
            .json(&DeleteRequest {
                ticket: &session.ticket,
                message_nr: record.message_nr,
                attachment_id: &record.attachment_id,
            })
            .send()
            .map_err(|e| AppError::http("Delete request failed", e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::api("Attachment delete", status.as_u16(), body));
        }

        Ok(())
    }
}

/// Extracts a named cookie value from `Set-Cookie` response headers.
fn extract_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let (key, rest) = cookie.split_once('=')?;
            if key.trim() == name {
                let value = rest.split(';').next()?.trim();
                Some(value.to_string())
            } else {
                None
            }
        })
}
