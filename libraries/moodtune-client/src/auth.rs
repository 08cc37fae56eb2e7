//! Backend authentication.

use crate::error::{ClientError, Result};
use crate::types::LoginResponse;
use moodtune_core::DbUser;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Exchanges an identity token for the backend user profile.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// `POST /api/auth/login` with the identity token as bearer and no body.
    ///
    /// The backend creates the user on first login.
    pub async fn login(&self, identity_token: &str) -> Result<DbUser> {
        let url = format!("{}/api/auth/login", self.base_url);
        debug!(url = %url, "Syncing identity with backend");

        let response = self
            .http
            .post(&url)
            .bearer_auth(identity_token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let login: LoginResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse login response: {}", e))
            })?;

            info!(
                user_id = %login.user.id,
                display_name = %login.user.display_name,
                "Backend login successful"
            );

            Ok(login.user)
        } else if status.as_u16() == 401 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Backend rejected identity token");
            Err(ClientError::AuthFailed(
                "Identity token rejected by backend".to_string(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
