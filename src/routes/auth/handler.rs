use reqwest::Method;

use crate::{
    ApiClient, RequestBody,
    error::{ClientError, Result},
    session::UserData,
};

use super::model::{LoginData, LoginRequest};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

impl ApiClient {
    /// Signs in and keeps the session only if the account holds the Admin role.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserData> {
        let body = serde_json::to_value(LoginRequest {
            username: email.to_string(),
            password: password.to_string(),
        })?;
        let envelope = self
            .envelope(Method::POST, "/users/loginfunc", RequestBody::Json(body))
            .await?;

        let message = envelope.message.clone();
        let data: LoginData = match envelope.data {
            Some(data) if envelope.status => serde_json::from_value(data).unwrap_or_default(),
            _ => LoginData::default(),
        };
        let Some(token) = data.access_token else {
            return Err(ClientError::backend(
                message.unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
            ));
        };

        self.session().set_access_token(token).await?;

        match data.user_data {
            Some(user) if user.is_admin() => {
                self.session().set_user_data(user.clone()).await?;
                // a different account must not see the previous one's lists
                self.cache().clear_all();
                tracing::info!("Signed in as {}", user.name);
                Ok(user)
            }
            _ => {
                tracing::warn!("Rejected sign-in for {}: not an admin", email);
                self.session().clear().await?;
                Err(ClientError::AccessDenied)
            }
        }
    }

    pub async fn logout(&self) -> Result<()> {
        self.session().clear().await?;
        self.cache().clear_all();
        Ok(())
    }

    /// The signed-in admin, re-checked on every authenticated page load.
    /// A stored session without the Admin role is discarded.
    pub async fn current_admin(&self) -> Result<UserData> {
        let session = self.session().snapshot().await;
        if session.access_token.is_none() {
            return Err(ClientError::Unauthenticated);
        }
        match session.user_data {
            Some(user) if user.is_admin() => Ok(user),
            _ => {
                self.session().clear().await?;
                Err(ClientError::AccessDenied)
            }
        }
    }
}
