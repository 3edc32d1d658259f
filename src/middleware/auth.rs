use reqwest::RequestBuilder;

use crate::session::Session;

/// Adds `Authorization: Bearer <token>` when the session holds a token.
pub async fn with_bearer(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    match session.access_token().await {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}
