use gloo_net::http::{Request, RequestBuilder};
use url::Url;
use web_sys::RequestCredentials;

use peta_boundary::{AuthUser, Credentials, RequestPasswordReset, Session, UpdatePassword};

use crate::{into_json, into_unit, Result};

/// Client for the hosted auth service.
#[derive(Debug, Clone)]
pub struct AuthApi {
    url: String,
    anon_key: String,
}

impl AuthApi {
    pub fn new(url: &Url, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.as_str().trim_end_matches('/').to_owned(),
            anon_key: anon_key.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.url)
    }

    fn api_key_header(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.anon_key)
    }

    fn bearer_headers(&self, req: RequestBuilder, access_token: &str) -> RequestBuilder {
        self.api_key_header(req)
            .header("Authorization", &format!("Bearer {access_token}"))
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session> {
        let url = format!("{}?grant_type=password", self.endpoint("token"));
        let response = self
            .api_key_header(Request::post(&url))
            .credentials(RequestCredentials::Include)
            .json(credentials)?
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn sign_out(&self, session: &Session) -> Result<()> {
        let url = self.endpoint("logout");
        let response = self
            .bearer_headers(Request::post(&url), &session.access_token)
            .send()
            .await?;
        into_unit(response).await
    }

    /// Validates a stored session. Used once by the startup session check.
    pub async fn user(&self, access_token: &str) -> Result<AuthUser> {
        let url = self.endpoint("user");
        let response = self
            .bearer_headers(Request::get(&url), access_token)
            .send()
            .await?;
        into_json(response).await
    }

    /// Asks the auth service to send a password-recovery email.
    pub async fn request_password_reset(&self, email: String) -> Result<()> {
        let url = self.endpoint("recover");
        let response = self
            .api_key_header(Request::post(&url))
            .json(&RequestPasswordReset { email })?
            .send()
            .await?;
        into_unit(response).await
    }

    /// Sets a new password for the identity behind `access_token`.
    pub async fn update_password(&self, access_token: &str, password: String) -> Result<()> {
        let url = self.endpoint("user");
        let response = self
            .bearer_headers(Request::put(&url), access_token)
            .json(&UpdatePassword { password })?
            .send()
            .await?;
        into_unit(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_rooted_at_the_auth_service() {
        let url = Url::parse("https://db.example.com/").unwrap();
        let api = AuthApi::new(&url, "anon");
        assert_eq!("https://db.example.com/auth/v1/token", api.endpoint("token"));
        assert_eq!("https://db.example.com/auth/v1/user", api.endpoint("user"));
    }
}
