//! Auth endpoints
//!
//! The session follows the auth endpoints: a successful login or register
//! installs the returned bearer token on the client, and logout drops it
//! even when the network call fails.

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::client::{
    AuthResponse, ChangePasswordRequest, LoginRequest, ProfileEnvelope, RegisterRequest,
};
use shared::models::user::{ProfileUpdate, User, UserSaved};
use shared::response::MessageResponse;

/// Auth slice of the remote API
#[async_trait]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse>;
    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse>;
    async fn fetch_profile(&self) -> ClientResult<User>;
    async fn logout(&self) -> ClientResult<String>;
    async fn change_password(&self, request: &ChangePasswordRequest) -> ClientResult<String>;
    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User>;

    /// Install a bearer token outside the login flow (session restore)
    fn install_token(&self, _token: &str) {}

    /// True once the gateway observed a 401 and dropped the session
    fn session_invalidated(&self) -> bool {
        false
    }
}

#[async_trait]
impl AuthApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self.post("/auth/login", request).await?;
        self.set_token(response.token.clone());
        Ok(response)
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self.post("/auth/register", request).await?;
        self.set_token(response.token.clone());
        Ok(response)
    }

    async fn fetch_profile(&self) -> ClientResult<User> {
        let envelope: ProfileEnvelope = self.get("/auth/profile").await?;
        Ok(envelope.user)
    }

    async fn logout(&self) -> ClientResult<String> {
        let result = self.post_empty::<MessageResponse>("/auth/logout").await;
        self.clear_token();
        result.map(|response| response.message)
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> ClientResult<String> {
        let response: MessageResponse = self.put("/auth/change-password", request).await?;
        Ok(response.message)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        let saved: UserSaved = self.put("/users/profile", update).await?;
        Ok(saved.user)
    }

    fn install_token(&self, token: &str) {
        self.set_token(token);
    }

    fn session_invalidated(&self) -> bool {
        HttpClient::session_invalidated(self)
    }
}

#[async_trait]
impl<T: AuthApi + Send + Sync + ?Sized> AuthApi for std::sync::Arc<T> {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        (**self).login(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        (**self).register(request).await
    }

    async fn fetch_profile(&self) -> ClientResult<User> {
        (**self).fetch_profile().await
    }

    async fn logout(&self) -> ClientResult<String> {
        (**self).logout().await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> ClientResult<String> {
        (**self).change_password(request).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        (**self).update_profile(update).await
    }

    fn install_token(&self, token: &str) {
        (**self).install_token(token)
    }

    fn session_invalidated(&self) -> bool {
        (**self).session_invalidated()
    }
}
