//! User management endpoints (super-admin screen)

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use serde::Serialize;
use shared::models::user::{User, UserCreate, UserEnvelope, UserRole, UserSaved, UserSearch, UsersPage};
use shared::response::{MessageResponse, PageQuery};

/// User slice of the remote API
#[async_trait]
pub trait UserApi {
    async fn fetch_users(&self, query: PageQuery) -> ClientResult<UsersPage>;
    async fn fetch_user(&self, id: i64) -> ClientResult<User>;
    async fn create_admin(&self, payload: &UserCreate) -> ClientResult<User>;
    async fn update_user_role(&self, id: i64, role: UserRole) -> ClientResult<String>;
    async fn delete_user(&self, id: i64) -> ClientResult<String>;
    async fn search_users(&self, query: &UserSearch) -> ClientResult<UsersPage>;
}

#[derive(Serialize)]
struct UpdateRoleRequest {
    role: UserRole,
}

#[async_trait]
impl UserApi for HttpClient {
    async fn fetch_users(&self, query: PageQuery) -> ClientResult<UsersPage> {
        self.get_query("/users", &query).await
    }

    async fn fetch_user(&self, id: i64) -> ClientResult<User> {
        let envelope: UserEnvelope = self.get(&format!("/users/{}", id)).await?;
        Ok(envelope.user)
    }

    async fn create_admin(&self, payload: &UserCreate) -> ClientResult<User> {
        let saved: UserSaved = self.post("/users/create-admin", payload).await?;
        Ok(saved.user)
    }

    async fn update_user_role(&self, id: i64, role: UserRole) -> ClientResult<String> {
        let response: MessageResponse = self
            .put(&format!("/users/{}/role", id), &UpdateRoleRequest { role })
            .await?;
        Ok(response.message)
    }

    async fn delete_user(&self, id: i64) -> ClientResult<String> {
        let response: MessageResponse = self.delete(&format!("/users/{}", id)).await?;
        Ok(response.message)
    }

    async fn search_users(&self, query: &UserSearch) -> ClientResult<UsersPage> {
        self.get_query("/users/search", query).await
    }
}

#[async_trait]
impl<T: UserApi + Send + Sync + ?Sized> UserApi for std::sync::Arc<T> {
    async fn fetch_users(&self, query: PageQuery) -> ClientResult<UsersPage> {
        (**self).fetch_users(query).await
    }

    async fn fetch_user(&self, id: i64) -> ClientResult<User> {
        (**self).fetch_user(id).await
    }

    async fn create_admin(&self, payload: &UserCreate) -> ClientResult<User> {
        (**self).create_admin(payload).await
    }

    async fn update_user_role(&self, id: i64, role: UserRole) -> ClientResult<String> {
        (**self).update_user_role(id, role).await
    }

    async fn delete_user(&self, id: i64) -> ClientResult<String> {
        (**self).delete_user(id).await
    }

    async fn search_users(&self, query: &UserSearch) -> ClientResult<UsersPage> {
        (**self).search_users(query).await
    }
}
