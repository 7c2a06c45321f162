//! Users store (super-admin management screen)
//!
//! Only super-admins reach these operations; the server enforces the
//! privilege, this store just carries the state.

use coral_client::UserApi;
use shared::models::user::{User, UserCreate, UserRole, UserSearch};
use shared::response::{PageQuery, Pagination};

/// Users slice of the panel state
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub users: Vec<User>,
    pub current_user: Option<User>,
    pub pagination: Option<Pagination>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Owner of the users state and its gateway-backed operations
#[derive(Debug)]
pub struct UsersStore<G> {
    gateway: G,
    state: UsersState,
}

impl<G> UsersStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: UsersState::default(),
        }
    }

    // ========== Selectors ==========

    pub fn state(&self) -> &UsersState {
        &self.state
    }

    pub fn users(&self) -> &[User] {
        &self.state.users
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.current_user.as_ref()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.state.pagination.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    // ========== Local reducers ==========

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }
}

impl<G: UserApi + Send + Sync> UsersStore<G> {
    /// Load a page of users
    pub async fn fetch_users(&mut self, query: PageQuery) {
        self.state.loading = true;
        self.state.error = None;

        match self.gateway.fetch_users(query).await {
            Ok(page) => {
                tracing::debug!(count = page.users.len(), "Users fetched");
                self.state.users = page.users;
                self.state.pagination = Some(page.pagination);
                self.state.error = None;
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
            }
        }
        self.state.loading = false;
    }

    /// Load one user into `current_user`
    pub async fn fetch_user_by_id(&mut self, id: i64) {
        self.state.loading = true;
        self.state.error = None;

        match self.gateway.fetch_user(id).await {
            Ok(user) => {
                self.state.current_user = Some(user);
                self.state.error = None;
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
            }
        }
        self.state.loading = false;
    }

    /// Create an admin account; prepended to the list on confirmation
    pub async fn create_admin(&mut self, payload: &UserCreate) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.create_admin(payload).await;
        self.state.loading = false;

        match result {
            Ok(user) => {
                tracing::debug!(id = user.id, "Admin created");
                self.state.users.insert(0, user);
                self.state.error = None;
                true
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
                false
            }
        }
    }

    /// Change a user's role
    ///
    /// The response carries only a message, so the confirmed role is
    /// applied to the local copy from the request parameters.
    pub async fn update_user_role(&mut self, id: i64, role: UserRole) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.update_user_role(id, role).await;
        self.state.loading = false;

        match result {
            Ok(_message) => {
                if let Some(user) = self.state.users.iter_mut().find(|user| user.id == id) {
                    user.role = role;
                }
                if let Some(current) = &mut self.state.current_user {
                    if current.id == id {
                        current.role = role;
                    }
                }
                self.state.error = None;
                true
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
                false
            }
        }
    }

    /// Delete a user; removed from the list only after confirmation
    pub async fn delete_user(&mut self, id: i64) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.delete_user(id).await;
        self.state.loading = false;

        match result {
            Ok(_message) => {
                self.state.users.retain(|user| user.id != id);
                if self
                    .state
                    .current_user
                    .as_ref()
                    .is_some_and(|current| current.id == id)
                {
                    self.state.current_user = None;
                }
                self.state.error = None;
                true
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
                false
            }
        }
    }

    /// Search users by name/email and role filter
    pub async fn search_users(&mut self, query: &UserSearch) {
        self.state.loading = true;
        self.state.error = None;

        match self.gateway.search_users(query).await {
            Ok(page) => {
                self.state.users = page.users;
                self.state.pagination = Some(page.pagination);
                self.state.error = None;
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
            }
        }
        self.state.loading = false;
    }
}
