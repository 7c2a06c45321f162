//! Auth store
//!
//! Owns the authenticated principal and the session flags. The gateway
//! installs and drops the bearer token as a side effect of the auth
//! endpoints; this store folds those transitions into client-visible state
//! and persists the credential for session restore.

use coral_client::{AuthApi, Credential, CredentialStorage};
use shared::client::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use shared::models::user::{ProfileUpdate, User};

/// Auth slice of the panel state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// True once any auth check has run; gates "still checking" UI states
    pub login_attempted: bool,
    pub loading: bool,
    pub error: Option<String>,
}

/// Owner of the auth state and its gateway-backed operations
#[derive(Debug)]
pub struct AuthStore<G> {
    gateway: G,
    storage: Option<CredentialStorage>,
    state: AuthState,
}

impl<G> AuthStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            storage: None,
            state: AuthState::default(),
        }
    }

    /// Persist credentials at the given storage so sessions survive restarts
    pub fn with_storage(mut self, storage: CredentialStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    // ========== Selectors ==========

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn login_attempted(&self) -> bool {
        self.state.login_attempted
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

    /// Drop the whole session slice
    pub fn clear_auth(&mut self) {
        self.state = AuthState::default();
    }

    fn set_session(&mut self, user: User, token: String) {
        self.state.user = Some(user);
        self.state.token = Some(token);
        self.state.is_authenticated = true;
        self.state.login_attempted = true;
        self.state.error = None;
    }

    fn persist_credential(&self) {
        if let (Some(storage), Some(user), Some(token)) =
            (&self.storage, &self.state.user, &self.state.token)
        {
            let credential = Credential::new(token.clone(), user.clone());
            if let Err(err) = storage.save(&credential) {
                tracing::warn!(error = %err, "Failed to persist credential");
            }
        }
    }

    fn drop_credential(&self) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.delete() {
                tracing::warn!(error = %err, "Failed to delete credential");
            }
        }
    }
}

impl<G: AuthApi + Send + Sync> AuthStore<G> {
    /// POST /auth/login; the gateway installs the returned bearer token
    pub async fn login(&mut self, request: &LoginRequest) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.login(request).await;
        self.state.loading = false;
        self.state.login_attempted = true;

        match result {
            Ok(session) => {
                tracing::debug!(email = %session.user.email, "Logged in");
                self.set_session(session.user, session.token);
                self.persist_credential();
                true
            }
            Err(err) => {
                self.state.is_authenticated = false;
                self.state.error = Some(err.user_message());
                false
            }
        }
    }

    /// POST /auth/register; a successful registration signs the user in
    pub async fn register(&mut self, request: &RegisterRequest) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.register(request).await;
        self.state.loading = false;

        match result {
            Ok(session) => {
                tracing::debug!(email = %session.user.email, "Registered");
                self.set_session(session.user, session.token);
                self.persist_credential();
                true
            }
            Err(err) => {
                self.state.is_authenticated = false;
                self.state.error = Some(err.user_message());
                false
            }
        }
    }

    /// GET /auth/profile; failure tears the session down without storing
    /// an error (the caller lands on the login screen either way)
    pub async fn fetch_profile(&mut self) {
        self.state.loading = true;

        match self.gateway.fetch_profile().await {
            Ok(user) => {
                self.state.user = Some(user);
                self.state.is_authenticated = true;
            }
            Err(_) => {
                self.state.user = None;
                self.state.token = None;
                self.state.is_authenticated = false;
            }
        }
        self.state.login_attempted = true;
        self.state.loading = false;
    }

    /// Restore a persisted session
    ///
    /// Loads the stored credential, reinstalls its token on the gateway,
    /// and confirms it against the profile endpoint. Resolves to
    /// unauthenticated, without an error, when any step fails; sets
    /// `login_attempted` either way.
    pub async fn restore_session(&mut self) {
        self.state.loading = true;

        let credential = self
            .storage
            .as_ref()
            .and_then(|storage| storage.load())
            .filter(|credential| !credential.is_expired());

        let Some(credential) = credential else {
            self.drop_credential();
            self.state.is_authenticated = false;
            self.state.login_attempted = true;
            self.state.loading = false;
            return;
        };

        self.gateway.install_token(&credential.token);

        match self.gateway.fetch_profile().await {
            Ok(user) => {
                self.set_session(user, credential.token);
            }
            Err(err) => {
                tracing::debug!(error = %err, "Session restore failed");
                self.drop_credential();
                self.state.user = None;
                self.state.token = None;
                self.state.is_authenticated = false;
            }
        }
        self.state.login_attempted = true;
        self.state.loading = false;
    }

    /// POST /auth/logout; local state clears even when the call fails
    pub async fn logout(&mut self) {
        if let Err(err) = self.gateway.logout().await {
            tracing::debug!(error = %err, "Logout request failed, clearing locally");
        }
        self.drop_credential();
        self.clear_auth();
        self.state.login_attempted = true;
    }

    /// PUT /auth/change-password
    pub async fn change_password(&mut self, request: &ChangePasswordRequest) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.change_password(request).await;
        self.state.loading = false;

        match result {
            Ok(_message) => true,
            Err(err) => {
                self.state.error = Some(err.user_message());
                false
            }
        }
    }

    /// PUT /users/profile (own profile)
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.update_profile(update).await;
        self.state.loading = false;

        match result {
            Ok(user) => {
                self.state.user = Some(user);
                true
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
                false
            }
        }
    }

    /// Fold a gateway 401-invalidation into cleared auth state
    ///
    /// Returns true when a sign-out happened; the caller should then also
    /// tear down the dependent slices (the cart in particular).
    pub fn sync_session(&mut self) -> bool {
        if self.state.is_authenticated && self.gateway.session_invalidated() {
            tracing::debug!("Session invalidated by gateway, clearing auth state");
            self.drop_credential();
            self.clear_auth();
            self.state.login_attempted = true;
            return true;
        }
        false
    }
}
