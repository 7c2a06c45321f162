//! Entity stores for the coral-admin panel
//!
//! Each store owns one entity's client-side state plus the async
//! operations that mutate it through the gateway. Operations never
//! propagate errors past the store boundary: every outcome is folded into
//! state, and callers read results through selector methods.
//!
//! The cart store is the only one that mutates state before server
//! confirmation; see [`cart`] for the optimistic-update protocol.

pub mod auth;
pub mod cart;
pub mod money;
pub mod products;
pub mod users;

pub use auth::{AuthState, AuthStore};
pub use cart::{CartAction, CartState, CartStore};
pub use products::{ProductsState, ProductsStore};
pub use users::{UsersState, UsersStore};

use coral_client::{ClientConfig, CredentialStorage, HttpClient};

/// All entity stores wired to one shared gateway session
///
/// `HttpClient` clones share the bearer token and invalidation flag, so a
/// login through the auth store authenticates every other store's calls,
/// and a 401 observed anywhere signs the whole panel out.
#[derive(Debug)]
pub struct AdminStore {
    pub auth: AuthStore<HttpClient>,
    pub products: ProductsStore<HttpClient>,
    pub cart: CartStore<HttpClient>,
    pub users: UsersStore<HttpClient>,
}

impl AdminStore {
    pub fn new(config: &ClientConfig) -> Self {
        let client = HttpClient::new(config);
        Self {
            auth: AuthStore::new(client.clone()),
            products: ProductsStore::new(client.clone()),
            cart: CartStore::new(client.clone()),
            users: UsersStore::new(client),
        }
    }

    /// Attach credential persistence so sessions survive restarts
    pub fn with_credential_storage(mut self, storage: CredentialStorage) -> Self {
        self.auth = self.auth.with_storage(storage);
        self
    }

    /// Sign-out teardown across slices: clears auth and drops the cart
    pub async fn sign_out(&mut self) {
        self.auth.logout().await;
        self.cart.clear_cart_state();
    }
}
