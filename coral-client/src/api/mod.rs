//! Typed API surface grouped by entity
//!
//! Each trait is one entity's slice of the remote API. `HttpClient`
//! implements all of them; the stores stay generic over the traits so
//! tests can substitute in-memory fakes.

mod auth;
mod cart;
mod products;
mod users;

pub use auth::AuthApi;
pub use cart::CartApi;
pub use products::ProductApi;
pub use users::UserApi;
