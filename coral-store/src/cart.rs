//! Cart engine
//!
//! The cart is the one place where the client mutates state before the
//! server confirms. Quantity updates and removals apply optimistically and
//! reconcile by refetch rather than field-level rollback: the local phase
//! is a pure, synchronous transition that always succeeds, and the remote
//! phase either confirms it or leaves the local copy divergent until the
//! caller runs [`CartStore::fetch_cart`].
//!
//! `totalItems` and `totalAmount` are derived fields, recomputed
//! synchronously after every items change and never trusted from the
//! server copy.

use coral_client::CartApi;
use shared::models::cart::{Cart, CartItem};
use shared::response::{PageQuery, Pagination};

use crate::money::format_amount;

/// Transient status of the most recent cart mutation
///
/// `idle → Adding|Updating|Removing|Clearing →
/// Added|Updated|Removed|Cleared|Error → idle`, where idle is `None` and
/// re-entry happens only through [`CartStore::clear_last_action`]. UI
/// feedback only; carries no correctness guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Adding,
    Added,
    Updating,
    Updated,
    Removing,
    Removed,
    Clearing,
    Cleared,
    Error,
}

/// Cart slice of the panel state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub cart: Option<Cart>,
    pub all_carts: Vec<Cart>,
    pub all_carts_pagination: Option<Pagination>,
    pub loading: bool,
    pub admin_loading: bool,
    pub error: Option<String>,
    pub admin_error: Option<String>,
    pub last_action: Option<CartAction>,
}

/// Recompute `totalItems` and `totalAmount` from the items list
///
/// Pure: the same items always yield the same totals and the input is left
/// untouched. An empty items list yields `0` / `"0.00"`.
pub fn calculate_cart_totals(cart: &Cart) -> Cart {
    let total_items: u32 = cart.items.iter().map(|item| item.quantity).sum();
    let total_amount: f64 = cart.items.iter().map(|item| item.subtotal).sum();

    Cart {
        total_items,
        total_amount: format_amount(total_amount),
        ..cart.clone()
    }
}

/// Set an item's quantity, recompute its subtotal, and recompute totals
///
/// The local mutation primitive behind the optimistic update path. An
/// unknown item id returns the cart unchanged.
pub fn optimistic_update_quantity(cart: &Cart, item_id: i64, quantity: u32) -> Cart {
    let mut updated = cart.clone();
    match updated.items.iter_mut().find(|item| item.id == item_id) {
        Some(item) => {
            item.quantity = quantity;
            item.subtotal = item.product.price * f64::from(quantity);
            calculate_cart_totals(&updated)
        }
        None => updated,
    }
}

/// Drop an item and recompute totals from the remaining lines
pub fn optimistic_remove_item(cart: &Cart, item_id: i64) -> Cart {
    let mut updated = cart.clone();
    updated.items.retain(|item| item.id != item_id);
    calculate_cart_totals(&updated)
}

/// Owner of the cart state and its gateway-backed operations
///
/// Methods take `&mut self`, so no two mutations to the same cart
/// interleave; the only suspension points are the gateway calls, and the
/// optimistic reducers run synchronously before them. Operations store
/// failure messages instead of returning errors; mutations report success
/// as `bool` so callers know when to re-sync.
#[derive(Debug)]
pub struct CartStore<G> {
    gateway: G,
    state: CartState,
}

impl<G> CartStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: CartState::default(),
        }
    }

    // ========== Selectors ==========

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn cart(&self) -> Option<&Cart> {
        self.state.cart.as_ref()
    }

    pub fn items(&self) -> &[CartItem] {
        self.state
            .cart
            .as_ref()
            .map(|cart| cart.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_items(&self) -> u32 {
        self.state
            .cart
            .as_ref()
            .map(|cart| cart.total_items)
            .unwrap_or(0)
    }

    pub fn total_amount(&self) -> String {
        self.state
            .cart
            .as_ref()
            .map(|cart| cart.total_amount.clone())
            .unwrap_or_else(|| "0.00".to_string())
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn last_action(&self) -> Option<CartAction> {
        self.state.last_action
    }

    pub fn all_carts(&self) -> &[Cart] {
        &self.state.all_carts
    }

    pub fn all_carts_pagination(&self) -> Option<&Pagination> {
        self.state.all_carts_pagination.as_ref()
    }

    pub fn admin_loading(&self) -> bool {
        self.state.admin_loading
    }

    pub fn admin_error(&self) -> Option<&str> {
        self.state.admin_error.as_deref()
    }

    // ========== Local reducers ==========

    /// Clear both error fields
    pub fn clear_error(&mut self) {
        self.state.error = None;
        self.state.admin_error = None;
    }

    /// Return `last_action` to idle
    pub fn clear_last_action(&mut self) {
        self.state.last_action = None;
    }

    /// Sign-out teardown: drop the cart and any transient status
    pub fn clear_cart_state(&mut self) {
        self.state.cart = None;
        self.state.error = None;
        self.state.last_action = None;
    }
}

impl<G: CartApi + Send + Sync> CartStore<G> {
    /// Replace the local cart with the server's authoritative copy
    ///
    /// This is also the reconciliation path after a failed optimistic
    /// edit. On failure the previously-loaded cart stays available.
    pub async fn fetch_cart(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.gateway.fetch_cart().await {
            Ok(cart) => {
                let cart = calculate_cart_totals(&cart);
                tracing::debug!(items = cart.items.len(), "Cart fetched");
                self.state.cart = Some(cart);
                self.state.error = None;
            }
            Err(err) => {
                tracing::debug!(error = %err, "Cart fetch failed");
                self.state.error = Some(err.user_message());
            }
        }
        self.state.loading = false;
    }

    /// Send an add request for a product
    ///
    /// The returned line item is not merged into local state: writes that
    /// change the cart's shape reconcile by refetch, since the server may
    /// coalesce quantities into a pre-existing line.
    pub async fn add_to_cart(&mut self, product_id: i64, quantity: u32) -> bool {
        self.state.loading = true;
        self.state.error = None;
        self.state.last_action = Some(CartAction::Adding);

        let result = self.gateway.add_to_cart(product_id, quantity).await;
        self.state.loading = false;

        match result {
            Ok(added) => {
                tracing::debug!(product_id, quantity, message = %added.message, "Added to cart");
                self.state.last_action = Some(CartAction::Added);
                self.state.error = None;
                true
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
                self.state.last_action = Some(CartAction::Error);
                false
            }
        }
    }

    /// Optimistic quantity update
    ///
    /// The matching local item changes before the network call resolves.
    /// On success the requested quantity is re-applied (the response
    /// carries no item payload, so the server's view is not echoed back);
    /// on failure the local value stays divergent until the caller runs
    /// [`fetch_cart`](Self::fetch_cart). A quantity of zero becomes a
    /// removal.
    pub async fn update_cart_item(&mut self, item_id: i64, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_cart_item(item_id).await;
        }

        if let Some(cart) = &self.state.cart {
            self.state.cart = Some(optimistic_update_quantity(cart, item_id, quantity));
        }

        self.state.loading = true;
        self.state.error = None;
        self.state.last_action = Some(CartAction::Updating);

        let result = self.gateway.update_cart_item(item_id, quantity).await;
        self.state.loading = false;

        match result {
            Ok(_message) => {
                // Re-apply the request parameters: a later optimistic edit
                // may have run while this call was in flight.
                if let Some(cart) = &self.state.cart {
                    self.state.cart = Some(optimistic_update_quantity(cart, item_id, quantity));
                }
                self.state.last_action = Some(CartAction::Updated);
                self.state.error = None;
                true
            }
            Err(err) => {
                tracing::debug!(item_id, error = %err, "Cart item update failed");
                self.state.error = Some(err.user_message());
                self.state.last_action = Some(CartAction::Error);
                false
            }
        }
    }

    /// Optimistic removal; reconciled the same way as updates
    pub async fn remove_cart_item(&mut self, item_id: i64) -> bool {
        if let Some(cart) = &self.state.cart {
            self.state.cart = Some(optimistic_remove_item(cart, item_id));
        }

        self.state.loading = true;
        self.state.error = None;
        self.state.last_action = Some(CartAction::Removing);

        let result = self.gateway.remove_cart_item(item_id).await;
        self.state.loading = false;

        match result {
            Ok(_message) => {
                if let Some(cart) = &self.state.cart {
                    self.state.cart = Some(optimistic_remove_item(cart, item_id));
                }
                self.state.last_action = Some(CartAction::Removed);
                self.state.error = None;
                true
            }
            Err(err) => {
                tracing::debug!(item_id, error = %err, "Cart item removal failed");
                self.state.error = Some(err.user_message());
                self.state.last_action = Some(CartAction::Error);
                false
            }
        }
    }

    /// Clear the cart
    ///
    /// Not optimistic: items and totals change only after the server
    /// confirms.
    pub async fn clear_cart(&mut self) -> bool {
        self.state.loading = true;
        self.state.error = None;
        self.state.last_action = Some(CartAction::Clearing);

        let result = self.gateway.clear_cart().await;
        self.state.loading = false;

        match result {
            Ok(_message) => {
                let mut cleared = self.state.cart.take().unwrap_or_else(Cart::empty);
                cleared.items.clear();
                cleared.total_items = 0;
                cleared.total_amount = "0.00".to_string();
                self.state.cart = Some(cleared);
                self.state.last_action = Some(CartAction::Cleared);
                self.state.error = None;
                true
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
                self.state.last_action = Some(CartAction::Error);
                false
            }
        }
    }

    /// Super-admin listing of every user's cart
    pub async fn fetch_all_carts(&mut self, query: PageQuery) {
        self.state.admin_loading = true;
        self.state.admin_error = None;

        match self.gateway.fetch_all_carts(query).await {
            Ok(page) => {
                self.state.all_carts = page.carts;
                self.state.all_carts_pagination = Some(page.pagination);
                self.state.admin_error = None;
            }
            Err(err) => {
                self.state.admin_error = Some(err.user_message());
            }
        }
        self.state.admin_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::cart::ProductSnapshot;

    fn item(id: i64, quantity: u32, price: f64) -> CartItem {
        CartItem {
            id,
            quantity,
            product: ProductSnapshot {
                id: id * 100,
                name: format!("Product {id}"),
                price,
                description: None,
            },
            subtotal: price * f64::from(quantity),
        }
    }

    fn cart_with(items: Vec<CartItem>) -> Cart {
        calculate_cart_totals(&Cart {
            id: Some(1),
            items,
            total_items: 0,
            total_amount: String::new(),
        })
    }

    #[test]
    fn totals_match_items() {
        let cart = cart_with(vec![item(1, 2, 5.0), item(2, 1, 7.5)]);
        assert_eq!(cart.total_items, 3);
        assert_eq!(cart.total_amount, "17.50");
    }

    #[test]
    fn totals_empty_cart() {
        let cart = cart_with(Vec::new());
        assert_eq!(cart.total_items, 0);
        assert_eq!(cart.total_amount, "0.00");
    }

    #[test]
    fn totals_are_deterministic() {
        let cart = cart_with(vec![item(1, 3, 2.25), item(2, 4, 0.99)]);
        let once = calculate_cart_totals(&cart);
        let twice = calculate_cart_totals(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn totals_do_not_mutate_input() {
        let cart = cart_with(vec![item(1, 2, 5.0)]);
        let before = cart.clone();
        let _ = calculate_cart_totals(&cart);
        assert_eq!(cart, before);
    }

    #[test]
    fn optimistic_update_recomputes_subtotal() {
        let cart = cart_with(vec![item(1, 2, 5.0)]);
        let updated = optimistic_update_quantity(&cart, 1, 5);

        assert_eq!(updated.items[0].quantity, 5);
        assert!((updated.items[0].subtotal - 25.0).abs() < f64::EPSILON);
        assert_eq!(updated.total_items, 5);
        assert_eq!(updated.total_amount, "25.00");
    }

    #[test]
    fn optimistic_update_unknown_item_is_noop() {
        let cart = cart_with(vec![item(1, 2, 5.0)]);
        let updated = optimistic_update_quantity(&cart, 99, 5);
        assert_eq!(updated, cart);
    }

    #[test]
    fn optimistic_remove_recomputes_from_remaining() {
        let cart = cart_with(vec![item(1, 2, 5.0), item(2, 1, 7.5)]);
        let updated = optimistic_remove_item(&cart, 1);

        assert_eq!(updated.items.len(), 1);
        assert_eq!(updated.items[0].id, 2);
        assert_eq!(updated.total_items, 1);
        assert_eq!(updated.total_amount, "7.50");
    }

    #[test]
    fn optimistic_remove_last_item_zeroes_totals() {
        let cart = cart_with(vec![item(1, 2, 5.0)]);
        let updated = optimistic_remove_item(&cart, 1);

        assert!(updated.items.is_empty());
        assert_eq!(updated.total_items, 0);
        assert_eq!(updated.total_amount, "0.00");
    }
}
