//! Cart model
//!
//! The cart's `totalItems`/`totalAmount` fields are derived from `items`
//! and recomputed locally after every mutation; the server-sent values are
//! never trusted as-is.

use serde::{Deserialize, Serialize};

use crate::response::Pagination;

/// Read-only product copy embedded in a cart line (not a live join)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One line in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Server-assigned, unique within the cart
    pub id: i64,
    /// Positive while the item exists; zero-or-below becomes removal
    pub quantity: u32,
    pub product: ProductSnapshot,
    /// Always `product.price * quantity`, never mutated independently
    pub subtotal: f64,
}

/// The signed-in user's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Derived: sum of item quantities
    #[serde(default)]
    pub total_items: u32,
    /// Derived: sum of item subtotals, fixed two decimals
    #[serde(default = "zero_amount")]
    pub total_amount: String,
}

fn zero_amount() -> String {
    "0.00".to_string()
}

impl Cart {
    /// Empty cart with zeroed totals
    pub fn empty() -> Self {
        Self {
            id: None,
            items: Vec::new(),
            total_items: 0,
            total_amount: zero_amount(),
        }
    }
}

/// `{ cart }` envelope from GET /cart
#[derive(Debug, Clone, Deserialize)]
pub struct CartEnvelope {
    pub cart: Cart,
}

/// `{ cartItem, message }` envelope from POST /cart/add
#[derive(Debug, Clone, Deserialize)]
pub struct CartItemAdded {
    #[serde(rename = "cartItem")]
    pub cart_item: CartItem,
    pub message: String,
}

/// `{ carts, pagination }` envelope from the super-admin listing
#[derive(Debug, Clone, Deserialize)]
pub struct CartsPage {
    pub carts: Vec<Cart>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_wire_shape() {
        let cart: Cart = serde_json::from_str(
            r#"{
                "id": 7,
                "items": [
                    {
                        "id": 1,
                        "quantity": 2,
                        "product": {"id": 10, "name": "Mug", "price": 5.0},
                        "subtotal": 10.0
                    }
                ],
                "totalItems": 2,
                "totalAmount": "10.00"
            }"#,
        )
        .unwrap();

        assert_eq!(cart.id, Some(7));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_items, 2);
        assert_eq!(cart.total_amount, "10.00");
    }

    #[test]
    fn test_cart_defaults_when_server_omits_totals() {
        let cart: Cart = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(cart.total_items, 0);
        assert_eq!(cart.total_amount, "0.00");
    }

    #[test]
    fn test_cart_item_added_envelope() {
        let added: CartItemAdded = serde_json::from_str(
            r#"{
                "cartItem": {
                    "id": 3,
                    "quantity": 1,
                    "product": {"id": 10, "name": "Mug", "price": 5.0},
                    "subtotal": 5.0
                },
                "message": "Item added to cart"
            }"#,
        )
        .unwrap();
        assert_eq!(added.cart_item.id, 3);
        assert_eq!(added.message, "Item added to cart");
    }
}
