//! Cart endpoints

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use serde::Serialize;
use shared::models::cart::{Cart, CartEnvelope, CartItemAdded, CartsPage};
use shared::response::{MessageResponse, PageQuery};

/// Cart slice of the remote API
#[async_trait]
pub trait CartApi {
    async fn fetch_cart(&self) -> ClientResult<Cart>;
    async fn add_to_cart(&self, product_id: i64, quantity: u32) -> ClientResult<CartItemAdded>;
    async fn update_cart_item(&self, item_id: i64, quantity: u32) -> ClientResult<String>;
    async fn remove_cart_item(&self, item_id: i64) -> ClientResult<String>;
    async fn clear_cart(&self) -> ClientResult<String>;
    async fn fetch_all_carts(&self, query: PageQuery) -> ClientResult<CartsPage>;
}

#[derive(Serialize)]
struct AddToCartRequest {
    product_id: i64,
    quantity: u32,
}

#[derive(Serialize)]
struct UpdateQuantityRequest {
    quantity: u32,
}

#[async_trait]
impl CartApi for HttpClient {
    async fn fetch_cart(&self) -> ClientResult<Cart> {
        let envelope: CartEnvelope = self.get("/cart").await?;
        Ok(envelope.cart)
    }

    async fn add_to_cart(&self, product_id: i64, quantity: u32) -> ClientResult<CartItemAdded> {
        self.post(
            "/cart/add",
            &AddToCartRequest {
                product_id,
                quantity,
            },
        )
        .await
    }

    async fn update_cart_item(&self, item_id: i64, quantity: u32) -> ClientResult<String> {
        let response: MessageResponse = self
            .put(
                &format!("/cart/item/{}", item_id),
                &UpdateQuantityRequest { quantity },
            )
            .await?;
        Ok(response.message)
    }

    async fn remove_cart_item(&self, item_id: i64) -> ClientResult<String> {
        let response: MessageResponse = self.delete(&format!("/cart/item/{}", item_id)).await?;
        Ok(response.message)
    }

    async fn clear_cart(&self) -> ClientResult<String> {
        let response: MessageResponse = self.delete("/cart/clear").await?;
        Ok(response.message)
    }

    async fn fetch_all_carts(&self, query: PageQuery) -> ClientResult<CartsPage> {
        self.get_query("/cart/admin/all", &query).await
    }
}

#[async_trait]
impl<T: CartApi + Send + Sync + ?Sized> CartApi for std::sync::Arc<T> {
    async fn fetch_cart(&self) -> ClientResult<Cart> {
        (**self).fetch_cart().await
    }

    async fn add_to_cart(&self, product_id: i64, quantity: u32) -> ClientResult<CartItemAdded> {
        (**self).add_to_cart(product_id, quantity).await
    }

    async fn update_cart_item(&self, item_id: i64, quantity: u32) -> ClientResult<String> {
        (**self).update_cart_item(item_id, quantity).await
    }

    async fn remove_cart_item(&self, item_id: i64) -> ClientResult<String> {
        (**self).remove_cart_item(item_id).await
    }

    async fn clear_cart(&self) -> ClientResult<String> {
        (**self).clear_cart().await
    }

    async fn fetch_all_carts(&self, query: PageQuery) -> ClientResult<CartsPage> {
        (**self).fetch_all_carts(query).await
    }
}
