//! Product endpoints

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::models::product::{
    LowStockPage, Product, ProductCreate, ProductEnvelope, ProductSaved, ProductSearch,
    ProductUpdate, ProductsPage,
};
use shared::response::{MessageResponse, PageQuery};

/// Product slice of the remote API
#[async_trait]
pub trait ProductApi {
    async fn fetch_products(&self, query: PageQuery) -> ClientResult<ProductsPage>;
    async fn fetch_product(&self, id: i64) -> ClientResult<Product>;
    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product>;
    async fn update_product(&self, id: i64, payload: &ProductUpdate) -> ClientResult<Product>;
    async fn delete_product(&self, id: i64) -> ClientResult<String>;
    async fn search_products(&self, query: &ProductSearch) -> ClientResult<ProductsPage>;
    async fn fetch_low_stock(&self, threshold: u32) -> ClientResult<Vec<Product>>;
}

#[async_trait]
impl ProductApi for HttpClient {
    async fn fetch_products(&self, query: PageQuery) -> ClientResult<ProductsPage> {
        self.get_query("/products", &query).await
    }

    async fn fetch_product(&self, id: i64) -> ClientResult<Product> {
        let envelope: ProductEnvelope = self.get(&format!("/products/{}", id)).await?;
        Ok(envelope.product)
    }

    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        let saved: ProductSaved = self.post("/products", payload).await?;
        Ok(saved.product)
    }

    async fn update_product(&self, id: i64, payload: &ProductUpdate) -> ClientResult<Product> {
        let saved: ProductSaved = self.put(&format!("/products/{}", id), payload).await?;
        Ok(saved.product)
    }

    async fn delete_product(&self, id: i64) -> ClientResult<String> {
        let response: MessageResponse = self.delete(&format!("/products/{}", id)).await?;
        Ok(response.message)
    }

    async fn search_products(&self, query: &ProductSearch) -> ClientResult<ProductsPage> {
        self.get_query("/products/search", query).await
    }

    async fn fetch_low_stock(&self, threshold: u32) -> ClientResult<Vec<Product>> {
        let page: LowStockPage = self
            .get_query("/products/admin/low-stock", &[("threshold", threshold)])
            .await?;
        Ok(page.products)
    }
}

#[async_trait]
impl<T: ProductApi + Send + Sync + ?Sized> ProductApi for std::sync::Arc<T> {
    async fn fetch_products(&self, query: PageQuery) -> ClientResult<ProductsPage> {
        (**self).fetch_products(query).await
    }

    async fn fetch_product(&self, id: i64) -> ClientResult<Product> {
        (**self).fetch_product(id).await
    }

    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        (**self).create_product(payload).await
    }

    async fn update_product(&self, id: i64, payload: &ProductUpdate) -> ClientResult<Product> {
        (**self).update_product(id, payload).await
    }

    async fn delete_product(&self, id: i64) -> ClientResult<String> {
        (**self).delete_product(id).await
    }

    async fn search_products(&self, query: &ProductSearch) -> ClientResult<ProductsPage> {
        (**self).search_products(query).await
    }

    async fn fetch_low_stock(&self, threshold: u32) -> ClientResult<Vec<Product>> {
        (**self).fetch_low_stock(threshold).await
    }
}
