//! Products store
//!
//! Catalog management state. Unlike the cart, every mutation here waits
//! for the authoritative response before touching local state.

use coral_client::ProductApi;
use shared::models::product::{Product, ProductCreate, ProductSearch, ProductUpdate};
use shared::response::{PageQuery, Pagination};

/// Products slice of the panel state
#[derive(Debug, Clone, Default)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub current_product: Option<Product>,
    pub low_stock_products: Vec<Product>,
    pub pagination: Option<Pagination>,
    pub search_results: Vec<Product>,
    pub search_pagination: Option<Pagination>,
    pub loading: bool,
    pub search_loading: bool,
    pub error: Option<String>,
    pub search_error: Option<String>,
}

/// Owner of the products state and its gateway-backed operations
#[derive(Debug)]
pub struct ProductsStore<G> {
    gateway: G,
    state: ProductsState,
}

impl<G> ProductsStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ProductsState::default(),
        }
    }

    // ========== Selectors ==========

    pub fn state(&self) -> &ProductsState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    pub fn current_product(&self) -> Option<&Product> {
        self.state.current_product.as_ref()
    }

    pub fn low_stock_products(&self) -> &[Product] {
        &self.state.low_stock_products
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.state.pagination.as_ref()
    }

    pub fn search_results(&self) -> &[Product] {
        &self.state.search_results
    }

    pub fn search_pagination(&self) -> Option<&Pagination> {
        self.state.search_pagination.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn search_loading(&self) -> bool {
        self.state.search_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn search_error(&self) -> Option<&str> {
        self.state.search_error.as_deref()
    }

    // ========== Local reducers ==========

    pub fn clear_current_product(&mut self) {
        self.state.current_product = None;
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
        self.state.search_error = None;
    }

    pub fn clear_search_results(&mut self) {
        self.state.search_results.clear();
        self.state.search_pagination = None;
        self.state.search_error = None;
    }
}

impl<G: ProductApi + Send + Sync> ProductsStore<G> {
    /// Load a page of the catalog
    pub async fn fetch_products(&mut self, query: PageQuery) {
        self.state.loading = true;
        self.state.error = None;

        match self.gateway.fetch_products(query).await {
            Ok(page) => {
                tracing::debug!(count = page.products.len(), "Products fetched");
                self.state.products = page.products;
                self.state.pagination = Some(page.pagination);
                self.state.error = None;
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
            }
        }
        self.state.loading = false;
    }

    /// Load one product into `current_product`
    pub async fn fetch_product_by_id(&mut self, id: i64) {
        self.state.loading = true;
        self.state.error = None;

        match self.gateway.fetch_product(id).await {
            Ok(product) => {
                self.state.current_product = Some(product);
                self.state.error = None;
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
            }
        }
        self.state.loading = false;
    }

    /// Create a product; the confirmed entity is prepended to the list
    pub async fn create_product(&mut self, payload: &ProductCreate) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.create_product(payload).await;
        self.state.loading = false;

        match result {
            Ok(product) => {
                tracing::debug!(id = product.id, "Product created");
                self.state.products.insert(0, product);
                self.state.error = None;
                true
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
                false
            }
        }
    }

    /// Update a product; the confirmed entity replaces the list and
    /// `current_product` copies
    pub async fn update_product(&mut self, id: i64, payload: &ProductUpdate) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.update_product(id, payload).await;
        self.state.loading = false;

        match result {
            Ok(product) => {
                if let Some(existing) = self
                    .state
                    .products
                    .iter_mut()
                    .find(|existing| existing.id == product.id)
                {
                    *existing = product.clone();
                }
                if self
                    .state
                    .current_product
                    .as_ref()
                    .is_some_and(|current| current.id == product.id)
                {
                    self.state.current_product = Some(product);
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

    /// Delete a product; removed from the list only after confirmation
    pub async fn delete_product(&mut self, id: i64) -> bool {
        self.state.loading = true;
        self.state.error = None;

        let result = self.gateway.delete_product(id).await;
        self.state.loading = false;

        match result {
            Ok(_message) => {
                self.state.products.retain(|product| product.id != id);
                if self
                    .state
                    .current_product
                    .as_ref()
                    .is_some_and(|current| current.id == id)
                {
                    self.state.current_product = None;
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

    /// Search the catalog into the separate search slice
    pub async fn search_products(&mut self, query: &ProductSearch) {
        self.state.search_loading = true;
        self.state.search_error = None;

        match self.gateway.search_products(query).await {
            Ok(page) => {
                self.state.search_results = page.products;
                self.state.search_pagination = Some(page.pagination);
                self.state.search_error = None;
            }
            Err(err) => {
                self.state.search_error = Some(err.user_message());
            }
        }
        self.state.search_loading = false;
    }

    /// Load products at or below the stock threshold
    pub async fn fetch_low_stock(&mut self, threshold: u32) {
        self.state.loading = true;
        self.state.error = None;

        match self.gateway.fetch_low_stock(threshold).await {
            Ok(products) => {
                self.state.low_stock_products = products;
                self.state.error = None;
            }
            Err(err) => {
                self.state.error = Some(err.user_message());
            }
        }
        self.state.loading = false;
    }
}
