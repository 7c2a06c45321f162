// coral-store/tests/products_flow.rs
// Products store CRUD transitions against an in-memory gateway

use async_trait::async_trait;
use coral_client::{ClientError, ClientResult, ProductApi};
use coral_store::products::ProductsStore;
use shared::models::product::{Product, ProductCreate, ProductSearch, ProductUpdate, ProductsPage};
use shared::response::{PageQuery, Pagination};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct FakeProductApi {
    catalog: Mutex<Vec<Product>>,
    next_id: Mutex<i64>,
    fail: Mutex<bool>,
}

impl FakeProductApi {
    fn with_catalog(catalog: Vec<Product>) -> Arc<Self> {
        let next_id = catalog.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Arc::new(Self {
            catalog: Mutex::new(catalog),
            next_id: Mutex::new(next_id),
            fail: Mutex::new(false),
        })
    }

    fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn check(&self, what: &str) -> ClientResult<()> {
        if *self.fail.lock().unwrap() {
            Err(ClientError::Internal(format!("Failed to {}", what)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProductApi for FakeProductApi {
    async fn fetch_products(&self, query: PageQuery) -> ClientResult<ProductsPage> {
        self.check("fetch products")?;
        let catalog = self.catalog.lock().unwrap();
        Ok(ProductsPage {
            products: catalog.clone(),
            pagination: Pagination::new(query.page, query.limit, catalog.len() as u64),
        })
    }

    async fn fetch_product(&self, id: i64) -> ClientResult<Product> {
        self.check("fetch product")?;
        self.catalog
            .lock()
            .unwrap()
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound("Product not found".to_string()))
    }

    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.check("create product")?;
        let mut next_id = self.next_id.lock().unwrap();
        let product = Product {
            id: *next_id,
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price,
            stock: payload.stock,
            image_url: payload.image_url.clone(),
            created_at: None,
        };
        *next_id += 1;
        self.catalog.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: i64, payload: &ProductUpdate) -> ClientResult<Product> {
        self.check("update product")?;
        let mut catalog = self.catalog.lock().unwrap();
        let product = catalog
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or_else(|| ClientError::NotFound("Product not found".to_string()))?;
        if let Some(name) = &payload.name {
            product.name = name.clone();
        }
        if let Some(price) = payload.price {
            product.price = price;
        }
        if let Some(stock) = payload.stock {
            product.stock = stock;
        }
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i64) -> ClientResult<String> {
        self.check("delete product")?;
        self.catalog
            .lock()
            .unwrap()
            .retain(|product| product.id != id);
        Ok("Product deleted".to_string())
    }

    async fn search_products(&self, query: &ProductSearch) -> ClientResult<ProductsPage> {
        self.check("search products")?;
        let needle = query.q.clone().unwrap_or_default().to_lowercase();
        let results: Vec<Product> = self
            .catalog
            .lock()
            .unwrap()
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .filter(|product| query.min_price.is_none_or(|min| product.price >= min))
            .filter(|product| query.max_price.is_none_or(|max| product.price <= max))
            .cloned()
            .collect();
        let total = results.len() as u64;
        Ok(ProductsPage {
            products: results,
            pagination: Pagination::new(query.page, query.limit, total),
        })
    }

    async fn fetch_low_stock(&self, threshold: u32) -> ClientResult<Vec<Product>> {
        self.check("fetch low stock products")?;
        Ok(self
            .catalog
            .lock()
            .unwrap()
            .iter()
            .filter(|product| product.stock <= threshold)
            .cloned()
            .collect())
    }
}

fn product(id: i64, name: &str, price: f64, stock: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: None,
        price,
        stock,
        image_url: None,
        created_at: None,
    }
}

fn seeded() -> Vec<Product> {
    vec![
        product(1, "Espresso Cup", 12.5, 40),
        product(2, "French Press", 29.99, 3),
    ]
}

#[tokio::test]
async fn fetch_fills_list_and_pagination() {
    let fake = FakeProductApi::with_catalog(seeded());
    let mut store = ProductsStore::new(fake);

    store.fetch_products(PageQuery::default()).await;

    assert_eq!(store.products().len(), 2);
    assert_eq!(store.pagination().unwrap().total, 2);
    assert!(store.error().is_none());
}

#[tokio::test]
async fn create_prepends_confirmed_entity() {
    let fake = FakeProductApi::with_catalog(seeded());
    let mut store = ProductsStore::new(fake);

    store.fetch_products(PageQuery::default()).await;

    let payload = ProductCreate {
        name: "Pour Over Kit".to_string(),
        description: None,
        price: 45.0,
        stock: 12,
        image_url: None,
    };
    assert!(store.create_product(&payload).await);

    assert_eq!(store.products().len(), 3);
    assert_eq!(store.products()[0].name, "Pour Over Kit");
}

#[tokio::test]
async fn create_failure_leaves_list_untouched() {
    let fake = FakeProductApi::with_catalog(seeded());
    let mut store = ProductsStore::new(fake.clone());

    store.fetch_products(PageQuery::default()).await;
    fake.set_fail(true);

    let payload = ProductCreate {
        name: "Ghost Product".to_string(),
        description: None,
        price: 1.0,
        stock: 1,
        image_url: None,
    };
    assert!(!store.create_product(&payload).await);

    assert_eq!(store.products().len(), 2);
    assert_eq!(store.error(), Some("Failed to create product"));
}

#[tokio::test]
async fn update_replaces_list_and_current_copies() {
    let fake = FakeProductApi::with_catalog(seeded());
    let mut store = ProductsStore::new(fake);

    store.fetch_products(PageQuery::default()).await;
    store.fetch_product_by_id(2).await;

    let update = ProductUpdate {
        price: Some(24.99),
        ..ProductUpdate::default()
    };
    assert!(store.update_product(2, &update).await);

    let listed = store.products().iter().find(|p| p.id == 2).unwrap();
    assert!((listed.price - 24.99).abs() < f64::EPSILON);
    assert!((store.current_product().unwrap().price - 24.99).abs() < f64::EPSILON);
}

#[tokio::test]
async fn delete_clears_matching_current() {
    let fake = FakeProductApi::with_catalog(seeded());
    let mut store = ProductsStore::new(fake);

    store.fetch_products(PageQuery::default()).await;
    store.fetch_product_by_id(1).await;

    assert!(store.delete_product(1).await);

    assert_eq!(store.products().len(), 1);
    assert!(store.current_product().is_none());
}

#[tokio::test]
async fn search_uses_separate_slice() {
    let fake = FakeProductApi::with_catalog(seeded());
    let mut store = ProductsStore::new(fake);

    store.fetch_products(PageQuery::default()).await;

    let query = ProductSearch {
        q: Some("press".to_string()),
        ..ProductSearch::default()
    };
    store.search_products(&query).await;

    assert_eq!(store.search_results().len(), 1);
    assert_eq!(store.search_results()[0].id, 2);
    // Main list unaffected
    assert_eq!(store.products().len(), 2);

    store.clear_search_results();
    assert!(store.search_results().is_empty());
    assert!(store.search_pagination().is_none());
}

#[tokio::test]
async fn low_stock_respects_threshold() {
    let fake = FakeProductApi::with_catalog(seeded());
    let mut store = ProductsStore::new(fake);

    store.fetch_low_stock(10).await;

    assert_eq!(store.low_stock_products().len(), 1);
    assert_eq!(store.low_stock_products()[0].id, 2);
}
