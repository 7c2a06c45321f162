//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::response::Pagination;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    /// Units in stock (non-negative)
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create product payload
///
/// Validation mirrors the admin form rules; call `validate()` before
/// dispatching.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 2, message = "Product name must be at least 2 characters"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = 0.01, max = 999999.99, message = "Price must be a positive number"))]
    pub price: f64,
    #[validate(range(max = 999999, message = "Stock cannot exceed 999,999"))]
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Please enter a valid URL"))]
    pub image_url: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, message = "Product name must be at least 2 characters"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.01, max = 999999.99, message = "Price must be a positive number"))]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 999999, message = "Stock cannot exceed 999,999"))]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Please enter a valid URL"))]
    pub image_url: Option<String>,
}

/// Query string for GET /products/search
#[derive(Debug, Clone, Serialize)]
pub struct ProductSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(rename = "minPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    pub page: u32,
    pub limit: u32,
}

impl Default for ProductSearch {
    fn default() -> Self {
        Self {
            q: None,
            min_price: None,
            max_price: None,
            page: 1,
            limit: 10,
        }
    }
}

/// `{ products, pagination }` envelope from the list and search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// `{ product }` envelope from GET /products/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

/// `{ product, message }` envelope from create/update
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSaved {
    pub product: Product,
    #[serde(default)]
    pub message: String,
}

/// `{ products, threshold }` envelope from the low-stock report
#[derive(Debug, Clone, Deserialize)]
pub struct LowStockPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub threshold: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate as _;

    fn create_payload() -> ProductCreate {
        ProductCreate {
            name: "Espresso Cup".to_string(),
            description: None,
            price: 12.5,
            stock: 40,
            image_url: None,
        }
    }

    #[test]
    fn test_create_payload_valid() {
        assert!(create_payload().validate().is_ok());
    }

    #[test]
    fn test_create_payload_rejects_short_name() {
        let mut payload = create_payload();
        payload.name = "X".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_payload_rejects_non_positive_price() {
        let mut payload = create_payload();
        payload.price = 0.0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_payload_rejects_bad_url() {
        let mut payload = create_payload();
        payload.image_url = Some("not a url".to_string());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_update_payload_skips_absent_fields() {
        let update = ProductUpdate {
            price: Some(9.99),
            ..ProductUpdate::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"price":9.99}"#);
    }
}
