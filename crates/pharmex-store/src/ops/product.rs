//! # Product Operations
//!
//! Catalog reads for the customer pages and CRUD for the admin inventory
//! page.
//!
//! ## Catalog Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Product Browse Flow                              │
//! │                                                                     │
//! │  User types "ibu", picks "Pain Relief", sorts by price              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  search_products(catalog, ProductFilter { .. })                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  case-insensitive name/description match                            │
//! │    + category equality + price range                                │
//! │    + sort (name or price, asc/desc)                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Vec<ProductDto> rendered as the product grid                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::state::CatalogState;
use pharmex_core::validation::{
    validate_category, validate_price_cents, validate_product_name, validate_search_query,
    validate_stock,
};
use pharmex_core::Product;

// =============================================================================
// DTOs
// =============================================================================

/// Product DTO (Data Transfer Object) for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub stock: i64,
    pub image_url: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            description: p.description,
            category: p.category,
            price_cents: p.price_cents,
            stock: p.stock,
            image_url: p.image_url,
        }
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub stock: i64,
    pub image_url: String,
}

/// Partial-update payload for a product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i64>,
    pub image_url: Option<String>,
}

/// Sort orders offered by the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

/// Search/filter parameters for the product grid.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive match against name and description.
    pub query: String,
    /// Exact category match; `None` means all categories.
    pub category: Option<String>,
    /// Inclusive lower price bound in cents.
    pub price_min_cents: Option<i64>,
    /// Inclusive upper price bound in cents.
    pub price_max_cents: Option<i64>,
    /// Sort order applied after filtering.
    pub sort: ProductSort,
}

// =============================================================================
// Admin CRUD
// =============================================================================

/// Creates a product and appends it to the catalog.
///
/// ## Arguments
/// * `input` - Validated name/category/price/stock plus description and image
///
/// ## Returns
/// The created product with its assigned UUID and timestamps.
pub fn create_product(catalog: &CatalogState, input: NewProduct) -> StoreResult<Product> {
    debug!(name = %input.name, "create_product");

    validate_product_name(&input.name)?;
    validate_category(&input.category)?;
    validate_price_cents(input.price_cents)?;
    validate_stock(input.stock)?;

    let now = Utc::now();
    let product = Product {
        id: Uuid::new_v4().to_string(),
        name: input.name.trim().to_string(),
        description: input.description,
        category: input.category.trim().to_string(),
        price_cents: input.price_cents,
        stock: input.stock,
        image_url: input.image_url,
        created_at: now,
        updated_at: now,
    };

    catalog.with_products_mut(|products| products.push(product.clone()));

    info!(id = %product.id, name = %product.name, "Product added");
    Ok(product)
}

/// Applies a partial update to a product.
///
/// ## Behavior
/// - `None` fields are left unchanged
/// - `updated_at` is bumped on success
pub fn update_product(
    catalog: &CatalogState,
    id: &str,
    changes: ProductChanges,
) -> StoreResult<Product> {
    debug!(id = %id, "update_product");

    if let Some(name) = &changes.name {
        validate_product_name(name)?;
    }
    if let Some(category) = &changes.category {
        validate_category(category)?;
    }
    if let Some(price) = changes.price_cents {
        validate_price_cents(price)?;
    }
    if let Some(stock) = changes.stock {
        validate_stock(stock)?;
    }

    let updated = catalog.with_products_mut(|products| {
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        if let Some(name) = changes.name {
            product.name = name.trim().to_string();
        }
        if let Some(description) = changes.description {
            product.description = description;
        }
        if let Some(category) = changes.category {
            product.category = category.trim().to_string();
        }
        if let Some(price) = changes.price_cents {
            product.price_cents = price;
        }
        if let Some(stock) = changes.stock {
            product.stock = stock;
        }
        if let Some(image_url) = changes.image_url {
            product.image_url = image_url;
        }
        product.updated_at = Utc::now();

        Ok::<Product, StoreError>(product.clone())
    })?;

    info!(id = %updated.id, name = %updated.name, "Product updated");
    Ok(updated)
}

/// Deletes a product from the catalog.
///
/// Existing order lines are unaffected: they carry name/price snapshots.
pub fn delete_product(catalog: &CatalogState, id: &str) -> StoreResult<()> {
    debug!(id = %id, "delete_product");

    let removed = catalog.with_products_mut(|products| {
        let initial_len = products.len();
        products.retain(|p| p.id != id);
        products.len() != initial_len
    });

    if !removed {
        return Err(StoreError::not_found("Product", id));
    }

    info!(id = %id, "Product deleted");
    Ok(())
}

// =============================================================================
// Catalog Queries
// =============================================================================

/// Gets a single product by its UUID.
pub fn get_product(catalog: &CatalogState, id: &str) -> StoreResult<Product> {
    catalog
        .with_products(|products| products.iter().find(|p| p.id == id).cloned())
        .ok_or_else(|| StoreError::not_found("Product", id))
}

/// Lists all products in catalog order.
pub fn list_products(catalog: &CatalogState) -> Vec<ProductDto> {
    catalog.with_products(|products| {
        products.iter().cloned().map(ProductDto::from).collect()
    })
}

/// Searches the catalog with the grid's filter and sort parameters.
pub fn search_products(catalog: &CatalogState, filter: &ProductFilter) -> StoreResult<Vec<ProductDto>> {
    let query = validate_search_query(&filter.query)?.to_lowercase();
    debug!(query = %query, category = ?filter.category, "search_products");

    let mut matches: Vec<Product> = catalog.with_products(|products| {
        products
            .iter()
            .filter(|p| {
                let matches_query = query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query);

                let matches_category = filter
                    .category
                    .as_ref()
                    .map_or(true, |c| &p.category == c);

                let matches_price = filter
                    .price_min_cents
                    .map_or(true, |min| p.price_cents >= min)
                    && filter
                        .price_max_cents
                        .map_or(true, |max| p.price_cents <= max);

                matches_query && matches_category && matches_price
            })
            .cloned()
            .collect()
    });

    match filter.sort {
        ProductSort::NameAsc => matches.sort_by(|a, b| a.name.cmp(&b.name)),
        ProductSort::NameDesc => matches.sort_by(|a, b| b.name.cmp(&a.name)),
        ProductSort::PriceAsc => matches.sort_by_key(|p| p.price_cents),
        ProductSort::PriceDesc => matches.sort_by_key(|p| std::cmp::Reverse(p.price_cents)),
    }

    Ok(matches.into_iter().map(ProductDto::from).collect())
}

/// Lists the distinct categories present in the catalog, sorted.
pub fn list_categories(catalog: &CatalogState) -> Vec<String> {
    let mut categories: Vec<String> = catalog.with_products(|products| {
        products.iter().map(|p| p.category.clone()).collect()
    });
    categories.sort();
    categories.dedup();
    categories
}

/// Lists products at or below the given stock threshold.
pub fn low_stock_products(catalog: &CatalogState, threshold: i64) -> Vec<ProductDto> {
    catalog.with_products(|products| {
        products
            .iter()
            .filter(|p| p.is_low_stock(threshold))
            .cloned()
            .map(ProductDto::from)
            .collect()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
