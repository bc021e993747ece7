// catalog/src/model.rs

//! Data structures for the product catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CatalogError;

/// Storefront that owns a product.
///
/// Serialized as the bare integer (`1` or `2`) so the wire format matches what
/// the storefronts send in `?appType=` and in request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub enum AppType {
  Web1,
  Web2,
}

impl AppType {
  pub const ALL: [AppType; 2] = [AppType::Web1, AppType::Web2];

  pub fn as_i32(self) -> i32 {
    match self {
      AppType::Web1 => 1,
      AppType::Web2 => 2,
    }
  }
}

impl TryFrom<i64> for AppType {
  type Error = CatalogError;

  fn try_from(value: i64) -> Result<Self, Self::Error> {
    match value {
      1 => Ok(AppType::Web1),
      2 => Ok(AppType::Web2),
      other => Err(CatalogError::validation(format!(
        "appType must be 1 or 2 (got {})",
        other
      ))),
    }
  }
}

impl From<AppType> for i32 {
  fn from(app_type: AppType) -> Self {
    app_type.as_i32()
  }
}

impl std::fmt::Display for AppType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_i32())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
  pub image: Option<String>,
  pub category: Option<String>,
  pub app_type: Option<AppType>,
  pub in_stock: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// A validated product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
  pub image: Option<String>,
  pub category: Option<String>,
  pub app_type: Option<AppType>,
  pub in_stock: bool,
}

impl NewProduct {
  /// Materializes the row a store would write, with both timestamps set to `now`.
  pub fn into_product(self, id: Uuid, now: DateTime<Utc>) -> Product {
    Product {
      id,
      name: self.name,
      description: self.description,
      price: self.price,
      image: self.image,
      category: self.category,
      app_type: self.app_type,
      in_stock: self.in_stock,
      created_at: now,
      updated_at: now,
    }
  }
}

/// A validated partial update.
///
/// `None` leaves the field untouched. For nullable columns the inner `Option`
/// is the new value, so `Some(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub description: Option<Option<String>>,
  pub price: Option<f64>,
  pub image: Option<Option<String>>,
  pub category: Option<Option<String>>,
  pub app_type: Option<AppType>,
  pub in_stock: Option<bool>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    self == &ProductPatch::default()
  }

  /// Writes the present fields onto `product` and stamps `updated_at`.
  ///
  /// `updated_at` never moves before `created_at`, even if the wall clock did.
  pub fn apply(self, product: &mut Product, now: DateTime<Utc>) {
    if let Some(name) = self.name {
      product.name = name;
    }
    if let Some(description) = self.description {
      product.description = description;
    }
    if let Some(price) = self.price {
      product.price = price;
    }
    if let Some(image) = self.image {
      product.image = image;
    }
    if let Some(category) = self.category {
      product.category = category;
    }
    if let Some(app_type) = self.app_type {
      product.app_type = Some(app_type);
    }
    if let Some(in_stock) = self.in_stock {
      product.in_stock = in_stock;
    }
    product.updated_at = now.max(product.created_at);
  }
}

/// Visibility filter for listing. An empty filter matches every product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
  pub app_type: Option<AppType>,
}

impl ProductFilter {
  pub fn all() -> Self {
    Self::default()
  }

  pub fn for_app(app_type: AppType) -> Self {
    Self {
      app_type: Some(app_type),
    }
  }

  pub fn matches(&self, product: &Product) -> bool {
    match self.app_type {
      Some(wanted) => product.app_type == Some(wanted),
      None => true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Duration;

  fn sample(app_type: Option<AppType>) -> Product {
    NewProduct {
      name: "Laptop Stand".to_string(),
      description: Some("Aluminum".to_string()),
      price: 49.99,
      image: None,
      category: Some("Accessories".to_string()),
      app_type,
      in_stock: true,
    }
    .into_product(Uuid::new_v4(), Utc::now())
  }

  #[test]
  fn app_type_serializes_as_integer() {
    assert_eq!(serde_json::to_value(AppType::Web2).unwrap(), serde_json::json!(2));
    let parsed: AppType = serde_json::from_value(serde_json::json!(1)).unwrap();
    assert_eq!(parsed, AppType::Web1);
    assert!(serde_json::from_value::<AppType>(serde_json::json!(3)).is_err());
  }

  #[test]
  fn product_uses_camel_case_keys() {
    let product = sample(Some(AppType::Web1));
    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["appType"], 1);
    assert_eq!(json["inStock"], true);
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
    assert!(json["image"].is_null());
  }

  #[test]
  fn patch_only_touches_present_fields() {
    let mut product = sample(Some(AppType::Web1));
    let before = product.clone();
    let later = before.created_at + Duration::seconds(5);

    ProductPatch {
      price: Some(10.0),
      ..Default::default()
    }
    .apply(&mut product, later);

    assert_eq!(product.price, 10.0);
    assert_eq!(product.updated_at, later);
    assert_eq!(product.name, before.name);
    assert_eq!(product.description, before.description);
    assert_eq!(product.category, before.category);
    assert_eq!(product.app_type, before.app_type);
    assert_eq!(product.created_at, before.created_at);
  }

  #[test]
  fn patch_can_clear_nullable_columns() {
    let mut product = sample(None);
    let now = product.created_at;
    ProductPatch {
      description: Some(None),
      ..Default::default()
    }
    .apply(&mut product, now);
    assert_eq!(product.description, None);
  }

  #[test]
  fn patch_never_moves_updated_at_before_created_at() {
    let mut product = sample(None);
    let earlier = product.created_at - Duration::hours(1);
    ProductPatch::default().apply(&mut product, earlier);
    assert_eq!(product.updated_at, product.created_at);
  }

  #[test]
  fn filter_matches_exact_app_type_only() {
    let web1 = sample(Some(AppType::Web1));
    let unassigned = sample(None);
    assert!(ProductFilter::for_app(AppType::Web1).matches(&web1));
    assert!(!ProductFilter::for_app(AppType::Web2).matches(&web1));
    assert!(!ProductFilter::for_app(AppType::Web1).matches(&unassigned));
    assert!(ProductFilter::all().matches(&unassigned));
  }
}
