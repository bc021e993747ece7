// catalog/src/input.rs

//! Request payloads as they arrive from clients, and their validation into
//! `NewProduct` / `ProductPatch`.
//!
//! Payload fields that need to tell "absent" apart from `null` are wrapped in an
//! extra `Option` and deserialized with `present`: `None` means the key was
//! missing, `Some(None)` (or `Some(Value::Null)`) means it was sent as `null`.
//!
//! HTTP bodies go through `from_body`, which only accepts JSON objects. The
//! derived `Deserialize` would also bind a JSON array to the fields by position.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{AppType, NewProduct, ProductFilter, ProductPatch};

pub const NAME_AND_PRICE_REQUIRED: &str = "Name and price are required";
pub const NAME_INVALID: &str = "name must be a non-empty string";
pub const PRICE_INVALID: &str = "price must be a non-negative number";
pub const APP_TYPE_INVALID: &str = "appType must be 1 or 2";
pub const IN_STOCK_INVALID: &str = "inStock must be a boolean";
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  T::deserialize(deserializer).map(Some)
}

fn from_object<T: DeserializeOwned>(body: Value) -> CatalogResult<T> {
  match body {
    Value::Object(_) => serde_json::from_value(body)
      .map_err(|err| CatalogError::validation(format!("Invalid JSON body: {}", err))),
    _ => Err(CatalogError::validation(BODY_NOT_OBJECT)),
  }
}

/// Body of `POST /api/products`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
  #[serde(default, deserialize_with = "present")]
  pub name: Option<Option<String>>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "present")]
  pub price: Option<Value>,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default, deserialize_with = "present")]
  pub app_type: Option<Value>,
  #[serde(default)]
  pub in_stock: Option<bool>,
}

impl CreateProductRequest {
  pub fn from_body(body: Value) -> CatalogResult<Self> {
    from_object(body)
  }

  pub fn validate(self) -> CatalogResult<NewProduct> {
    let name = match self.name {
      Some(Some(name)) if !name.trim().is_empty() => name,
      _ => return Err(CatalogError::validation(NAME_AND_PRICE_REQUIRED)),
    };
    let price = match self.price {
      None | Some(Value::Null) => return Err(CatalogError::validation(NAME_AND_PRICE_REQUIRED)),
      Some(raw) => coerce_price(&raw)?,
    };
    let app_type = self.app_type.as_ref().map(coerce_app_type).transpose()?;

    Ok(NewProduct {
      name,
      description: self.description,
      price,
      image: self.image,
      category: self.category,
      app_type,
      in_stock: self.in_stock.unwrap_or(true),
    })
  }
}

/// Body of `PUT /api/products/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
  #[serde(default, deserialize_with = "present")]
  pub name: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub description: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub price: Option<Value>,
  #[serde(default, deserialize_with = "present")]
  pub image: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub category: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub app_type: Option<Value>,
  #[serde(default, deserialize_with = "present")]
  pub in_stock: Option<Option<bool>>,
}

impl UpdateProductRequest {
  pub fn from_body(body: Value) -> CatalogResult<Self> {
    from_object(body)
  }

  pub fn validate(self) -> CatalogResult<ProductPatch> {
    let name = match self.name {
      None => None,
      Some(Some(name)) if !name.trim().is_empty() => Some(name),
      Some(_) => return Err(CatalogError::validation(NAME_INVALID)),
    };
    let price = self.price.as_ref().map(coerce_price).transpose()?;
    let app_type = self.app_type.as_ref().map(coerce_app_type).transpose()?;
    let in_stock = match self.in_stock {
      None => None,
      Some(Some(flag)) => Some(flag),
      Some(None) => return Err(CatalogError::validation(IN_STOCK_INVALID)),
    };

    Ok(ProductPatch {
      name,
      description: self.description,
      price,
      image: self.image,
      category: self.category,
      app_type,
      in_stock,
    })
  }
}

/// Query string of `GET /api/products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsQuery {
  #[serde(rename = "appType")]
  pub app_type: Option<String>,
}

impl ListProductsQuery {
  /// An empty `appType=` is treated the same as no filter.
  pub fn into_filter(self) -> CatalogResult<ProductFilter> {
    match self.app_type.as_deref().map(str::trim) {
      None | Some("") => Ok(ProductFilter::all()),
      Some(raw) => coerce_app_type(&Value::String(raw.to_string())).map(ProductFilter::for_app),
    }
  }
}

/// Parses a product id taken from a URL path.
///
/// Ids are opaque to clients; a string that is not a valid id cannot name an
/// existing product, so it is reported as not found rather than as bad input.
pub fn parse_product_id(raw: &str) -> CatalogResult<Uuid> {
  Uuid::parse_str(raw.trim()).map_err(|_| CatalogError::product_not_found())
}

/// Accepts JSON numbers and numeric strings.
pub fn coerce_price(value: &Value) -> CatalogResult<f64> {
  let price = match value {
    Value::Number(number) => number.as_f64(),
    Value::String(text) => text.trim().parse::<f64>().ok(),
    _ => None,
  };
  match price {
    // `+ 0.0` folds `-0.0` into `0.0`.
    Some(price) if price.is_finite() && price >= 0.0 => Ok(price + 0.0),
    _ => Err(CatalogError::validation(PRICE_INVALID)),
  }
}

/// Accepts `1`, `2`, `1.0`, `"1"` and `"2"`. Everything else is rejected.
pub fn coerce_app_type(value: &Value) -> CatalogResult<AppType> {
  let raw = match value {
    Value::Number(number) => number
      .as_i64()
      .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
    Value::String(text) => text.trim().parse::<i64>().ok(),
    _ => None,
  };
  raw
    .and_then(|raw| AppType::try_from(raw).ok())
    .ok_or_else(|| CatalogError::validation(APP_TYPE_INVALID))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn create(body: Value) -> CatalogResult<NewProduct> {
    serde_json::from_value::<CreateProductRequest>(body)
      .expect("payload should deserialize")
      .validate()
  }

  fn update(body: Value) -> CatalogResult<ProductPatch> {
    serde_json::from_value::<UpdateProductRequest>(body)
      .expect("payload should deserialize")
      .validate()
  }

  fn validation_message(result: CatalogResult<impl std::fmt::Debug>) -> String {
    match result {
      Err(CatalogError::Validation(message)) => message,
      other => panic!("expected validation error, got {:?}", other),
    }
  }

  #[test]
  fn create_applies_defaults() {
    let product = create(json!({"name": "Mouse", "price": 39.99, "appType": 2})).unwrap();
    assert_eq!(product.name, "Mouse");
    assert_eq!(product.price, 39.99);
    assert_eq!(product.app_type, Some(AppType::Web2));
    assert!(product.in_stock);
    assert_eq!(product.description, None);
  }

  #[test]
  fn create_requires_name_and_price() {
    for body in [
      json!({"price": 10}),
      json!({"name": null, "price": 10}),
      json!({"name": "   ", "price": 10}),
      json!({"name": "Hub"}),
      json!({"name": "Hub", "price": null, "appType": 1}),
    ] {
      assert_eq!(validation_message(create(body)), NAME_AND_PRICE_REQUIRED);
    }
  }

  #[test]
  fn create_coerces_numeric_strings() {
    let product = create(json!({"name": "Hub", "price": "79.99", "appType": "1"})).unwrap();
    assert_eq!(product.price, 79.99);
    assert_eq!(product.app_type, Some(AppType::Web1));
  }

  #[test]
  fn create_rejects_bad_prices() {
    for price in [json!(-1), json!("abc"), json!(true), json!([1]), json!("inf")] {
      let body = json!({"name": "Hub", "price": price});
      assert_eq!(validation_message(create(body)), PRICE_INVALID);
    }
  }

  #[test]
  fn create_and_update_reject_out_of_range_app_type() {
    for app_type in [json!(0), json!(3), json!("x"), json!(1.5), json!(null), json!(false)] {
      let body = json!({"name": "Hub", "price": 1, "appType": app_type.clone()});
      assert_eq!(validation_message(create(body)), APP_TYPE_INVALID);
      assert_eq!(validation_message(update(json!({"appType": app_type}))), APP_TYPE_INVALID);
    }
  }

  #[test]
  fn update_distinguishes_absent_from_null() {
    let patch = update(json!({"description": null, "inStock": false})).unwrap();
    assert_eq!(patch.description, Some(None));
    assert_eq!(patch.image, None);
    assert_eq!(patch.in_stock, Some(false));
    assert_eq!(patch.price, None);
    assert_eq!(patch.name, None);
  }

  #[test]
  fn update_rejects_null_or_empty_name() {
    assert_eq!(validation_message(update(json!({"name": null}))), NAME_INVALID);
    assert_eq!(validation_message(update(json!({"name": ""}))), NAME_INVALID);
    assert_eq!(validation_message(update(json!({"inStock": null}))), IN_STOCK_INVALID);
  }

  #[test]
  fn empty_update_is_an_empty_patch() {
    assert!(update(json!({})).unwrap().is_empty());
  }

  #[test]
  fn list_query_filter() {
    let query = |raw: Option<&str>| ListProductsQuery {
      app_type: raw.map(str::to_string),
    };
    assert_eq!(query(None).into_filter().unwrap(), ProductFilter::all());
    assert_eq!(query(Some("")).into_filter().unwrap(), ProductFilter::all());
    assert_eq!(
      query(Some("2")).into_filter().unwrap(),
      ProductFilter::for_app(AppType::Web2)
    );
    assert_eq!(validation_message(query(Some("7")).into_filter()), APP_TYPE_INVALID);
  }

  #[test]
  fn bodies_must_be_json_objects() {
    for body in [json!(["Hub", null, 5]), json!([]), json!("Hub"), json!(7), json!(null)] {
      assert_eq!(
        validation_message(CreateProductRequest::from_body(body.clone())),
        BODY_NOT_OBJECT
      );
      assert_eq!(validation_message(UpdateProductRequest::from_body(body)), BODY_NOT_OBJECT);
    }
    let message = validation_message(CreateProductRequest::from_body(json!({"name": 42, "price": 1})));
    assert!(message.starts_with("Invalid JSON body"));
    assert!(CreateProductRequest::from_body(json!({"name": "Hub", "price": 1})).is_ok());
  }

  #[test]
  fn negative_zero_price_is_stored_as_zero() {
    let product = create(json!({"name": "Freebie", "price": -0.0})).unwrap();
    assert!(product.price.is_sign_positive());
    let patch = update(json!({"price": "-0"})).unwrap();
    assert!(patch.price.unwrap().is_sign_positive());
  }

  #[test]
  fn malformed_ids_are_not_found() {
    assert!(matches!(parse_product_id("not-a-uuid"), Err(CatalogError::NotFound(_))));
    let id = Uuid::new_v4();
    assert_eq!(parse_product_id(&id.to_string()).unwrap(), id);
  }
}
