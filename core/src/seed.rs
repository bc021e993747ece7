// catalog/src/seed.rs

//! Demo catalog used to populate an empty store: four products per storefront.

use crate::model::{AppType, NewProduct};

fn demo(
  name: &str,
  description: &str,
  price: f64,
  image: &str,
  category: &str,
  app_type: AppType,
  in_stock: bool,
) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    description: Some(description.to_string()),
    price,
    image: Some(image.to_string()),
    category: Some(category.to_string()),
    app_type: Some(app_type),
    in_stock,
  }
}

pub fn demo_catalog() -> Vec<NewProduct> {
  vec![
    demo(
      "Wireless Headphones",
      "High-quality wireless headphones with noise cancellation",
      199.99,
      "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
      "Electronics",
      AppType::Web1,
      true,
    ),
    demo(
      "Smart Watch",
      "Feature-rich smartwatch with fitness tracking",
      299.99,
      "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
      "Electronics",
      AppType::Web1,
      true,
    ),
    demo(
      "Laptop Stand",
      "Ergonomic aluminum laptop stand for better posture",
      49.99,
      "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=500",
      "Accessories",
      AppType::Web1,
      true,
    ),
    demo(
      "Mechanical Keyboard",
      "RGB backlit mechanical keyboard with blue switches",
      129.99,
      "https://images.unsplash.com/photo-1587829741301-dc528b74c769?w=500",
      "Accessories",
      AppType::Web1,
      true,
    ),
    demo(
      "USB-C Hub",
      "Multi-port USB-C hub with HDMI, USB 3.0, and SD card reader",
      79.99,
      "https://images.unsplash.com/photo-1625842268584-8f3296236761?w=500",
      "Accessories",
      AppType::Web2,
      false,
    ),
    demo(
      "Wireless Mouse",
      "Ergonomic wireless mouse with long battery life",
      39.99,
      "https://images.unsplash.com/photo-1527814050087-3793815479db?w=500",
      "Accessories",
      AppType::Web2,
      true,
    ),
    demo(
      "Monitor 27\"",
      "4K UHD 27-inch monitor with HDR support",
      449.99,
      "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?w=500",
      "Electronics",
      AppType::Web2,
      true,
    ),
    demo(
      "Webcam HD",
      "1080p HD webcam with built-in microphone",
      89.99,
      "https://images.unsplash.com/photo-1587825147138-346c006b1e98?w=500",
      "Electronics",
      AppType::Web2,
      true,
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn demo_catalog_is_split_evenly_between_storefronts() {
    let catalog = demo_catalog();
    assert_eq!(catalog.len(), 8);
    for app_type in AppType::ALL {
      let count = catalog.iter().filter(|p| p.app_type == Some(app_type)).count();
      assert_eq!(count, 4, "storefront {} should own four products", app_type);
    }
    assert!(catalog.iter().all(|p| p.price >= 0.0 && !p.name.is_empty()));
  }
}
