// apps/catalog_api/src/db/products.rs

use async_trait::async_trait;
use catalog::{AppType, NewProduct, Product, ProductFilter, ProductPatch, ProductRepository, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = "id, name, description, price, image, category, app_type, in_stock, created_at, updated_at";

#[derive(Debug, Clone, FromRow)]
struct DbProduct {
  id: Uuid,
  name: String,
  description: Option<String>,
  price: f64,
  image: Option<String>,
  category: Option<String>,
  app_type: Option<i32>,
  in_stock: bool,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<DbProduct> for Product {
  type Error = StoreError;

  fn try_from(row: DbProduct) -> Result<Self, Self::Error> {
    let app_type = row
      .app_type
      .map(|raw| AppType::try_from(i64::from(raw)))
      .transpose()
      .map_err(|e| StoreError::Unexpected(anyhow::anyhow!("product {} has invalid app_type: {}", row.id, e)))?;
    Ok(Product {
      id: row.id,
      name: row.name,
      description: row.description,
      price: row.price,
      image: row.image,
      category: row.category,
      app_type,
      in_stock: row.in_stock,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

fn db_error(err: sqlx::Error) -> StoreError {
  StoreError::Unexpected(anyhow::Error::new(err))
}

fn not_found(id: Uuid) -> StoreError {
  StoreError::NotFound(format!("product {}", id))
}

/// Products stored in the `products` table.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  async fn list(&self, filter: ProductFilter) -> StoreResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, DbProduct>(&format!(
      "SELECT {PRODUCT_COLUMNS} FROM products WHERE ($1::INTEGER IS NULL OR app_type = $1) ORDER BY created_at DESC, id DESC"
    ))
    .bind(filter.app_type.map(AppType::as_i32))
    .fetch_all(&self.pool)
    .await
    .map_err(db_error)?;
    rows.into_iter().map(Product::try_from).collect()
  }

  async fn get(&self, id: Uuid) -> StoreResult<Product> {
    let row = sqlx::query_as::<_, DbProduct>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(db_error)?;
    match row {
      Some(row) => row.try_into(),
      None => Err(not_found(id)),
    }
  }

  async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
    let now = Utc::now();
    // Both timestamps come from the same bind so a fresh row always has created_at == updated_at.
    let row = sqlx::query_as::<_, DbProduct>(&format!(
      "INSERT INTO products (id, name, description, price, image, category, app_type, in_stock, created_at, updated_at)
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
       RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.image)
    .bind(&product.category)
    .bind(product.app_type.map(AppType::as_i32))
    .bind(product.in_stock)
    .bind(now)
    .fetch_one(&self.pool)
    .await
    .map_err(db_error)?;
    row.try_into()
  }

  async fn update(&self, id: Uuid, patch: ProductPatch) -> StoreResult<Product> {
    let mut tx = self.pool.begin().await.map_err(db_error)?;

    let current = sqlx::query_as::<_, DbProduct>(&format!(
      "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(db_error)?;
    let mut product = match current {
      Some(row) => Product::try_from(row)?,
      None => return Err(not_found(id)),
    };
    patch.apply(&mut product, Utc::now());

    let row = sqlx::query_as::<_, DbProduct>(&format!(
      "UPDATE products
       SET name = $1, description = $2, price = $3, image = $4, category = $5, app_type = $6, in_stock = $7, updated_at = $8
       WHERE id = $9
       RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.image)
    .bind(&product.category)
    .bind(product.app_type.map(AppType::as_i32))
    .bind(product.in_stock)
    .bind(product.updated_at)
    .bind(id)
    .fetch_one(&mut *tx)
    .await
    .map_err(db_error)?;

    tx.commit().await.map_err(db_error)?;
    row.try_into()
  }

  async fn delete(&self, id: Uuid) -> StoreResult<()> {
    let removed = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(db_error)?;
    if removed.rows_affected() == 0 {
      return Err(not_found(id));
    }
    Ok(())
  }

  async fn clear(&self) -> StoreResult<u64> {
    let removed = sqlx::query("DELETE FROM products")
      .execute(&self.pool)
      .await
      .map_err(db_error)?;
    Ok(removed.rows_affected())
  }

  async fn health_check(&self) -> StoreResult<()> {
    sqlx::query("SELECT 1").execute(&self.pool).await.map_err(db_error)?;
    Ok(())
  }

  fn backend_name(&self) -> &'static str {
    "postgres"
  }
}
