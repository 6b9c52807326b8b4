use std::sync::Arc;

use sqlx::{Pool, Postgres};
use thiserror::Error;

use crate::drivers::model::Driver;
use crate::shared::database::Database;

#[derive(Debug, Error)]
pub enum DriverRepositoryError {
  #[error("Database error: {0}")]
  DatabaseError(#[from] sqlx::Error),
}

pub trait DriverRepository {
  /// Active drivers, best rated first.
  async fn find_active(&self) -> Result<Vec<Driver>, DriverRepositoryError>;
}

pub struct DriverRepositoryImpl {
  pool: Arc<Pool<Postgres>>,
}

impl DriverRepositoryImpl {
  pub fn new(database: Arc<Database>) -> Self {
    Self {
      pool: database.pool.clone(),
    }
  }
}

// Unrated drivers sort as if they had the default rating they are shown with.
const FIND_ACTIVE_QUERY: &str = r#"
  SELECT id, name, phone, car_model, car_number,
         rating::float8 AS rating,
         latitude::float8 AS latitude,
         longitude::float8 AS longitude,
         is_active
  FROM drivers
  WHERE is_active = true
  ORDER BY COALESCE(NULLIF(rating, 0), 5.0) DESC, id
"#;

impl DriverRepository for DriverRepositoryImpl {
  async fn find_active(&self) -> Result<Vec<Driver>, DriverRepositoryError> {
    let mut connection = self.pool.acquire().await?;
    sqlx::query_as::<_, Driver>(FIND_ACTIVE_QUERY)
      .fetch_all(&mut *connection)
      .await
      .map_err(DriverRepositoryError::from)
  }
}
