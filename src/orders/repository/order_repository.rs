use std::sync::Arc;

use sqlx::{Pool, Postgres, QueryBuilder};
use thiserror::Error;

use crate::orders::model::{Order, OrderDetails, COMPLETED, PENDING};
use crate::shared::database::Database;

/// How many orders the listing returns, newest first.
pub const RECENT_ORDERS_LIMIT: i64 = 50;

#[derive(Debug, Error)]
pub enum OrderRepositoryError {
  #[error("Database error: {0}")]
  DatabaseError(#[from] sqlx::Error),
}

pub trait OrderRepository {
  async fn find_one(
    &self,
    id: i32,
  ) -> Result<Option<OrderDetails>, OrderRepositoryError>;
  async fn find_recent(&self) -> Result<Vec<OrderDetails>, OrderRepositoryError>;
  async fn create(
    &self,
    create_order: CreateOrder,
  ) -> Result<Order, OrderRepositoryError>;
  /// Applies `update` to order `id` and returns the number of rows touched.
  async fn update(
    &self,
    id: i32,
    update: OrderUpdate,
  ) -> Result<u64, OrderRepositoryError>;
}

pub struct OrderRepositoryImpl {
  pool: Arc<Pool<Postgres>>,
}

impl OrderRepositoryImpl {
  pub fn new(database: Arc<Database>) -> Self {
    Self {
      pool: database.pool.clone(),
    }
  }
}

const SELECT_ORDER_DETAILS: &str = r#"
  SELECT o.id, o.driver_id, o.passenger_name, o.passenger_phone,
         o.from_address, o.to_address,
         o.from_latitude::float8 AS from_latitude,
         o.from_longitude::float8 AS from_longitude,
         o.to_latitude::float8 AS to_latitude,
         o.to_longitude::float8 AS to_longitude,
         o.price::float8 AS price,
         o.status, o.rating, o.created_at, o.completed_at,
         d.name AS driver_name,
         d.car_model AS driver_car_model,
         d.car_number AS driver_car_number
  FROM orders o
  LEFT JOIN drivers d ON o.driver_id = d.id
"#;

const INSERT_ORDER: &str = r#"
  INSERT INTO orders (
    driver_id, passenger_name, passenger_phone,
    from_address, to_address, from_latitude, from_longitude,
    to_latitude, to_longitude, price, status
  )
  VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
  RETURNING id, driver_id, passenger_name, passenger_phone,
            from_address, to_address,
            from_latitude::float8 AS from_latitude,
            from_longitude::float8 AS from_longitude,
            to_latitude::float8 AS to_latitude,
            to_longitude::float8 AS to_longitude,
            price::float8 AS price,
            status, rating, created_at, completed_at
"#;

impl OrderRepository for OrderRepositoryImpl {
  async fn find_one(
    &self,
    id: i32,
  ) -> Result<Option<OrderDetails>, OrderRepositoryError> {
    let mut connection = self.pool.acquire().await?;
    let query = format!("{} WHERE o.id = $1", SELECT_ORDER_DETAILS);
    sqlx::query_as::<_, OrderDetails>(&query)
      .bind(id)
      .fetch_optional(&mut *connection)
      .await
      .map_err(OrderRepositoryError::from)
  }

  async fn find_recent(&self) -> Result<Vec<OrderDetails>, OrderRepositoryError> {
    let mut connection = self.pool.acquire().await?;
    let query = format!(
      "{} ORDER BY o.created_at DESC, o.id DESC LIMIT $1",
      SELECT_ORDER_DETAILS
    );
    sqlx::query_as::<_, OrderDetails>(&query)
      .bind(RECENT_ORDERS_LIMIT)
      .fetch_all(&mut *connection)
      .await
      .map_err(OrderRepositoryError::from)
  }

  async fn create(
    &self,
    create_order: CreateOrder,
  ) -> Result<Order, OrderRepositoryError> {
    let mut transaction = self.pool.begin().await?;
    let order = sqlx::query_as::<_, Order>(INSERT_ORDER)
      .bind(create_order.driver_id)
      .bind(&create_order.passenger_name)
      .bind(&create_order.passenger_phone)
      .bind(&create_order.from_address)
      .bind(&create_order.to_address)
      .bind(create_order.from_latitude)
      .bind(create_order.from_longitude)
      .bind(create_order.to_latitude)
      .bind(create_order.to_longitude)
      .bind(create_order.price)
      .bind(PENDING)
      .fetch_one(&mut *transaction)
      .await?;
    transaction.commit().await?;
    Ok(order)
  }

  async fn update(
    &self,
    id: i32,
    update: OrderUpdate,
  ) -> Result<u64, OrderRepositoryError> {
    let mut transaction = self.pool.begin().await?;
    let mut query = build_update_query(id, &update);
    let result = query.build().execute(&mut *transaction).await?;
    transaction.commit().await?;
    Ok(result.rows_affected())
  }
}

/// Fields of a new order. The status is not part of it: new orders are
/// always stored as pending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateOrder {
  pub driver_id: Option<i32>,
  pub passenger_name: Option<String>,
  pub passenger_phone: Option<String>,
  pub from_address: Option<String>,
  pub to_address: Option<String>,
  pub from_latitude: Option<f64>,
  pub from_longitude: Option<f64>,
  pub to_latitude: Option<f64>,
  pub to_longitude: Option<f64>,
  pub price: Option<f64>,
}

/// A partial update of an order's mutable columns.
///
/// Only constructible with at least one field set, so an update always
/// produces a non-empty `SET` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
  status: Option<String>,
  rating: Option<i32>,
}

impl OrderUpdate {
  pub fn new(status: Option<String>, rating: Option<i32>) -> Option<Self> {
    if status.is_none() && rating.is_none() {
      return None;
    }
    Some(Self { status, rating })
  }

  pub fn status(&self) -> Option<&str> {
    self.status.as_deref()
  }

  pub fn rating(&self) -> Option<i32> {
    self.rating
  }

  /// Whether applying this update stamps `completed_at`.
  pub fn completes_order(&self) -> bool {
    self.status() == Some(COMPLETED)
  }
}

pub fn build_update_query(
  id: i32,
  update: &OrderUpdate,
) -> QueryBuilder<'static, Postgres> {
  let mut query = QueryBuilder::new("UPDATE orders SET ");
  let mut assignments = query.separated(", ");
  if let Some(status) = &update.status {
    assignments.push("status = ");
    assignments.push_bind_unseparated(status.clone());
  }
  if let Some(rating) = update.rating {
    assignments.push("rating = ");
    assignments.push_bind_unseparated(rating);
  }
  if update.completes_order() {
    assignments.push("completed_at = NOW()");
  }
  query.push(" WHERE id = ");
  query.push_bind(id);
  query
}

#[cfg(test)]
pub mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::RwLock;

  use chrono::Utc;

  use super::*;
  use crate::drivers::model::Driver;
  use crate::helpers::tests::selected_columns;
  use crate::orders::model::AssignedDriver;

  pub struct InMemoryOrderRepository {
    pub orders: RwLock<Vec<Order>>,
    pub drivers: Vec<Driver>,
    pub calls: AtomicUsize,
  }

  impl InMemoryOrderRepository {
    pub fn new() -> Self {
      Self::with_drivers(Vec::new())
    }

    pub fn with_drivers(drivers: Vec<Driver>) -> Self {
      Self {
        orders: RwLock::new(Vec::new()),
        drivers,
        calls: AtomicUsize::new(0),
      }
    }

    pub fn calls(&self) -> usize {
      self.calls.load(Ordering::SeqCst)
    }

    fn details(&self, order: &Order) -> OrderDetails {
      let driver = order
        .driver_id
        .and_then(|id| self.drivers.iter().find(|driver| driver.id == id))
        .map(|driver| AssignedDriver {
          name: driver.name.clone(),
          car_model: driver.car_model.clone(),
          car_number: driver.car_number.clone(),
        });
      OrderDetails {
        order: order.clone(),
        driver,
      }
    }
  }

  impl OrderRepository for InMemoryOrderRepository {
    async fn find_one(
      &self,
      id: i32,
    ) -> Result<Option<OrderDetails>, OrderRepositoryError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      let orders = self.orders.read().unwrap(); // Acquire read lock
      Ok(orders.iter().find(|order| order.id == id).map(|order| self.details(order)))
    }

    async fn find_recent(&self) -> Result<Vec<OrderDetails>, OrderRepositoryError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      let orders = self.orders.read().unwrap(); // Acquire read lock
      let mut recent: Vec<&Order> = orders.iter().collect();
      recent.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
      Ok(
        recent
          .into_iter()
          .take(RECENT_ORDERS_LIMIT as usize)
          .map(|order| self.details(order))
          .collect(),
      )
    }

    async fn create(
      &self,
      create_order: CreateOrder,
    ) -> Result<Order, OrderRepositoryError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      let mut orders = self.orders.write().unwrap(); // Acquire write lock
      let order = Order {
        id: orders.len() as i32 + 1,
        driver_id: create_order.driver_id,
        passenger_name: create_order.passenger_name,
        passenger_phone: create_order.passenger_phone,
        from_address: create_order.from_address,
        to_address: create_order.to_address,
        from_latitude: create_order.from_latitude,
        from_longitude: create_order.from_longitude,
        to_latitude: create_order.to_latitude,
        to_longitude: create_order.to_longitude,
        price: create_order.price,
        status: PENDING.to_string(),
        rating: None,
        created_at: Utc::now(),
        completed_at: None,
      };
      orders.push(order.clone());
      Ok(order)
    }

    async fn update(
      &self,
      id: i32,
      update: OrderUpdate,
    ) -> Result<u64, OrderRepositoryError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      let mut orders = self.orders.write().unwrap(); // Acquire write lock
      let Some(order) = orders.iter_mut().find(|order| order.id == id) else {
        return Ok(0);
      };
      if let Some(status) = update.status() {
        order.status = status.to_string();
      }
      if let Some(rating) = update.rating() {
        order.rating = Some(rating);
      }
      if update.completes_order() {
        order.completed_at = Some(Utc::now());
      }
      Ok(1)
    }
  }

  const ORDER_COLUMNS: [&str; 15] = [
    "id",
    "driver_id",
    "passenger_name",
    "passenger_phone",
    "from_address",
    "to_address",
    "from_latitude",
    "from_longitude",
    "to_latitude",
    "to_longitude",
    "price",
    "status",
    "rating",
    "created_at",
    "completed_at",
  ];

  #[test]
  fn test_select_order_details_columns() {
    let mut expected: Vec<&str> = ORDER_COLUMNS.to_vec();
    expected.extend(["driver_name", "driver_car_model", "driver_car_number"]);

    assert_eq!(selected_columns(SELECT_ORDER_DETAILS), expected);
  }

  #[test]
  fn test_insert_order_returns_order_columns() {
    assert_eq!(selected_columns(INSERT_ORDER), ORDER_COLUMNS.to_vec());
    assert_eq!(INSERT_ORDER.matches('$').count(), 11);
  }

  #[test]
  fn test_order_update_requires_a_field() {
    assert_eq!(OrderUpdate::new(None, None), None);
    assert!(OrderUpdate::new(Some("accepted".to_string()), None).is_some());
    assert!(OrderUpdate::new(None, Some(4)).is_some());
  }

  #[test]
  fn test_order_update_completes_only_on_exact_status() {
    let completed = OrderUpdate::new(Some(COMPLETED.to_string()), None).unwrap();
    let shouting = OrderUpdate::new(Some("COMPLETED".to_string()), None).unwrap();
    let rated = OrderUpdate::new(None, Some(5)).unwrap();

    assert!(completed.completes_order());
    assert!(!shouting.completes_order());
    assert!(!rated.completes_order());
  }

  #[test]
  fn test_build_update_query_all_fields() {
    let update = OrderUpdate::new(Some(COMPLETED.to_string()), Some(5)).unwrap();

    let query = build_update_query(42, &update);

    assert_eq!(
      query.sql(),
      "UPDATE orders SET status = $1, rating = $2, completed_at = NOW() WHERE id = $3"
    );
  }

  #[test]
  fn test_build_update_query_status_only() {
    let update = OrderUpdate::new(Some("in_progress".to_string()), None).unwrap();

    let query = build_update_query(42, &update);

    assert_eq!(query.sql(), "UPDATE orders SET status = $1 WHERE id = $2");
  }

  #[test]
  fn test_build_update_query_rating_only() {
    let update = OrderUpdate::new(None, Some(3)).unwrap();

    let query = build_update_query(42, &update);

    assert_eq!(query.sql(), "UPDATE orders SET rating = $1 WHERE id = $2");
  }

  #[test]
  fn test_build_update_query_binds_status_text() {
    let update =
      OrderUpdate::new(Some("done'; DROP TABLE orders; --".to_string()), None)
        .unwrap();

    let query = build_update_query(1, &update);

    assert!(!query.sql().contains("DROP TABLE"));
  }
}
