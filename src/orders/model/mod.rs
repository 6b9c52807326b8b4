use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, FromRow, Row};

pub const PENDING: &str = "pending";
pub const COMPLETED: &str = "completed";

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
  pub id: i32,
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
  /// Free text. Orders start as [`PENDING`]; [`COMPLETED`] stamps `completed_at`.
  pub status: String,
  pub rating: Option<i32>,
  pub created_at: DateTime<Utc>,
  pub completed_at: Option<DateTime<Utc>>,
}

/// The slice of a driver that is shown alongside an order.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedDriver {
  pub name: String,
  pub car_model: Option<String>,
  pub car_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
  pub order: Order,
  pub driver: Option<AssignedDriver>,
}

impl<'r> FromRow<'r, PgRow> for Order {
  fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
    Ok(Self {
      id: row.try_get("id")?,
      driver_id: row.try_get("driver_id")?,
      passenger_name: row.try_get("passenger_name")?,
      passenger_phone: row.try_get("passenger_phone")?,
      from_address: row.try_get("from_address")?,
      to_address: row.try_get("to_address")?,
      from_latitude: row.try_get("from_latitude")?,
      from_longitude: row.try_get("from_longitude")?,
      to_latitude: row.try_get("to_latitude")?,
      to_longitude: row.try_get("to_longitude")?,
      price: row.try_get("price")?,
      status: row.try_get("status")?,
      rating: row.try_get("rating")?,
      created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
      completed_at: row.try_get::<Option<DateTime<Utc>>, _>("completed_at")?,
    })
  }
}

// Driver columns come from a LEFT JOIN, so an unassigned order has them all null.
impl<'r> FromRow<'r, PgRow> for OrderDetails {
  fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
    let driver = match row.try_get::<Option<String>, _>("driver_name")? {
      Some(name) => Some(AssignedDriver {
        name,
        car_model: row.try_get("driver_car_model")?,
        car_number: row.try_get("driver_car_number")?,
      }),
      None => None,
    };
    Ok(Self {
      order: Order::from_row(row)?,
      driver,
    })
  }
}
