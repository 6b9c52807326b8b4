use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GetOrderRto {
  pub id: i32,
  pub passenger_name: Option<String>,
  pub passenger_phone: Option<String>,
  pub from_address: Option<String>,
  pub to_address: Option<String>,
  pub price: Option<f64>,
  pub status: String,
  pub rating: Option<i32>,
  pub created_at: DateTime<Utc>,
  pub completed_at: Option<DateTime<Utc>>,
  pub driver: Option<OrderDriverRto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderDriverRto {
  pub name: String,
  pub car_model: Option<String>,
  pub car_number: Option<String>,
}
