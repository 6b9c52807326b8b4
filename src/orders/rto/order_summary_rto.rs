use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderSummaryRto {
  pub id: i32,
  pub passenger_name: Option<String>,
  pub from_address: Option<String>,
  pub to_address: Option<String>,
  pub price: Option<f64>,
  pub status: String,
  pub created_at: DateTime<Utc>,
  pub driver_name: Option<String>,
}
