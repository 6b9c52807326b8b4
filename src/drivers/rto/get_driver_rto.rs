use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GetDriverRto {
  pub id: i32,
  pub name: String,
  pub phone: Option<String>,
  pub car: Option<String>,
  pub car_number: Option<String>,
  pub rating: f64,
  pub coords: Option<[f64; 2]>,
  pub is_active: bool,
}
