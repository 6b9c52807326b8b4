use serde::Deserialize;
use validator_derive::Validate;

/// Body of `POST /orders`. A `status` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateOrderDto {
  pub driver_id: Option<i32>,
  pub passenger_name: Option<String>,
  pub passenger_phone: Option<String>,
  pub from_address: Option<String>,
  pub to_address: Option<String>,
  #[validate(range(min = -90.0, max = 90.0))]
  pub from_latitude: Option<f64>,
  #[validate(range(min = -180.0, max = 180.0))]
  pub from_longitude: Option<f64>,
  #[validate(range(min = -90.0, max = 90.0))]
  pub to_latitude: Option<f64>,
  #[validate(range(min = -180.0, max = 180.0))]
  pub to_longitude: Option<f64>,
  #[validate(range(min = 0.0))]
  pub price: Option<f64>,
}
