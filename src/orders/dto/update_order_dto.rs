use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderDto {
  pub id: Option<i32>,
  pub status: Option<String>,
  pub rating: Option<i32>,
}
