use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedRto {
  pub id: i32,
  pub status: String,
}
