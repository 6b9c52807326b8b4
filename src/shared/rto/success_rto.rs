use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessRto {
  pub success: bool,
}

impl Default for SuccessRto {
  fn default() -> Self {
    Self { success: true }
  }
}
