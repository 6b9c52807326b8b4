use std::num::ParseIntError;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetOrderDto {
  pub id: Option<String>,
}

impl GetOrderDto {
  /// The requested order id. A blank `id=` means no id was given.
  pub fn order_id(&self) -> Result<Option<i32>, ParseIntError> {
    match self.id.as_deref().map(str::trim) {
      None | Some("") => Ok(None),
      Some(id) => id.parse().map(Some),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dto(id: Option<&str>) -> GetOrderDto {
    GetOrderDto {
      id: id.map(String::from),
    }
  }

  #[test]
  fn test_order_id() {
    assert_eq!(dto(None).order_id(), Ok(None));
    assert_eq!(dto(Some("")).order_id(), Ok(None));
    assert_eq!(dto(Some("  ")).order_id(), Ok(None));
    assert_eq!(dto(Some("17")).order_id(), Ok(Some(17)));
    assert!(dto(Some("abc")).order_id().is_err());
  }
}
