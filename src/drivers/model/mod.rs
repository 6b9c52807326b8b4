use sqlx::FromRow;

/// Rating shown for drivers that have not been rated yet.
pub const DEFAULT_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Driver {
  pub id: i32,
  pub name: String,
  pub phone: Option<String>,
  pub car_model: Option<String>,
  pub car_number: Option<String>,
  pub rating: Option<f64>,
  pub latitude: Option<f64>,
  pub longitude: Option<f64>,
  pub is_active: bool,
}

impl Driver {
  /// Stored rating, with null and zero both meaning "not rated yet".
  pub fn effective_rating(&self) -> f64 {
    match self.rating {
      Some(rating) if rating != 0.0 => rating,
      _ => DEFAULT_RATING,
    }
  }

  /// `[latitude, longitude]`, only when both halves are known.
  pub fn coords(&self) -> Option<[f64; 2]> {
    Some([self.latitude?, self.longitude?])
  }
}
