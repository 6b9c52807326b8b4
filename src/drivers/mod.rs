pub mod model;
pub mod repository;
pub mod rto;

use actix_web::{web, HttpResponse, Responder};
use model::Driver;
use repository::driver_repository::DriverRepository;
use rto::get_driver_rto::GetDriverRto;

use crate::shared::{
  cors::{self, DRIVERS_ALLOWED_METHODS},
  http_error::internal_server_error,
};

pub async fn list_drivers<DR: DriverRepository>(
  driver_repository: web::Data<DR>,
) -> impl Responder {
  driver_repository
    .find_active()
    .await
    .map(drivers_found)
    .unwrap_or_else(internal_server_error)
}

pub async fn preflight() -> HttpResponse {
  cors::preflight(DRIVERS_ALLOWED_METHODS)
}

fn drivers_found(drivers: Vec<Driver>) -> HttpResponse {
  let rtos: Vec<GetDriverRto> = drivers.into_iter().map(GetDriverRto::from).collect();
  HttpResponse::Ok().json(rtos)
}

// Transform Driver domain to RTO
impl From<Driver> for GetDriverRto {
  fn from(driver: Driver) -> Self {
    Self {
      rating: driver.effective_rating(),
      coords: driver.coords(),
      id: driver.id,
      name: driver.name,
      phone: driver.phone,
      car: driver.car_model,
      car_number: driver.car_number,
      is_active: driver.is_active,
    }
  }
}
