mod drivers;
mod orders;
mod shared;

use std::sync::Arc;

use actix_web::{http::Method, middleware::Logger, web, App, HttpServer};
use drivers::repository::driver_repository::{DriverRepository, DriverRepositoryImpl};
use orders::repository::order_repository::{OrderRepository, OrderRepositoryImpl};
use shared::config::Config;
use shared::cors::allow_any_origin;
use shared::database::Database;
use shared::http_error::{json_error_handler, method_not_allowed, query_error_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

  let config = Config::default();
  let database = Database::new(&config).await.map_err(|error| {
    log::error!("Could not connect to the database: {}", error);
    std::io::Error::other(error)
  })?;
  let database = Arc::new(database);

  log::info!("Listening on http://{}", config.server_address);

  HttpServer::new(move || {
    App::new().wrap(Logger::default()).configure(|cfg| {
      let driver_repository = DriverRepositoryImpl::new(database.clone());
      let order_repository = OrderRepositoryImpl::new(database.clone());
      self::config(cfg, driver_repository, order_repository)
    })
  })
  .bind(&config.server_address)?
  .run()
  .await
}

// Function to initialize the App
fn config<DR: DriverRepository + 'static, OR: OrderRepository + 'static>(
  config: &mut web::ServiceConfig,
  driver_repository: DR,
  order_repository: OR,
) {
  config
    .app_data(web::Data::new(driver_repository))
    .app_data(web::Data::new(order_repository))
    .app_data(
      web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler),
    )
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    .service(
      web::resource("/drivers")
        .wrap(allow_any_origin())
        .route(web::get().to(drivers::list_drivers::<DR>))
        .route(web::method(Method::OPTIONS).to(drivers::preflight))
        .default_service(web::to(method_not_allowed)),
    )
    .service(
      web::resource("/orders")
        .wrap(allow_any_origin())
        .route(web::get().to(orders::get_orders::<OR>))
        .route(web::post().to(orders::create_order::<OR>))
        .route(web::put().to(orders::update_order::<OR>))
        .route(web::method(Method::OPTIONS).to(orders::preflight))
        .default_service(web::to(method_not_allowed)),
    );
}
