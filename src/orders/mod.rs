pub mod dto;
pub mod model;
pub mod repository;
pub mod rto;

use actix_web::{http::header, web, HttpResponse, Responder};
use dto::create_order_dto::CreateOrderDto;
use dto::get_order_dto::GetOrderDto;
use dto::update_order_dto::UpdateOrderDto;
use model::{AssignedDriver, Order, OrderDetails};
use repository::order_repository::{CreateOrder, OrderRepository, OrderUpdate};
use rto::get_order_rto::{GetOrderRto, OrderDriverRto};
use rto::order_summary_rto::OrderSummaryRto;
use validator::Validate;

use crate::shared::{
  cors::{self, ORDERS_ALLOWED_METHODS},
  http_error::{
    bad_request, internal_server_error, not_found, INVALID_QUERY_STRING,
  },
  rto::{created_rto::CreatedRto, success_rto::SuccessRto},
};

const ORDER_ID_REQUIRED: &str = "Order ID required";
const NO_FIELDS_TO_UPDATE: &str = "No fields to update";

/// `GET /orders` lists the latest orders, `GET /orders?id=` fetches one.
pub async fn get_orders<OR: OrderRepository>(
  order_repository: web::Data<OR>,
  query: web::Query<GetOrderDto>,
) -> impl Responder {
  match query.order_id() {
    Ok(Some(id)) => get_order(order_repository.get_ref(), id).await,
    Ok(None) => list_orders(order_repository.get_ref()).await,
    Err(_) => bad_request(INVALID_QUERY_STRING),
  }
}

async fn get_order<OR: OrderRepository>(
  order_repository: &OR,
  id: i32,
) -> HttpResponse {
  order_repository
    .find_one(id)
    .await
    .map(|details| details.map(order_found).unwrap_or_else(order_not_found))
    .unwrap_or_else(internal_server_error)
}

async fn list_orders<OR: OrderRepository>(order_repository: &OR) -> HttpResponse {
  order_repository
    .find_recent()
    .await
    .map(orders_found)
    .unwrap_or_else(internal_server_error)
}

fn order_found(details: OrderDetails) -> HttpResponse {
  HttpResponse::Ok().json(GetOrderRto::from(details))
}

fn order_not_found() -> HttpResponse {
  not_found("Order not found")
}

fn orders_found(orders: Vec<OrderDetails>) -> HttpResponse {
  let rtos: Vec<OrderSummaryRto> =
    orders.into_iter().map(OrderSummaryRto::from).collect();
  HttpResponse::Ok().json(rtos)
}

pub async fn create_order<OR: OrderRepository>(
  order_repository: web::Data<OR>,
  dto: web::Json<CreateOrderDto>,
) -> impl Responder {
  // Perform validation
  if let Err(validation_errors) = dto.validate() {
    return bad_request(&validation_errors.to_string());
  }
  order_repository
    .create(CreateOrder::from(dto.into_inner()))
    .await
    .map(order_created)
    .unwrap_or_else(internal_server_error)
}

fn order_created(order: Order) -> HttpResponse {
  log::info!("Created order {}", order.id);
  HttpResponse::Created()
    .append_header((header::LOCATION, format!("/orders?id={}", order.id)))
    .json(CreatedRto::from(order))
}

pub async fn update_order<OR: OrderRepository>(
  order_repository: web::Data<OR>,
  dto: web::Json<UpdateOrderDto>,
) -> impl Responder {
  let UpdateOrderDto { id, status, rating } = dto.into_inner();
  // Orders are numbered from 1, so 0 counts as a missing id.
  let Some(id) = id.filter(|id| *id != 0) else {
    return bad_request(ORDER_ID_REQUIRED);
  };
  let Some(update) = OrderUpdate::new(status, rating) else {
    return bad_request(NO_FIELDS_TO_UPDATE);
  };

  log::info!(
    "Updating order {} (status: {:?}, rating: {:?})",
    id,
    update.status(),
    update.rating()
  );
  order_repository
    .update(id, update)
    .await
    .map(|rows_affected| order_updated(id, rows_affected))
    .unwrap_or_else(internal_server_error)
}

fn order_updated(id: i32, rows_affected: u64) -> HttpResponse {
  if rows_affected == 0 {
    log::warn!("Update matched no order with id {}", id);
  }
  HttpResponse::Ok().json(SuccessRto::default())
}

pub async fn preflight() -> HttpResponse {
  cors::preflight(ORDERS_ALLOWED_METHODS)
}

impl From<CreateOrderDto> for CreateOrder {
  fn from(dto: CreateOrderDto) -> Self {
    Self {
      driver_id: dto.driver_id,
      passenger_name: dto.passenger_name,
      passenger_phone: dto.passenger_phone,
      from_address: dto.from_address,
      to_address: dto.to_address,
      from_latitude: dto.from_latitude,
      from_longitude: dto.from_longitude,
      to_latitude: dto.to_latitude,
      to_longitude: dto.to_longitude,
      price: dto.price,
    }
  }
}

// Transform Order domain to RTOs
impl From<Order> for CreatedRto {
  fn from(order: Order) -> Self {
    Self {
      id: order.id,
      status: order.status,
    }
  }
}

impl From<AssignedDriver> for OrderDriverRto {
  fn from(driver: AssignedDriver) -> Self {
    Self {
      name: driver.name,
      car_model: driver.car_model,
      car_number: driver.car_number,
    }
  }
}

impl From<OrderDetails> for GetOrderRto {
  fn from(details: OrderDetails) -> Self {
    let order = details.order;
    Self {
      id: order.id,
      passenger_name: order.passenger_name,
      passenger_phone: order.passenger_phone,
      from_address: order.from_address,
      to_address: order.to_address,
      price: order.price,
      status: order.status,
      rating: order.rating,
      created_at: order.created_at,
      completed_at: order.completed_at,
      driver: details.driver.map(OrderDriverRto::from),
    }
  }
}

impl From<OrderDetails> for OrderSummaryRto {
  fn from(details: OrderDetails) -> Self {
    let order = details.order;
    Self {
      id: order.id,
      passenger_name: order.passenger_name,
      from_address: order.from_address,
      to_address: order.to_address,
      price: order.price,
      status: order.status,
      created_at: order.created_at,
      driver_name: details.driver.map(|driver| driver.name),
    }
  }
}
