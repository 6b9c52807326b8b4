use std::fmt::Display;

use actix_web::{
  error::{InternalError, JsonPayloadError, QueryPayloadError},
  HttpRequest, HttpResponse,
};
use serde::{Deserialize, Serialize};

pub const INVALID_QUERY_STRING: &str = "Invalid query string";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpError {
  pub error: String,
}

impl From<&str> for HttpError {
  fn from(error: &str) -> Self {
    Self { error: String::from(error) }
  }
}

pub fn bad_request(error: &str) -> HttpResponse {
  HttpResponse::BadRequest().json(HttpError::from(error))
}

pub fn not_found(error: &str) -> HttpResponse {
  HttpResponse::NotFound().json(HttpError::from(error))
}

pub async fn method_not_allowed() -> HttpResponse {
  HttpResponse::MethodNotAllowed().json(HttpError::from("Method not allowed"))
}

/// Storage failures surface to the caller as a bare 500.
pub fn internal_server_error(error: impl Display) -> HttpResponse {
  log::error!("{}", error);
  HttpResponse::InternalServerError().finish()
}

pub fn json_error_handler(
  error: JsonPayloadError,
  _request: &HttpRequest,
) -> actix_web::Error {
  log::debug!("Rejected JSON body: {}", error);
  InternalError::from_response(error, bad_request("Invalid JSON body")).into()
}

pub fn query_error_handler(
  error: QueryPayloadError,
  _request: &HttpRequest,
) -> actix_web::Error {
  log::debug!("Rejected query string: {}", error);
  InternalError::from_response(error, bad_request(INVALID_QUERY_STRING))
    .into()
}
