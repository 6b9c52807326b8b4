use actix_web::{http::header, middleware::DefaultHeaders, HttpResponse};

pub const DRIVERS_ALLOWED_METHODS: &str = "GET, OPTIONS";
pub const ORDERS_ALLOWED_METHODS: &str = "GET, POST, PUT, OPTIONS";

const ALLOWED_HEADERS: &str = "Content-Type";
const MAX_AGE_SECONDS: &str = "86400";

/// Adds `Access-Control-Allow-Origin: *` to every response of the wrapped
/// resource that does not already set it.
pub fn allow_any_origin() -> DefaultHeaders {
  DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}

/// Answer to a browser preflight. The body is always empty.
pub fn preflight(allowed_methods: &'static str) -> HttpResponse {
  HttpResponse::Ok()
    .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
    .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, allowed_methods))
    .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
    .insert_header((header::ACCESS_CONTROL_MAX_AGE, MAX_AGE_SECONDS))
    .finish()
}
