//! rusty-forum/crates/rf-api/src/middleware.rs Middleware
//!
//! Request logging and CORS for the forum API.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;

/// Access log: remote-ip "request-line" status-code response-size time-taken
pub fn standard_middleware() -> Logger {
    Logger::new("%a \"%r\" %s %b %Dms")
}

/// Browsers may call the API from another origin; only the verbs the
/// routes use are allowed.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600)
}
