//! # Delivery proxy routes
//!
//! Same-origin route handlers used by the delivery and admin pages. They exist so
//! the browser can update a delivery without calling the remote API across
//! origins; they add nothing but a body check and logging.
//!
//! ## Registered routes
//!
//! *   **`PUT /api/delivery/{order_id}/status`**:
//!     - **Handler**: `status::process`
//!     - **Upstream**: `PUT {BAKERY_API_URL}/orders/{order_id}/delivery-status`
//!     - **Body**: a `StatusUpdateRequest` (`{"status": "DELIVERING"}`).
//!
//! *   **`PUT /api/delivery/{order_id}/claim`**:
//!     - **Handler**: `claim::process`
//!     - **Upstream**: `PUT {BAKERY_API_URL}/orders/{order_id}/claim`
//!     - **Body**: a `ClaimDeliveryRequest` naming the delivery person taking an
//!       order left in dispatch mode.
//!
//! Both handlers answer `400 Bad Request` when the body does not parse, `502 Bad
//! Gateway` when the remote API cannot be reached, and otherwise pass the remote
//! status code and body through unchanged.

mod claim;
mod status;

use actix_web::web::{put, scope};
use actix_web::{HttpRequest, Scope};

const API_PATH: &str = "/api/delivery";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{order_id}/status", put().to(status::process))
        .route("/{order_id}/claim", put().to(claim::process))
}

/// Caller's bearer token, copied verbatim to the upstream request.
fn authorization(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
pub(crate) mod remote_stub {
    use actix_web::http::StatusCode;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use std::net::TcpListener;

    /// Starts a stand-in for the remote API on a free local port. Every request
    /// gets `status` and a JSON echo of the path and `Authorization` it carried.
    pub(crate) fn start(status: u16) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind remote stub");
        let port = listener.local_addr().expect("remote stub address").port();
        let server = HttpServer::new(move || {
            App::new().default_service(web::to(move |req: HttpRequest| async move {
                let echoed = serde_json::json!({
                    "path": req.path(),
                    "authorization": req
                        .headers()
                        .get("authorization")
                        .and_then(|v| v.to_str().ok()),
                });
                HttpResponse::build(StatusCode::from_u16(status).expect("valid status")).json(echoed)
            }))
        })
        .workers(1)
        .listen(listener)
        .expect("listen remote stub")
        .run();
        actix_web::rt::spawn(server);
        format!("http://127.0.0.1:{}", port)
    }
}
