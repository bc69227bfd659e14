use super::authorization;
use crate::upstream::{forward, UpstreamState};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::requests::StatusUpdateRequest;
use log::{error, warn};
use reqwest::Method;

pub(crate) async fn process(
    req: HttpRequest,
    order_id: web::Path<String>,
    state: web::Data<UpstreamState>,
    body: web::Bytes,
) -> impl Responder {
    let order_id = order_id.into_inner();

    let update: StatusUpdateRequest = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!("Rejected status update for order {}: {}", order_id, e);
            return HttpResponse::BadRequest().body(format!("Invalid status update: {}", e));
        }
    };

    match update_delivery_status(&state, &order_id, authorization(&req).as_deref(), body.to_vec())
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!("Status update to {:?} for order {} failed: {}", update.status, order_id, e);
            HttpResponse::BadGateway().body(e)
        }
    }
}

async fn update_delivery_status(
    state: &UpstreamState,
    order_id: &str,
    authorization: Option<&str>,
    body: Vec<u8>,
) -> Result<HttpResponse, String> {
    let path = format!("orders/{}/delivery-status", order_id);
    let forwarded = forward(state, Method::PUT, &path, authorization, body).await?;
    Ok(forwarded.into_http_response())
}

#[cfg(test)]
mod tests {
    use crate::services::delivery::{configure_routes, remote_stub};
    use crate::upstream::UpstreamState;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::Value;

    // Port 9 (discard) is closed on test machines, so the connection is refused.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    #[actix_web::test]
    async fn malformed_body_is_rejected_before_forwarding() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UpstreamState::new(UNREACHABLE)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/delivery/o42/status")
            .set_payload(r#"{"status":"SHIPPED"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_a_bad_gateway() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UpstreamState::new(UNREACHABLE)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/delivery/o42/status")
            .insert_header(("Authorization", "Bearer token"))
            .set_payload(r#"{"status":"DELIVERED"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn remote_rejection_is_passed_through() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UpstreamState::new(&remote_stub::start(409))))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/delivery/o42/status")
            .insert_header(("Authorization", "Bearer token"))
            .set_payload(r#"{"status":"DELIVERED"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let echoed: Value = test::read_body_json(resp).await;
        assert_eq!(echoed["path"], "/orders/o42/delivery-status");
        assert_eq!(echoed["authorization"], "Bearer token");
    }

    #[actix_web::test]
    async fn only_put_is_routed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UpstreamState::new(UNREACHABLE)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/delivery/o42/status")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
