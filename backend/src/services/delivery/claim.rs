use super::authorization;
use crate::upstream::{forward, UpstreamState};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::requests::ClaimDeliveryRequest;
use log::{error, info, warn};
use reqwest::Method;

pub(crate) async fn process(
    req: HttpRequest,
    order_id: web::Path<String>,
    state: web::Data<UpstreamState>,
    body: web::Bytes,
) -> impl Responder {
    let order_id = order_id.into_inner();

    let claim: ClaimDeliveryRequest = match serde_json::from_slice(&body) {
        Ok(claim) => claim,
        Err(e) => {
            warn!("Rejected claim for order {}: {}", order_id, e);
            return HttpResponse::BadRequest().body(format!("Invalid claim: {}", e));
        }
    };
    if claim.delivery_user_id.trim().is_empty() {
        return HttpResponse::BadRequest().body("deliveryUserId must not be empty");
    }

    info!("Delivery user {} claims order {}", claim.delivery_user_id, order_id);
    let path = format!("orders/{}/claim", order_id);
    match forward(&state, Method::PUT, &path, authorization(&req).as_deref(), body.to_vec()).await
    {
        Ok(forwarded) => forwarded.into_http_response(),
        Err(e) => {
            error!("Claim of order {} failed: {}", order_id, e);
            HttpResponse::BadGateway().body(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::delivery::{configure_routes, remote_stub};
    use crate::upstream::UpstreamState;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn blank_delivery_user_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UpstreamState::new("http://127.0.0.1:9")))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/delivery/o7/claim")
            .set_payload(r#"{"deliveryUserId":"  "}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_a_bad_gateway() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UpstreamState::new("http://127.0.0.1:9")))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/delivery/o7/claim")
            .set_payload(r#"{"deliveryUserId":"u3"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn claim_reaches_the_order_claim_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UpstreamState::new(&remote_stub::start(404))))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/delivery/o7/claim")
            .insert_header(("Authorization", "Bearer courier"))
            .set_payload(r#"{"deliveryUserId":"u3"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let echoed: Value = test::read_body_json(resp).await;
        assert_eq!(echoed["path"], "/orders/o7/claim");
        assert_eq!(echoed["authorization"], "Bearer courier");
    }
}
