//! HTTP API
//!
//! `/health` is public; everything under `/api` requires a bearer token.

pub mod access;
pub mod checkin;
pub mod health;
pub mod staff;
pub mod zones;

use std::time::Duration;

use axum::routing::{delete, get, post, put};
use axum::{Json, Router, middleware};
use http::{HeaderName, HeaderValue, StatusCode};
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_auth;
use crate::state::AppState;

pub(crate) type ApiResult<T> = Result<Json<T>, AppError>;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Zones
        .route(
            "/api/events/{event_id}/zones",
            post(zones::create_zone).get(zones::list_zones),
        )
        .route(
            "/api/zones/{zone_id}",
            get(zones::get_zone)
                .put(zones::update_zone)
                .delete(zones::delete_zone),
        )
        .route("/api/zones/{zone_id}/qr", get(zones::zone_qr))
        // Access rules
        .route(
            "/api/zones/{zone_id}/access-rules",
            post(access::create_rule)
                .get(access::list_rules)
                .put(access::replace_rules),
        )
        .route("/api/access-rules/{rule_id}", delete(access::delete_rule))
        // Individual overrides
        .route(
            "/api/attendees/{attendee_id}/zone-access",
            post(access::create_override).get(access::list_overrides),
        )
        .route(
            "/api/attendee-zone-access/{override_id}",
            put(access::update_override).delete(access::delete_override),
        )
        // Staff assignments
        .route(
            "/api/zones/{zone_id}/staff",
            post(staff::assign_staff).get(staff::list_zone_staff),
        )
        .route(
            "/api/zones/{zone_id}/staff/{user_id}",
            delete(staff::remove_staff),
        )
        .route("/api/users/{user_id}/zones", get(staff::user_assignments))
        // Check-in
        .route("/api/zones/checkin", post(checkin::check_in))
        .route("/api/zones/{zone_id}/checkins", get(checkin::list_checkins))
        .route(
            "/api/attendees/{attendee_id}/zone-history",
            get(checkin::zone_history),
        )
        // Scanner app
        .route(
            "/api/mobile/events/{event_id}/zones",
            get(staff::available_zones),
        )
        .route("/api/mobile/zones/{zone_id}/days", get(zones::zone_days))
}

/// Build the application router with middleware and state
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let api = api_routes().layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(api)
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .with_state(state)
}
