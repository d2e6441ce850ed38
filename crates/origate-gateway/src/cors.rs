//! Cross-origin boundary middleware.
//!
//! Responsibilities:
//! - Extract the `Origin` header and evaluate it against the allow-list
//! - Deny: respond 403 with a stable client code, no cross-origin headers,
//!   preflight never reaches the underlying handler
//! - Allow: echo the matched origin (never a wildcard) and emit the
//!   configured policy headers
//! - Terminate preflight `OPTIONS` requests when the policy says so

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use origate_core::error::OrigateError;
use origate_core::{CorsPolicy, OriginDecision};

use crate::app_state::AppState;

pub async fn apply(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let origin = match req.headers().get(header::ORIGIN) {
        None => None,
        Some(v) => match v.to_str() {
            Ok(s) => Some(s.to_string()),
            Err(_) => {
                tracing::warn!("origin header carries non-text bytes, rejecting");
                app.metrics().record_decision("deny");
                return reject_response("<invalid>");
            }
        },
    };

    let decision = app.allow_list().evaluate(origin.as_deref());
    let is_preflight = req.method() == Method::OPTIONS;
    let policy = app.cors();

    match decision {
        OriginDecision::Rejected => {
            let shown = origin.as_deref().unwrap_or_default();
            tracing::warn!(origin = %shown, "cross-origin request rejected");
            app.metrics().record_decision("deny");
            if is_preflight {
                app.metrics().record_preflight("deny");
            }
            reject_response(shown)
        }
        OriginDecision::Anonymous => {
            app.metrics().record_decision("anonymous");
            if is_preflight && policy.terminate_preflight {
                // OPTIONS without an Origin header is not a CORS request;
                // terminate it without cross-origin headers.
                app.metrics().record_preflight("anonymous");
                return preflight_status(policy).into_response();
            }
            next.run(req).await
        }
        OriginDecision::Allowed(matched) => {
            app.metrics().record_decision("allow");
            if is_preflight {
                app.metrics().record_preflight("allow");
                if policy.terminate_preflight {
                    let mut res = preflight_status(policy).into_response();
                    set_preflight_headers(res.headers_mut(), policy, &matched);
                    return res;
                }
                let mut res = next.run(req).await;
                set_preflight_headers(res.headers_mut(), policy, &matched);
                return res;
            }
            let mut res = next.run(req).await;
            set_response_headers(res.headers_mut(), policy, &matched);
            res
        }
    }
}

/// Headers for an actual (non-preflight) cross-origin response.
fn set_response_headers(
    headers: &mut axum::http::HeaderMap,
    policy: &CorsPolicy,
    origin: &str,
) {
    if let Ok(v) = HeaderValue::from_str(origin) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, v);
    }
    if policy.credentials {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }
    if let Some(exposed) = policy.exposed_headers_header() {
        if let Ok(v) = HeaderValue::from_str(&exposed) {
            headers.insert(header::ACCESS_CONTROL_EXPOSE_HEADERS, v);
        }
    }
    headers.append(header::VARY, HeaderValue::from_static("Origin"));
}

/// Headers for a preflight response.
fn set_preflight_headers(
    headers: &mut axum::http::HeaderMap,
    policy: &CorsPolicy,
    origin: &str,
) {
    if let Ok(v) = HeaderValue::from_str(origin) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, v);
    }
    if let Ok(v) = HeaderValue::from_str(&policy.methods_header()) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, v);
    }
    if let Ok(v) = HeaderValue::from_str(&policy.allowed_headers_header()) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, v);
    }
    if policy.credentials {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }
    if let Ok(v) = HeaderValue::from_str(&policy.max_age_secs.to_string()) {
        headers.insert(header::ACCESS_CONTROL_MAX_AGE, v);
    }
    headers.append(header::VARY, HeaderValue::from_static("Origin"));
}

fn preflight_status(policy: &CorsPolicy) -> StatusCode {
    StatusCode::from_u16(policy.preflight_status).unwrap_or(StatusCode::NO_CONTENT)
}

fn reject_response(origin: &str) -> Response {
    let err = OrigateError::OriginRejected(origin.to_string());
    let body = json!({
        "code": err.client_code().as_str(),
        "msg": err.to_string(),
    });
    (StatusCode::FORBIDDEN, axum::Json(body)).into_response()
}
