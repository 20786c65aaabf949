//! Request dispatch
//!
//! One service function matching on `(Method, path segments)`. Every
//! response carries CORS headers and OPTIONS preflights short-circuit
//! before routing. Mutating routes sit behind the bearer-presence gate.

use std::convert::Infallible;
use std::sync::Arc;

use hyper::{header, Body, Method, Request, Response, StatusCode};
use log::{debug, error};
use serde::Serialize;
use serde_json::json;

use crate::auth::bearer_token;
use crate::store::Store;
use crate::{profile, project};

/// Top-level service function, dispatching by method and path
pub async fn service_handler(
    req: Request<Body>,
    store: Arc<Store>,
) -> Result<Response<Body>, Infallible> {
    debug!("{} {}", req.method(), req.uri().path());

    // Preflight OPTIONS requests
    if req.method() == Method::OPTIONS {
        return Ok(with_cors(
            Response::builder()
                .status(StatusCode::OK)
                .body(Body::empty())
                .unwrap_or_default(),
        ));
    }

    let path = req.uri().path().trim_matches('/').to_string();
    let segments: Vec<&str> = path.split('/').collect();
    let method = req.method().clone();

    let response = match (&method, segments.as_slice()) {
        (&Method::GET, ["public", "profile", username]) => {
            let username = username.to_string();
            profile::get_profile(&store, &username).await
        }
        (&Method::GET, ["public", "projects", username]) => {
            let username = username.to_string();
            project::get_all_projects(&store, &username).await
        }
        (&Method::GET, ["public", "projects", username, category, slug]) => {
            let (username, category, slug) =
                (username.to_string(), category.to_string(), slug.to_string());
            project::get_project(&store, &username, &category, &slug).await
        }
        (&Method::POST, ["api", "profile", "update"]) => match protected_body(req).await {
            Ok(body) => profile::update_profile(&store, &body).await,
            Err(response) => response,
        },
        (&Method::POST, ["api", "projects", "create"]) => match protected_body(req).await {
            Ok(body) => project::create_project(&store, &body).await,
            Err(response) => response,
        },
        (&Method::PUT, ["api", "projects", id, "update"]) => {
            let id = id.to_string();
            match protected_body(req).await {
                Ok(body) => project::update_project(&store, &id, &body).await,
                Err(response) => response,
            }
        }
        (&Method::DELETE, ["api", "projects", id, "delete"]) => {
            let id = id.to_string();
            match protected_body(req).await {
                Ok(body) => project::delete_project(&store, &id, &body).await,
                Err(response) => response,
            }
        }
        _ => error_response(StatusCode::NOT_FOUND, "Not found", "No such route"),
    };

    Ok(with_cors(response))
}

/// Enforce the bearer gate, then collect the request body
async fn protected_body(req: Request<Body>) -> Result<Vec<u8>, Response<Body>> {
    if bearer_token(&req).is_none() {
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Missing bearer credential",
        ));
    }
    match hyper::body::to_bytes(req.into_body()).await {
        Ok(bytes) => Ok(bytes.to_vec()),
        Err(e) => {
            error!("failed to read request body: {e}");
            Err(error_response(
                StatusCode::BAD_REQUEST,
                "Invalid request",
                "Failed to read request body",
            ))
        }
    }
}

pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response<Body> {
    let body = serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_default()
}

pub fn error_response(status: StatusCode, error: &str, message: &str) -> Response<Body> {
    json_response(status, &json!({"error": error, "message": message}))
}

fn with_cors(mut response: Response<Body>) -> Response<Body> {
    let headers = response.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        header::HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        header::HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        header::HeaderValue::from_static("Content-Type, Authorization"),
    );
    response
}
