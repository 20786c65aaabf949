//! Profile handlers

use hyper::{Body, Response, StatusCode};
use log::{info, warn};
use serde_json::json;

use page_builder_shared::Profile;

use crate::routes::{error_response, json_response};
use crate::store::{sanitize_username, Store};

pub async fn get_profile(store: &Store, username: &str) -> Response<Body> {
    let key = match sanitize_username(username) {
        Ok(key) => key,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid username", &e.to_string())
        }
    };

    match store.get_profile(&key).await {
        Some(profile) => json_response(StatusCode::OK, &profile),
        None => error_response(
            StatusCode::NOT_FOUND,
            "Profile not found",
            &format!("No profile for user {key}"),
        ),
    }
}

pub async fn update_profile(store: &Store, body: &[u8]) -> Response<Body> {
    let profile: Profile = match serde_json::from_slice(body) {
        Ok(profile) => profile,
        Err(e) => {
            warn!("rejected profile update: {e}");
            return error_response(
                StatusCode::BAD_REQUEST,
                "Invalid profile",
                &format!("Malformed profile payload: {e}"),
            );
        }
    };

    match store.upsert_profile(profile).await {
        Ok(stored) => {
            info!("profile updated for {}", stored.username);
            json_response(
                StatusCode::OK,
                &json!({
                    "message": "Profile updated successfully",
                    "profile": stored
                }),
            )
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, "Invalid username", &e.to_string()),
    }
}
