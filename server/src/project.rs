//! Project handlers
//!
//! Request bodies follow the dashboard client's shape: mutations carry a
//! `projectData` object plus the owning `username` (inside `projectData` or
//! at the top level). Layouts are normalized through [`PageConfig`] and
//! stored in the flat at-rest form.

use hyper::{Body, Response, StatusCode};
use log::{info, warn};
use serde_json::{json, Value};

use page_builder_shared::{PageConfig, PortfolioError, Project};

use crate::routes::{error_response, json_response};
use crate::store::{sanitize_username, ProjectUpdate, Store};

pub async fn get_all_projects(store: &Store, username: &str) -> Response<Body> {
    let key = match sanitize_username(username) {
        Ok(key) => key,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid username", &e.to_string())
        }
    };
    json_response(StatusCode::OK, &store.list_projects(&key).await)
}

pub async fn get_project(
    store: &Store,
    username: &str,
    category: &str,
    slug: &str,
) -> Response<Body> {
    let key = match sanitize_username(username) {
        Ok(key) => key,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid username", &e.to_string())
        }
    };

    match store.find_project(&key, category, slug).await {
        Some(project) => json_response(StatusCode::OK, &project),
        None => {
            info!("project not found: {slug} in category {category}");
            error_response(
                StatusCode::NOT_FOUND,
                "Project not found",
                &format!("No project {slug} in category {category}"),
            )
        }
    }
}

/// Username for a mutation: `projectData.username` wins over the top level
fn body_username(body: &Value) -> Option<String> {
    body.get("projectData")
        .and_then(|d| d.get("username"))
        .or_else(|| body.get("username"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub async fn create_project(store: &Store, body: &[u8]) -> Response<Body> {
    let body: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Invalid request",
                &format!("Malformed JSON body: {e}"),
            )
        }
    };

    let Some(username) = body_username(&body) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Username is required",
            "Provide a username in the request body",
        );
    };

    let project_data = body.get("projectData").cloned().unwrap_or(Value::Null);
    let project: Project = match serde_json::from_value(project_data) {
        Ok(project) => project,
        Err(e) => {
            warn!("rejected project create: {e}");
            return error_response(
                StatusCode::BAD_REQUEST,
                "Invalid project",
                &format!("Malformed projectData: {e}"),
            );
        }
    };

    match store.create_project(&username, project).await {
        Ok(created) => {
            info!("project {} created for {username}", created.id);
            json_response(
                StatusCode::CREATED,
                &json!({
                    "message": "Project created successfully",
                    "project": created
                }),
            )
        }
        Err(e) => status_for(&e),
    }
}

pub async fn update_project(store: &Store, project_id: &str, body: &[u8]) -> Response<Body> {
    let body: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Invalid request",
                &format!("Malformed JSON body: {e}"),
            )
        }
    };

    let Some(username) = body_username(&body) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Username and project ID are required",
            "Provide a username in the request body",
        );
    };

    let update = match parse_update(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!("rejected project update for {project_id}: {e}");
            return error_response(StatusCode::BAD_REQUEST, "Invalid config", &e.to_string());
        }
    };

    match store.update_project(&username, project_id, update).await {
        Ok(updated) => {
            info!("project {project_id} updated for {username}");
            json_response(
                StatusCode::OK,
                &json!({
                    "message": "Project updated successfully",
                    "project": updated
                }),
            )
        }
        Err(e) => status_for(&e),
    }
}

pub async fn delete_project(store: &Store, project_id: &str, body: &[u8]) -> Response<Body> {
    let body: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Invalid request",
                &format!("Malformed JSON body: {e}"),
            )
        }
    };

    let Some(username) = body_username(&body) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Username and project ID are required",
            "Provide a username in the request body",
        );
    };

    match store.delete_project(&username, project_id).await {
        Ok(()) => {
            info!("project {project_id} deleted for {username}");
            json_response(
                StatusCode::OK,
                &json!({"message": "Project deleted successfully"}),
            )
        }
        Err(e) => status_for(&e),
    }
}

/// Build the partial update from the body: `projectData` fields plus an
/// optional top-level `config` (the editor's save path sends just
/// `{config, username}`).
fn parse_update(body: &Value) -> Result<ProjectUpdate, PortfolioError> {
    let data = body.get("projectData");
    let field = |name: &str| data.and_then(|d| d.get(name));

    let config_value = field("config").or_else(|| body.get("config"));
    let config = config_value
        .filter(|v| !v.is_null())
        .map(PageConfig::from_value)
        .transpose()?;

    Ok(ProjectUpdate {
        name: field("name").and_then(Value::as_str).map(str::to_string),
        description: field("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        media: field("media").and_then(|v| {
            v.as_array().map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
        }),
        category: field("category").and_then(Value::as_str).map(str::to_string),
        config,
    })
}

fn status_for(error: &PortfolioError) -> Response<Body> {
    let status = match error {
        PortfolioError::ProjectNotFound { .. } | PortfolioError::ProfileNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        PortfolioError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        _ => StatusCode::BAD_REQUEST,
    };
    error_response(status, "Request failed", &error.to_string())
}
